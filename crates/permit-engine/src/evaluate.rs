//! Category classification of extracted facts against a rule-set
//!
//! The evaluator is a pure function, total over its input domain: it never
//! panics and never returns an error, whatever combination of missing or
//! zero values it receives.

use shared_types::{Category, EvaluationResult, ExtractedFacts, RuleSet};

/// Generic reason recorded when facts are incomplete
pub const INSUFFICIENT_INFO_MESSAGE: &str =
    "面積や高さ情報が不足しています。追加資料を提供してください。";

/// Boundary between notification-required and no-permit-required when both
/// values sit below the permit thresholds
///
/// Ordinance drafts disagree on this boundary, so it is an explicit policy
/// parameter rather than a fixed rule.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum NotificationPolicy {
    /// Any positive fill area or height triggers a notification; both
    /// exactly zero means no regulated work
    #[default]
    AnyPositiveWork,
    /// Notification once either value reaches the given fraction of its
    /// permit threshold (e.g. `0.8`)
    SoftThresholdRatio(f64),
}

/// Classify one plan
///
/// 1. Any missing or invalid field → `InsufficientInfo`, listing exactly
///    the absent fields.
/// 2. Area or height at or above its threshold (inclusive) →
///    `PermitRequired`, with one reduction suggestion per violated
///    threshold, area before height.
/// 3. Otherwise the notification policy decides between
///    `NotificationRequired` and `NoPermitRequired`.
pub fn evaluate(
    facts: &ExtractedFacts,
    rules: &RuleSet,
    policy: NotificationPolicy,
) -> EvaluationResult {
    let missing = facts.missing_fields();
    if !missing.is_empty() {
        return EvaluationResult {
            category: Category::InsufficientInfo,
            improvements: Vec::new(),
            reasons: vec![INSUFFICIENT_INFO_MESSAGE.to_string()],
            missing_fields: missing,
        };
    }

    // missing_fields() guarantees both values are present, finite and
    // non-negative from here on
    let area = facts.area_m2.unwrap_or(0.0);
    let height = facts.height_m.unwrap_or(0.0);

    let area_over = area >= rules.area_threshold_m2;
    let height_over = height >= rules.height_threshold_m;
    if area_over || height_over {
        let mut improvements = Vec::new();
        if area_over {
            improvements.push(format!(
                "造成面積を{}㎡未満に縮小",
                rules.area_threshold_m2
            ));
        }
        if height_over {
            improvements.push(format!(
                "盛土高さを{}m未満に抑える",
                rules.height_threshold_m
            ));
        }
        return EvaluationResult {
            category: Category::PermitRequired,
            improvements,
            reasons: vec![rules.permit_text.clone(), rules.citation.to_string()],
            missing_fields: Vec::new(),
        };
    }

    let notify = match policy {
        NotificationPolicy::AnyPositiveWork => area > 0.0 || height > 0.0,
        NotificationPolicy::SoftThresholdRatio(ratio) => {
            area >= rules.area_threshold_m2 * ratio || height >= rules.height_threshold_m * ratio
        }
    };

    if notify {
        EvaluationResult {
            category: Category::NotificationRequired,
            improvements: Vec::new(),
            reasons: vec![rules.procedure_text.clone(), rules.citation.to_string()],
            missing_fields: Vec::new(),
        }
    } else {
        EvaluationResult {
            category: Category::NoPermitRequired,
            improvements: Vec::new(),
            reasons: vec![rules.no_permit_text.clone()],
            missing_fields: Vec::new(),
        }
    }
}
