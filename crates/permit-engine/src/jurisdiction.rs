//! Jurisdiction rule-sets and geoname resolution
//!
//! The table is immutable after construction and passed explicitly to the
//! engine; there is no global state. Resolution is substring matching of
//! configured jurisdiction names against the extracted geoname, first entry
//! in insertion order wins. No match, or no geoname at all, falls back to
//! the national baseline.

use serde::{Deserialize, Serialize};
use shared_types::{Citation, RuleSet};

/// Ordered jurisdiction rule-sets plus the baseline fallback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JurisdictionTable {
    entries: Vec<RuleSet>,
    default: RuleSet,
}

impl JurisdictionTable {
    /// Build a table from caller-supplied rule-sets
    ///
    /// Entry order is the tie-break order: when a geoname contains several
    /// configured names, the earliest entry wins.
    pub fn new(entries: Vec<RuleSet>, default: RuleSet) -> Self {
        Self { entries, default }
    }

    /// The built-in table: national baseline thresholds (500 ㎡ / 2 m) plus
    /// the municipal rule-sets shipped with the tool
    pub fn builtin() -> Self {
        let default = ruleset(
            "全国基準",
            500.0,
            2.0,
            Citation::new("宅地造成及び特定盛土等規制法 運用ガイドライン", 12, 5),
            "都道府県の盛土規制担当窓口",
        );
        let entries = vec![
            ruleset(
                "大牟田市",
                500.0,
                2.0,
                Citation::new("大牟田市 盛土規制法運用基準", 3, 12),
                "大牟田市 開発指導課",
            ),
            ruleset(
                "福岡市",
                300.0,
                1.5,
                Citation::new("福岡市 宅地開発技術基準", 8, 2),
                "福岡市 宅地開発課",
            ),
            ruleset(
                "熊本市",
                500.0,
                2.0,
                Citation::new("熊本市 盛土規制事務取扱要領", 5, 20),
                "熊本市 開発景観課",
            ),
        ];
        Self::new(entries, default)
    }

    /// Rule-set for the given geoname, or the baseline when nothing matches
    pub fn resolve(&self, geoname: Option<&str>) -> &RuleSet {
        match geoname {
            Some(name) => self
                .entries
                .iter()
                .find(|rules| name.contains(&rules.name))
                .unwrap_or(&self.default),
            None => &self.default,
        }
    }

    pub fn default_rules(&self) -> &RuleSet {
        &self.default
    }

    pub fn entries(&self) -> &[RuleSet] {
        &self.entries
    }
}

impl Default for JurisdictionTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Assemble one rule-set with the standard text templates
fn ruleset(
    name: &str,
    area_threshold_m2: f64,
    height_threshold_m: f64,
    citation: Citation,
    office: &str,
) -> RuleSet {
    RuleSet {
        name: name.to_string(),
        area_threshold_m2,
        height_threshold_m,
        permit_text: format!(
            "{name}の許可基準（面積{area_threshold_m2}㎡以上または高さ{height_threshold_m}m以上）に該当するため、許可申請が必要です。"
        ),
        no_permit_text: format!("{name}の規制対象となる盛土・切土には該当しません。"),
        procedure_text: format!("工事着手の30日前までに{office}への届出が必要です。"),
        citation,
    }
}
