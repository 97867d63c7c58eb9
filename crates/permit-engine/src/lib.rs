//! Embankment permit screening engine
//!
//! Takes already-parsed drawing documents (raw PDF report text or CAD
//! entity lists), extracts geoname / fill area / fill height, resolves the
//! applicable jurisdiction rule-set and classifies the plan into
//! {情報不十分, 申請要, 届出要, 不要}. Document parsing and report
//! rendering are external concerns.

pub mod evaluate;
pub mod extractors;
pub mod geometry;
pub mod jurisdiction;
pub mod patterns;

pub use evaluate::NotificationPolicy;
pub use geometry::AreaPolicy;
pub use jurisdiction::JurisdictionTable;

use std::time::Instant;

use shared_types::{DocumentSource, ExtractedFacts, FileResult, InputDocument};
use tracing::info;

/// Screening pipeline: extract → resolve → evaluate
///
/// Configuration is fixed at construction; the engine holds no mutable
/// state, so one instance serves a whole batch.
pub struct PermitEngine {
    table: JurisdictionTable,
    area_policy: AreaPolicy,
    notification_policy: NotificationPolicy,
}

impl PermitEngine {
    pub fn new(table: JurisdictionTable) -> Self {
        Self {
            table,
            area_policy: AreaPolicy::default(),
            notification_policy: NotificationPolicy::default(),
        }
    }

    pub fn with_policies(
        table: JurisdictionTable,
        area_policy: AreaPolicy,
        notification_policy: NotificationPolicy,
    ) -> Self {
        Self {
            table,
            area_policy,
            notification_policy,
        }
    }

    pub fn jurisdictions(&self) -> &JurisdictionTable {
        &self.table
    }

    /// Best-effort fact extraction for one document
    pub fn extract(&self, source: &DocumentSource) -> ExtractedFacts {
        match source {
            DocumentSource::Text(text) => extractors::extract_from_text(text),
            DocumentSource::Cad(entities) => {
                extractors::extract_from_entities(entities, self.area_policy)
            }
        }
    }

    /// Screen one document end to end
    pub fn evaluate_document(&self, document: &InputDocument) -> FileResult {
        let facts = self.extract(&document.source);
        let rules = self.table.resolve(facts.geoname.as_deref());
        let evaluation = evaluate::evaluate(&facts, rules, self.notification_policy);

        info!(
            file = %document.file_name,
            jurisdiction = %rules.name,
            category = %evaluation.category,
            "screened document"
        );

        FileResult {
            file_name: document.file_name.clone(),
            jurisdiction: rules.name.clone(),
            procedure: rules.procedure_text.clone(),
            facts,
            evaluation,
        }
    }

    /// Screen a batch sequentially, one result row per input file
    ///
    /// Progress logging includes elapsed and estimated remaining time;
    /// both are advisory only.
    pub fn evaluate_batch(&self, documents: &[InputDocument]) -> Vec<FileResult> {
        let started = Instant::now();
        let total = documents.len();
        let mut results = Vec::with_capacity(total);

        for (index, document) in documents.iter().enumerate() {
            results.push(self.evaluate_document(document));

            let done = index + 1;
            let elapsed = started.elapsed();
            let remaining = elapsed / done as u32 * (total - done) as u32;
            info!(
                done,
                total,
                elapsed_ms = elapsed.as_millis() as u64,
                estimated_remaining_ms = remaining.as_millis() as u64,
                "batch progress"
            );
        }

        results
    }
}

impl Default for PermitEngine {
    fn default() -> Self {
        Self::new(JurisdictionTable::builtin())
    }
}
