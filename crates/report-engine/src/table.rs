//! Row-per-file result table

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::FileResult;

/// Title shown on every rendered report
pub const REPORT_TITLE: &str = "盛土規制法 判定結果";

/// Column headers, matching `ReportRow::columns` order
pub const COLUMN_HEADERS: [&str; 9] = [
    "ファイル名",
    "地名",
    "面積(㎡)",
    "高さ(m)",
    "判定",
    "提案",
    "不足項目",
    "根拠",
    "手続き",
];

/// One formatted report row
///
/// Values are display strings: missing facts render as empty cells, never
/// as zero, and list fields are joined with full-width separators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub file_name: String,
    pub geoname: String,
    pub area_m2: String,
    pub height_m: String,
    pub category: String,
    pub improvements: String,
    pub missing_fields: String,
    pub reason: String,
    pub procedure: String,
}

impl ReportRow {
    pub fn from_result(result: &FileResult) -> Self {
        Self {
            file_name: result.file_name.clone(),
            geoname: result.facts.geoname.clone().unwrap_or_default(),
            area_m2: result.facts.area_m2.map(format_number).unwrap_or_default(),
            height_m: result.facts.height_m.map(format_number).unwrap_or_default(),
            category: result.evaluation.category.label().to_string(),
            improvements: result.evaluation.improvements.join("；"),
            missing_fields: result
                .evaluation
                .missing_fields
                .iter()
                .map(|field| field.label())
                .collect::<Vec<_>>()
                .join("・"),
            reason: result.evaluation.reasons.join("；"),
            procedure: result.procedure.clone(),
        }
    }

    /// Cell values in `COLUMN_HEADERS` order
    pub fn columns(&self) -> [&str; 9] {
        [
            &self.file_name,
            &self.geoname,
            &self.area_m2,
            &self.height_m,
            &self.category,
            &self.improvements,
            &self.missing_fields,
            &self.reason,
            &self.procedure,
        ]
    }
}

/// Citation block entry: one per jurisdiction that appeared in the batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JurisdictionNote {
    pub name: String,
    pub procedure: String,
}

/// The assembled report, ready for serialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTable {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub rows: Vec<ReportRow>,
    pub notes: Vec<JurisdictionNote>,
}

impl ReportTable {
    /// Fold per-file results into the report table
    ///
    /// Every result yields exactly one row, in input order. Jurisdiction
    /// notes are deduplicated by name, first appearance wins.
    pub fn assemble(results: &[FileResult]) -> Self {
        let rows = results.iter().map(ReportRow::from_result).collect();

        let mut notes: Vec<JurisdictionNote> = Vec::new();
        for result in results {
            if notes.iter().all(|note| note.name != result.jurisdiction) {
                notes.push(JurisdictionNote {
                    name: result.jurisdiction.clone(),
                    procedure: result.procedure.clone(),
                });
            }
        }

        Self {
            title: REPORT_TITLE.to_string(),
            generated_at: Utc::now(),
            rows,
            notes,
        }
    }
}

/// Render a measurement without trailing ".0" noise
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
