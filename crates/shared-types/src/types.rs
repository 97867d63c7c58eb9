//! Core data model for embankment permit screening

use serde::{Deserialize, Serialize};

use crate::cad::CadEntity;

/// Facts recovered from one drawing file
///
/// Every field is independently optional: a miss means "unknown", never
/// zero. Area is in square meters, height in meters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFacts {
    pub geoname: Option<String>,
    pub area_m2: Option<f64>,
    pub height_m: Option<f64>,
}

impl ExtractedFacts {
    /// Fields still unknown (or carrying an invalid negative value)
    pub fn missing_fields(&self) -> Vec<FactField> {
        let mut missing = Vec::new();
        if self
            .geoname
            .as_deref()
            .map_or(true, |name| name.trim().is_empty())
        {
            missing.push(FactField::Geoname);
        }
        if self.area_m2.map_or(true, |a| a < 0.0 || !a.is_finite()) {
            missing.push(FactField::Area);
        }
        if self.height_m.map_or(true, |h| h < 0.0 || !h.is_finite()) {
            missing.push(FactField::Height);
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// The three facts the screening needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactField {
    Geoname,
    Area,
    Height,
}

impl FactField {
    /// Japanese label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            FactField::Geoname => "地名",
            FactField::Area => "面積",
            FactField::Height => "高さ",
        }
    }
}

impl std::fmt::Display for FactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Screening outcome for one plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// One or more of geoname/area/height could not be recovered
    InsufficientInfo,
    /// Plan reaches a permit threshold; a permit application is required
    PermitRequired,
    /// Below permit thresholds but involves actual earthwork; notification only
    NotificationRequired,
    /// No regulated earthwork
    NoPermitRequired,
}

impl Category {
    /// Japanese label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            Category::InsufficientInfo => "情報不十分",
            Category::PermitRequired => "申請要",
            Category::NotificationRequired => "届出要",
            Category::NoPermitRequired => "不要",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Page/line reference into the governing ordinance text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub document: String,
    pub page: u32,
    pub line: u32,
}

impl Citation {
    pub fn new(document: impl Into<String>, page: u32, line: u32) -> Self {
        Self {
            document: document.into(),
            page,
            line,
        }
    }
}

impl std::fmt::Display for Citation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} p.{} l.{}", self.document, self.page, self.line)
    }
}

/// Thresholds and citation texts for one jurisdiction
///
/// Immutable once constructed; looked up by substring match of `name`
/// against an extracted geoname.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    pub name: String,
    pub area_threshold_m2: f64,
    pub height_threshold_m: f64,
    pub permit_text: String,
    pub no_permit_text: String,
    pub procedure_text: String,
    pub citation: Citation,
}

/// Outcome of evaluating one set of facts against a rule-set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub category: Category,
    /// Concrete plan changes that would lower the category, area before height
    pub improvements: Vec<String>,
    /// Citation/explanation strings backing the category
    pub reasons: Vec<String>,
    pub missing_fields: Vec<FactField>,
}

/// Payload the black-box document parsers hand to the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum DocumentSource {
    /// Concatenated page text from a PDF report
    Text(String),
    /// Model-space entities from a CAD file
    Cad(Vec<CadEntity>),
}

/// One uploaded file, already parsed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputDocument {
    pub file_name: String,
    pub source: DocumentSource,
}

impl InputDocument {
    pub fn text(file_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: DocumentSource::Text(text.into()),
        }
    }

    pub fn cad(file_name: impl Into<String>, entities: Vec<CadEntity>) -> Self {
        Self {
            file_name: file_name.into(),
            source: DocumentSource::Cad(entities),
        }
    }
}

/// Per-file screening result, one row of the final report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileResult {
    pub file_name: String,
    /// Name of the rule-set the geoname resolved to
    pub jurisdiction: String,
    /// Procedure text of that rule-set, shown in the report
    pub procedure: String,
    pub facts: ExtractedFacts,
    pub evaluation: EvaluationResult,
}
