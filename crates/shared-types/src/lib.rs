pub mod cad;
pub mod types;

pub use cad::{CadEntity, Point};
pub use types::{
    Category, Citation, DocumentSource, EvaluationResult, ExtractedFacts, FactField, FileResult,
    InputDocument, RuleSet,
};
