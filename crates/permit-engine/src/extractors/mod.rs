//! Best-effort fact extraction from parsed documents
//!
//! Both paths are total: a pattern that fails to match degrades the field to
//! `None`, never an error to the caller.

pub mod cad;
pub mod numeric;
pub mod text;

pub use cad::extract_from_entities;
pub use text::extract_from_text;
