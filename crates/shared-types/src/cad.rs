//! CAD entity model handed over by the DXF parsing layer
//!
//! Parsing DXF/DWG/JWW files into entities is an external concern; this
//! module only defines the shape of what the parser delivers. Entities are a
//! closed enum dispatched by variant, not probed by attribute.

use serde::{Deserialize, Serialize};

/// A 2D point in drawing coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Entities the screening pipeline consumes from a CAD model space
///
/// Mirrors the DXF entity types the original drawings use. Geometry-bearing
/// variants feed the area accumulator; text-bearing variants feed the
/// label/unit extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CadEntity {
    /// Filled hatch with the boundary area the CAD library computed,
    /// `None` when the library could not resolve the boundary
    Hatch { area: Option<f64> },
    /// Lightweight polyline
    LwPolyline { points: Vec<Point>, closed: bool },
    /// Legacy 2D/3D polyline
    Polyline { points: Vec<Point>, closed: bool },
    /// Single-line text annotation
    Text { content: String },
    /// Multi-line text annotation
    MText { content: String },
}

impl CadEntity {
    /// Annotation text carried by this entity, if any
    pub fn text_content(&self) -> Option<&str> {
        match self {
            CadEntity::Text { content } | CadEntity::MText { content } => Some(content),
            _ => None,
        }
    }
}
