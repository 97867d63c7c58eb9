//! Fact extraction from CAD entity lists
//!
//! Area comes from the geometry accumulator over hatches and closed
//! polylines; geoname and height come from TEXT/MTEXT annotations, scanned
//! in model-space order with the same label/unit rules as the text path.

use shared_types::{CadEntity, ExtractedFacts};

use crate::geometry::{self, AreaPolicy};
use crate::patterns;

/// Recover geoname, fill area and fill height from a model-space entity list
pub fn extract_from_entities(entities: &[CadEntity], policy: AreaPolicy) -> ExtractedFacts {
    let regions = geometry::regions_from_entities(entities);
    let area_m2 = geometry::compute_area(&regions, policy);

    let mut geoname = None;
    let mut height_m = None;
    for content in entities.iter().filter_map(CadEntity::text_content) {
        if geoname.is_none() {
            geoname = patterns::find_geoname(content);
        }
        if height_m.is_none() {
            height_m = patterns::find_height_m(content);
        }
        if geoname.is_some() && height_m.is_some() {
            break;
        }
    }

    ExtractedFacts {
        geoname,
        area_m2,
        height_m,
    }
}
