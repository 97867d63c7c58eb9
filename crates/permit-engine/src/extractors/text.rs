//! Fact extraction from concatenated PDF report text

use shared_types::ExtractedFacts;
use tracing::debug;

use crate::patterns;

/// Recover geoname, fill area and fill height from raw report text
///
/// Each field is searched independently; a miss leaves the field `None`.
pub fn extract_from_text(text: &str) -> ExtractedFacts {
    let geoname = patterns::find_geoname(text);
    let area_m2 = patterns::find_area_m2(text);
    let height_m = patterns::find_height_m(text);

    if geoname.is_none() {
        debug!("no geoname label matched");
    }
    if area_m2.is_none() {
        debug!("no area measurement matched");
    }
    if height_m.is_none() {
        debug!("no height measurement matched");
    }

    ExtractedFacts {
        geoname,
        area_m2,
        height_m,
    }
}
