//! Label and unit patterns for drawing-report text
//!
//! Drawing reports label the site name with one of a few prefixes and quote
//! measurements with a unit marker right after the number. All patterns are
//! compiled once; matching is best-effort and a miss is simply `None`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::extractors::numeric::parse_decimal;

/// Geoname label prefixes, in priority order; the first label that matches
/// anywhere in the text wins
pub const GEONAME_LABELS: &[&str] = &["地名", "所在地", "対象地", "地域名"];

/// Decimal number: optional thousands separators, optional fraction,
/// full-width digits and punctuation included
const NUMBER: &str = r"[0-9０-９][0-9０-９,，]*(?:[.．][0-9０-９]+)?";

lazy_static! {
    /// One pattern per geoname label, half- and full-width colon; the value
    /// is the token up to the next whitespace or line boundary
    static ref GEONAME_PATTERNS: Vec<Regex> = GEONAME_LABELS
        .iter()
        .map(|label| Regex::new(&format!(r"{label}[：:]\s*(\S+)")).expect("static pattern"))
        .collect();

    /// Number immediately followed by an area unit marker
    static ref AREA_PATTERN: Regex =
        Regex::new(&format!(r"({NUMBER})\s*(?:㎡|m2|m²|平米|平方メートル)")).expect("static pattern");

    /// Height label followed by a number and an optional length marker
    static ref HEIGHT_LABELED_PATTERN: Regex = Regex::new(&format!(
        r"(?:盛土高さ|盛土高|高さ)[：:]?\s*({NUMBER})\s*(?:m|ｍ|メートル)?"
    ))
    .expect("static pattern");

    /// Bare number followed by a length marker; the trailing capture group
    /// catches area-unit suffixes ("m2") so they can be rejected
    static ref HEIGHT_BARE_PATTERN: Regex =
        Regex::new(&format!(r"({NUMBER})\s*(?:m|ｍ)([2²]?)")).expect("static pattern");
}

/// First geoname label match in the text, trimmed
pub fn find_geoname(text: &str) -> Option<String> {
    for pattern in GEONAME_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(text) {
            let value = captures[1].trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

/// First number carrying an area unit, in square meters
pub fn find_area_m2(text: &str) -> Option<f64> {
    AREA_PATTERN
        .captures(text)
        .and_then(|captures| parse_decimal(&captures[1]))
}

/// First number identifiable as a fill height, in meters
///
/// A labeled height (盛土高さ etc.) takes priority; otherwise the first bare
/// number followed by a length marker counts, skipping area units.
pub fn find_height_m(text: &str) -> Option<f64> {
    if let Some(captures) = HEIGHT_LABELED_PATTERN.captures(text) {
        if let Some(value) = parse_decimal(&captures[1]) {
            return Some(value);
        }
    }
    for captures in HEIGHT_BARE_PATTERN.captures_iter(text) {
        let area_suffix = captures.get(2).map_or(false, |m| !m.as_str().is_empty());
        if area_suffix {
            continue;
        }
        if let Some(value) = parse_decimal(&captures[1]) {
            return Some(value);
        }
    }
    None
}
