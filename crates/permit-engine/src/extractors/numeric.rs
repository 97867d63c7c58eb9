// Numeric parsing for extracted measurements
//
// Drawing reports mix half- and full-width digits and use commas as
// thousands separators. Anything that does not parse cleanly to a
// non-negative finite number is treated as "not found".

/// Fold full-width digits and numeric punctuation to their ASCII forms
pub fn normalize_width(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '０'..='９' => {
                char::from_u32(c as u32 - '０' as u32 + '0' as u32).unwrap_or(c)
            }
            '．' => '.',
            '，' => ',',
            _ => c,
        })
        .collect()
}

/// Parse a decimal measurement, stripping thousands separators
///
/// Negative and non-finite values are rejected here so they never reach the
/// evaluator.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let cleaned = normalize_width(raw.trim()).replace(',', "");
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value),
        _ => None,
    }
}
