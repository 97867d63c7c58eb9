//! Typst document source generation
//!
//! The page layout lives in an embedded template; this module only turns
//! the report table into data literals appended to it. Compiling the
//! resulting source to PDF is left to the caller's Typst toolchain.

use crate::error::RenderError;
use crate::table::{ReportTable, COLUMN_HEADERS};

/// Report layout - loaded from templates/report.typ
const REPORT_TEMPLATE: &str = include_str!("../templates/report.typ");

/// Generate compilable Typst source for the paginated report
///
/// Fails when any cell contains text that cannot be represented in the
/// document (control characters); a corrupted report must not be produced
/// silently.
pub fn to_typst_source(table: &ReportTable) -> Result<String, RenderError> {
    let mut source = String::from(REPORT_TEMPLATE);
    source.push_str("\n#report(\n");

    source.push_str("  ");
    source.push_str(&typst_str(&table.title, "title")?);
    source.push_str(",\n");

    let generated = table
        .generated_at
        .format("%Y-%m-%d %H:%M UTC 生成")
        .to_string();
    source.push_str("  ");
    source.push_str(&typst_str(&generated, "timestamp")?);
    source.push_str(",\n");

    source.push_str("  (");
    for header in COLUMN_HEADERS {
        source.push_str(&typst_str(header, "header")?);
        source.push_str(", ");
    }
    source.push_str("),\n");

    source.push_str("  (\n");
    for row in &table.rows {
        source.push_str("    (");
        for cell in row.columns() {
            source.push_str(&typst_str(cell, &row.file_name)?);
            source.push_str(", ");
        }
        source.push_str("),\n");
    }
    source.push_str("  ),\n");

    source.push_str("  (\n");
    for note in &table.notes {
        source.push_str("    (");
        source.push_str(&typst_str(&note.name, "jurisdiction note")?);
        source.push_str(", ");
        source.push_str(&typst_str(&note.procedure, "jurisdiction note")?);
        source.push_str("),\n");
    }
    source.push_str("  ),\n)\n");

    Ok(source)
}

/// Quote a value as a Typst string literal
fn typst_str(value: &str, context: &str) -> Result<String, RenderError> {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                return Err(RenderError::UnrenderableText {
                    context: context.to_string(),
                    codepoint: c as u32,
                })
            }
            c => out.push(c),
        }
    }
    out.push('"');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{JurisdictionNote, ReportRow};
    use chrono::Utc;

    fn row(file_name: &str) -> ReportRow {
        ReportRow {
            file_name: file_name.to_string(),
            geoname: "大牟田市中央".to_string(),
            area_m2: "600".to_string(),
            height_m: "1".to_string(),
            category: "申請要".to_string(),
            improvements: "造成面積を500㎡未満に縮小".to_string(),
            missing_fields: String::new(),
            reason: "大牟田市 盛土規制法運用基準 p.3 l.12".to_string(),
            procedure: "開発指導課への届出".to_string(),
        }
    }

    fn table(rows: Vec<ReportRow>) -> ReportTable {
        ReportTable {
            title: "盛土規制法 判定結果".to_string(),
            generated_at: Utc::now(),
            rows,
            notes: vec![JurisdictionNote {
                name: "大牟田市".to_string(),
                procedure: "開発指導課への届出".to_string(),
            }],
        }
    }

    #[test]
    fn test_source_contains_template_title_and_rows() {
        let source = to_typst_source(&table(vec![row("a.pdf"), row("b.pdf")])).unwrap();
        assert!(source.contains("#let report("));
        assert!(source.contains("\"盛土規制法 判定結果\""));
        assert!(source.contains("\"a.pdf\""));
        assert!(source.contains("\"b.pdf\""));
        assert!(source.contains("\"ファイル名\""));
    }

    #[test]
    fn test_quotes_and_backslashes_are_escaped() {
        let mut quoted = row("a.pdf");
        quoted.reason = "引用 \"原文\" \\参照".to_string();
        let source = to_typst_source(&table(vec![quoted])).unwrap();
        assert!(source.contains("\\\"原文\\\""));
        assert!(source.contains("\\\\参照"));
    }

    #[test]
    fn test_control_character_is_a_hard_failure() {
        let mut bad = row("bad.pdf");
        bad.geoname = "大牟田\u{0007}市".to_string();
        let err = to_typst_source(&table(vec![bad])).unwrap_err();
        match err {
            RenderError::UnrenderableText { context, codepoint } => {
                assert_eq!(context, "bad.pdf");
                assert_eq!(codepoint, 0x0007);
            }
        }
    }

    #[test]
    fn test_empty_table_still_renders() {
        let source = to_typst_source(&table(Vec::new())).unwrap();
        assert!(source.contains("#report("));
    }
}
