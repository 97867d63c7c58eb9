//! CSV spreadsheet serialization

use crate::table::{ReportTable, COLUMN_HEADERS};

/// Serialize the report table as a CSV spreadsheet (UTF-8, CRLF records)
///
/// Fields containing separators, quotes or line breaks are quoted with
/// doubled inner quotes, so spreadsheet applications import the table
/// losslessly.
pub fn to_csv(table: &ReportTable) -> String {
    let mut out = String::new();
    push_record(&mut out, COLUMN_HEADERS);
    for row in &table.rows {
        push_record(&mut out, row.columns());
    }
    out
}

fn push_record(out: &mut String, fields: [&str; 9]) {
    for (index, field) in fields.iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        push_field(out, field);
    }
    out.push_str("\r\n");
}

fn push_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\n', '\r']) {
        out.push('"');
        for c in field.chars() {
            if c == '"' {
                out.push('"');
            }
            out.push(c);
        }
        out.push('"');
    } else {
        out.push_str(field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ReportRow;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn row(file_name: &str, reason: &str) -> ReportRow {
        ReportRow {
            file_name: file_name.to_string(),
            geoname: "大牟田市".to_string(),
            area_m2: "600".to_string(),
            height_m: "1".to_string(),
            category: "申請要".to_string(),
            improvements: String::new(),
            missing_fields: String::new(),
            reason: reason.to_string(),
            procedure: String::new(),
        }
    }

    fn table(rows: Vec<ReportRow>) -> ReportTable {
        ReportTable {
            title: "test".to_string(),
            generated_at: Utc::now(),
            rows,
            notes: Vec::new(),
        }
    }

    #[test]
    fn test_header_and_one_row_per_file() {
        let csv = to_csv(&table(vec![row("a.pdf", "基準該当"), row("b.pdf", "基準該当")]));
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ファイル名,地名,"));
        assert!(lines[1].starts_with("a.pdf,"));
        assert!(lines[2].starts_with("b.pdf,"));
    }

    #[test]
    fn test_comma_in_field_is_quoted() {
        let csv = to_csv(&table(vec![row("a.pdf", "p.3, l.12")]));
        assert!(csv.contains("\"p.3, l.12\""));
    }

    #[test]
    fn test_quote_in_field_is_doubled() {
        let csv = to_csv(&table(vec![row("a.pdf", "引用 \"原文\" 参照")]));
        assert!(csv.contains("\"引用 \"\"原文\"\" 参照\""));
    }

    #[test]
    fn test_newline_in_field_is_quoted() {
        let csv = to_csv(&table(vec![row("a.pdf", "一行目\n二行目")]));
        assert!(csv.contains("\"一行目\n二行目\""));
    }

    #[test]
    fn test_empty_table_is_header_only() {
        let csv = to_csv(&table(Vec::new()));
        assert_eq!(csv.lines().count(), 1);
    }
}
