//! Roster loading utilities
//!
//! Reads the semicolon-delimited roster export. The first non-empty record
//! is the header; columns are matched by name against the schema. Missing or
//! malformed numbers become 0 and missing text becomes an empty string, so a
//! damaged export still loads.

use crate::core::{AttributeKind, AttributeSpec, AttributeValue, PersonRecord, Roster, Schema};
use crate::error::RosterError;
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Field delimiter of the roster format
pub const DELIMITER: char = ';';

/// Separator between tags inside a set column
pub const TAG_SEPARATOR: char = ',';

/// Byte order mark written by some spreadsheet exports
const BOM: char = '\u{feff}';

/// Load a roster from a file
///
/// # Errors
///
/// Returns `RosterError` if the file cannot be read, has no `Name` column,
/// or contains duplicate names.
///
/// # Examples
/// ```no_run
/// use iteradle::core::Schema;
/// use iteradle::rosters::loader::load_from_file;
///
/// let roster = load_from_file("data/demo_roster.csv", &Schema::classic()).unwrap();
/// println!("Loaded {} people", roster.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, schema: &Schema) -> Result<Roster, RosterError> {
    let content = fs::read_to_string(path.as_ref())?;
    let roster = parse_roster(&content, schema)?;
    info!(path = %path.as_ref().display(), records = roster.len(), "loaded roster");
    Ok(roster)
}

/// Parse roster text
///
/// Rows with an empty name are skipped.
///
/// # Errors
///
/// Returns `RosterError::MissingColumn` if there is no `Name` column and
/// `RosterError::DuplicateName` if a name appears twice.
pub fn parse_roster(content: &str, schema: &Schema) -> Result<Roster, RosterError> {
    let content = content.strip_prefix(BOM).unwrap_or(content);
    let mut rows = split_records(content).into_iter();

    let Some(header) = rows.next() else {
        return Err(RosterError::MissingColumn(Schema::NAME_COLUMN));
    };
    let columns: FxHashMap<String, usize> = header
        .into_iter()
        .enumerate()
        .map(|(i, name)| (name.trim().to_string(), i))
        .collect();

    let name_col = *columns
        .get(Schema::NAME_COLUMN)
        .ok_or(RosterError::MissingColumn(Schema::NAME_COLUMN))?;
    let email_col = columns.get(Schema::EMAIL_COLUMN).copied();

    for spec in schema.attributes() {
        if !columns.contains_key(spec.column) {
            warn!(column = spec.column, "roster has no column for attribute; using defaults");
        }
    }

    let mut records = Vec::new();
    for (row, fields) in rows.enumerate() {
        let field = |i: usize| fields.get(i).map_or("", |f| f.trim());

        let name = field(name_col);
        if name.is_empty() {
            warn!(row = row + 1, "skipping roster row without a name");
            continue;
        }

        let mut record = PersonRecord::new(name);
        if let Some(col) = email_col {
            record = record.with_email(field(col));
        }
        for spec in schema.attributes().iter().filter(|s| s.column != Schema::NAME_COLUMN) {
            let raw = columns.get(spec.column).map_or("", |&i| field(i));
            record = record.with(spec.key, parse_value(spec, raw));
        }
        records.push(record);
    }

    Roster::new(records)
}

/// Convert one raw field according to its attribute kind
#[must_use]
pub fn parse_value(spec: &AttributeSpec, raw: &str) -> AttributeValue {
    match spec.kind {
        AttributeKind::Numeric { .. } => AttributeValue::Number(parse_leading_number(raw)),
        AttributeKind::Categorical => AttributeValue::Text(raw.to_string()),
        AttributeKind::Boolean => AttributeValue::Flag(raw == "true"),
        AttributeKind::Set => AttributeValue::tags(raw.split(TAG_SEPARATOR)),
    }
}

/// Parse the leading decimal digits of a field, defaulting to 0
///
/// `"1990"` and `"1990 (approx)"` both give 1990; `""`, `"n/a"` and
/// negative values give 0.
#[must_use]
pub fn parse_leading_number(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().unwrap_or(0)
}

/// Split one line into fields, honouring double quotes
///
/// A quoted field may contain the delimiter; `""` inside quotes is a literal
/// quote.
#[must_use]
pub fn split_fields(line: &str) -> Vec<String> {
    split_records(line).into_iter().next().unwrap_or_else(|| vec![String::new()])
}

/// Split roster text into records of fields, honouring double quotes
///
/// Records end at a newline (`\n` or `\r\n`) outside quotes, so a quoted
/// field may span lines. Blank lines produce no record.
#[must_use]
pub fn split_records(content: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut blank = true;
    let mut chars = content.chars().peekable();

    let mut end_record = |fields: &mut Vec<String>, current: &mut String, blank: &mut bool| {
        fields.push(std::mem::take(current));
        let record = std::mem::take(fields);
        if !*blank {
            records.push(record);
        }
        *blank = true;
    };

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if current.trim().is_empty() => {
                current.clear();
                in_quotes = true;
                blank = false;
            }
            c if c == DELIMITER && !in_quotes => {
                fields.push(std::mem::take(&mut current));
                blank = false;
            }
            '\r' if !in_quotes && chars.peek() == Some(&'\n') => {}
            '\n' if !in_quotes => end_record(&mut fields, &mut current, &mut blank),
            c => {
                if !c.is_whitespace() {
                    blank = false;
                }
                current.push(c);
            }
        }
    }
    end_record(&mut fields, &mut current, &mut blank);

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "Name;Email;Title (no);Gender;Birth Year;Years of education;Experience";

    #[test]
    fn split_plain_and_quoted() {
        assert_eq!(split_fields("a;b;c"), vec!["a", "b", "c"]);
        assert_eq!(split_fields("a;;c;"), vec!["a", "", "c", ""]);
        assert_eq!(
            split_fields(r#"a;"b;still b";c"#),
            vec!["a", "b;still b", "c"]
        );
        assert_eq!(split_fields(r#""say ""hi""";x"#), vec![r#"say "hi""#, "x"]);
    }

    #[test]
    fn quoted_fields_may_span_lines() {
        let text = "Name;Title (no);Birth Year\r\n\
                    Ada;\"Senior\r\nEngineer\";1990\r\n\
                    Bob;Dev;1980\n";
        let roster = parse_roster(text, &Schema::classic()).unwrap();

        let names: Vec<&str> = roster.records().iter().map(PersonRecord::name).collect();
        assert_eq!(names, ["Ada", "Bob"]);
        assert_eq!(roster.records()[0].text("title"), Some("Senior\r\nEngineer"));
        assert_eq!(roster.records()[0].number("birth_year"), Some(1990));
    }

    #[test]
    fn split_records_skips_blank_lines() {
        assert_eq!(
            split_records("a;b\n\n  \r\nc;\"d\ne\"\n"),
            vec![vec!["a", "b"], vec!["c", "d\ne"]]
        );
        assert!(split_records("").is_empty());
    }

    #[test]
    fn leading_byte_order_mark_is_ignored() {
        let text = "\u{feff}Name;Email;Title (no)\nAda;ada@example.com;Engineer\n";
        let roster = parse_roster(text, &Schema::classic()).unwrap();

        assert_eq!(roster.len(), 1);
        assert_eq!(roster.records()[0].name(), "Ada");
        assert_eq!(roster.records()[0].text("title"), Some("Engineer"));
    }

    #[test]
    fn leading_number_parsing() {
        assert_eq!(parse_leading_number("1990"), 1990);
        assert_eq!(parse_leading_number(" 12 years"), 12);
        assert_eq!(parse_leading_number("+7"), 7);
        assert_eq!(parse_leading_number(""), 0);
        assert_eq!(parse_leading_number("n/a"), 0);
        assert_eq!(parse_leading_number("-5"), 0);
        assert_eq!(parse_leading_number("99999999999"), 0);
    }

    #[test]
    fn parses_classic_rows() {
        let text = format!(
            "{HEADER}\n\
             Ada;ada@example.com;Engineer;Female;1990;5;10\n\
             Bob;;Designer;Male;abc;;15\n"
        );
        let roster = parse_roster(&text, &Schema::classic()).unwrap();

        assert_eq!(roster.len(), 2);
        let ada = &roster.records()[0];
        assert_eq!(ada.email(), Some("ada@example.com"));
        assert_eq!(ada.text("title"), Some("Engineer"));
        assert_eq!(ada.number("birth_year"), Some(1990));

        let bob = &roster.records()[1];
        assert_eq!(bob.email(), None);
        assert_eq!(bob.number("birth_year"), Some(0));
        assert_eq!(bob.number("years_of_education"), Some(0));
        assert_eq!(bob.number("experience"), Some(15));
    }

    #[test]
    fn short_rows_and_missing_columns_default() {
        let text = "Name;Birth Year\nAda;1990\nBob\n";
        let roster = parse_roster(text, &Schema::classic()).unwrap();

        let bob = &roster.records()[1];
        assert_eq!(bob.number("birth_year"), Some(0));
        assert_eq!(bob.text("title"), Some(""));
        assert_eq!(bob.text("gender"), Some(""));
    }

    #[test]
    fn skips_blank_lines_and_nameless_rows() {
        let text = format!("\n{HEADER}\r\n\r\n;x@example.com;;;;;\nAda;;;;;;\n");
        let roster = parse_roster(&text, &Schema::classic()).unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.records()[0].name(), "Ada");
    }

    #[test]
    fn directory_kinds() {
        let text = "Name;Access roles;Has profile image;Owns a reference project\n\
                    Ada;admin, sales,;true;TRUE\n";
        let roster = parse_roster(text, &Schema::directory()).unwrap();
        let ada = &roster.records()[0];

        assert_eq!(ada.get("access_roles"), Some(&AttributeValue::tags(["admin", "sales"])));
        assert_eq!(ada.get("has_profile_image"), Some(&AttributeValue::Flag(true)));
        // Only the exact lowercase literal counts as true
        assert_eq!(ada.get("owns_reference_project"), Some(&AttributeValue::Flag(false)));
    }

    #[test]
    fn missing_name_column() {
        assert!(matches!(
            parse_roster("Email;Title\nx;y\n", &Schema::classic()),
            Err(RosterError::MissingColumn("Name"))
        ));
        assert!(matches!(
            parse_roster("", &Schema::classic()),
            Err(RosterError::MissingColumn("Name"))
        ));
    }

    #[test]
    fn duplicate_names_rejected() {
        let text = "Name\nAda\nada\n";
        assert!(matches!(
            parse_roster(text, &Schema::classic()),
            Err(RosterError::DuplicateName(_))
        ));
    }

    #[test]
    fn load_from_temp_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        writeln!(file, "Ada;ada@example.com;Engineer;Female;1990;5;10").unwrap();

        let roster = load_from_file(file.path(), &Schema::classic()).unwrap();
        assert_eq!(roster.resolve("ADA@EXAMPLE.COM").map(PersonRecord::name), Some("Ada"));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        assert!(matches!(
            load_from_file("/no/such/roster.csv", &Schema::classic()),
            Err(RosterError::Io(_))
        ));
    }
}
