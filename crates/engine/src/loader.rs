//! Category file loading.
//!
//! One CSV file per category, rows of `value,clue,solution`. Rows with
//! an empty or non-numeric point value are skipped silently; everything
//! else about a file is taken as-is. Parsing is done by hand (quoted
//! fields, doubled quotes, CRLF) to keep the loader dependency-free.

use std::fs;
use std::path::Path;

use quizbldr_domain::{Category, QuestionRecord};

use crate::error::EngineError;

/// Load every `.csv` file in `dir` as one category, named by file stem.
///
/// Files are scanned in file-name order. Directory order is platform
/// dependent; sorting keeps sampling stable for a given seed.
pub fn load_categories(dir: &Path) -> Result<Vec<Category>, EngineError> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "csv") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut categories = Vec::with_capacity(paths.len());
    for path in paths {
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        // Category files come from hand-edited spreadsheets; tolerate
        // stray non-UTF-8 bytes instead of aborting the whole run.
        let bytes = fs::read(&path)?;
        let content = String::from_utf8_lossy(&bytes);
        let questions = parse_records(&content);
        tracing::debug!(category = %name, count = questions.len(), "Category loaded");
        categories.push(Category::new(name, questions));
    }

    Ok(categories)
}

/// Parse CSV content into question records, dropping malformed rows.
fn parse_records(content: &str) -> Vec<QuestionRecord> {
    // Some editors prepend a BOM; strip it so the first value parses.
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    split_rows(content)
        .into_iter()
        .filter_map(|fields| record_from_fields(&fields))
        .collect()
}

/// Build a record from one row's fields, or `None` when the row is
/// malformed (too few fields, or a point value that is not a positive
/// integer).
fn record_from_fields(fields: &[String]) -> Option<QuestionRecord> {
    if fields.len() < 3 {
        tracing::debug!(?fields, "Skipping short row");
        return None;
    }

    let value = match fields[0].trim().parse::<u32>() {
        Ok(value) if value > 0 => value,
        _ => {
            tracing::debug!(raw = %fields[0], "Skipping row with invalid point value");
            return None;
        }
    };

    // Extra trailing fields are ignored.
    Some(QuestionRecord {
        value,
        clue: fields[1].clone(),
        solution: fields[2].clone(),
    })
}

/// Split CSV content into rows of fields.
///
/// Handles quoted fields (commas and newlines inside quotes are
/// literal) and doubled quotes as an escaped quote. Empty lines yield
/// no row.
fn split_rows(content: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' => in_quotes = true,
            ',' => fields.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                fields.push(std::mem::take(&mut field));
                if fields.len() > 1 || !fields[0].is_empty() {
                    rows.push(std::mem::take(&mut fields));
                } else {
                    fields.clear();
                }
            }
            _ => field.push(c),
        }
    }

    // Final row without a trailing newline.
    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        if fields.len() > 1 || !fields[0].is_empty() {
            rows.push(fields);
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parses_plain_rows() {
        let records = parse_records("100,First clue,First solution\n200,Second clue,Second solution\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].value, 100);
        assert_eq!(records[0].clue, "First clue");
        assert_eq!(records[1].solution, "Second solution");
    }

    #[test]
    fn test_skips_non_numeric_and_empty_values() {
        let records = parse_records("abc,clue,solution\n,clue,solution\n300,kept,row\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].value, 300);
    }

    #[test]
    fn test_skips_short_rows() {
        let records = parse_records("100,only two fields\n200,clue,solution\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].value, 200);
    }

    #[test]
    fn test_ignores_extra_fields() {
        let records = parse_records("100,clue,solution,note,more\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].solution, "solution");
    }

    #[test]
    fn test_quoted_field_with_comma() {
        let records = parse_records("400,\"Hello, world\",\"What is a greeting?\"\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].clue, "Hello, world");
        assert_eq!(records[0].solution, "What is a greeting?");
    }

    #[test]
    fn test_doubled_quotes() {
        let records = parse_records("100,\"He said \"\"hi\"\"\",solution\n");
        assert_eq!(records[0].clue, "He said \"hi\"");
    }

    #[test]
    fn test_strips_bom_and_crlf() {
        let records = parse_records("\u{feff}100,clue,solution\r\n200,next,row\r\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].value, 100);
    }

    #[test]
    fn test_skips_blank_lines_and_zero_values() {
        let records = parse_records("\n100,clue,solution\n\n0,clue,solution\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].value, 100);
    }

    #[test]
    fn test_load_categories_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        for (name, content) in [
            ("science.csv", "100,clue a,solution a\n"),
            ("history.csv", "200,clue b,solution b\n"),
            ("notes.txt", "not a category\n"),
        ] {
            let mut file = std::fs::File::create(dir.path().join(name)).unwrap();
            file.write_all(content.as_bytes()).unwrap();
        }

        let categories = load_categories(dir.path()).unwrap();

        // Sorted by file name, .txt ignored
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "history");
        assert_eq!(categories[1].name, "science");
        assert_eq!(categories[1].questions[0].value, 100);
    }

    #[test]
    fn test_load_categories_tolerates_non_utf8_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join("mixed.csv")).unwrap();
        // Latin-1 e-acute in the clue, then a clean row.
        file.write_all(b"100,caf\xe9 clue,solution\n200,clean,row\n")
            .unwrap();

        let categories = load_categories(dir.path()).unwrap();

        assert_eq!(categories.len(), 1);
        let questions = &categories[0].questions;
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].value, 100);
        assert_eq!(questions[0].clue, "caf\u{fffd} clue");
        assert_eq!(questions[1].value, 200);
    }

    #[test]
    fn test_load_categories_missing_directory_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(load_categories(&missing).is_err());
    }
}
