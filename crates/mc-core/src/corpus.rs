//! CSV corpus assembly
//!
//! Reads every manufacturer CSV file in the input directory into an
//! in-memory corpus keyed by manufacturer name (the file stem). Rows are
//! mapped positionally against the column dictionary; the header line and
//! rows with a blank leading cell are skipped.

use crate::dictionary::{self, DICTIONARY, HEADER_MARKER};
use crate::error::{CoreError, CoreResult};
use std::collections::HashSet;
use std::path::Path;

/// One parsed CSV data row.
///
/// Values are stored positionally, parallel to the dictionary. An absent
/// or empty cell is `None`; downstream normalization substitutes the
/// column-class default.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    values: Vec<Option<String>>,
}

impl RawRecord {
    /// Build a record from raw cell values.
    ///
    /// Rows wider than the dictionary are rejected; narrower rows leave
    /// the trailing fields absent.
    pub fn from_cells<I>(file: &str, line: usize, cells: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut values: Vec<Option<String>> = cells
            .into_iter()
            .map(|cell| if cell.is_empty() { None } else { Some(cell) })
            .collect();

        if values.len() > DICTIONARY.len() {
            return Err(CoreError::RowTooWide {
                file: file.to_string(),
                line,
                expected: DICTIONARY.len(),
                found: values.len(),
            });
        }
        values.resize(DICTIONARY.len(), None);

        Ok(Self { values })
    }

    /// Look up a field value by dictionary name.
    pub fn get(&self, field: &str) -> Option<&str> {
        let idx = dictionary::field_index(field)?;
        self.values[idx].as_deref()
    }
}

/// In-memory corpus: manufacturer name -> ordered spec rows.
///
/// Manufacturer order and per-manufacturer row order are preserved
/// end-to-end; lookup-table insertion order depends on them.
#[derive(Debug, Default)]
pub struct Corpus {
    entries: Vec<(String, Vec<RawRecord>)>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a manufacturer's rows.
    ///
    /// A duplicate key replaces the earlier entry's rows in place (the
    /// later file wins, keeping the original position).
    pub fn insert(&mut self, manufacturer: String, rows: Vec<RawRecord>) {
        match self.entries.iter_mut().find(|(name, _)| *name == manufacturer) {
            Some(entry) => {
                log::warn!(
                    "Duplicate manufacturer '{}': replacing previously loaded rows",
                    manufacturer
                );
                entry.1 = rows;
            }
            None => self.entries.push((manufacturer, rows)),
        }
    }

    /// Iterate (manufacturer, rows) in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[RawRecord])> {
        self.entries
            .iter()
            .map(|(name, rows)| (name.as_str(), rows.as_slice()))
    }

    /// Iterate manufacturer names in insertion order.
    pub fn manufacturers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Number of manufacturers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total spec rows across all manufacturers.
    pub fn total_rows(&self) -> usize {
        self.entries.iter().map(|(_, rows)| rows.len()).sum()
    }

    /// Distinct values of one field across all rows, first-seen order
    /// (manufacturer order, then row order). Absent fields are skipped.
    pub fn distinct_field_values(&self, field: &str) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut values = Vec::new();
        for (_, rows) in &self.entries {
            for row in rows {
                if let Some(value) = row.get(field) {
                    if seen.insert(value) {
                        values.push(value);
                    }
                }
            }
        }
        values
    }
}

/// Parse one manufacturer CSV file into raw records.
///
/// Lines whose first cell is empty or equals the header marker are
/// skipped.
pub fn parse_csv_file(path: &Path) -> CoreResult<Vec<RawRecord>> {
    let file = path.display().to_string();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| CoreError::CsvParse {
            file: file.clone(),
            source: e,
        })?;

    let mut rows = Vec::new();
    for (line, result) in reader.records().enumerate() {
        let record = result.map_err(|e| CoreError::CsvParse {
            file: file.clone(),
            source: e,
        })?;

        let first = record.get(0).unwrap_or("");
        if first.is_empty() || first == HEADER_MARKER {
            continue;
        }

        rows.push(RawRecord::from_cells(
            &file,
            line + 1,
            record.iter().map(String::from),
        )?);
    }

    Ok(rows)
}

/// Discover and parse every `*.csv` file in the input directory.
///
/// Files are processed in sorted name order so the corpus (and therefore
/// lookup-table insertion order) is deterministic across filesystems.
/// The manufacturer key is the file name without its extension.
pub fn assemble_corpus(dir: &Path) -> CoreResult<Corpus> {
    if !dir.is_dir() {
        return Err(CoreError::InputDirNotFound {
            path: dir.display().to_string(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| CoreError::IoWithPath {
        path: dir.display().to_string(),
        source: e,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CoreError::IoWithPath {
            path: dir.display().to_string(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "csv") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut corpus = Corpus::new();
    for path in paths {
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            log::warn!("Skipping CSV file with a non-UTF-8 name: {}", path.display());
            continue;
        };
        let rows = parse_csv_file(&path)?;
        corpus.insert(stem.to_string(), rows);
    }

    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(cells: &[&str]) -> RawRecord {
        RawRecord::from_cells("test.csv", 1, cells.iter().map(|c| c.to_string())).unwrap()
    }

    #[test]
    fn test_record_positional_mapping() {
        let row = record(&["DBA-NZE161", "Corolla", "G", "5"]);
        assert_eq!(row.get("car_type"), Some("DBA-NZE161"));
        assert_eq!(row.get("car_name"), Some("Corolla"));
        assert_eq!(row.get("grade"), Some("G"));
        assert_eq!(row.get("capacity"), Some("5"));
        // Trailing dictionary fields are absent, not empty
        assert_eq!(row.get("price"), None);
        // Unknown fields resolve to nothing
        assert_eq!(row.get("torque"), None);
    }

    #[test]
    fn test_record_empty_cells_are_absent() {
        let row = record(&["DBA-NZE161", "Corolla", "", "5"]);
        assert_eq!(row.get("grade"), None);
    }

    #[test]
    fn test_record_too_wide_is_rejected() {
        let cells: Vec<String> = (0..DICTIONARY.len() + 1).map(|i| i.to_string()).collect();
        let err = RawRecord::from_cells("wide.csv", 3, cells).unwrap_err();
        match err {
            CoreError::RowTooWide {
                line,
                expected,
                found,
                ..
            } => {
                assert_eq!(line, 3);
                assert_eq!(expected, DICTIONARY.len());
                assert_eq!(found, DICTIONARY.len() + 1);
            }
            other => panic!("Expected RowTooWide, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_skips_header_and_blank_leading_cells() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("acme.csv");
        std::fs::write(
            &path,
            "車両形式,車名,グレード\nDBA-1,X1,G1\n,ignored,row\nDBA-2,X2,G2\n",
        )
        .unwrap();

        let rows = parse_csv_file(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("car_name"), Some("X1"));
        assert_eq!(rows[1].get("car_name"), Some("X2"));
    }

    #[test]
    fn test_parse_missing_file() {
        let err = parse_csv_file(Path::new("/nonexistent/acme.csv")).unwrap_err();
        assert!(matches!(err, CoreError::CsvParse { .. }));
    }

    #[test]
    fn test_assemble_sorted_and_keyed_by_stem() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("zeta.csv"), "DBA-9,Z1,G\n").unwrap();
        std::fs::write(dir.path().join("acme.csv"), "DBA-1,X1,G\n").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a csv").unwrap();

        let corpus = assemble_corpus(dir.path()).unwrap();
        let names: Vec<&str> = corpus.manufacturers().collect();
        assert_eq!(names, vec!["acme", "zeta"]);
        assert_eq!(corpus.total_rows(), 2);
    }

    #[test]
    fn test_assemble_missing_dir() {
        let err = assemble_corpus(Path::new("/nonexistent/csv_files")).unwrap_err();
        assert!(matches!(err, CoreError::InputDirNotFound { .. }));
    }

    #[test]
    fn test_duplicate_manufacturer_overwrites_in_place() {
        // Caveat: a second file with the same stem replaces the earlier
        // rows but keeps the earlier position.
        let mut corpus = Corpus::new();
        corpus.insert("acme".to_string(), vec![record(&["DBA-1", "X1"])]);
        corpus.insert("zeta".to_string(), vec![record(&["DBA-9", "Y1"])]);
        corpus.insert("acme".to_string(), vec![record(&["DBA-2", "X2"])]);

        let names: Vec<&str> = corpus.manufacturers().collect();
        assert_eq!(names, vec!["acme", "zeta"]);
        let (_, rows) = corpus.iter().next().unwrap();
        assert_eq!(rows[0].get("car_name"), Some("X2"));
    }

    #[test]
    fn test_distinct_field_values_first_seen_order() {
        let mut corpus = Corpus::new();
        corpus.insert(
            "acme".to_string(),
            vec![
                record(&["DBA-1", "X1"]),
                record(&["DBA-2", "X1"]),
                record(&["DBA-3", "X2"]),
            ],
        );
        corpus.insert("zeta".to_string(), vec![record(&["DBA-9", "Y1"])]);

        assert_eq!(
            corpus.distinct_field_values("car_name"),
            vec!["X1", "X2", "Y1"]
        );
        assert_eq!(
            corpus.distinct_field_values("car_type"),
            vec!["DBA-1", "DBA-2", "DBA-3", "DBA-9"]
        );
        // A field absent everywhere yields nothing
        assert!(corpus.distinct_field_values("price").is_empty());
    }
}
