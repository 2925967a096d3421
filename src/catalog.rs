//! Catalog loading.
//!
//! Reads the first worksheet of an `.xlsx` workbook into an immutable
//! in-memory catalog of restaurant entries. Column layout:
//! A: category1, B: category2, C: name, D: URL, E..: keywords (optional).
//! The first row is a header and is always skipped.

use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Reader};
use once_cell::sync::OnceCell;

/// One recommendable restaurant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub category1: String,
    pub category2: String,
    pub name: String,
    /// Empty string means "no link".
    pub url: String,
    pub keywords: Vec<String>,
}

/// The immutable, load-once collection of admitted entries.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<Entry>,
}

/// Error opening or reading the workbook. An empty workbook is not an
/// error; it yields an empty catalog.
#[derive(Debug)]
pub struct LoadError {
    pub path: PathBuf,
    pub message: String,
}

impl LoadError {
    fn new(path: &Path, message: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cannot read {}: {}", self.path.display(), self.message)
    }
}

impl Catalog {
    /// Load the catalog from the first worksheet of `path`.
    pub fn load(path: &Path) -> Result<Catalog, LoadError> {
        let mut workbook =
            open_workbook_auto(path).map_err(|e| LoadError::new(path, e.to_string()))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| LoadError::new(path, "workbook has no sheets"))?
            .map_err(|e| LoadError::new(path, e.to_string()))?;

        let rows = range
            .rows()
            .map(|row| row.iter().map(cell_to_string).collect::<Vec<String>>());

        let catalog = Catalog::from_rows(rows);
        if catalog.is_empty() {
            log::warn!("{}: no admissible rows", path.display());
        } else {
            log::info!("{}: loaded {} entries", path.display(), catalog.len());
        }
        Ok(catalog)
    }

    /// Build a catalog from already-stringified rows, header row included.
    ///
    /// The first row is always skipped. Entirely blank rows are ignored;
    /// a non-blank row missing category1, category2, or name is dropped.
    pub fn from_rows<I>(rows: I) -> Catalog
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let mut entries = Vec::new();
        let mut dropped = 0usize;

        for (idx, row) in rows.into_iter().enumerate() {
            if idx == 0 {
                // Header row
                continue;
            }
            if row.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }
            match admit_row(&row) {
                Some(entry) => entries.push(entry),
                None => {
                    dropped += 1;
                    log::debug!("row {}: missing required field, dropped", idx + 1);
                }
            }
        }

        if dropped > 0 {
            log::warn!("dropped {} malformed rows", dropped);
        }
        Catalog { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Load-once process-wide catalog. The first successful load is cached;
/// every later call returns the same catalog without touching the disk.
pub fn shared(path: &Path) -> Result<&'static Catalog, LoadError> {
    static SHARED: OnceCell<Catalog> = OnceCell::new();
    SHARED.get_or_try_init(|| Catalog::load(path))
}

/// Interpret one row. Requires non-empty category1/category2/name after
/// trimming; the URL may be empty; trailing cells become keywords with
/// blanks filtered out, order preserved.
fn admit_row(cells: &[String]) -> Option<Entry> {
    let field = |i: usize| cells.get(i).map(|s| s.trim()).unwrap_or("");

    let category1 = field(0);
    let category2 = field(1);
    let name = field(2);
    if category1.is_empty() || category2.is_empty() || name.is_empty() {
        return None;
    }

    let keywords = cells
        .iter()
        .skip(4)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    Some(Entry {
        category1: category1.to_string(),
        category2: category2.to_string(),
        name: name.to_string(),
        url: field(3).to_string(),
        keywords,
    })
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    fn header() -> Vec<String> {
        row(&["category1", "category2", "name", "url"])
    }

    #[test]
    fn trims_fields_without_changing_admission() {
        let catalog = Catalog::from_rows(vec![
            header(),
            row(&["  Korean ", " Soup", "  Gukbap Alley  ", " http://x "]),
        ]);
        assert_eq!(catalog.len(), 1);
        let entry = &catalog.entries()[0];
        assert_eq!(entry.category1, "Korean");
        assert_eq!(entry.category2, "Soup");
        assert_eq!(entry.name, "Gukbap Alley");
        assert_eq!(entry.url, "http://x");
    }

    #[test]
    fn drops_rows_missing_any_required_field() {
        let catalog = Catalog::from_rows(vec![
            header(),
            row(&["", "Soup", "Gukbap Alley"]),
            row(&["Korean", "   ", "Gukbap Alley"]),
            row(&["Korean", "Soup", ""]),
        ]);
        assert!(catalog.is_empty());
    }

    #[test]
    fn url_is_optional() {
        let catalog = Catalog::from_rows(vec![header(), row(&["Korean", "Soup", "Gukbap Alley"])]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.entries()[0].url, "");
    }

    #[test]
    fn keywords_keep_order_and_skip_blanks() {
        let catalog = Catalog::from_rows(vec![
            header(),
            row(&["분식", "떡볶이", "신전", "", "spicy", "  ", "cheap", "late night"]),
        ]);
        assert_eq!(
            catalog.entries()[0].keywords,
            vec!["spicy", "cheap", "late night"]
        );
    }

    #[test]
    fn header_row_is_skipped_even_if_it_looks_like_data() {
        let catalog = Catalog::from_rows(vec![
            row(&["Korean", "Soup", "Header Impostor"]),
            row(&["Korean", "Soup", "Gukbap Alley"]),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.entries()[0].name, "Gukbap Alley");
    }

    #[test]
    fn blank_rows_are_ignored() {
        let catalog = Catalog::from_rows(vec![
            header(),
            row(&["", "  ", ""]),
            row(&["Korean", "Soup", "Gukbap Alley"]),
        ]);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn source_with_only_a_header_yields_empty_catalog() {
        let catalog = Catalog::from_rows(vec![header()]);
        assert!(catalog.is_empty());
    }

    #[test]
    fn unreadable_source_is_an_error() {
        let err = Catalog::load(Path::new("does/not/exist.xlsx")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.xlsx"));
    }
}
