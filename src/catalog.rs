//! Catalog source resolution and loading.
//!
//! The catalog lives in a CSV file whose location is resolved once at startup
//! from a prioritized candidate list. Loading re-reads and re-parses the file
//! on every call; the data set is small enough that no caching is warranted.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::cleaning::{clean_price, strip_citations};
use crate::error::{CatalogError, Result};

/// Environment variable overriding the catalog file location.
pub const CSV_ENV_VAR: &str = "PRODUCTS_CSV";

/// Exact header text of the designated price column, including the Arabic
/// wholesale-unit annotation. Must match the CSV verbatim.
pub const PRICE_COLUMN: &str = "price (جملة الجملة (دولار))";

/// One catalog row: an ordered mapping from header name to cell value. The
/// column set comes from the file's header row; no fixed schema exists.
pub type ProductRecord = Map<String, Value>;

/// Catalog file location, resolved once at startup. Absence of a usable file
/// is a valid state here; it only becomes an error at load time.
#[derive(Debug, Clone)]
pub struct CatalogSource {
    path: Option<PathBuf>,
    candidates: Vec<PathBuf>,
}

impl CatalogSource {
    /// Resolves the catalog path from the default candidate list:
    /// the `PRODUCTS_CSV` override first, then `products.csv` beside the
    /// service, then the same file (and its backup copy) one directory up.
    pub fn resolve() -> Self {
        let mut candidates = Vec::new();
        if let Some(override_path) = env::var(CSV_ENV_VAR).ok().filter(|s| !s.is_empty()) {
            candidates.push(PathBuf::from(override_path));
        }
        candidates.push(PathBuf::from("products.csv"));
        candidates.push(PathBuf::from("../products.csv"));
        candidates.push(PathBuf::from("../products - Copy.csv"));

        Self::from_candidates(candidates)
    }

    /// Picks the first existing candidate as the resolved path.
    pub fn from_candidates(candidates: Vec<PathBuf>) -> Self {
        let path = candidates.iter().find(|p| p.exists()).cloned();
        Self { path, candidates }
    }

    /// The resolved path, if any candidate existed at startup.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Reads and parses the catalog file, cleaning every cell and coercing
    /// the designated price column to a number.
    ///
    /// Row-level noise (unparseable prices, short rows) is recovered with
    /// fallback values; file-level problems (no file, no headers, I/O or
    /// encoding failures) abort the whole load.
    pub fn load(&self) -> Result<Vec<ProductRecord>> {
        let path = self.path.as_deref().ok_or_else(|| {
            let tried = self
                .candidates
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            CatalogError::NotFound(tried)
        })?;

        let raw = fs::read_to_string(path)?;
        // Tolerate a UTF-8 byte-order mark from spreadsheet exports.
        let text = raw.strip_prefix('\u{feff}').unwrap_or(&raw);

        // flexible: short rows are padded with empty cells below instead of
        // failing the whole load.
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());
        let headers = reader.headers()?.clone();
        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(CatalogError::NoHeaders);
        }

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let mut record = ProductRecord::new();
            // Every record carries the full header column set; short rows are
            // padded with empty cells.
            for (i, header) in headers.iter().enumerate() {
                let cell = row.get(i).unwrap_or("");
                let cleaned = strip_citations(cell).trim().to_string();
                record.insert(header.to_string(), Value::String(cleaned));
            }

            let price_text = record
                .get(PRICE_COLUMN)
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string();
            record.insert(PRICE_COLUMN.to_string(), Value::from(clean_price(&price_text)));

            records.push(record);
        }

        Ok(records)
    }
}
