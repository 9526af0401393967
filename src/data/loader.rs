use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Loader errors
// ---------------------------------------------------------------------------

/// Errors specific to the dashboard's input formats.  Everything else
/// (I/O, parse failures) flows through `anyhow` with context.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("file contains no transaction rows")]
    Empty,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a transaction dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with the localized column names
///   (日期, 销售额, 订单量, 客单价, 商品分类, 地区)
/// * `.json` – records-oriented array of objects with the same keys
///   (the default `df.to_json(orient='records')` layout)
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(LoadError::UnsupportedExtension(other.to_string()).into()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Dataset> {
    let reader = csv::Reader::from_path(path).context("opening CSV")?;
    read_csv(reader)
}

/// Deserialize rows from any CSV reader.  The date column must parse as a
/// calendar date (`%Y-%m-%d`); a bad cell fails the whole load.
fn read_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Dataset> {
    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<Record>().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }
    Ok(Dataset::from_records(records).ok_or(LoadError::Empty)?)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let records: Vec<Record> = serde_json::from_str(&text).context("parsing JSON")?;
    Ok(Dataset::from_records(records).ok_or(LoadError::Empty)?)
}
