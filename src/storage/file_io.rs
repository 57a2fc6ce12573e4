//! File I/O utilities with atomic writes
//!
//! Provides safe CSV file operations that won't corrupt the store on failure.

use std::fs::{self, File};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::WalletError;

/// Contents of a CSV file: the header row and every data row
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub header: StringRecord,
    pub rows: Vec<StringRecord>,
}

/// Read a CSV file, returning `None` if the file doesn't exist
///
/// Rows must all have as many fields as the header. Any parse failure is
/// reported as [`WalletError::StoreCorrupt`].
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Option<CsvTable>, WalletError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)
        .map_err(|e| WalletError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(file);

    let header = reader
        .headers()
        .map_err(|e| WalletError::StoreCorrupt(format!("{}: {}", path.display(), e)))?
        .clone();

    let rows = reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| WalletError::StoreCorrupt(format!("{}: {}", path.display(), e)))?;

    Ok(Some(CsvTable { header, rows }))
}

/// Write a CSV file atomically (write to temp, then rename)
///
/// The header is always written, so an empty table still produces a file
/// with the column names.
pub fn write_csv_atomic<P, I>(path: P, header: &[&str], rows: I) -> Result<(), WalletError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = Vec<String>>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                WalletError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| WalletError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

    writer
        .write_record(header)
        .map_err(|e| WalletError::Storage(format!("Failed to write header: {}", e)))?;

    for row in rows {
        writer
            .write_record(&row)
            .map_err(|e| WalletError::Storage(format!("Failed to write row: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| WalletError::Storage(format!("Failed to flush data: {}", e)))?;

    let file = writer
        .into_inner()
        .map_err(|e| WalletError::Storage(format!("Failed to finish writing: {}", e)))?;

    file.sync_all()
        .map_err(|e| WalletError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        WalletError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
