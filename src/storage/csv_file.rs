//! Delimited file I/O for the ledger and goal files
//!
//! Both files carry a fixed header row, are created header-only when
//! absent, and are only ever appended to after that.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{KakeiboError, KakeiboResult};

/// Create `path` with only the header row if it does not exist yet
///
/// Returns `true` when the file was created.
pub fn ensure_with_header<P: AsRef<Path>>(path: P, header: &[&str]) -> KakeiboResult<bool> {
    let path = path.as_ref();

    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            KakeiboError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut writer = csv::Writer::from_path(path).map_err(|e| {
        KakeiboError::Storage(format!("Failed to create {}: {}", path.display(), e))
    })?;
    writer.write_record(header)?;
    writer.flush()?;

    Ok(true)
}

/// Read every data row of a header-bearing file
///
/// Each row comes back with its 1-based line number. The header must match
/// `header` exactly; any row that does not deserialize into `R` fails the
/// whole read.
pub fn read_rows<R, P>(path: P, header: &[&str]) -> KakeiboResult<Vec<(u64, R)>>
where
    R: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_path(path)
        .map_err(|e| KakeiboError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let headers = reader
        .headers()
        .map_err(|e| KakeiboError::malformed_row(path, 1, e))?
        .clone();

    if headers.is_empty() {
        return Ok(Vec::new());
    }

    if !headers.iter().eq(header.iter().copied()) {
        return Err(KakeiboError::malformed_row(
            path,
            1,
            format!(
                "expected header '{}', found '{}'",
                header.join(","),
                headers.iter().collect::<Vec<_>>().join(",")
            ),
        ));
    }

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let fallback_line = index as u64 + 2;
        let record = result.map_err(|e| {
            let line = e
                .position()
                .map(|p| p.line())
                .unwrap_or(fallback_line);
            KakeiboError::malformed_row(path, line, e)
        })?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(fallback_line);

        let row: R = record
            .deserialize(Some(&headers))
            .map_err(|e| KakeiboError::malformed_row(path, line, e))?;

        rows.push((line, row));
    }

    Ok(rows)
}

/// Append a single row and flush it to disk
///
/// Creates the file with `header` first if it is missing. A file whose last
/// byte is not a newline gets one before the new row, so a hand-edited file
/// cannot merge two rows.
pub fn append_row<R, P>(path: P, header: &[&str], row: &R) -> KakeiboResult<()>
where
    R: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    ensure_with_header(path, header)?;

    let mut file = OpenOptions::new()
        .read(true)
        .append(true)
        .open(path)
        .map_err(|e| KakeiboError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    if !ends_with_newline(&mut file)? {
        file.write_all(b"\n")?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    writer
        .serialize(row)
        .map_err(|e| KakeiboError::Storage(format!("Failed to write {}: {}", path.display(), e)))?;

    writer
        .flush()
        .map_err(|e| KakeiboError::Storage(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

fn ends_with_newline(file: &mut File) -> KakeiboResult<bool> {
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(true);
    }

    file.seek(SeekFrom::Start(len - 1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
