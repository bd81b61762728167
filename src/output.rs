use crate::CrawlerError;
use serde::{de::DeserializeOwned, Serialize};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row, quoting fields where needed.
pub fn write_row<W: Write>(mut w: W, row: &[&str]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, ",")?;
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    // Same line ending Python's csv module uses.
    write!(w, "\r\n")
}

/// One-column table with a header row.
pub fn column_to_csv(header: &str, values: &[String]) -> Vec<u8> {
    let mut buf = Vec::new();
    // Writing into a Vec never fails.
    let _ = write_row(&mut buf, &[header]);
    for v in values {
        let _ = write_row(&mut buf, &[v.as_str()]);
    }
    buf
}

pub async fn write_csv_column<P: AsRef<Path>>(
    path: P,
    header: &str,
    values: &[String],
) -> Result<(), CrawlerError> {
    tokio::fs::write(path, column_to_csv(header, values)).await?;
    Ok(())
}

/// Two-space indented JSON, non-ASCII kept as is.
pub async fn write_json_pretty<P, T>(path: P, value: &T) -> Result<(), CrawlerError>
where
    P: AsRef<Path>,
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string_pretty(value)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

pub async fn read_json<P, T>(path: P) -> Result<T, CrawlerError>
where
    P: AsRef<Path>,
    T: DeserializeOwned,
{
    let bytes = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn part_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    path.with_file_name(name)
}

/// Write to a sibling `.part` file and rename it over `path`, so `path`
/// only ever holds complete contents.
pub async fn write_atomic<P: AsRef<Path>>(path: P, contents: &[u8]) -> Result<(), CrawlerError> {
    let path = path.as_ref();
    let part = part_path(path);
    tokio::fs::write(&part, contents).await?;
    if let Err(e) = tokio::fs::rename(&part, path).await {
        let _ = tokio::fs::remove_file(&part).await;
        return Err(e.into());
    }
    Ok(())
}
