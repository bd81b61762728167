use crate::airlines::AirlineRecord;
use crate::{output, utils, CrawlerError, Storage};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

const EXTENSION: &str = "json";

/// One pretty JSON file per airline. A file's presence marks the airline done.
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    dir: PathBuf,
}

impl JsonDirStore {
    pub async fn open<P: AsRef<Path>>(dir: P) -> Result<JsonDirStore, CrawlerError> {
        let dir = dir.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&dir).await?;
        debug!("Use output directory {}", dir.display());
        Ok(JsonDirStore { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir
            .join(format!("{}.{}", utils::sanitize_file_name(name), EXTENSION))
    }

    /// Every stored record, sorted by file name. Unreadable files are
    /// returned as errors next to their path.
    pub async fn records(
        &self,
    ) -> Result<Vec<(PathBuf, Result<AirlineRecord, CrawlerError>)>, CrawlerError> {
        let mut paths = vec![];
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().map_or(false, |ext| ext == EXTENSION) {
                paths.push(path);
            }
        }
        paths.sort();

        let mut records = Vec::with_capacity(paths.len());
        for path in paths {
            let record = output::read_json(&path).await;
            records.push((path, record));
        }
        Ok(records)
    }
}

#[async_trait::async_trait]
impl Storage for JsonDirStore {
    type Record = AirlineRecord;

    async fn is_done(&self, name: &str) -> Result<bool, CrawlerError> {
        match tokio::fs::metadata(self.path_for(name)).await {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn insert(&self, record: &AirlineRecord) -> Result<(), CrawlerError> {
        let json = serde_json::to_string_pretty(record)?;
        output::write_atomic(self.path_for(&record.name), json.as_bytes()).await
    }
}
