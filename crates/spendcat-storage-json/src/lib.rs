use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use spendcat_core::{SnapshotStorage, StorageError};
use spendcat_domain::Snapshot;

const TMP_SUFFIX: &str = "tmp";

/// Filesystem-backed JSON import/export of store contents.
#[derive(Debug, Clone, Default)]
pub struct JsonSnapshotStorage;

impl JsonSnapshotStorage {
    pub fn new() -> Self {
        Self
    }
}

impl SnapshotStorage for JsonSnapshotStorage {
    fn save_snapshot(&self, path: &Path, snapshot: &Snapshot) -> Result<(), StorageError> {
        save_snapshot_to_path(snapshot, path)
    }

    fn load_snapshot(&self, path: &Path) -> Result<Snapshot, StorageError> {
        load_snapshot_from_path(path)
    }
}

pub fn save_snapshot_to_path(snapshot: &Snapshot, path: &Path) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(snapshot)
        .map_err(|err| StorageError::Serde(err.to_string()))?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

pub fn load_snapshot_from_path(path: &Path) -> Result<Snapshot, StorageError> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|err| StorageError::Serde(err.to_string()))
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
