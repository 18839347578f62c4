//! tally-storage-json
//!
//! Filesystem-backed slot holding the ledger as a single JSON document.

use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use tally_core::{StateSlot, StorageError, SLOT_KEY};
use tracing::debug;

const SLOT_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Stores the slot payload at `<dir>/<key>.json`, replacing it atomically.
#[derive(Debug, Clone)]
pub struct JsonFileSlot {
    key: String,
    path: PathBuf,
}

impl JsonFileSlot {
    pub fn new(dir: PathBuf) -> Result<Self, StorageError> {
        Self::with_key(dir, SLOT_KEY)
    }

    pub fn with_key(dir: PathBuf, key: &str) -> Result<Self, StorageError> {
        fs::create_dir_all(&dir)?;
        let path = dir.join(format!("{}.{}", canonical_name(key), SLOT_EXTENSION));
        Ok(Self {
            key: key.to_string(),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateSlot for JsonFileSlot {
    fn key(&self) -> &str {
        &self.key
    }

    fn read(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(data) => Ok(Some(data)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, payload: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, payload)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), bytes = payload.len(), "slot written");
        Ok(())
    }
}

fn canonical_name(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "ledger".into()
    } else {
        sanitized
    }
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
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.sync_all()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_name_keeps_slot_key_readable() {
        assert_eq!(canonical_name(SLOT_KEY), "budgettrackerdata_v1");
        assert_eq!(canonical_name("  "), "ledger");
    }

    #[test]
    fn tmp_path_appends_suffix() {
        let tmp = tmp_path(Path::new("/data/slot.json"));
        assert_eq!(tmp, PathBuf::from("/data/slot.json.tmp"));
    }
}
