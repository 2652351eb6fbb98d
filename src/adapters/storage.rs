//! Removable-media storage adapter.
//!
//! Implements [`FileStoragePort`] on a host directory standing in for the
//! SD card root.  A missing root directory reads as "no card inserted"
//! and every write returns [`StorageError::Unavailable`].
//!
//! Files are flat: names with path separators or longer than
//! [`FILE_NAME_MAX_LEN`] are rejected before touching the filesystem.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::app::ports::{FileStoragePort, StorageError};
use crate::config::FILE_NAME_MAX_LEN;

pub struct DirectoryStorage {
    root: PathBuf,
}

impl DirectoryStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        if root.is_dir() {
            info!("DirectoryStorage: medium at {}", root.display());
        } else {
            warn!("DirectoryStorage: no medium at {}", root.display());
        }
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_available(&self) -> bool {
        self.root.is_dir()
    }

    fn validate_name(file_name: &str) -> Result<(), StorageError> {
        let ok = !file_name.is_empty()
            && file_name.len() <= FILE_NAME_MAX_LEN
            && !file_name.contains(['/', '\\'])
            && file_name != "."
            && file_name != "..";
        if ok { Ok(()) } else { Err(StorageError::InvalidName) }
    }
}

impl FileStoragePort for DirectoryStorage {
    fn append(&mut self, file_name: &str, text: &str) -> Result<(), StorageError> {
        Self::validate_name(file_name)?;
        if !self.is_available() {
            return Err(StorageError::Unavailable);
        }

        let path = self.root.join(file_name);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                warn!("open {} failed: {}", path.display(), e);
                StorageError::IoError
            })?;
        file.write_all(text.as_bytes()).map_err(|e| {
            warn!("write {} failed: {}", path.display(), e);
            StorageError::IoError
        })?;
        debug!("appended {} bytes to {}", text.len(), file_name);
        Ok(())
    }
}
