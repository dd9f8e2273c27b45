//! 標準ファイルシステム実装（std::fs と walkdir を委譲）

use crate::error::Error;
use crate::ports::outbound::{FileMetadata, FileSystem, WalkEntry};
use std::path::Path;
use std::time::UNIX_EPOCH;
use walkdir::WalkDir;

/// 標準ライブラリの fs をそのまま委譲する FileSystem 実装
#[derive(Debug, Clone, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn read(&self, path: &Path) -> Result<Vec<u8>, Error> {
        std::fs::read(path).map_err(|e| {
            Error::io_msg(format!("Failed to read '{}': {}", path.display(), e))
        })
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), Error> {
        std::fs::write(path, contents).map_err(|e| {
            Error::io_msg(format!("Failed to write '{}': {}", path.display(), e))
        })
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), Error> {
        std::fs::create_dir_all(path).map_err(|e| {
            Error::io_msg(format!("Failed to create directory '{}': {}", path.display(), e))
        })
    }

    fn metadata(&self, path: &Path) -> Result<FileMetadata, Error> {
        let m = std::fs::metadata(path).map_err(|e| {
            Error::io_msg(format!(
                "Failed to get metadata for '{}': {}",
                path.display(),
                e
            ))
        })?;
        let modified_ms = m
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_millis() as u64);
        Ok(FileMetadata::new(m.is_file(), m.is_dir(), modified_ms))
    }

    fn walk_files(&self, root: &Path) -> Result<Vec<WalkEntry>, Error> {
        let meta = self.metadata(root)?;
        if !meta.is_dir() {
            return Err(Error::io_msg(format!(
                "Not a directory: '{}'",
                root.display()
            )));
        }
        let mut entries = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            match entry {
                Ok(e) => {
                    if !e.file_type().is_dir() {
                        entries.push(Ok(e.into_path()));
                    }
                }
                Err(e) => {
                    let at = e
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default();
                    entries.push(Err(Error::io_msg(format!(
                        "Failed to read directory entry '{}': {}",
                        at, e
                    ))));
                }
            }
        }
        Ok(entries)
    }

    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error> {
        let f = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                Error::io_msg(format!("Failed to open '{}' for append: {}", path.display(), e))
            })?;
        Ok(Box::new(f))
    }
}
