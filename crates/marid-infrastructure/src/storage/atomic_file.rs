//! Whole-file replacement for small text documents.
//!
//! A write lands in `.<name>.tmp` next to the target, is flushed to disk and
//! then renamed over the target, so readers see either the old or the new
//! content. A failed write removes its temp file and leaves the target as it
//! was.

use marid_core::error::{MaridError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct AtomicFile {
    path: PathBuf,
}

impl AtomicFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when the file has not been written yet.
    pub fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error("read", e)),
        }
    }

    pub fn save(&self, content: &str) -> Result<()> {
        let (dir, tmp_path) = self.staging()?;
        fs::create_dir_all(dir).map_err(|e| self.io_error("create directory for", e))?;

        let written = write_synced(&tmp_path, content)
            .and_then(|()| fs::rename(&tmp_path, &self.path));
        if let Err(e) = written {
            // Best effort; the temp file may not exist.
            let _ = fs::remove_file(&tmp_path);
            return Err(self.io_error("write", e));
        }
        Ok(())
    }

    fn staging(&self) -> Result<(&Path, PathBuf)> {
        match (self.path.parent(), self.path.file_name()) {
            (Some(dir), Some(name)) => {
                let tmp = dir.join(format!(".{}.tmp", name.to_string_lossy()));
                Ok((dir, tmp))
            }
            _ => Err(MaridError::io(format!(
                "cannot stage a write for {}",
                self.path.display()
            ))),
        }
    }

    fn io_error(&self, action: &str, e: std::io::Error) -> MaridError {
        MaridError::io(format!("failed to {action} {}: {e}", self.path.display()))
    }
}

fn write_synced(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()
}
