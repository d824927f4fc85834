//! Generated result lifetime management
//!
//! The generated PNG is materialized as a named temp file: a revocable local
//! reference whose backing storage is freed when the handle drops. At most
//! one reference is live at a time, enforced by program order: `bind`
//! releases the previous image before persisting the new one.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{QrWizardError, Result};
use crate::types::ContentType;

/// A generated image held in a temp file.
///
/// Dropping the value deletes the file, revoking the reference.
#[derive(Debug)]
pub struct GeneratedImage {
    file: NamedTempFile,
    len: usize,
}

impl GeneratedImage {
    /// Path of the backing temp file.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Size of the image payload in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Owns the lifetime of the current generated image.
#[derive(Debug, Default)]
pub struct ResultStore {
    current: Option<GeneratedImage>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist a new image payload, revoking any previously held reference
    /// first so two backing files are never live at once.
    pub fn bind(&mut self, bytes: &[u8]) -> Result<&GeneratedImage> {
        self.release();

        let mut file = NamedTempFile::new()?;
        file.write_all(bytes)?;
        file.flush()?;
        debug!("bound {} bytes at {}", bytes.len(), file.path().display());

        Ok(self.current.insert(GeneratedImage {
            file,
            len: bytes.len(),
        }))
    }

    /// The currently bound image, if any.
    pub fn current(&self) -> Option<&GeneratedImage> {
        self.current.as_ref()
    }

    /// Whether an image is currently bound.
    pub fn has_result(&self) -> bool {
        self.current.is_some()
    }

    /// File name for a downloaded image: `qrcode_<type>_<timestamp>.png`,
    /// timestamp in epoch milliseconds captured at download time.
    pub fn download_file_name(content_type: ContentType, timestamp_ms: i64) -> String {
        format!("qrcode_{}_{}.png", content_type, timestamp_ms)
    }

    /// Copy the bound image into `output_dir` under the synthesized name.
    ///
    /// Fails with `NoResult` when nothing is bound. Wizard state is not
    /// touched; downloading any number of times is allowed.
    pub fn download(
        &self,
        output_dir: &Path,
        content_type: ContentType,
        timestamp_ms: i64,
    ) -> Result<PathBuf> {
        let image = self.current.as_ref().ok_or(QrWizardError::NoResult)?;
        let target = output_dir.join(Self::download_file_name(content_type, timestamp_ms));
        fs::copy(image.path(), &target)?;
        debug!("saved result to {}", target.display());
        Ok(target)
    }

    /// Revoke the held reference, if any. Safe to call when nothing is held.
    pub fn release(&mut self) {
        if let Some(image) = self.current.take() {
            debug!("revoking {}", image.path().display());
        }
    }
}
