use std::io;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

/// Directory that holds in-flight uploads.
#[derive(Debug, Clone)]
pub struct UploadDir {
    root: PathBuf,
}

impl UploadDir {
    /// Uses `root` for uploads, creating it if needed.
    pub fn create(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Opens a uniquely named file for a single request.
    ///
    /// The file is removed when the returned handle is dropped, whichever
    /// way the request ends.
    pub fn new_file(&self) -> io::Result<NamedTempFile> {
        Builder::new()
            .prefix("upload-")
            .suffix(".img")
            .tempfile_in(&self.root)
    }
}
