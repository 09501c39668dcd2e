use std::path::{Path, PathBuf};

use eyre::Result;

/// A rendered output unit waiting to be written below an output directory.
///
/// Generated code is always overwritten; a failed run may leave files from
/// earlier units behind, there is no rollback.
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with a path relative to the output directory.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the relative file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file below `base`, creating parent directories as needed.
    pub fn write_to(&self, base: &Path) -> Result<PathBuf> {
        let path = base.join(&self.path);
        write_file(&path, &self.content)?;
        Ok(path)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}
