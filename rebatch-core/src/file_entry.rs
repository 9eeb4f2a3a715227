use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One file queued for renaming, parsed once at input time.
///
/// The split follows `std::path` semantics: the extension is everything
/// after the final dot of the final component (kept here with its leading
/// separator), so `archive.tar.gz` has stem `archive.tar` and extension
/// `.gz`, and a dotfile like `.bashrc` has no extension at all. Renaming
/// only ever rewrites the file name; the parent directory is fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// The full input path.
    pub path: PathBuf,
    /// Parent directory the renamed file stays in.
    pub directory: PathBuf,
    /// File name without the final extension.
    pub stem: String,
    /// Final extension including the leading `.`, or empty.
    pub extension: String,
}

impl FileEntry {
    /// Parse an input path. Fails on paths without a usable file name
    /// (`/`, `..`) and on names that are not valid UTF-8.
    pub fn new(path: PathBuf) -> Result<Self, EngineError> {
        let invalid = || EngineError::InvalidFileName { path: path.clone() };

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(invalid)?
            .to_string();

        let extension = match path.extension() {
            Some(ext) => {
                let ext = ext.to_str().ok_or_else(invalid)?;
                format!(".{ext}")
            },
            None => String::new(),
        };

        let directory = path.parent().map(Path::to_path_buf).unwrap_or_default();

        Ok(Self {
            path,
            directory,
            stem,
            extension,
        })
    }

    /// The current file name, stem and extension rejoined.
    pub fn file_name(&self) -> String {
        format!("{}{}", self.stem, self.extension)
    }

    /// Where a derived name would land: always the original directory.
    pub fn target_path(&self, new_name: &str) -> PathBuf {
        self.directory.join(new_name)
    }
}
