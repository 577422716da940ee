use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Suffix that marks a file as source to convert
pub const SOURCE_SUFFIX: &str = ".java";

/// One source file loaded for conversion
#[derive(Debug, Clone)]
pub struct SourceUnit {
    pub path: PathBuf,
    /// File name with the source suffix stripped; every emitted file name
    /// starts with it
    pub base_name: String,
    pub content: String,
}

impl SourceUnit {
    /// Load `path` as a source unit.
    ///
    /// Returns `Ok(None)` when the file name does not carry the source
    /// suffix; the name alone decides, before any content is read. The
    /// suffix is stripped exactly once, so `A.java.java` gets base name
    /// `A.java`.
    pub fn read(path: &Path) -> Result<Option<Self>> {
        let Some(base_name) = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.strip_suffix(SOURCE_SUFFIX))
        else {
            return Ok(None);
        };
        let base_name = base_name.to_string();

        let content = fs::read_to_string(path)?;
        Ok(Some(Self {
            path: path.to_path_buf(),
            base_name,
            content,
        }))
    }
}
