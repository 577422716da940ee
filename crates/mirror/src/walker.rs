use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use finegrain_extractor::JavaParser;
use walkdir::WalkDir;

use crate::emit::convert_source_unit;
use crate::error::{MirrorError, Result};
use crate::report::{FileOutcome, MirrorReport};
use crate::source::SourceUnit;

/// Walks a source tree and mirrors it into a fine-grained repository
pub struct RepositoryMirror {
    source_root: PathBuf,
    dest_root: PathBuf,
    parser: JavaParser,
}

impl RepositoryMirror {
    /// Create a mirror between the given roots.
    ///
    /// The source root must be an existing directory. The destination is
    /// created on demand, one directory per emitted or copied file, so
    /// empty source directories never appear in the mirror.
    pub fn new(source_root: impl AsRef<Path>, dest_root: impl AsRef<Path>) -> Result<Self> {
        let source_root = source_root.as_ref().to_path_buf();
        if !source_root.is_dir() {
            return Err(MirrorError::InvalidPath(format!(
                "Not a directory: {}",
                source_root.display()
            )));
        }

        Ok(Self {
            source_root,
            dest_root: dest_root.as_ref().to_path_buf(),
            parser: JavaParser::new()?,
        })
    }

    /// Mirror the whole tree, one file at a time.
    ///
    /// Never fails as a whole: every per-file error becomes that file's
    /// outcome in the returned report and the walk moves on. Files are
    /// visited in the tree's natural enumeration order; no ignore rules
    /// apply, hidden files included.
    pub fn run(&mut self) -> MirrorReport {
        let start = Instant::now();
        let mut report = MirrorReport::new();

        log::info!(
            "Mirroring {} into {}",
            self.source_root.display(),
            self.dest_root.display()
        );

        for entry in WalkDir::new(&self.source_root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let source = err.path().map(|p| self.relative(p)).unwrap_or_default();
                    let outcome = FileOutcome::Failed {
                        reason: err.to_string(),
                    };
                    report.record(source, outcome);
                    continue;
                }
            };

            // Regular files only; symlinks count when their target is one.
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let outcome = self
                .process_file(path)
                .unwrap_or_else(|err| FileOutcome::Failed {
                    reason: err.to_string(),
                });
            report.record(self.relative(path), outcome);
        }

        report.time_ms = start.elapsed().as_millis() as u64;
        if report.time_ms == 0 {
            report.time_ms = 1;
        }

        log::debug!(
            "Walk finished: {} records in {}ms",
            report.records.len(),
            report.time_ms
        );
        report
    }

    fn process_file(&mut self, path: &Path) -> Result<FileOutcome> {
        let relative = path.strip_prefix(&self.source_root).map_err(|_| {
            MirrorError::InvalidPath(format!("Outside source root: {}", path.display()))
        })?;
        let dest_path = self.dest_root.join(relative);
        let dest_dir = dest_path.parent().unwrap_or(&self.dest_root);
        fs::create_dir_all(dest_dir)?;

        match SourceUnit::read(path)? {
            Some(unit) => convert_source_unit(&mut self.parser, &unit, dest_dir),
            None => {
                fs::copy(path, &dest_path)?;
                log::debug!("Copied {}", path.display());
                Ok(FileOutcome::Copied)
            }
        }
    }

    fn relative(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.source_root)
            .unwrap_or(path)
            .to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn rejects_missing_source_root() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("nope");

        let result = RepositoryMirror::new(&missing, temp.path().join("out"));
        assert!(matches!(result, Err(MirrorError::InvalidPath(_))));
    }

    #[test]
    fn rejects_file_as_source_root() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("plain.txt");
        fs::write(&file, "x").unwrap();

        let result = RepositoryMirror::new(&file, temp.path().join("out"));
        assert!(matches!(result, Err(MirrorError::InvalidPath(_))));
    }
}
