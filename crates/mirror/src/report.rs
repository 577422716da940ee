use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Outcome of one file encountered by the walk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// Source file converted; `written` counts declaration files written
    Converted {
        written: usize,
        failed_writes: Vec<String>,
    },

    /// Non-source file copied byte for byte
    Copied,

    /// The whole file was abandoned
    Failed { reason: String },
}

/// One record per file encountered by the walk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path relative to the source root
    pub source: PathBuf,

    pub outcome: FileOutcome,
}

/// Report of one complete mirroring run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MirrorReport {
    pub records: Vec<FileRecord>,

    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MirrorReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, source: PathBuf, outcome: FileOutcome) {
        self.records.push(FileRecord { source, outcome });
    }

    /// Number of source files converted
    #[must_use]
    pub fn converted(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r.outcome, FileOutcome::Converted { .. }))
            .count()
    }

    /// Number of files copied verbatim
    #[must_use]
    pub fn copied(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r.outcome, FileOutcome::Copied))
            .count()
    }

    /// Number of files abandoned entirely
    #[must_use]
    pub fn failed(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r.outcome, FileOutcome::Failed { .. }))
            .count()
    }

    /// Number of individual declaration writes that failed
    #[must_use]
    pub fn failed_writes(&self) -> usize {
        self.records
            .iter()
            .map(|r| match &r.outcome {
                FileOutcome::Converted { failed_writes, .. } => failed_writes.len(),
                _ => 0,
            })
            .sum()
    }

    /// True when any file or declaration write failed
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed() > 0 || self.failed_writes() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> MirrorReport {
        let mut report = MirrorReport::new();
        report.record(
            PathBuf::from("A.java"),
            FileOutcome::Converted {
                written: 3,
                failed_writes: vec!["A#x.fjava: denied".to_string()],
            },
        );
        report.record(PathBuf::from("readme.md"), FileOutcome::Copied);
        report.record(
            PathBuf::from("B.java"),
            FileOutcome::Failed {
                reason: "unreadable".to_string(),
            },
        );
        report
    }

    #[test]
    fn counts_by_outcome() {
        let report = sample();
        assert_eq!(report.converted(), 1);
        assert_eq!(report.copied(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.failed_writes(), 1);
        assert!(report.has_failures());
    }

    #[test]
    fn clean_run_has_no_failures() {
        let mut report = MirrorReport::new();
        report.record(
            PathBuf::from("A.java"),
            FileOutcome::Converted {
                written: 2,
                failed_writes: Vec::new(),
            },
        );
        assert!(!report.has_failures());
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(FileOutcome::Copied).unwrap();
        assert_eq!(json["status"], "copied");

        let json = serde_json::to_value(FileOutcome::Converted {
            written: 2,
            failed_writes: Vec::new(),
        })
        .unwrap();
        assert_eq!(json["status"], "converted");
        assert_eq!(json["written"], 2);
    }
}
