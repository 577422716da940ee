//! # Finegrain Mirror
//!
//! Tree walking and emission for fine-grained conversion.
//!
//! ## Pipeline
//!
//! ```text
//! Source Tree
//!     │
//!     ├──> Walker (every file, hidden ones included)
//!     │      ├─> *.java  → Extractor → Tokenizer → declaration files
//!     │      └─> others  → byte-for-byte copy
//!     │
//!     └──> MirrorReport (one outcome per file)
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use finegrain_mirror::RepositoryMirror;
//!
//! fn main() -> finegrain_mirror::Result<()> {
//!     let mut mirror = RepositoryMirror::new("repo", "fine-repo")?;
//!     let report = mirror.run();
//!
//!     println!("Converted {} files", report.converted());
//!     Ok(())
//! }
//! ```

mod emit;
mod error;
mod report;
mod source;
mod walker;

pub use emit::convert_source_unit;
pub use error::{MirrorError, Result};
pub use report::{FileOutcome, FileRecord, MirrorReport};
pub use source::{SourceUnit, SOURCE_SUFFIX};
pub use walker::RepositoryMirror;
