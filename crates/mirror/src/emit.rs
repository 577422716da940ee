use std::fs;
use std::path::Path;

use finegrain_extractor::{extract_declarations, JavaParser};
use finegrain_tokenizer::{render, tokenize};

use crate::error::Result;
use crate::report::FileOutcome;
use crate::source::SourceUnit;

/// Converts one source unit into its declaration files inside `dest_dir`.
///
/// Each declaration write is isolated: a failed write goes into
/// `failed_writes` and the remaining declarations are still written.
/// Same-named declarations of one kind target the same file, so writing in
/// source order gives last-write-wins.
pub fn convert_source_unit(
    parser: &mut JavaParser,
    unit: &SourceUnit,
    dest_dir: &Path,
) -> Result<FileOutcome> {
    let tree = parser.parse(&unit.content)?;
    let declarations = extract_declarations(&tree, &unit.content);

    let mut written = 0;
    let mut failed_writes = Vec::new();
    for declaration in &declarations {
        let file_name = declaration.file_name(&unit.base_name);
        let rendered = render(&tokenize(declaration.text()));
        match fs::write(dest_dir.join(&file_name), rendered) {
            Ok(()) => written += 1,
            Err(err) => failed_writes.push(format!("{file_name}: {err}")),
        }
    }

    log::debug!(
        "Converted {} into {written} declaration files",
        unit.path.display()
    );

    Ok(FileOutcome::Converted {
        written,
        failed_writes,
    })
}
