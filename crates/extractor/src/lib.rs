//! # Finegrain Extractor
//!
//! Declaration extraction from Java source for fine-grained mirroring.
//!
//! ## Philosophy
//!
//! One source file becomes a list of declarations, each carrying the text
//! that backs its own output file:
//! - The Class declaration is the whole-file dump, unmodified.
//! - Fields and methods carry a normalized reprint of their node, so two
//!   formattings of the same member produce the same text.
//! - Extraction is a pure function of the tree and the raw text; nothing
//!   here touches the filesystem.
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     │
//!     ├──> Tree-sitter Parsing → AST (best effort)
//!     │
//!     ├──> Declaration Walk (depth-first, source order)
//!     │    ├─> Class: whole-file dump, always first
//!     │    ├─> Field: one per declared name, statement reprint
//!     │    └─> Method: one per method/constructor, node reprint
//!     │
//!     └──> Emission Naming (Base.cjava / Base#f.fjava / Base#m.mjava)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use finegrain_extractor::{extract_declarations, JavaParser};
//!
//! let mut parser = JavaParser::new().unwrap();
//! let source = "class Point { int x; }";
//! let tree = parser.parse(source).unwrap();
//!
//! let declarations = extract_declarations(&tree, source);
//! assert_eq!(declarations.len(), 2);
//! assert_eq!(declarations[0].file_name("Point"), "Point.cjava");
//! assert_eq!(declarations[1].file_name("Point"), "Point#x.fjava");
//! ```

mod declaration;
mod error;
mod extract;
mod parser;

pub use declaration::{Declaration, DeclarationKind};
pub use error::{ExtractorError, Result};
pub use extract::extract_declarations;
pub use parser::{reprint, JavaParser};
