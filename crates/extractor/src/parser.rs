use tree_sitter::{Node, Parser, Tree};

use crate::error::{ExtractorError, Result};

/// Java parser backed by tree-sitter.
///
/// tree-sitter produces a best-effort tree for arbitrary input, so parse
/// degradation on malformed source shows up as missing declarations rather
/// than as an error.
pub struct JavaParser {
    parser: Parser,
}

impl JavaParser {
    /// Create a parser with the Java grammar loaded
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_java::LANGUAGE.into())
            .map_err(|e| ExtractorError::language(format!("Failed to set language: {e}")))?;
        Ok(Self { parser })
    }

    /// Parse source text into a syntax tree
    pub fn parse(&mut self, content: &str) -> Result<Tree> {
        self.parser
            .parse(content, None)
            .ok_or_else(|| ExtractorError::parse("Failed to parse source code"))
    }
}

/// Canonical reprint of a node: its leaf tokens in source order, joined by
/// single spaces, with comments dropped.
///
/// This stands in for a pretty-printer. Formatting is normalized, so the
/// reprint of a node generally differs byte-wise from the source slice it
/// came from.
#[must_use]
pub fn reprint(node: Node, content: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    collect_leaves(node, content, &mut parts);
    parts.join(" ")
}

fn collect_leaves<'a>(node: Node, content: &'a str, parts: &mut Vec<&'a str>) {
    if matches!(node.kind(), "line_comment" | "block_comment") {
        return;
    }

    if node.child_count() == 0 {
        let text = &content[node.start_byte()..node.end_byte()];
        if !text.is_empty() {
            parts.push(text);
        }
        return;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_leaves(child, content, parts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reprint_normalizes_whitespace() {
        let mut parser = JavaParser::new().unwrap();
        let source = "class A {\n    int   x\n        = 1;\n}";
        let tree = parser.parse(source).unwrap();

        assert_eq!(
            reprint(tree.root_node(), source),
            "class A { int x = 1 ; }"
        );
    }

    #[test]
    fn test_reprint_drops_comments() {
        let mut parser = JavaParser::new().unwrap();
        let source = "class A { /* doc */ void f() { // note\n } }";
        let tree = parser.parse(source).unwrap();

        assert_eq!(
            reprint(tree.root_node(), source),
            "class A { void f ( ) { } }"
        );
    }
}
