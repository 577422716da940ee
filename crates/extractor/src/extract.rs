use tree_sitter::{Node, Tree};

use crate::declaration::Declaration;
use crate::parser::reprint;

/// Node kinds that declare fields. `constant_declaration` covers constants
/// in interface bodies.
const FIELD_KINDS: [&str; 2] = ["field_declaration", "constant_declaration"];

/// Node kinds that declare methods. Constructors count as methods.
const METHOD_KINDS: [&str; 3] = [
    "method_declaration",
    "constructor_declaration",
    "compact_constructor_declaration",
];

/// Extracts the ordered declaration list for one source file.
///
/// The Class declaration always comes first and carries the unmodified
/// source content, even when the tree holds no members at all (there is
/// exactly one per file, no matter how many type declarations it contains).
/// Fields and methods follow in source order, found at any nesting depth,
/// so members of nested and anonymous classes are included. A field
/// statement declaring several names yields one Field per name, all backed
/// by the same statement reprint.
#[must_use]
pub fn extract_declarations(tree: &Tree, content: &str) -> Vec<Declaration> {
    let mut declarations = vec![Declaration::Class {
        text: content.to_string(),
    }];
    collect(tree.root_node(), content, &mut declarations);

    log::debug!("Extracted {} declarations", declarations.len());
    declarations
}

fn collect(node: Node, content: &str, declarations: &mut Vec<Declaration>) {
    let kind = node.kind();
    if FIELD_KINDS.contains(&kind) {
        let text = reprint(node, content);
        for name in declared_names(node, content) {
            declarations.push(Declaration::Field {
                name,
                text: text.clone(),
            });
        }
    } else if METHOD_KINDS.contains(&kind) {
        if let Some(name) = node_name(node, content) {
            declarations.push(Declaration::Method {
                name,
                text: reprint(node, content),
            });
        }
    }

    // Keep descending: initializers and bodies can hold anonymous classes
    // with declarations of their own.
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect(child, content, declarations);
    }
}

/// Names declared by one field statement, one per `variable_declarator`
fn declared_names(node: Node, content: &str) -> Vec<String> {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .filter(|child| child.kind() == "variable_declarator")
        .filter_map(|declarator| node_name(declarator, content))
        .collect()
}

fn node_name(node: Node, content: &str) -> Option<String> {
    let name = node.child_by_field_name("name")?;
    Some(content[name.start_byte()..name.end_byte()].to_string())
}
