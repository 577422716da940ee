/// Kind of an extracted declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Class,
    Field,
    Method,
}

impl DeclarationKind {
    /// File suffix used when emitting declarations of this kind
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            DeclarationKind::Class => ".cjava",
            DeclarationKind::Field => ".fjava",
            DeclarationKind::Method => ".mjava",
        }
    }

    /// Human-readable kind name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DeclarationKind::Class => "class",
            DeclarationKind::Field => "field",
            DeclarationKind::Method => "method",
        }
    }
}

/// One extracted program element together with the text that backs its
/// output file.
///
/// Declarations are transient values derived fresh from one source file;
/// they hold no references to each other and are never cached across files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// The whole-file dump; text is the unmodified source content.
    Class { text: String },
    /// A single declared field name; text is the reprint of the entire
    /// declaring statement, shared by every name the statement declares.
    Field { name: String, text: String },
    /// A method or constructor; text is the reprint of its node.
    Method { name: String, text: String },
}

impl Declaration {
    #[must_use]
    pub fn kind(&self) -> DeclarationKind {
        match self {
            Declaration::Class { .. } => DeclarationKind::Class,
            Declaration::Field { .. } => DeclarationKind::Field,
            Declaration::Method { .. } => DeclarationKind::Method,
        }
    }

    /// The declared name, for kinds that have one
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Declaration::Class { .. } => None,
            Declaration::Field { name, .. } | Declaration::Method { name, .. } => Some(name),
        }
    }

    /// The text that gets tokenized into this declaration's file
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Declaration::Class { text }
            | Declaration::Field { text, .. }
            | Declaration::Method { text, .. } => text,
        }
    }

    /// Output file name for a source file with the given base name.
    ///
    /// Base `Point` yields `Point.cjava`, `Point#x.fjava`, `Point#of.mjava`.
    /// Same-kind declarations sharing a name map to the same file name;
    /// callers writing in order get last-write-wins semantics.
    #[must_use]
    pub fn file_name(&self, base: &str) -> String {
        let suffix = self.kind().suffix();
        match self.name() {
            Some(name) => format!("{base}#{name}{suffix}"),
            None => format!("{base}{suffix}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_class_file_name() {
        let class = Declaration::Class {
            text: "class Point {}".to_string(),
        };
        assert_eq!(class.file_name("Point"), "Point.cjava");
    }

    #[test]
    fn test_field_and_method_file_names() {
        let field = Declaration::Field {
            name: "x".to_string(),
            text: "int x ;".to_string(),
        };
        let method = Declaration::Method {
            name: "of".to_string(),
            text: "static Point of ( ) { }".to_string(),
        };
        assert_eq!(field.file_name("Point"), "Point#x.fjava");
        assert_eq!(method.file_name("Point"), "Point#of.mjava");
    }

    #[test]
    fn test_overloads_share_a_file_name() {
        let first = Declaration::Method {
            name: "foo".to_string(),
            text: "void foo ( ) { }".to_string(),
        };
        let second = Declaration::Method {
            name: "foo".to_string(),
            text: "void foo ( int x ) { }".to_string(),
        };
        assert_eq!(first.file_name("X"), second.file_name("X"));
    }

    #[test]
    fn test_kind_accessors() {
        assert_eq!(DeclarationKind::Class.suffix(), ".cjava");
        assert_eq!(DeclarationKind::Field.suffix(), ".fjava");
        assert_eq!(DeclarationKind::Method.suffix(), ".mjava");
        assert_eq!(DeclarationKind::Method.as_str(), "method");
    }
}
