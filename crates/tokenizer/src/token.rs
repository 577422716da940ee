use std::fmt;

/// Characters that always form their own single-character token.
pub const DELIMITERS: [char; 7] = ['(', ')', '{', '}', ';', ',', '.'];

/// Returns true for characters in the fixed delimiter set.
#[must_use]
pub fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(&c)
}

/// An atomic unit of tokenized output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A maximal run of non-whitespace, non-delimiter characters.
    Word(String),
    /// Exactly one character from [`DELIMITERS`].
    Delimiter(char),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(word) => f.write_str(word),
            Token::Delimiter(c) => write!(f, "{c}"),
        }
    }
}
