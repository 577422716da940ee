//! Order-preserving tokenization of source text.
//!
//! Splits arbitrary text into words and single-character delimiters and
//! renders them one per line. Whitespace separates tokens and is discarded.
//! This is deliberately not a language lexer: it has no notion of string
//! literals or comments, so a delimiter character inside either is split
//! out all the same.

mod token;

pub use token::{is_delimiter, Token, DELIMITERS};

/// Splits `input` into tokens in left-to-right order.
///
/// Whitespace flushes the pending word and is dropped; each delimiter
/// character flushes the pending word and then becomes its own token.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pending = String::new();

    for c in input.chars() {
        if c.is_whitespace() {
            flush(&mut tokens, &mut pending);
        } else if is_delimiter(c) {
            flush(&mut tokens, &mut pending);
            tokens.push(Token::Delimiter(c));
        } else {
            pending.push(c);
        }
    }
    flush(&mut tokens, &mut pending);

    tokens
}

/// Renders tokens one per line, each followed by a newline.
///
/// An empty token list renders as the empty string.
#[must_use]
pub fn render(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            Token::Word(word) => out.push_str(word),
            Token::Delimiter(c) => out.push(*c),
        }
        out.push('\n');
    }
    out
}

fn flush(tokens: &mut Vec<Token>, pending: &mut String) {
    if !pending.is_empty() {
        tokens.push(Token::Word(std::mem::take(pending)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(input: &str) -> Vec<String> {
        tokenize(input).iter().map(ToString::to_string).collect()
    }

    #[test]
    fn splits_qualified_call() {
        assert_eq!(texts("a.b();"), ["a", ".", "b", "(", ")", ";"]);
    }

    #[test]
    fn qualified_name_splits_on_every_dot() {
        assert_eq!(texts("a.b.c"), ["a", ".", "b", ".", "c"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert_eq!(tokenize(""), vec![]);
    }

    #[test]
    fn whitespace_only_yields_no_tokens() {
        assert_eq!(tokenize("   \t\n  "), vec![]);
    }

    #[test]
    fn consecutive_whitespace_collapses() {
        assert_eq!(texts("ab  cd"), ["ab", "cd"]);
    }

    #[test]
    fn newlines_and_tabs_separate_like_spaces() {
        assert_eq!(texts("int\tx\n=\n1;"), ["int", "x", "=", "1", ";"]);
    }

    #[test]
    fn delimiter_inside_string_literal_still_splits() {
        assert_eq!(texts(r#""a,b""#), ["\"a", ",", "b\""]);
    }

    #[test]
    fn concatenation_equals_input_without_whitespace() {
        let samples = [
            "a.b();",
            "public static void main ( String [ ] args ) { }",
            "int a, b;\nvoid foo() {\n  return;\n}\n",
            "x = \"a,b\" + c;",
        ];
        for input in samples {
            let joined: String = texts(input).concat();
            let stripped: String = input.chars().filter(|c| !c.is_whitespace()).collect();
            assert_eq!(joined, stripped);
        }
    }

    #[test]
    fn render_puts_one_token_per_line() {
        assert_eq!(render(&tokenize("a.b();")), "a\n.\nb\n(\n)\n;\n");
    }

    #[test]
    fn render_of_nothing_is_empty() {
        assert_eq!(render(&[]), "");
    }
}
