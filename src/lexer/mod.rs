//! SQL tokenization
//!
//! The tokenizer splits SQL text on a fixed set of one-character delimiters.
//! Every delimiter is a token of its own and every maximal run of other
//! characters is a word token. A `'`, `"` or `[` opens a literal that is
//! swallowed whole up to its closer, so quoted strings and identifiers come
//! out as a single token. An unterminated literal runs to the end of input.

pub mod delimiter;

pub use delimiter::{is_whitespace, DelimiterSet};

use delimiter::literal_closer;

/// A lexical token: a slice of the input plus its lowercase form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    text: &'a str,
    lowercase: String,
}

impl<'a> Token<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            lowercase: text.to_lowercase(),
        }
    }

    /// Text exactly as it appeared in the input
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Lowercase form used for keyword comparisons
    pub fn lowercase(&self) -> &str {
        &self.lowercase
    }

    pub fn is_whitespace(&self) -> bool {
        is_whitespace(self.text)
    }
}

/// Pull-based tokenizer with one token of lookbehind
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    delimiters: DelimiterSet,
    current: Option<Token<'a>>,
    last: Option<String>,
}

impl<'a> Tokenizer<'a> {
    /// Tokenizer over the trimmed input
    pub fn new(sql: &'a str, delimiters: DelimiterSet) -> Self {
        Self {
            input: sql.trim(),
            pos: 0,
            delimiters,
            current: None,
            last: None,
        }
    }

    /// Tokenizer using the DML delimiter set
    pub fn dml(sql: &'a str) -> Self {
        Self::new(sql, DelimiterSet::Dml)
    }

    /// Move to the next token. Returns false once the input is exhausted.
    pub fn advance(&mut self) -> bool {
        let start = self.pos;
        let Some(raw) = self.next_raw() else {
            return false;
        };

        if let Some(closer) = literal_closer(raw) {
            while let Some(part) = self.next_raw() {
                if part == closer {
                    break;
                }
            }
        }

        if let Some(previous) = self.current.take() {
            if !previous.is_whitespace() {
                self.last = Some(previous.lowercase);
            }
        }
        self.current = Some(Token::new(&self.input[start..self.pos]));
        true
    }

    /// Current token, if `advance` has produced one
    pub fn current(&self) -> Option<&Token<'a>> {
        self.current.as_ref()
    }

    /// Current token text, or "" before the first advance
    pub fn token(&self) -> &'a str {
        self.current.as_ref().map_or("", |t| t.text)
    }

    /// Lowercase form of the current token
    pub fn lowercase_token(&self) -> &str {
        self.current.as_ref().map_or("", |t| t.lowercase())
    }

    /// Lowercase form of the last non-whitespace token before the current one
    pub fn last_token(&self) -> Option<&str> {
        self.last.as_deref()
    }

    /// Whether the current token is a single whitespace character
    pub fn is_whitespace(&self) -> bool {
        self.current.as_ref().is_some_and(Token::is_whitespace)
    }

    /// Next single delimiter or word, without literal handling
    fn next_raw(&mut self) -> Option<&'a str> {
        let input = self.input;
        let delimiters = self.delimiters;
        let rest = &input[self.pos..];
        let first = rest.chars().next()?;
        let len = if delimiters.contains(first) {
            first.len_utf8()
        } else {
            rest.find(|c| delimiters.contains(c)).unwrap_or(rest.len())
        };
        self.pos += len;
        Some(&rest[..len])
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() {
            self.current.clone()
        } else {
            None
        }
    }
}

/// Tokenize the whole input at once
pub fn tokenize(sql: &str, delimiters: DelimiterSet) -> Vec<Token<'_>> {
    Tokenizer::new(sql, delimiters).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(sql: &str) -> Vec<&str> {
        tokenize(sql, DelimiterSet::Dml)
            .into_iter()
            .map(|t| t.text())
            .collect()
    }

    #[test]
    fn delimiters_are_single_tokens() {
        assert_eq!(texts("a<=b"), vec!["a", "<", "=", "b"]);
    }

    #[test]
    fn lookbehind_skips_whitespace() {
        let mut tokenizer = Tokenizer::dml("on ,");
        assert!(tokenizer.advance());
        assert_eq!(tokenizer.last_token(), None);
        assert!(tokenizer.advance());
        assert!(tokenizer.is_whitespace());
        assert_eq!(tokenizer.last_token(), Some("on"));
        assert!(tokenizer.advance());
        assert_eq!(tokenizer.token(), ",");
        assert_eq!(tokenizer.last_token(), Some("on"));
        assert!(!tokenizer.advance());
    }

    #[test]
    fn multibyte_words_stay_whole() {
        assert_eq!(texts("名前 = 'é'"), vec!["名前", " ", "=", " ", "'é'"]);
    }
}
