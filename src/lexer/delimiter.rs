//! Delimiter sets for each SQL sublanguage

/// Characters treated as whitespace tokens
pub const WHITESPACE: [char; 5] = [' ', '\n', '\r', '\x0C', '\t'];

const DML: &[char] = &[
    ';', '(', ')', '+', '*', '/', '-', '=', '<', '>', '\'', '`', '"', '[', ']', ',', ' ', '\n',
    '\r', '\x0C', '\t',
];

const DDL_BLOCK: &[char] = &[
    ';', '(', ',', ')', '\'', '[', ']', '"', ' ', '\n', '\r', '\x0C', '\t',
];

const DDL_COMMENT: &[char] = &[';', '\'', '[', ']', '"', ' ', '\n', '\r', '\x0C', '\t'];

/// Which characters split the input into single-character tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterSet {
    /// SELECT / INSERT / UPDATE / DELETE
    Dml,
    /// CREATE TABLE and ALTER TABLE
    DdlBlock,
    /// COMMENT ON
    DdlComment,
}

impl DelimiterSet {
    pub fn chars(self) -> &'static [char] {
        match self {
            DelimiterSet::Dml => DML,
            DelimiterSet::DdlBlock => DDL_BLOCK,
            DelimiterSet::DdlComment => DDL_COMMENT,
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.chars().contains(&c)
    }
}

/// Whether `text` is exactly one whitespace character
pub fn is_whitespace(text: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => WHITESPACE.contains(&c),
        _ => false,
    }
}

/// The token that closes a literal opened by `text`, if it opens one
pub fn literal_closer(text: &str) -> Option<&'static str> {
    match text {
        "'" => Some("'"),
        "\"" => Some("\""),
        "[" => Some("]"),
        _ => None,
    }
}
