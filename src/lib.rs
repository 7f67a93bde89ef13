//! sqlindent - A token-level SQL pretty-printer
//!
//! Re-emits a SQL statement with normalized line breaks and indentation
//! without touching the tokens themselves. DML (SELECT / INSERT / UPDATE /
//! DELETE) goes through a single-pass layout engine; CREATE TABLE,
//! ALTER TABLE and COMMENT ON have their own smaller layouts. Anything else
//! is returned trimmed.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod lexer;

pub use config::{IndentKind, IndentStyle};
pub use error::{Error, Result};
pub use formatter::format_sql;

/// Format SQL with the default style (four spaces)
pub fn format(input: &str) -> String {
    format_sql(input, &IndentStyle::default())
}

/// Format SQL indenting each level with `indent` spaces
pub fn format_with_indent(input: &str, indent: i64) -> Result<String> {
    let style = IndentStyle::spaces(indent)?;
    Ok(format_sql(input, &style))
}

/// Format SQL with an explicit indentation style
pub fn format_with_style(input: &str, style: &IndentStyle) -> String {
    format_sql(input, style)
}

/// Check if SQL string is already formatted
pub fn check(input: &str) -> bool {
    format(input) == input
}
