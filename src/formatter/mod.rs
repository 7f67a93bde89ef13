//! SQL formatting / pretty-printing logic
//!
//! The entry point sniffs the leading keywords of the statement and hands it
//! to the DML layout engine or to one of the DDL formatters. Statements it
//! does not recognize are returned trimmed and otherwise unchanged.

pub mod ddl;
pub mod dml;
pub(crate) mod nesting;
pub mod printer;

use crate::catalog::ddl::DdlStatement;
use crate::catalog::dml::DmlStatement;
use crate::config::IndentStyle;
use crate::lexer::Tokenizer;

/// Statement shape decided from the leading keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Dml(DmlStatement),
    Ddl(DdlStatement),
    Other,
}

/// Classify a statement by its first one or two words, ignoring case
pub fn classify(sql: &str) -> StatementKind {
    let mut words = Tokenizer::dml(sql).filter(|token| !token.is_whitespace());
    let Some(first) = words.next() else {
        return StatementKind::Other;
    };
    let first = first.lowercase();

    if let Some(statement) = DmlStatement::from_tag(first) {
        return StatementKind::Dml(statement);
    }
    if let Some(second) = words.next() {
        let phrase = format!("{} {}", first, second.lowercase());
        if let Some(statement) = DdlStatement::from_tag(&phrase) {
            return StatementKind::Ddl(statement);
        }
    }
    match DdlStatement::from_tag(first) {
        Some(statement) => StatementKind::Ddl(statement),
        None => StatementKind::Other,
    }
}

/// Format SQL string with the given indentation style
pub fn format_sql(input: &str, style: &IndentStyle) -> String {
    let sql = input.trim();
    if sql.is_empty() {
        return String::new();
    }

    let kind = classify(sql);
    tracing::debug!(?kind, indent = ?style, "formatting statement");

    match kind {
        StatementKind::Dml(_) => dml::format_dml(sql, style),
        StatementKind::Ddl(statement) => ddl::format_ddl(sql, statement, style),
        StatementKind::Other => sql.to_string(),
    }
}
