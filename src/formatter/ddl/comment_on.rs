//! COMMENT ON layout
//!
//! `column` and `is` start a new line, and whatever follows each of them
//! (the column path, the comment literal) goes on its own line one level in.

use crate::catalog::ddl::CommentClause;
use crate::config::IndentStyle;
use crate::formatter::printer::Printer;
use crate::lexer::{DelimiterSet, Tokenizer};

pub fn format_comment_on(sql: &str, style: &IndentStyle) -> String {
    let mut tokenizer = Tokenizer::new(sql, DelimiterSet::DdlComment);
    let mut printer = Printer::new(style);
    let mut start_of_line = false;
    let mut operand_pending = false;

    while tokenizer.advance() {
        let token = tokenizer.token();

        if CommentClause::contains(tokenizer.lowercase_token()) {
            printer.newline().write(token);
            start_of_line = true;
            operand_pending = true;
        } else if tokenizer.is_whitespace() {
            if !start_of_line {
                printer.space();
            }
        } else {
            if operand_pending {
                printer.indent().newline().dedent();
                operand_pending = false;
            }
            printer.write(token);
            start_of_line = false;
        }
    }

    printer.finish_trimmed()
}
