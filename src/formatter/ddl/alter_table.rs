//! ALTER TABLE layout
//!
//! Action and constraint keywords (`add`, `drop`, `modify`, `foreign`,
//! `references`, ...) start a new line at the left margin, and their operand
//! goes on the next line one level in. `column` stays on the line of the
//! action it belongs to, while `rename` and `drop` keep their operand inline.

use crate::catalog::ddl::{AlterAction, Constraint};
use crate::config::IndentStyle;
use crate::formatter::printer::Printer;
use crate::lexer::{DelimiterSet, Tokenizer};

pub fn format_alter_table(sql: &str, style: &IndentStyle) -> String {
    let mut tokenizer = Tokenizer::new(sql, DelimiterSet::DdlBlock);
    let mut printer = Printer::new(style);
    let mut start_of_line = false;

    while tokenizer.advance() {
        let token = tokenizer.token();
        let lower = tokenizer.lowercase_token();

        let action = AlterAction::from_tag(lower);
        if action.is_some() || Constraint::contains(lower) {
            if action != Some(AlterAction::Column) {
                printer.newline();
            }
            printer.write(token);
            if matches!(action, Some(AlterAction::Rename | AlterAction::Drop)) {
                start_of_line = false;
            } else {
                printer.indent().newline().dedent();
                start_of_line = true;
            }
        } else if token == ";" {
            printer.newline().write(token);
            start_of_line = false;
        } else if tokenizer.is_whitespace() {
            if !start_of_line {
                printer.space();
            }
        } else {
            printer.write(token);
            start_of_line = false;
        }
    }

    printer.finish_trimmed()
}
