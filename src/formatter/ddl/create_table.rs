//! CREATE TABLE layout
//!
//! The outermost parenthesis opens an indented column block with one
//! definition per line. Nested parentheses such as `varchar(255)` or
//! `decimal(10, 2)` stay inline.

use crate::config::IndentStyle;
use crate::formatter::printer::Printer;
use crate::lexer::{DelimiterSet, Tokenizer};

pub fn format_create_table(sql: &str, style: &IndentStyle) -> String {
    let mut tokenizer = Tokenizer::new(sql, DelimiterSet::DdlBlock);
    let mut printer = Printer::new(style);
    let mut depth = 0i32;
    let mut start_of_line = false;

    while tokenizer.advance() {
        let token = tokenizer.token();
        match token {
            "(" => {
                printer.write(token);
                if depth < 1 {
                    printer.indent().newline();
                    start_of_line = true;
                } else {
                    start_of_line = false;
                }
                depth += 1;
            }
            "," if depth == 1 => {
                printer.write(token).newline();
                start_of_line = true;
            }
            ")" => {
                depth -= 1;
                if depth < 1 {
                    printer.dedent().newline();
                }
                printer.write(token);
                start_of_line = false;
            }
            _ if tokenizer.is_whitespace() => {
                if !start_of_line {
                    printer.space();
                }
            }
            _ => {
                printer.write(token);
                start_of_line = false;
            }
        }
    }

    printer.finish_trimmed()
}
