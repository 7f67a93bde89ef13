//! DML layout engine
//!
//! A single pass over the token stream. Each token is classified by an
//! ordered chain of tests (first match wins) and its handler decides whether
//! to break the line, shift the indentation, or drop the token when it is
//! redundant whitespace. No syntax tree is built: clause boundaries,
//! subqueries and function calls are all recognized from the token text and
//! one token of lookbehind.

use super::nesting::{FieldContext, FunctionTracker, OnCondition, ParenthesisTracker};
use super::printer::Printer;
use crate::catalog::dml::{
    is_reserved, DmlStatement, EndClause, LogicalExpression, Quantifier, StartClause,
};
use crate::config::IndentStyle;
use crate::lexer::Tokenizer;

/// Format a SELECT / INSERT / UPDATE / DELETE statement.
///
/// Input that does not start with one of those keywords yields an empty
/// string; routing other statements is the dispatcher's job.
pub fn format_dml(sql: &str, style: &IndentStyle) -> String {
    if !starts_with_dml(sql) {
        return String::new();
    }

    let mut tokenizer = Tokenizer::dml(sql);
    let mut layout = DmlLayout::new(style);
    while tokenizer.advance() {
        layout.step(&tokenizer);
    }
    layout.finish()
}

/// Whether the first token of `sql` is a DML statement keyword
pub fn starts_with_dml(sql: &str) -> bool {
    Tokenizer::dml(sql)
        .next()
        .is_some_and(|token| DmlStatement::contains(token.lowercase()))
}

/// A bare word in front of `(` is taken as a function name unless it is a
/// reserved keyword. Quoted identifiers count as words.
pub fn is_function_name(token: &str) -> bool {
    let Some(first) = token.chars().next() else {
        return false;
    };
    let is_identifier = first.is_alphabetic() || first == '_' || first == '$' || first == '"';
    is_identifier && !is_reserved(token)
}

struct DmlLayout {
    printer: Printer,
    parens: ParenthesisTracker,
    field: FieldContext,
    function: FunctionTracker,
    /// Set right after a manufactured line break; swallows leading blanks
    start_of_line: bool,
    /// Between a qualifier like `left` and the clause keyword it qualifies
    in_clause: bool,
    /// An open `on` condition owes one extra dedent
    join_on: OnCondition,
    /// A `between` is waiting for its `and`
    after_between: bool,
}

impl DmlLayout {
    fn new(style: &IndentStyle) -> Self {
        Self {
            printer: Printer::new(style),
            parens: ParenthesisTracker::default(),
            field: FieldContext::default(),
            function: FunctionTracker::default(),
            start_of_line: false,
            in_clause: false,
            join_on: OnCondition::default(),
            after_between: false,
        }
    }

    fn step(&mut self, tokenizer: &Tokenizer<'_>) {
        let token = tokenizer.token();
        let lower = tokenizer.lowercase_token();
        let last = tokenizer.last_token();

        tracing::trace!(
            token,
            depth = self.printer.depth(),
            paren_depth = self.parens.depth(),
            function_depth = self.function.depth(),
            "dml token"
        );

        if let Some(statement) = DmlStatement::from_tag(lower) {
            self.dml_statement(token, statement);
        } else if StartClause::contains(lower) {
            self.start_clause(token);
        } else if self.join_on.is_open() && token == "," && !self.function.is_inside() {
            self.comma_after_on(token);
        } else if lower == EndClause::On.tag() {
            self.on(token);
        } else if let Some(clause) =
            EndClause::from_tag(lower).filter(|clause| *clause != EndClause::Values)
        {
            self.end_clause(token, clause);
        } else if token == "," && self.field.is_newline() && !self.function.is_inside() {
            self.field_item(token);
        } else if token == "(" {
            self.open_paren(token, last);
        } else if token == ")" {
            self.close_paren(token);
        } else if lower == EndClause::Values.tag() {
            self.values(token);
        } else if self.after_between && lower == LogicalExpression::And.tag() {
            // the `and` of a `between` range stays inline, so this runs
            // ahead of the line-breaking logical rule below
            self.and_after_between(token);
        } else if let Some(expression) =
            LogicalExpression::from_tag(lower).filter(|e| *e != LogicalExpression::Case)
        {
            self.logical(token, expression);
        } else if tokenizer.is_whitespace() {
            self.whitespace();
        } else {
            self.other(token, lower, last);
        }
    }

    fn dml_statement(&mut self, token: &str, statement: DmlStatement) {
        self.printer.write(token);
        if statement == DmlStatement::Select {
            self.printer.indent().newline();
            self.parens.push();
            self.field.push().allow_newline();
            self.join_on.push();
            self.start_of_line = true;
        } else {
            self.printer.indent();
            self.start_of_line = false;
            if statement == DmlStatement::Update {
                self.printer.newline();
                self.start_of_line = true;
            }
        }
    }

    fn start_clause(&mut self, token: &str) {
        if !self.in_clause {
            self.close_clause();
            self.printer.newline();
        }
        self.printer.write(token);
        self.start_of_line = false;
        self.in_clause = true;
    }

    fn end_clause(&mut self, token: &str, clause: EndClause) {
        if !self.in_clause {
            self.close_clause();
            self.printer.newline();
        }
        if clause != EndClause::Union {
            self.printer.indent();
        }
        self.printer.write(token).newline();
        self.start_of_line = true;
        self.field.set_newline(matches!(
            clause,
            EndClause::By | EndClause::Set | EndClause::From
        ));
        self.in_clause = false;
    }

    /// Step out of the previous clause body, and out of its `on` condition
    /// too if one is still open.
    fn close_clause(&mut self) {
        if self.join_on.close() {
            self.printer.dedent();
        }
        self.printer.dedent();
    }

    fn on(&mut self, token: &str) {
        self.printer.indent().newline().write(token);
        self.start_of_line = false;
        self.join_on.open();
    }

    fn comma_after_on(&mut self, token: &str) {
        self.printer.write(token).dedent().newline();
        self.join_on.close();
        self.field.allow_newline();
        self.start_of_line = true;
    }

    fn field_item(&mut self, token: &str) {
        self.printer.write(token).newline();
        self.start_of_line = true;
    }

    fn open_paren(&mut self, token: &str, last: Option<&str>) {
        self.parens.open();
        if last.is_some_and(is_function_name) || self.function.is_inside() {
            self.function.enter();
        }

        self.printer.write(token);
        if self.function.is_inside() || self.field.is_newline() {
            self.start_of_line = false;
        } else {
            self.printer.indent().newline();
            self.start_of_line = true;
        }
    }

    fn close_paren(&mut self, token: &str) {
        if self.parens.close() {
            self.printer.dedent();
            if self.join_on.pop() {
                self.printer.dedent();
            }
            self.parens.pop();
            self.field.pop();
        }

        if self.function.is_inside() {
            self.function.leave();
        } else if !self.field.is_newline() {
            self.printer.dedent().newline();
        }
        self.printer.write(token);
        self.start_of_line = false;
    }

    fn values(&mut self, token: &str) {
        self.printer.dedent().newline().write(token).indent().newline();
        self.start_of_line = true;
    }

    fn and_after_between(&mut self, token: &str) {
        self.printer.write(token);
        self.after_between = false;
        self.start_of_line = false;
    }

    fn logical(&mut self, token: &str, expression: LogicalExpression) {
        if expression == LogicalExpression::End {
            self.printer.dedent();
        }
        self.printer.newline().write(token);
        self.start_of_line = false;
    }

    fn whitespace(&mut self) {
        if !self.start_of_line {
            self.printer.space();
        }
    }

    fn other(&mut self, token: &str, lower: &str, last: Option<&str>) {
        if token == ";" {
            // a new statement follows: restart the layout from column zero
            self.printer.reset().newline();
            self.in_clause = false;
            self.join_on.close();
            self.after_between = false;
        }

        self.printer.write(token);
        if last == Some(DmlStatement::Insert.tag()) {
            self.printer.newline();
            self.start_of_line = true;
        } else {
            self.start_of_line = false;
            if lower == LogicalExpression::Case.tag() {
                self.printer.indent();
            }
        }

        if lower == Quantifier::Between.tag() {
            self.after_between = true;
        }
    }

    fn finish(self) -> String {
        self.printer.finish_trimmed()
    }
}
