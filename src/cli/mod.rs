//! CLI argument parsing and execution

use crate::config::{IndentKind, IndentStyle};
use crate::error::Result;
use clap::Parser;
use std::io::{self, Read};
use std::path::PathBuf;

/// sqlindent - Re-indent a SQL statement
#[derive(Parser, Debug)]
#[command(name = "sqlindent")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// SQL statement to format (use - for stdin)
    pub sql: String,

    /// Indent width per level
    #[arg(short, long, allow_negative_numbers = true)]
    pub indent: Option<i64>,

    /// Indent with tabs instead of spaces
    #[arg(long)]
    pub tabs: bool,

    /// JSON file with the default indentation style
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Exit with code 1 if the input (ignoring surrounding whitespace) is not already formatted
    #[arg(long)]
    pub check: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Outcome of a successful run
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Formatted SQL to print
    Formatted(String),
    /// Result of `--check`
    Checked { formatted: bool },
}

impl Cli {
    /// Resolve the indentation style: config file first, flags on top
    pub fn style(&self) -> Result<IndentStyle> {
        let mut style = match &self.config {
            Some(path) => IndentStyle::load(path)?,
            None => IndentStyle::default(),
        };
        if self.tabs {
            style = style.with_kind(IndentKind::Tab);
        }
        if let Some(width) = self.indent {
            style = style.with_width(width)?;
        }
        Ok(style)
    }

    /// Read the statement from the argument, or from stdin for `-`
    pub fn read_sql(&self) -> Result<String> {
        if self.sql == "-" {
            let mut contents = String::new();
            io::stdin().read_to_string(&mut contents)?;
            Ok(contents)
        } else {
            Ok(self.sql.clone())
        }
    }

    pub fn run(&self) -> Result<Outcome> {
        let style = self.style()?;
        let sql = self.read_sql()?;
        let formatted = crate::format_sql(&sql, &style);

        if self.check {
            Ok(Outcome::Checked {
                formatted: formatted == sql.trim(),
            })
        } else {
            Ok(Outcome::Formatted(formatted))
        }
    }
}
