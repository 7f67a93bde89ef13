//! Indentation style configuration
//!
//! The default style is four spaces. A style can also be read from a small
//! JSON document:
//!
//! ```json
//! { "indentType": "tab", "indent": 1 }
//! ```
//!
//! Both keys are optional. Once built, a style is read-only and is passed by
//! reference to every formatting call.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default number of indent characters per level
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Character used for one indent step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentKind {
    #[default]
    Space,
    Tab,
}

impl IndentKind {
    pub fn as_char(self) -> char {
        match self {
            IndentKind::Space => ' ',
            IndentKind::Tab => '\t',
        }
    }
}

/// How one indentation level is rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentStyle {
    kind: IndentKind,
    width: usize,
}

impl IndentStyle {
    /// Build a style, rejecting negative widths
    pub fn new(kind: IndentKind, width: i64) -> Result<Self> {
        let width = usize::try_from(width).map_err(|_| Error::InvalidIndent { width })?;
        Ok(Self { kind, width })
    }

    /// Space-indented style of the given width
    pub fn spaces(width: i64) -> Result<Self> {
        Self::new(IndentKind::Space, width)
    }

    /// Tab-indented style of the given width
    pub fn tabs(width: i64) -> Result<Self> {
        Self::new(IndentKind::Tab, width)
    }

    pub fn kind(&self) -> IndentKind {
        self.kind
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Same style with a different width
    pub fn with_width(&self, width: i64) -> Result<Self> {
        Self::new(self.kind, width)
    }

    /// Same style with a different indent character
    pub fn with_kind(&self, kind: IndentKind) -> Self {
        Self { kind, width: self.width }
    }

    /// The literal text repeated once per indentation level
    pub fn unit(&self) -> String {
        self.kind.as_char().to_string().repeat(self.width)
    }

    /// Parse a style from a JSON config document
    pub fn from_json_str(input: &str) -> Result<Self> {
        let raw: RawIndentConfig = serde_json::from_str(input)?;
        let default = Self::default();
        let kind = raw.indent_type.unwrap_or(default.kind);
        let width = raw.indent.unwrap_or(default.width as i64);
        Self::new(kind, width)
    }

    /// Read and parse a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let style = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.display(), ?style, "loaded indent config");
        Ok(style)
    }
}

impl Default for IndentStyle {
    fn default() -> Self {
        Self {
            kind: IndentKind::Space,
            width: DEFAULT_INDENT_WIDTH,
        }
    }
}

/// On-disk shape of the config document
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawIndentConfig {
    indent_type: Option<IndentKind>,
    indent: Option<i64>,
}
