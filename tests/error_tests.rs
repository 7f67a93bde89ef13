//! Error handling tests for sqlindent
//!
//! Rejected arguments, config failures, and malformed SQL that must still
//! format without failing.

use sqlindent::{format, format_with_indent, Error, IndentStyle};
use std::fs;
use tempfile::TempDir;

mod invalid_arguments {
    use super::*;

    #[test]
    fn negative_indent() {
        let err = format_with_indent("select a from t", -1).unwrap_err();
        assert!(matches!(err, Error::InvalidIndent { width: -1 }));
    }

    #[test]
    fn negative_indent_rejected_even_for_empty_input() {
        assert!(format_with_indent("", -2).is_err());
    }

    #[test]
    fn zero_indent_is_accepted() {
        assert!(format_with_indent("select a from t", 0).is_ok());
    }

    #[test]
    fn error_message() {
        let err = Error::InvalidIndent { width: -4 };
        assert_eq!(err.to_string(), "indent width must not be negative, got -4");
    }
}

mod config_errors {
    use super::*;

    #[test]
    fn missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = IndentStyle::load(&temp.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::IoError(_)));
    }

    #[test]
    fn malformed_json_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("indent.json");
        fs::write(&path, "{ indent: 2 ").unwrap();
        let err = IndentStyle::load(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigError { .. }));
    }

    #[test]
    fn unknown_key_is_config_error() {
        let err = IndentStyle::from_json_str(r#"{"width": 2}"#).unwrap_err();
        assert!(matches!(err, Error::ConfigError { .. }));
    }

    #[test]
    fn negative_width_in_file_is_invalid_indent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("indent.json");
        fs::write(&path, r#"{"indentType": "space", "indent": -8}"#).unwrap();
        let err = IndentStyle::load(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidIndent { width: -8 }));
    }
}

mod malformed_sql {
    use super::*;

    fn strip_whitespace(s: &str) -> String {
        s.chars().filter(|c| !c.is_whitespace()).collect()
    }

    fn assert_best_effort(sql: &str) {
        let formatted = format(sql);
        assert_eq!(strip_whitespace(&formatted), strip_whitespace(sql), "{formatted}");
    }

    #[test]
    fn unclosed_parenthesis() {
        assert_best_effort("select (a + b from t");
    }

    #[test]
    fn extra_closing_parenthesis() {
        assert_best_effort("select a) from t))");
    }

    #[test]
    fn extra_closing_parenthesis_renders_at_margin() {
        assert_eq!(format("select a) from t"), "select\n    a\n)\nfrom\nt");
    }

    #[test]
    fn unclosed_string() {
        assert_eq!(format("select 'unclosed string from t"), "select\n    'unclosed string from t");
    }

    #[test]
    fn unbalanced_case() {
        assert_best_effort("select end end end from t");
    }

    #[test]
    fn truncated_statement() {
        assert_eq!(format("select"), "select");
        assert_eq!(format("insert"), "insert");
    }

    #[test]
    fn malformed_ddl() {
        assert_best_effort("create table t ((a int");
        assert_best_effort("create table t a int))");
        assert_best_effort("comment on column 'x");
    }
}
