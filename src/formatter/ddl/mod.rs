//! DDL formatters
//!
//! CREATE TABLE, ALTER TABLE and COMMENT ON each get a small dedicated
//! layout routine. CREATE DATABASE and DROP are recognized but have no
//! layout rules, so they come back trimmed and otherwise untouched.

pub mod alter_table;
pub mod comment_on;
pub mod create_table;

use crate::catalog::ddl::DdlStatement;
use crate::config::IndentStyle;

/// Format a DDL statement whose leading keywords were already classified
pub fn format_ddl(sql: &str, statement: DdlStatement, style: &IndentStyle) -> String {
    match statement {
        DdlStatement::CreateTable => create_table::format_create_table(sql, style),
        DdlStatement::AlterTable => alter_table::format_alter_table(sql, style),
        DdlStatement::CommentOn => comment_on::format_comment_on(sql, style),
        DdlStatement::CreateDatabase | DdlStatement::Drop => sql.trim().to_string(),
    }
}
