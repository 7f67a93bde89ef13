//! DDL keyword catalogs

use super::keyword_catalog;

keyword_catalog! {
    /// Leading statement shapes recognized by the DDL dispatcher
    DdlStatement {
        CreateTable = (0, "create table"),
        AlterTable = (1, "alter table"),
        CommentOn = (2, "comment on"),
        CreateDatabase = (3, "create database"),
        Drop = (4, "drop"),
    }
}

keyword_catalog! {
    /// ALTER TABLE actions that start a new line
    AlterAction {
        Add = (0, "add"),
        Column = (1, "column"),
        Modify = (2, "modify"),
        Rename = (3, "rename"),
        Change = (4, "change"),
        On = (5, "on"),
        Drop = (6, "drop"),
    }
}

keyword_catalog! {
    /// Constraint keywords that start a new line inside ALTER TABLE
    Constraint {
        Foreign = (0, "foreign"),
        References = (1, "references"),
    }
}

keyword_catalog! {
    /// COMMENT ON keywords that start a new line
    CommentClause {
        Column = (0, "column"),
        Is = (1, "is"),
    }
}
