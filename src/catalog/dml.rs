//! DML keyword catalogs

use super::keyword_catalog;

keyword_catalog! {
    /// Keywords that begin a DML statement
    DmlStatement {
        Select = (0, "select"),
        Insert = (1, "insert"),
        Update = (2, "update"),
        Delete = (3, "delete"),
    }
}

keyword_catalog! {
    /// Qualifiers that open a sub-clause (`left join`, `order by`, ...)
    StartClause {
        Inner = (0, "inner"),
        Outer = (1, "outer"),
        Left = (2, "left"),
        Right = (3, "right"),
        Order = (4, "order"),
        Group = (5, "group"),
    }
}

keyword_catalog! {
    /// Keywords that complete a clause header and open its body
    EndClause {
        From = (0, "from"),
        Where = (1, "where"),
        Having = (2, "having"),
        Set = (3, "set"),
        By = (4, "by"),
        Union = (5, "union"),
        Join = (6, "join"),
        Into = (7, "into"),
        Values = (8, "values"),
        On = (9, "on"),
    }
}

keyword_catalog! {
    /// Boolean connectives and CASE block keywords
    LogicalExpression {
        When = (0, "when"),
        Else = (1, "else"),
        And = (2, "and"),
        Or = (3, "or"),
        End = (4, "end"),
        Case = (5, "case"),
    }
}

keyword_catalog! {
    /// Subquery and range quantifiers
    Quantifier {
        In = (0, "in"),
        All = (1, "all"),
        Exists = (2, "exists"),
        Any = (3, "any"),
        Some = (4, "some"),
        Between = (5, "between"),
    }
}

/// Whether `tag` is reserved by any catalog that rules out a function name
pub fn is_reserved(tag: &str) -> bool {
    LogicalExpression::contains(tag)
        || EndClause::contains(tag)
        || Quantifier::contains(tag)
        || DmlStatement::contains(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_tag() {
        assert_eq!(DmlStatement::from_tag("update"), Some(DmlStatement::Update));
        assert_eq!(EndClause::from_tag("values"), Some(EndClause::Values));
        assert_eq!(Quantifier::from_tag("between"), Some(Quantifier::Between));
        assert_eq!(StartClause::from_tag("from"), None);
    }

    #[test]
    fn lookup_is_case_sensitive_on_lowercase_form() {
        assert!(!DmlStatement::contains("SELECT"));
        assert!(DmlStatement::contains("select"));
    }

    #[test]
    fn codes_follow_declaration_order() {
        for (i, clause) in EndClause::ALL.iter().enumerate() {
            assert_eq!(clause.code() as usize, i);
        }
    }

    #[test]
    fn start_clauses_are_not_reserved() {
        for clause in StartClause::ALL {
            assert!(!is_reserved(clause.tag()), "{clause}");
        }
        assert!(is_reserved("exists"));
        assert!(is_reserved("on"));
    }
}
