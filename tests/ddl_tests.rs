//! DDL formatting tests for sqlindent
//!
//! CREATE TABLE, ALTER TABLE and COMMENT ON layouts.

use pretty_assertions::assert_eq;
use sqlindent::{format, format_with_indent};

fn assert_formats_to(input: &str, expected: &str) {
    assert_eq!(format(input), expected);
}

mod create_table {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn one_column_per_line() {
        assert_formats_to(
            "create table users (id int primary key, name varchar(255) not null, price decimal(10, 2))",
            "create table users (
    id int primary key,
    name varchar(255) not null,
    price decimal(10, 2)
)",
        );
    }

    #[test]
    fn keyword_case_is_preserved() {
        assert_formats_to("CREATE TABLE T (A INT)", "CREATE TABLE T (\n    A INT\n)");
    }

    #[test]
    fn trailing_semicolon_stays_attached() {
        assert_formats_to("create table t (a int, b int);", "create table t (\n    a int,\n    b int\n);");
    }

    #[test]
    fn indent_width_applies() {
        assert_eq!(
            format_with_indent("create table t (a int, b int)", 2).unwrap(),
            "create table t (\n  a int,\n  b int\n)"
        );
    }

    #[test]
    fn reformatting_is_stable() {
        let once = format("create table t (a int, b varchar(10), c decimal(4, 1))");
        assert_eq!(format(&once), once);
    }
}

mod alter_table {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn add_column() {
        assert_formats_to(
            "alter table users add column email varchar(100)",
            "alter table users
add
    column
    email varchar(100)",
        );
    }

    #[test]
    fn drop_column_keeps_drop_inline() {
        assert_formats_to(
            "alter table users drop column email",
            "alter table users
drop column
    email",
        );
    }

    #[test]
    fn rename_keeps_operand_inline() {
        assert_formats_to(
            "alter table users rename to members",
            "alter table users\nrename to members",
        );
    }

    #[test]
    fn foreign_key_constraint() {
        assert_formats_to(
            "alter table o add constraint fk foreign key (uid) references users (id)",
            "alter table o
add
    constraint fk
foreign
    key (uid)
references
    users (id)",
        );
    }

    #[test]
    fn reformatting_is_stable() {
        let once = format("alter table users add column email varchar(100)");
        assert_eq!(format(&once), once);
    }
}

mod comment_on {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn column_comment() {
        assert_formats_to(
            "comment on column users.name is 'User name'",
            "comment on
column
    users.name
is
    'User name'",
        );
    }

    #[test]
    fn table_comment() {
        assert_formats_to(
            "comment on table users is 'People, and more'",
            "comment on table users\nis\n    'People, and more'",
        );
    }

    #[test]
    fn reformatting_is_stable() {
        let once = format("comment on column users.name is 'User name'");
        assert_eq!(format(&once), once);
    }
}
