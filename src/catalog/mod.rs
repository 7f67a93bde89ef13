//! Keyword catalogs
//!
//! Every catalog is a fixed enumeration of `(code, tag)` pairs where the tag
//! is the canonical lowercase keyword text. Lookups take the lowercase form
//! of a token. The same text may appear in more than one catalog (`on` is
//! both a DML clause terminator and a DDL break keyword); callers decide
//! which catalog wins by the order they test them in.

pub mod ddl;
pub mod dml;

/// Defines a keyword catalog enum with `code`, `tag`, `from_tag` and `contains`.
macro_rules! keyword_catalog {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident = ($code:literal, $tag:literal)),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// All entries in code order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Numeric code of the entry
            pub fn code(self) -> u8 {
                match self {
                    $($name::$variant => $code),+
                }
            }

            /// Canonical lowercase keyword text
            pub fn tag(self) -> &'static str {
                match self {
                    $($name::$variant => $tag),+
                }
            }

            /// Look up an entry by its lowercase keyword text
            pub fn from_tag(tag: &str) -> Option<Self> {
                match tag {
                    $($tag => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// Whether the lowercase text is one of this catalog's keywords
            pub fn contains(tag: &str) -> bool {
                Self::from_tag(tag).is_some()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.tag())
            }
        }
    };
}

pub(crate) use keyword_catalog;
