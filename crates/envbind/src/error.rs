//! Error types for environment binding.
//!
//! This module contains the [`Error`] enum returned by every bind operation,
//! integrated with [`miette`] for rich diagnostics.
//!
//! # Error Variants
//!
//! | Variant | When It Occurs |
//! |---------|----------------|
//! | [`Error::NotProcessable`] | Leaf field has no `var` metadata |
//! | [`Error::UnknownTagValue`] | `var` metadata is not `NAME` or `NAME,required` |
//! | [`Error::MissingRequired`] | Required variable not set and no usable default |
//! | [`Error::UnsupportedType`] | Field type has no known conversion |
//! | [`Error::Parse`] | Value failed to convert to the field's type |
//! | [`Error::InvalidUtf8`] | Variable contains non-UTF-8 bytes |
//! | [`Error::Nested`] | Any of the above, raised inside a nested group |
//!
//! # Fail-Fast
//!
//! Binding stops at the first error. Failures inside a nested group are
//! wrapped once per level in [`Error::Nested`], so the offending field can be
//! located without reading the struct definition:
//!
//! ```rust,ignore
//! match binder.parse(&mut config) {
//!     Ok(()) => { /* use config */ }
//!     Err(e) => {
//!         eprintln!("{} (at {})", e.kind(), e.field_path().join("."));
//!     }
//! }
//! ```

use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};

use miette::Diagnostic;
use thiserror::Error as ThisError;

use crate::convert::Target;

/// Boxed conversion error carried by [`Error::Parse`].
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Errors that can occur while binding environment variables into a struct.
#[derive(Debug, ThisError, Diagnostic)]
pub enum Error {
    /// A leaf field carries no lookup-name metadata.
    #[error("field `{field}` is not processable: missing `var` metadata")]
    #[diagnostic(
        code(envbind::not_processable),
        help(
            "give the field a variable name with #[env(var = \"NAME\")]; \
             if it is a struct of more settings, mark it #[env(nested)] or #[env(prefix = \"...\")]"
        )
    )]
    NotProcessable {
        /// The struct field identifier.
        field: String,
    },

    /// The lookup-name metadata has an unrecognised shape.
    #[error("unknown tag value on field `{field}`: var = {tag:?}")]
    #[diagnostic(
        code(envbind::unknown_tag_value),
        help("use \"NAME\", \"NAME,required\" or \"required,NAME\"")
    )]
    UnknownTagValue {
        /// The struct field identifier.
        field: String,

        /// The raw metadata string.
        tag: String,
    },

    /// A required variable was not set.
    #[error("missing required variable: {name:?}")]
    #[diagnostic(code(envbind::missing_required), severity(Error))]
    MissingRequired {
        /// The struct field identifier.
        field: String,

        /// The declared variable name, without prefixes.
        name: String,

        /// The full variable name that was looked up.
        var: String,

        /// Help line naming the variable to set.
        #[help]
        help: String,
    },

    /// The field's type has no known conversion from a string.
    #[error("{name}: unsupported variable type: {type_name}:{value:?}")]
    #[diagnostic(
        code(envbind::unsupported_type),
        help("use a primitive, String or Duration field, or implement FromEnv and mark the field `from_env`")
    )]
    UnsupportedType {
        /// The struct field identifier.
        field: String,

        /// The declared variable name, without prefixes.
        name: String,

        /// The field's type as written in the struct.
        type_name: String,

        /// The value that would have been converted.
        value: String,
    },

    /// A value could not be converted into the field's type.
    #[error("{name}: failed to parse {value:?} as {expected}")]
    #[diagnostic(code(envbind::parse_error))]
    Parse {
        /// The struct field identifier.
        field: String,

        /// The declared variable name, without prefixes.
        name: String,

        /// The full variable name that was looked up.
        var: String,

        /// The raw value, either from the environment or the default.
        value: String,

        /// The conversion target of the field.
        expected: Target,

        /// Help line describing the expected syntax.
        #[help]
        help: String,

        /// The underlying converter error.
        #[source]
        source: BoxError,
    },

    /// A variable is set but is not valid UTF-8.
    #[error("environment variable {var} contains invalid UTF-8")]
    #[diagnostic(
        code(envbind::invalid_utf8),
        help("ensure the variable contains valid UTF-8 text")
    )]
    InvalidUtf8 {
        /// The full variable name that was looked up.
        var: String,
    },

    /// A nested group failed to bind.
    #[error("failed to bind nested group `{field}`")]
    #[diagnostic(code(envbind::nested))]
    Nested {
        /// The struct field holding the nested group.
        field: String,

        /// The error raised inside the group.
        #[source]
        source: Box<Error>,
    },
}

/// The root category of an [`Error`], seen through any [`Error::Nested`] wrappers.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// See [`Error::NotProcessable`].
    NotProcessable,
    /// See [`Error::UnknownTagValue`].
    UnknownTagValue,
    /// See [`Error::MissingRequired`].
    MissingRequired,
    /// See [`Error::UnsupportedType`].
    UnsupportedType,
    /// See [`Error::Parse`].
    Parse,
    /// See [`Error::InvalidUtf8`].
    InvalidUtf8,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NotProcessable => "not processable, missing required tags",
            Self::UnknownTagValue => "unknown tag value",
            Self::MissingRequired => "missing required variable",
            Self::UnsupportedType => "unsupported variable type",
            Self::Parse => "invalid variable value",
            Self::InvalidUtf8 => "invalid UTF-8",
        };

        f.write_str(text)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Constructor helpers
// ─────────────────────────────────────────────────────────────────────────────

impl Error {
    /// Creates a `MissingRequired` error with a standard help message.
    pub fn missing_required(
        field: impl Into<String>,
        name: impl Into<String>,
        var: impl Into<String>,
    ) -> Self {
        let var = var.into();
        let help = format!("set {var} in your environment");
        Self::MissingRequired {
            field: field.into(),
            name: name.into(),
            var,
            help,
        }
    }

    /// Creates a `Parse` error with help text derived from the target.
    pub fn parse(
        field: impl Into<String>,
        name: impl Into<String>,
        var: impl Into<String>,
        value: impl Into<String>,
        expected: Target,
        source: BoxError,
    ) -> Self {
        Self::Parse {
            field: field.into(),
            name: name.into(),
            var: var.into(),
            value: value.into(),
            expected,
            help: format!("expected {}", expected.syntax_hint()),
            source,
        }
    }

    /// Wraps an error raised inside the nested group stored in `field`.
    pub fn nested(field: impl Into<String>, source: Self) -> Self {
        Self::Nested {
            field: field.into(),
            source: Box::new(source),
        }
    }

    /// Returns the root category of this error.
    ///
    /// Nested wrappers are transparent, so a missing variable three groups
    /// deep still reports [`ErrorKind::MissingRequired`].
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotProcessable { .. } => ErrorKind::NotProcessable,
            Self::UnknownTagValue { .. } => ErrorKind::UnknownTagValue,
            Self::MissingRequired { .. } => ErrorKind::MissingRequired,
            Self::UnsupportedType { .. } => ErrorKind::UnsupportedType,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::InvalidUtf8 { .. } => ErrorKind::InvalidUtf8,
            Self::Nested { source, .. } => source.kind(),
        }
    }

    /// Returns the innermost error, skipping [`Error::Nested`] wrappers.
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::Nested { source, .. } => source.root(),
            other => other,
        }
    }

    /// Returns the chain of struct field names leading to the failure,
    /// outermost first. `InvalidUtf8` contributes no leaf entry since it is
    /// raised by the lookup rather than by a field.
    #[must_use]
    pub fn field_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        let mut current = self;

        loop {
            match current {
                Self::Nested { field, source } => {
                    path.push(field.as_str());
                    current = source.as_ref();
                }

                Self::NotProcessable { field }
                | Self::UnknownTagValue { field, .. }
                | Self::MissingRequired { field, .. }
                | Self::UnsupportedType { field, .. }
                | Self::Parse { field, .. } => {
                    path.push(field.as_str());
                    return path;
                }

                Self::InvalidUtf8 { .. } => return path,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic_codes;

    #[test]
    fn test_missing_required_display() {
        let err = Error::missing_required("name", "NAME", "APP_NAME");
        let display = err.to_string();

        assert!(display.contains("\"NAME\""));
        assert!(display.contains("missing required"));

        if let Error::MissingRequired { help, .. } = &err {
            assert!(help.contains("APP_NAME"));
        } else {
            panic!("Expected MissingRequired variant");
        }
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let err = Error::parse(
            "port",
            "PORT",
            "PORT",
            "abc",
            Target::U16,
            Box::new(std::fmt::Error),
        );

        assert!(err.to_string().contains("\"abc\""));
        assert!(err.to_string().contains("u16"));
        assert!(StdError::source(&err).is_some());
    }

    #[test]
    fn test_kind_sees_through_nesting() {
        let inner = Error::missing_required("host", "HOST", "APP_DB_HOST");
        let err = Error::nested("outer", Error::nested("db", inner));

        assert_eq!(err.kind(), ErrorKind::MissingRequired);
        assert!(matches!(err.root(), Error::MissingRequired { .. }));
        assert_eq!(err.field_path(), vec!["outer", "db", "host"]);
    }

    #[test]
    fn test_invalid_utf8_has_empty_leaf() {
        let err = Error::nested("db", Error::InvalidUtf8 { var: "X".into() });

        assert_eq!(err.field_path(), vec!["db"]);
        assert_eq!(err.kind(), ErrorKind::InvalidUtf8);
    }

    #[test]
    fn test_diagnostic_codes_match_registry() {
        let err = Error::NotProcessable {
            field: "x".into(),
        };
        let code = err.code().map(|c| c.to_string());

        assert_eq!(code.as_deref(), Some(diagnostic_codes::NOT_PROCESSABLE));

        let err = Error::nested("g", err);
        let code = err.code().map(|c| c.to_string());

        assert_eq!(code.as_deref(), Some(diagnostic_codes::NESTED));
    }

    #[test]
    fn test_not_processable_help_names_both_fixes() {
        let err = Error::NotProcessable {
            field: "db".into(),
        };
        let help = err.help().map(|h| h.to_string()).unwrap_or_default();

        assert!(help.contains("#[env(var = \"NAME\")]"));
        assert!(help.contains("#[env(nested)]"));
        assert!(help.contains("#[env(prefix"));
    }
}
