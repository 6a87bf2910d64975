//! Registry of the diagnostic codes attached to [`Error`](crate::Error).
//!
//! `#[diagnostic(code(...))]` requires literal paths, so these constants
//! mirror those literals for programmatic matching:
//!
//! ```rust,ignore
//! use miette::Diagnostic;
//! use envbind::diagnostic_codes;
//!
//! if err.code().map(|c| c.to_string()).as_deref() == Some(diagnostic_codes::MISSING_REQUIRED) {
//!     eprintln!("a required variable is missing");
//! }
//! ```

/// Leaf field without `var` metadata.
pub const NOT_PROCESSABLE: &str = "envbind::not_processable";

/// Malformed `var` metadata.
pub const UNKNOWN_TAG_VALUE: &str = "envbind::unknown_tag_value";

/// Required variable not set.
pub const MISSING_REQUIRED: &str = "envbind::missing_required";

/// Field type has no conversion.
pub const UNSUPPORTED_TYPE: &str = "envbind::unsupported_type";

/// Value failed to convert.
pub const PARSE_ERROR: &str = "envbind::parse_error";

/// Variable contains invalid UTF-8.
pub const INVALID_UTF8: &str = "envbind::invalid_utf8";

/// Failure inside a nested group.
pub const NESTED: &str = "envbind::nested";
