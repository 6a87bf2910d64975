//! Per-field binding metadata.
//!
//! [`FieldTags`] is the raw metadata attached to a leaf field, as written in
//! `#[env(var = "...", default = "...")]`. [`FieldSpec`] is what the binder
//! derives from it when the field is reached: the variable name, the default,
//! and whether the field is required.
//!
//! # The `var` Syntax
//!
//! | Metadata | Name | Explicitly required |
//! |----------|------|---------------------|
//! | `"PORT"` | `PORT` | no |
//! | `"PORT,required"` | `PORT` | yes |
//! | `"required,PORT"` | `PORT` | yes |
//! | `"A,B"` | error | |
//! | `"A,B,C"` | error | |
//!
//! A field is required when it is explicitly marked so, or when it has no
//! default. An empty default counts as no default.

use crate::Error;

/// Literal marking a field as explicitly required.
pub const REQUIRED_MARKER: &str = "required";

/// Maximum number of comma-separated parts in `var` metadata.
pub const MAX_TAG_PARTS: usize = 2;

/// Raw metadata of one leaf field.
///
/// The derive emits one of these per leaf. Hand-written
/// [`EnvBind`](crate::EnvBind) impls build them with the const builder:
///
/// ```
/// use envbind::FieldTags;
///
/// const PORT: FieldTags<'static> = FieldTags::new("port")
///     .env("PORT")
///     .default_value("8080");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldTags<'a> {
    /// The struct field identifier, used in error messages.
    pub field: &'a str,

    /// The `var` metadata, if any.
    pub env: Option<&'a str>,

    /// The `default` metadata, if any.
    pub default: Option<&'a str>,
}

impl<'a> FieldTags<'a> {
    /// Creates tags for `field` with no metadata.
    #[must_use]
    pub const fn new(field: &'a str) -> Self {
        Self {
            field,
            env: None,
            default: None,
        }
    }

    /// Sets the `var` metadata.
    #[must_use]
    pub const fn env(mut self, env: &'a str) -> Self {
        self.env = Some(env);
        self
    }

    /// Sets the `default` metadata.
    #[must_use]
    pub const fn default_value(mut self, default: &'a str) -> Self {
        self.default = Some(default);
        self
    }
}

/// The resolved binding rules of a leaf field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldSpec<'a> {
    name: &'a str,
    default: Option<&'a str>,
    required: bool,
}

impl<'a> FieldSpec<'a> {
    /// Resolves the binding rules from raw metadata.
    ///
    /// # Errors
    ///
    /// - [`Error::NotProcessable`] when there is no `var` metadata.
    /// - [`Error::UnknownTagValue`] when `var` has more than two parts, or two
    ///   parts of which neither is `required`.
    pub fn resolve(tags: &FieldTags<'a>) -> Result<Self, Error> {
        let Some(env) = tags.env else {
            return Err(Error::NotProcessable {
                field: tags.field.to_string(),
            });
        };

        let unknown = || Error::UnknownTagValue {
            field: tags.field.to_string(),
            tag: env.to_string(),
        };

        let parts: Vec<&'a str> = env.split(',').collect();
        if parts.len() > MAX_TAG_PARTS {
            return Err(unknown());
        }

        let (name, required) = match parts.as_slice() {
            [name] => (*name, false),
            [marker, name] if *marker == REQUIRED_MARKER => (*name, true),
            [name, marker] if *marker == REQUIRED_MARKER => (*name, true),
            _ => return Err(unknown()),
        };

        Ok(Self {
            name,
            default: tags.default,
            required,
        })
    }

    /// The variable name, without prefixes.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// The default value, verbatim.
    #[must_use]
    pub const fn default(&self) -> Option<&'a str> {
        self.default
    }

    /// Whether the field was explicitly marked `required`.
    #[must_use]
    pub const fn is_marked_required(&self) -> bool {
        self.required
    }

    /// Whether a missing variable is an error: explicitly required, or no
    /// usable default.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required || self.default.is_none_or(str::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn spec(env: &'static str) -> Result<FieldSpec<'static>, Error> {
        FieldSpec::resolve(&FieldTags::new("f").env(env).default_value("x"))
    }

    #[test]
    fn test_bare_name() {
        let spec = spec("PORT").unwrap();
        assert_eq!(spec.name(), "PORT");
        assert!(!spec.is_marked_required());
        assert!(!spec.is_required());
    }

    #[test]
    fn test_required_marker_either_order() {
        for env in ["PORT,required", "required,PORT"] {
            let spec = spec(env).unwrap();
            assert_eq!(spec.name(), "PORT");
            assert!(spec.is_marked_required());
            assert!(spec.is_required());
        }
    }

    #[test]
    fn test_required_twice_names_required() {
        let spec = spec("required,required").unwrap();
        assert_eq!(spec.name(), "required");
        assert!(spec.is_required());
    }

    #[test]
    fn test_unknown_tag_values() {
        for env in ["A,B", "A,B,C", "PORT,required,x", "PORT,Required", ",,"] {
            let err = spec(env).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnknownTagValue, "{env}");
        }
    }

    #[test]
    fn test_missing_env_is_not_processable() {
        let err = FieldSpec::resolve(&FieldTags::new("port").default_value("1")).unwrap_err();

        assert!(matches!(err, Error::NotProcessable { ref field } if field == "port"));
    }

    #[test]
    fn test_required_invariant() {
        let with_default = FieldSpec::resolve(&FieldTags::new("f").env("A").default_value("yes"));
        assert!(!with_default.unwrap().is_required());

        let no_default = FieldSpec::resolve(&FieldTags::new("f").env("A"));
        assert!(no_default.unwrap().is_required());

        let empty_default = FieldSpec::resolve(&FieldTags::new("f").env("A").default_value(""));
        assert!(empty_default.unwrap().is_required());

        let marked = FieldSpec::resolve(&FieldTags::new("f").env("A,required").default_value("yes"));
        assert!(marked.unwrap().is_required());
    }

    #[test]
    fn test_empty_name_is_accepted() {
        let spec = spec("").unwrap();
        assert_eq!(spec.name(), "");
    }
}
