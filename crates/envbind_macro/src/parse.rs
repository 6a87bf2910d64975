//! Attribute parsing for `#[env(var = "NAME", default = "value", prefix = "FRAG_")]`.
//!
//! Parsing happens in two phases:
//!
//! 1. **Accumulation**: [`Parser::parse_meta()`] collects options one at a time
//!    through syn's `ParseNestedMeta`, rejecting unknown and duplicate options
//!    at their exact span.
//! 2. **Validation**: [`Parser::build()`] checks option combinations and
//!    produces a [`FieldConfig`].
//!
//! The string values are not interpreted here. `var = "A,B,C"` is accepted and
//! reported by the runtime when the field is bound.
//!
//! # Supported Syntax
//!
//! ```ignore
//! #[env(var = "PORT")]                       // Leaf, required unless defaulted
//! #[env(var = "PORT,required")]              // Leaf, always required
//! #[env(var = "PORT", default = "8080")]     // Leaf with default
//! #[env(var = "LEVEL", from_env)]            // Leaf of a user FromEnv type
//! #[env(nested)]                             // Nested group, same prefix
//! #[env(prefix = "DB_")]                     // Nested group, extended prefix
//! #[env(nested, prefix = "DB_")]             // Same as above
//! ```
//!
//! Several `#[env(...)]` attributes on one field are merged, so a duplicate
//! option is detected across attributes too.

use std::collections::HashSet;

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Error as SynError, Field, LitStr, Result as SynResult};

/// How a field is bound, as written in its attributes.
pub enum FieldConfig {
    /// A leaf field looked up by name.
    Leaf {
        /// Raw `var` metadata, passed to the runtime verbatim.
        var: Option<String>,

        /// Raw `default` metadata.
        default: Option<String>,

        /// Skip type classification and bind through `FromEnv`.
        from_env: bool,
    },

    /// A nested `EnvBind` struct.
    Nested {
        /// Fragment appended to the enclosing prefix.
        prefix: Option<String>,
    },
}

impl FieldConfig {
    /// The configuration of a field with no `#[env(...)]` attribute.
    const fn bare() -> Self {
        Self::Leaf {
            var: None,
            default: None,
            from_env: false,
        }
    }
}

/// Builder for [`FieldConfig`], fed one option at a time.
#[derive(Default)]
pub struct Parser {
    /// From `var = "..."`.
    var: Option<String>,

    /// From `default = "..."`.
    default: Option<String>,

    /// From `prefix = "..."`.
    prefix: Option<String>,

    /// Whether `nested` was seen.
    nested: bool,

    /// Whether `from_env` was seen.
    from_env: bool,

    /// Options seen so far, for duplicate detection.
    ///
    /// Keys are mapped to `&'static str` in `parse_meta()`, so inserting
    /// does not allocate.
    seen: HashSet<&'static str>,
}

impl Parser {
    /// Parse a single option from within the attribute.
    ///
    /// `#[env(var = "X", default = "1")]` calls this twice.
    #[expect(
        clippy::needless_pass_by_value,
        reason = "ParseNestedMeta is passed by value per syn's parse_nested_meta callback signature"
    )]
    fn parse_meta(&mut self, meta: ParseNestedMeta) -> SynResult<()> {
        let ident = meta
            .path
            .get_ident()
            .ok_or_else(|| meta.error("Expected identifier"))?;
        let name = ident.to_string();

        let key: &'static str = match name.as_str() {
            "var" => "var",
            "default" => "default",
            "prefix" => "prefix",
            "nested" => "nested",
            "from_env" => "from_env",
            _ => {
                return Err(meta.error(format!(
                    "Unknown option `{name}`; expected one of `var`, `default`, `prefix`, `nested`, `from_env`"
                )));
            }
        };

        if !self.seen.insert(key) {
            return Err(meta.error(format!("Duplicate option: `{key}`")));
        }

        match key {
            "var" => {
                let lit: LitStr = meta.value()?.parse()?;
                self.var = Some(lit.value());
            }

            "default" => {
                let lit: LitStr = meta.value()?.parse()?;
                self.default = Some(lit.value());
            }

            "prefix" => {
                let lit: LitStr = meta.value()?.parse()?;
                self.prefix = Some(lit.value());
            }

            "nested" => self.nested = true,

            "from_env" => self.from_env = true,

            _ => unreachable!("key is one of the options matched above"),
        }

        Ok(())
    }

    /// Validate option combinations and build the field configuration.
    ///
    /// A nested group is bound by its own fields, so every leaf option on it
    /// is reported, all in one error.
    fn build(self, attr: &Attribute) -> SynResult<FieldConfig> {
        if self.nested || self.prefix.is_some() {
            let incompatible: Vec<&str> = [
                self.var.is_some().then_some("var"),
                self.default.is_some().then_some("default"),
                self.from_env.then_some("from_env"),
            ]
            .into_iter()
            .flatten()
            .collect();

            if !incompatible.is_empty() {
                let group = if self.nested { "nested" } else { "prefix" };

                return Err(SynError::new_spanned(
                    attr,
                    format!(
                        "Cannot use `{}` with `{group}`",
                        incompatible.join("`, `")
                    ),
                ));
            }

            return Ok(FieldConfig::Nested {
                prefix: self.prefix,
            });
        }

        Ok(FieldConfig::Leaf {
            var: self.var,
            default: self.default,
            from_env: self.from_env,
        })
    }

    /// Parse every `#[env(...)]` attribute of a field into one configuration.
    ///
    /// Fields without the attribute are leaves with no metadata.
    pub fn parse_field_config(field: &Field) -> SynResult<FieldConfig> {
        let mut builder = Self::default();
        let mut last = None;

        for attr in &field.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            attr.parse_nested_meta(|meta: ParseNestedMeta<'_>| builder.parse_meta(meta))?;
            last = Some(attr);
        }

        match last {
            Some(attr) => builder.build(attr),
            None => Ok(FieldConfig::bare()),
        }
    }
}
