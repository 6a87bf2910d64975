//! Leaf field generators.
//!
//! A leaf is looked up by name and converted through `FromEnv`:
//!
//! ```rust,ignore
//! #[env(var = "PORT", default = "8080")]
//! port: u16,
//! ```
//!
//! generates
//!
//! ```rust,ignore
//! __scope.leaf(
//!     &::envbind::FieldTags { field: "port", env: Some("PORT"), default: Some("8080") },
//!     &mut self.port,
//! )?;
//! ```
//!
//! A field whose type has no conversion still resolves its metadata and
//! lookup at runtime, then fails with an unsupported-type error carrying the
//! declared type name.

use proc_macro2::TokenStream as QuoteStream;
use quote::quote;
use syn::Ident;

use super::{FieldGenerator, field_tags};

/// A field bound through `FromEnv`.
pub struct LeafField {
    /// The struct field identifier.
    pub name: Ident,

    /// The identifier as reported in errors.
    pub field_name: String,

    /// Raw `var` metadata.
    pub var: Option<String>,

    /// Raw `default` metadata.
    pub default: Option<String>,
}

impl FieldGenerator for LeafField {
    fn generate_binding(&self) -> QuoteStream {
        let name = &self.name;
        let tags = field_tags(
            &self.field_name,
            self.var.as_deref(),
            self.default.as_deref(),
        );

        quote! {
            __scope.leaf(&#tags, &mut self.#name)?;
        }
    }
}

/// A field whose type has no known conversion.
pub struct UnsupportedField {
    /// The identifier as reported in errors.
    pub field_name: String,

    /// The declared type, for the error message.
    pub type_name: String,

    /// Raw `var` metadata.
    pub var: Option<String>,

    /// Raw `default` metadata.
    pub default: Option<String>,
}

impl FieldGenerator for UnsupportedField {
    fn generate_binding(&self) -> QuoteStream {
        let type_name = &self.type_name;
        let tags = field_tags(
            &self.field_name,
            self.var.as_deref(),
            self.default.as_deref(),
        );

        // The field itself is left untouched
        quote! {
            __scope.unsupported(&#tags, #type_name)?;
        }
    }
}
