//! Nested group generator.
//!
//! ```rust,ignore
//! #[env(prefix = "MONGO_")]
//! mongo: MongoConfig,
//! ```
//!
//! generates
//!
//! ```rust,ignore
//! __scope.nested("mongo", Some("MONGO_"), &mut self.mongo)?;
//! ```
//!
//! The nested type must implement `EnvBind`. Its variables are looked up
//! under the enclosing prefix followed by the fragment, and its errors come
//! back wrapped with this field's name.

use proc_macro2::TokenStream as QuoteStream;
use quote::quote_spanned;
use syn::spanned::Spanned;
use syn::{Ident, Type};

use super::{FieldGenerator, option_str};

/// A nested `EnvBind` struct.
pub struct NestedField {
    /// The struct field identifier.
    pub name: Ident,

    /// The identifier as reported in errors.
    pub field_name: String,

    /// The nested type, for error spans.
    pub ty: Type,

    /// Fragment appended to the enclosing prefix.
    pub prefix: Option<String>,
}

impl FieldGenerator for NestedField {
    fn generate_binding(&self) -> QuoteStream {
        let name = &self.name;
        let field_name = &self.field_name;
        let fragment = option_str(self.prefix.as_deref());

        // Point a missing `EnvBind` impl at the field type
        quote_spanned! {self.ty.span()=>
            __scope.nested(#field_name, #fragment, &mut self.#name)?;
        }
    }
}
