//! Field classification and code generation.
//!
//! Each named field becomes one statement in the generated `bind` body. The
//! statement depends on the field's attributes and declared type:
//!
//! | Generator | Selected When | Emits |
//! |-----------|---------------|-------|
//! | [`NestedField`] | `nested` or `prefix` | `__scope.nested(..)` |
//! | [`LeafField`] | known leaf type, or `from_env` | `__scope.leaf(..)` |
//! | [`UnsupportedField`] | any other type | `__scope.unsupported(..)` |
//!
//! ```text
//! ┌─────────────────┐
//! │   syn::Field    │
//! └────────┬────────┘
//!          ▼
//! ┌─────────────────┐
//! │  FieldFactory   │  attributes + type classification
//! └────────┬────────┘
//!          │  Box<dyn FieldGenerator>
//!          ▼
//! ┌─────────────────┐
//! │ generate_binding│  one statement, in declaration order
//! └─────────────────┘
//! ```
//!
//! Type classification is syntactic: the last path segment of the declared
//! type is compared against the known leaf names. A type alias to `u16` is
//! therefore unsupported unless the field is marked `from_env`.

use proc_macro2::TokenStream as QuoteStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Error as SynError, Field, PathArguments, Result as SynResult, Type};

use crate::parse::{FieldConfig, Parser};

mod leaf;
mod nested;

pub use leaf::{LeafField, UnsupportedField};
pub use nested::NestedField;

/// Leaf type names with a built-in `FromEnv` impl.
const KNOWN_LEAF_TYPES: &[&str] = &[
    "i8", "i16", "i32", "i64", "isize", "u8", "u16", "u32", "u64", "usize", "f32", "f64",
    "bool", "String", "Duration",
];

/// Code generation for one struct field.
pub trait FieldGenerator {
    /// Generate the statement that binds this field.
    ///
    /// The statement runs inside `bind(&mut self, __scope)` and propagates
    /// errors with `?`.
    fn generate_binding(&self) -> QuoteStream;
}

/// Creates the [`FieldGenerator`] for a field.
pub struct FieldFactory;

impl FieldFactory {
    /// Parse a named field and pick its generator.
    ///
    /// ```text
    /// Field
    ///   ├─► `nested` / `prefix`?     ──► NestedField
    ///   ├─► `from_env`?              ──► LeafField
    ///   ├─► known leaf type?         ──► LeafField
    ///   └─► otherwise                ──► UnsupportedField
    /// ```
    pub fn parse_field(field: &Field) -> SynResult<Box<dyn FieldGenerator>> {
        let name = field
            .ident
            .clone()
            .ok_or_else(|| SynError::new_spanned(field, "EnvBind requires named fields"))?;
        let ty = field.ty.clone();

        // Reported in errors; strip `r#` from raw identifiers
        let field_name = name.unraw().to_string();

        match Parser::parse_field_config(field)? {
            FieldConfig::Nested { prefix } => Ok(Box::new(NestedField {
                name,
                field_name,
                ty,
                prefix,
            })),

            FieldConfig::Leaf {
                var,
                default,
                from_env,
            } => {
                if from_env || Self::is_known_leaf(&ty) {
                    Ok(Box::new(LeafField {
                        name,
                        field_name,
                        var,
                        default,
                    }))
                } else {
                    Ok(Box::new(UnsupportedField {
                        field_name,
                        type_name: Self::type_name(&ty),
                        var,
                        default,
                    }))
                }
            }
        }
    }

    /// Whether the type is one of the built-in leaf types.
    ///
    /// Matches on the last path segment, so `std::time::Duration` and
    /// `Duration` are both recognised. Segments with generic arguments
    /// never match.
    pub fn is_known_leaf(ty: &Type) -> bool {
        let Type::Path(type_path) = ty else {
            return false;
        };

        if type_path.qself.is_some() {
            return false;
        }

        type_path.path.segments.last().is_some_and(|segment| {
            matches!(segment.arguments, PathArguments::None)
                && KNOWN_LEAF_TYPES.iter().any(|known| segment.ident == known)
        })
    }

    /// The declared type as written, without token spacing.
    pub fn type_name(ty: &Type) -> String {
        quote!(#ty).to_string().replace(' ', "")
    }
}

/// Emits `::std::option::Option<&'static str>` for optional metadata.
fn option_str(value: Option<&str>) -> QuoteStream {
    match value {
        Some(value) => quote! { ::std::option::Option::Some(#value) },
        None => quote! { ::std::option::Option::None },
    }
}

/// Emits the `FieldTags` literal shared by leaf and unsupported fields.
fn field_tags(field_name: &str, var: Option<&str>, default: Option<&str>) -> QuoteStream {
    let env = option_str(var);
    let default = option_str(default);

    quote! {
        ::envbind::FieldTags {
            field: #field_name,
            env: #env,
            default: #default,
        }
    }
}
