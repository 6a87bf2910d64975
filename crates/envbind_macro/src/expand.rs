//! Code generation orchestration for the `EnvBind` derive.
//!
//! The [`Expander`] validates the input shape, turns each field into a
//! [`FieldGenerator`], and wraps the per-field statements in a single
//! `impl ::envbind::EnvBind` block. Generics and where-clauses are forwarded
//! unchanged; bounds the fields need (`T: EnvBind` for a generic nested group)
//! are the caller's to write.

use proc_macro::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::{Data, DeriveInput, Error as SynError, Field, Fields, Result as SynResult};

use crate::field::{FieldFactory, FieldGenerator};

/// The main orchestrator for macro expansion.
pub struct Expander;

impl Expander {
    /// Main entry point for expanding the derive macro.
    pub fn expand(input: &DeriveInput) -> SynResult<TokenStream> {
        let struct_name = &input.ident;
        let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

        let fields = Self::extract_struct_fields(input)?;

        let generators: Vec<Box<dyn FieldGenerator>> = fields
            .iter()
            .map(FieldFactory::parse_field)
            .collect::<SynResult<Vec<_>>>()?;

        // Declaration order is binding order
        let bindings = generators.iter().map(|g| g.generate_binding());

        let expanded = quote! {
            #[automatically_derived]
            impl #impl_generics ::envbind::EnvBind for #struct_name #ty_generics #where_clause {
                fn bind(
                    &mut self,
                    __scope: &::envbind::Scope<'_>,
                ) -> ::std::result::Result<(), ::envbind::Error> {
                    #(#bindings)*
                    ::std::result::Result::Ok(())
                }
            }
        };

        Ok(expanded.into())
    }

    /// Extract named fields from the struct, rejecting invalid types.
    fn extract_struct_fields(input: &DeriveInput) -> SynResult<&Punctuated<Field, Comma>> {
        match &input.data {
            Data::Struct(data_struct) => match &data_struct.fields {
                Fields::Named(fields_named) => Ok(&fields_named.named),

                Fields::Unnamed(_) => Err(SynError::new_spanned(
                    input,
                    "EnvBind does not support tuple structs",
                )),

                Fields::Unit => Err(SynError::new_spanned(
                    input,
                    "EnvBind does not support unit structs",
                )),
            },

            Data::Enum(_) => Err(SynError::new_spanned(
                input,
                "EnvBind can only be derived for structs, not enums",
            )),

            Data::Union(_) => Err(SynError::new_spanned(
                input,
                "EnvBind can only be derived for structs, not unions",
            )),
        }
    }
}
