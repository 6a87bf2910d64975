//! # envbind_macro
//!
//! Procedural macro implementation for the `envbind` crate.
//!
//! This crate provides `#[derive(EnvBind)]`, which compiles a struct's
//! `#[env(...)]` field metadata into an `envbind::EnvBind` impl.
//!
//! **Note:** Users should depend on the `envbind` crate, not this one directly.
//! The `envbind` crate re-exports this macro along with the runtime types.
//!
//! # Module Structure
//!
//! - `parse` - Attribute parsing for `#[env(...)]`
//! - `field` - Field classification and per-field code generation
//! - `expand` - Macro expansion orchestration
//!
//! # Generated Code
//!
//! One call per field, in declaration order, against the binding scope:
//!
//! ```ignore
//! impl ::envbind::EnvBind for Config {
//!     fn bind(&mut self, __scope: &::envbind::Scope<'_>) -> Result<(), ::envbind::Error> {
//!         __scope.leaf(&FieldTags { field: "port", env: Some("PORT"), default: Some("80") }, &mut self.port)?;
//!         __scope.nested("db", Some("DB_"), &mut self.db)?;
//!         Ok(())
//!     }
//! }
//! ```
//!
//! The metadata is passed through verbatim. Malformed `var` strings and
//! missing metadata are reported by the runtime when the field is reached,
//! so a derived struct and a hand-written impl fail the same way.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod expand;
mod field;
mod parse;

/// Derive macro for binding environment variables into a struct.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `var = "NAME"` | Variable name, optionally `"NAME,required"` |
/// | `default = "value"` | Used when the variable is unset |
/// | `from_env` | Bind a field whose type implements `envbind::FromEnv` |
/// | `nested` | Bind a nested `EnvBind` struct with the current prefix |
/// | `prefix = "FRAG_"` | Bind a nested struct, appending `FRAG_` to the prefix |
///
/// Leaf fields of type `i8`-`i64`, `isize`, `u8`-`u64`, `usize`, `f32`,
/// `f64`, `bool`, `String` and `Duration` convert out of the box. Fields of
/// any other type bind to an unsupported-type error unless marked `from_env`.
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
/// use envbind::EnvBind;
///
/// #[derive(Default, EnvBind)]
/// struct Config {
///     #[env(var = "NAME,required")]
///     name: String,
///
///     #[env(var = "PORT", default = "27017")]
///     port: u16,
///
///     #[env(prefix = "MONGO_")]
///     mongo: Mongo,
/// }
///
/// #[derive(Default, EnvBind)]
/// struct Mongo {
///     #[env(var = "TIMEOUT", default = "13s")]
///     timeout: Duration,
/// }
/// ```
#[proc_macro_derive(EnvBind, attributes(env))]
pub fn derive_env_bind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    // On error, expand to compile_error!() at the offending span
    expand::Expander::expand(&input).unwrap_or_else(|err| err.to_compile_error().into())
}
