//! # envbind
//!
//! Bind environment variables into typed configuration structs.
//!
//! `envbind` maps each field of a struct to an environment variable through
//! declarative `#[env(...)]` metadata: the variable name, an optional default,
//! an explicit required marker, and name prefixes for nested groups. The
//! derive macro compiles that metadata into a field walk; a [`Binder`] runs it
//! against the process environment and fills the struct in place.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use envbind::{Binder, EnvBind};
//!
//! #[derive(Default, EnvBind)]
//! struct Config {
//!     #[env(var = "NAME,required")]
//!     name: String,
//!
//!     #[env(var = "AGE", default = "42")]
//!     age: u32,
//!
//!     #[env(prefix = "MONGO_")]
//!     mongo: Mongo,
//! }
//!
//! #[derive(Default, EnvBind)]
//! struct Mongo {
//!     #[env(var = "HOST", default = "localhost")]
//!     host: String,
//!
//!     #[env(var = "TIMEOUT", default = "13s")]
//!     timeout: Duration,
//! }
//!
//! fn main() -> envbind::Result<()> {
//!     let mut binder = Binder::new();
//!     binder.set_prefix("APP_");
//!
//!     // Reads APP_NAME, APP_AGE, APP_MONGO_HOST and APP_MONGO_TIMEOUT
//!     let config: Config = binder.load()?;
//!     println!("{} connects to {}", config.name, config.mongo.host);
//!     Ok(())
//! }
//! ```
//!
//! ## Field Attributes
//!
//! | Attribute | Description |
//! |-----------|-------------|
//! | `var = "NAME"` | Variable name; required unless a default is given |
//! | `var = "NAME,required"` | Variable name, always required |
//! | `default = "value"` | Used when the variable is unset |
//! | `prefix = "FRAG_"` | Nested group; `FRAG_` is appended to the prefix |
//! | `nested` | Nested group without its own fragment |
//! | `from_env` | Leaf whose type implements [`FromEnv`] |
//!
//! ## Binding Rules
//!
//! - Fields are bound in declaration order; the first error stops the walk
//!   and the struct keeps whatever was assigned before it.
//! - The looked-up name is `global prefix + group fragments + name`, joined
//!   without separators.
//! - Defaults go through the same conversion as environment values, so a bad
//!   default is reported when it is used.
//! - Leaf types: `i8`-`i64`, `isize`, `u8`-`u64`, `usize`, `f32`, `f64`,
//!   `bool`, `String` and [`std::time::Duration`]. Any other type binds to an
//!   [`Error::UnsupportedType`] unless marked `from_env`.
//!
//! ## Error Handling
//!
//! [`Error`] integrates with [`miette`]:
//!
//! ```rust,ignore
//! if let Err(e) = binder.parse(&mut config) {
//!     eprintln!("{:?}", miette::Report::from(e));
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description | Default |
//! |---------|-------------|---------|
//! | `tracing` | Emit [`tracing`](https://docs.rs/tracing) events for each lookup | No |

#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

// Re-export the derive macro
pub use envbind_macro::EnvBind;

/// Re-export miette so applications can render errors without a direct dependency.
pub use miette;

pub mod diagnostic_codes;
pub mod duration;

mod binder;
mod convert;
mod error;
mod field;
mod provider;

pub use binder::{Binder, EnvBind, Scope};
pub use convert::{FromEnv, ParseBoolError, RangeError, SignedUnsignedError, Target, parse_bool};
pub use duration::DurationError;
pub use error::{BoxError, Error, ErrorKind};
pub use field::{FieldSpec, FieldTags, MAX_TAG_PARTS, REQUIRED_MARKER};
pub use provider::{EnvProvider, MapProvider, Provider};

/// A Result type that renders errors with miette's fancy formatting.
///
/// Use this as the return type of `main`:
///
/// ```rust,ignore
/// fn main() -> envbind::Result<()> {
///     let config: Config = envbind::Binder::new().load()?;
///     Ok(())
/// }
/// ```
pub type Result<T> = miette::Result<T>;
