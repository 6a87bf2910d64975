//! The field walk.
//!
//! [`Binder`] owns the global prefix and starts a bind. [`Scope`] is the
//! per-level context handed to [`EnvBind::bind`]; its three operations,
//! [`Scope::leaf`], [`Scope::nested`] and [`Scope::unsupported`], are what the
//! derive emits once per field, in declaration order.
//!
//! ```text
//! Binder::parse(&mut Config)
//!   └─► Config::bind(scope: prefix "APP_")
//!         ├─► scope.leaf(NAME)                  looks up APP_NAME
//!         └─► scope.nested("mongo", "MONGO_")
//!               └─► Mongo::bind(scope: prefix "APP_MONGO_")
//!                     └─► scope.leaf(HOST)      looks up APP_MONGO_HOST
//! ```
//!
//! The walk is fail-fast: the first error returns, fields already assigned
//! keep their new values.

use std::borrow::Cow;

use crate::convert::FromEnv;
use crate::field::{FieldSpec, FieldTags};
use crate::provider::{EnvProvider, Provider};
use crate::Error;

/// A struct whose fields can be bound from the environment.
///
/// Usually derived with `#[derive(EnvBind)]`. A hand-written impl calls one
/// [`Scope`] operation per field:
///
/// ```
/// use envbind::{Binder, EnvBind, Error, FieldTags, MapProvider, Scope};
///
/// #[derive(Default)]
/// struct Server {
///     port: u16,
/// }
///
/// impl EnvBind for Server {
///     fn bind(&mut self, scope: &Scope<'_>) -> Result<(), Error> {
///         scope.leaf(&FieldTags::new("port").env("PORT").default_value("80"), &mut self.port)
///     }
/// }
///
/// let mut server = Server::default();
/// Binder::new().parse_from(&MapProvider::new(), &mut server).unwrap();
/// assert_eq!(server.port, 80);
/// ```
pub trait EnvBind {
    /// Binds every field of `self`, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns the first field error encountered.
    fn bind(&mut self, scope: &Scope<'_>) -> Result<(), Error>;
}

/// Binds environment variables into [`EnvBind`] structs.
///
/// The global prefix is prepended to every lookup, including those inside
/// nested groups. A binder is cheap to clone and can be shared across
/// threads; binding disjoint targets concurrently is fine.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Binder {
    prefix: String,
}

impl Binder {
    /// Creates a binder with an empty prefix.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            prefix: String::new(),
        }
    }

    /// Creates a binder with the given global prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Sets the global prefix. Any string is accepted, including `""`.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    /// Returns the global prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Binds `target` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns the first field error. `target` may be partially updated.
    pub fn parse<T: EnvBind + ?Sized>(&self, target: &mut T) -> Result<(), Error> {
        self.parse_from(&EnvProvider, target)
    }

    /// Binds `target` from `provider`.
    ///
    /// # Errors
    ///
    /// Returns the first field error. `target` may be partially updated.
    pub fn parse_from<T: EnvBind + ?Sized>(
        &self,
        provider: &dyn Provider,
        target: &mut T,
    ) -> Result<(), Error> {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            prefix = %self.prefix,
            provider = provider.name(),
            "binding configuration"
        );

        let scope = Scope {
            provider,
            prefix: Cow::Borrowed(self.prefix.as_str()),
        };

        target.bind(&scope)
    }

    /// Binds a fresh `T::default()` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns the first field error.
    pub fn load<T: EnvBind + Default>(&self) -> Result<T, Error> {
        let mut target = T::default();
        self.parse(&mut target)?;
        Ok(target)
    }
}

/// Binding context for one level of the field walk.
pub struct Scope<'a> {
    provider: &'a dyn Provider,
    prefix: Cow<'a, str>,
}

/// A looked-up value with the rules that produced it.
struct Resolved<'t> {
    spec: FieldSpec<'t>,
    var: String,
    value: Cow<'t, str>,
}

impl Scope<'_> {
    /// The effective prefix at this level: global prefix plus every enclosing
    /// group fragment.
    ///
    /// Hand-written impls can use it to name variables in their own messages:
    ///
    /// ```
    /// use envbind::{Binder, EnvBind, Error, FieldTags, MapProvider, Scope};
    ///
    /// #[derive(Default)]
    /// struct Pool {
    ///     size: u32,
    ///     size_var: String,
    /// }
    ///
    /// impl EnvBind for Pool {
    ///     fn bind(&mut self, scope: &Scope<'_>) -> Result<(), Error> {
    ///         self.size_var = format!("{}SIZE", scope.prefix());
    ///         scope.leaf(&FieldTags::new("size").env("SIZE").default_value("8"), &mut self.size)
    ///     }
    /// }
    ///
    /// #[derive(Default)]
    /// struct Config {
    ///     pool: Pool,
    /// }
    ///
    /// impl EnvBind for Config {
    ///     fn bind(&mut self, scope: &Scope<'_>) -> Result<(), Error> {
    ///         scope.nested("pool", Some("POOL_"), &mut self.pool)
    ///     }
    /// }
    ///
    /// let mut config = Config::default();
    /// Binder::with_prefix("APP_").parse_from(&MapProvider::new(), &mut config).unwrap();
    /// assert_eq!(config.pool.size_var, "APP_POOL_SIZE");
    /// ```
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Binds a leaf field.
    ///
    /// Resolves the metadata, looks up `prefix + name`, falls back to the
    /// default when the variable is absent and the field is not required, and
    /// converts the value with `T`'s [`FromEnv`] impl. The default goes through
    /// the same conversion, so an invalid default surfaces here.
    ///
    /// # Errors
    ///
    /// `NotProcessable`, `UnknownTagValue`, `MissingRequired`, `Parse`, or a
    /// provider error.
    pub fn leaf<T: FromEnv>(&self, tags: &FieldTags<'_>, slot: &mut T) -> Result<(), Error> {
        let resolved = self.resolve(tags)?;

        match T::from_env(&resolved.value) {
            Ok(value) => {
                *slot = value;
                Ok(())
            }

            Err(source) => Err(Error::parse(
                tags.field,
                resolved.spec.name(),
                resolved.var,
                resolved.value,
                T::TARGET,
                source,
            )),
        }
    }

    /// Reports a leaf field whose type has no conversion.
    ///
    /// The metadata and lookup are still checked first, so a missing required
    /// variable is reported as such.
    ///
    /// # Errors
    ///
    /// Always; `UnsupportedType` unless resolution fails earlier.
    pub fn unsupported(&self, tags: &FieldTags<'_>, type_name: &str) -> Result<(), Error> {
        let resolved = self.resolve(tags)?;

        Err(Error::UnsupportedType {
            field: tags.field.to_string(),
            name: resolved.spec.name().to_string(),
            type_name: type_name.to_string(),
            value: resolved.value.into_owned(),
        })
    }

    /// Binds a nested group stored in `field`.
    ///
    /// Inside the group the prefix is this scope's prefix followed by
    /// `fragment`, concatenated as-is.
    ///
    /// # Errors
    ///
    /// Any error from the group, wrapped in [`Error::Nested`].
    pub fn nested<T: EnvBind + ?Sized>(
        &self,
        field: &str,
        fragment: Option<&str>,
        target: &mut T,
    ) -> Result<(), Error> {
        let prefix = match fragment {
            Some(fragment) if !fragment.is_empty() => {
                Cow::Owned(format!("{}{fragment}", self.prefix))
            }
            _ => Cow::Borrowed(&*self.prefix),
        };

        let child = Scope {
            provider: self.provider,
            prefix,
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(field, prefix = child.prefix(), "entering nested group");

        target
            .bind(&child)
            .map_err(|source| Error::nested(field, source))
    }

    fn resolve<'t>(&self, tags: &FieldTags<'t>) -> Result<Resolved<'t>, Error> {
        let spec = FieldSpec::resolve(tags)?;
        let var = format!("{}{}", self.prefix, spec.name());

        let value = match self.provider.get(&var)? {
            Some(value) => Cow::Owned(value),

            None if spec.is_required() => {
                return Err(Error::missing_required(tags.field, spec.name(), var));
            }

            None => Cow::Borrowed(spec.default().unwrap_or_default()),
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            var = %var,
            field = tags.field,
            from_default = matches!(value, Cow::Borrowed(_)),
            "resolved variable"
        );

        Ok(Resolved { spec, var, value })
    }
}
