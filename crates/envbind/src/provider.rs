//! Variable lookup sources.
//!
//! A [`Provider`] answers exact-name lookups during a bind. The binder
//! consults exactly one provider per call; there is no layering.
//!
//! - [`EnvProvider`] - the process environment (used by [`Binder::parse`](crate::Binder::parse))
//! - [`MapProvider`] - an in-memory table, for tests and embedding

use std::collections::HashMap;

use crate::Error;

/// A source of variable values.
///
/// ```rust,ignore
/// struct Fixed;
///
/// impl Provider for Fixed {
///     fn name(&self) -> &'static str { "fixed" }
///
///     fn get(&self, key: &str) -> Result<Option<String>, Error> {
///         Ok((key == "PORT").then(|| "8080".to_string()))
///     }
/// }
/// ```
pub trait Provider {
    /// Name of the provider, for instrumentation.
    fn name(&self) -> &'static str;

    /// Looks up `key` exactly as given.
    ///
    /// # Errors
    ///
    /// Returns an error when the value exists but cannot be read as a string.
    fn get(&self, key: &str) -> Result<Option<String>, Error>;
}

/// Provider that reads the process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvProvider;

impl Provider for EnvProvider {
    fn name(&self) -> &'static str {
        "environment"
    }

    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        match std::env::var(key) {
            Ok(value) => Ok(Some(value)),

            Err(std::env::VarError::NotPresent) => Ok(None),

            Err(std::env::VarError::NotUnicode(_)) => Err(Error::InvalidUtf8 {
                var: key.to_string(),
            }),
        }
    }
}

/// Provider backed by an in-memory map.
///
/// ```
/// use envbind::{MapProvider, Provider};
///
/// let provider = MapProvider::new().with("PORT", "8080");
/// assert_eq!(provider.get("PORT").unwrap().as_deref(), Some("8080"));
/// assert_eq!(provider.get("port").unwrap(), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MapProvider {
    values: HashMap<String, String>,
}

impl MapProvider {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable, returning the provider.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds or replaces a variable.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Removes a variable.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }
}

impl<K, V> FromIterator<(K, V)> for MapProvider
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Provider for MapProvider {
    fn name(&self) -> &'static str {
        "map"
    }

    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.values.get(key).cloned())
    }
}
