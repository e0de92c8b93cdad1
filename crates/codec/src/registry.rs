//! Codec resolution by identifier.

use std::collections::BTreeMap;

use crate::Codec;

/// Factory producing a boxed codec instance.
pub type CodecFactory = Box<dyn Fn() -> Box<dyn Codec> + Send + Sync>;

/// Resolution errors.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// No codec registered under the identifier.
    #[error("Unknown codec: {0}")]
    UnknownCodec(String),
}

/// Registry mapping codec identifiers to factories.
///
/// Codecs are registered explicitly at startup and resolved by name at run
/// time. A record store file names the codec it was written with, so the
/// reader resolves through the same registry.
#[derive(Default)]
pub struct CodecRegistry {
    factories: BTreeMap<String, CodecFactory>,
}

impl CodecRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a codec factory under an identifier.
    ///
    /// Replaces any previous registration for the same identifier.
    pub fn register<F>(&mut self, id: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn Codec> + Send + Sync + 'static,
    {
        self.factories.insert(id.into(), Box::new(factory));
    }

    /// Resolve an identifier to a new codec instance.
    pub fn resolve(&self, id: &str) -> Result<Box<dyn Codec>, ResolveError> {
        self.factories
            .get(id)
            .map(|factory| factory())
            .ok_or_else(|| ResolveError::UnknownCodec(id.to_string()))
    }

    /// Whether an identifier is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    /// Registered identifiers, in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodecRegistry").field("ids", &self.factories.keys().collect::<Vec<_>>()).finish()
    }
}
