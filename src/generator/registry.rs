use crate::foundation::error::{SpriteError, SpriteResult};
use crate::generator::FrameGenerator;
use crate::generator::lightning_beam::LightningBeamGenerator;
use crate::generator::slash_trail::SlashTrailGenerator;
use std::collections::BTreeMap;
use std::fmt;

type Factory = Box<dyn Fn() -> Box<dyn FrameGenerator> + Send + Sync>;

/// Name-keyed factories for fresh generator instances.
///
/// Keys are kept sorted so listings are stable.
pub struct GeneratorRegistry {
    factories: BTreeMap<String, Factory>, // stable keys
}

impl GeneratorRegistry {
    /// Registry with no entries.
    pub fn empty() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Registry holding the built-in generators.
    pub fn with_builtins() -> Self {
        let mut reg = Self::empty();
        reg.register(LightningBeamGenerator::NAME, || {
            Box::new(LightningBeamGenerator::default())
        });
        reg.register(SlashTrailGenerator::NAME, || {
            Box::new(SlashTrailGenerator::default())
        });
        reg
    }

    /// Add or replace a factory. Returns `true` if `name` was already registered.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> bool
    where
        F: Fn() -> Box<dyn FrameGenerator> + Send + Sync + 'static,
    {
        self.factories
            .insert(name.into(), Box::new(factory))
            .is_some()
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Return `true` when `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Build a fresh instance with default parameters.
    pub fn create(&self, name: &str) -> SpriteResult<Box<dyn FrameGenerator>> {
        let factory = self.factories.get(name).ok_or_else(|| {
            SpriteError::validation(format!(
                "unknown generator '{name}' (available: {})",
                self.names().collect::<Vec<_>>().join(", ")
            ))
        })?;
        Ok(factory())
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("names", &self.names().collect::<Vec<_>>())
            .finish()
    }
}
