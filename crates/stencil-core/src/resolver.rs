//! Style lookup with runtime overrides

use crate::descriptor::{StyleDescriptor, StyleOverride};
use crate::error::{Error, Result};
use crate::registry::StyleRegistry;

/// Resolves style keys against a registry
///
/// Registry entries are flattened when inserted, so resolving is a lookup
/// followed by at most one override merge.
#[derive(Debug, Clone, Copy)]
pub struct StyleResolver<'a> {
    registry: &'a StyleRegistry,
}

impl<'a> StyleResolver<'a> {
    /// Create a resolver over a registry
    pub fn new(registry: &'a StyleRegistry) -> Self {
        Self { registry }
    }

    /// Resolve `key` into a fully merged descriptor
    pub fn resolve(&self, key: &str, runtime: Option<&StyleOverride>) -> Result<StyleDescriptor> {
        let resolved = self
            .registry
            .find_by_key(key)
            .ok_or_else(|| Error::StyleNotFound(key.to_string()))?;

        match runtime {
            Some(runtime) if !runtime.is_empty() => runtime.apply_to(resolved),
            _ => Ok(resolved.clone()),
        }
    }
}
