//! Style manager: the entry point for the layout walk
//!
//! One [`StyleManager`] serves one document generation run. It owns the
//! style registry and the output tables, so nothing leaks between documents;
//! to build documents in parallel, give each its own manager (the shared
//! style definitions are only read).
//!
//! ```
//! use stencil_core::{StyleDescriptor, StyleManager, StyleOverride, Color};
//!
//! let mut manager = StyleManager::default();
//! manager.initialise(&[StyleDescriptor::cell("Default").font_size(10.0)])?;
//!
//! let a1 = manager.get_or_create_cell_format(Some("Default"), None)?;
//! let a2 = manager.get_or_create_cell_format(Some("Default"), None)?;
//! assert_eq!(a1, a2);
//!
//! let red = StyleOverride::new().font_color(Color::RED);
//! let a3 = manager.get_or_create_cell_format(Some("Default"), Some(&red))?;
//! assert_ne!(a1, a3);
//! # Ok::<(), stencil_core::Error>(())
//! ```

use crate::context::ResourceContext;
use crate::descriptor::{StyleDescriptor, StyleOverride};
use crate::error::{Error, Result};
use crate::registry::StyleRegistry;
use crate::resolver::StyleResolver;
use crate::settings::StyleSettings;
use crate::tables::StyleTables;

/// Lifecycle of a [`StyleManager`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManagerState {
    /// `initialise` has not succeeded yet
    #[default]
    Uninitialized,
    /// Styles can be resolved and interned
    Ready,
}

/// Resolves template styles and interns them into the document's style tables
#[derive(Debug)]
pub struct StyleManager {
    state: ManagerState,
    /// Shared styles as given to `initialise`, replayed for every section
    shared: Vec<StyleDescriptor>,
    registry: StyleRegistry,
    tables: StyleTables,
}

impl StyleManager {
    /// Create an uninitialised manager
    pub fn new(settings: StyleSettings) -> Self {
        Self {
            state: ManagerState::Uninitialized,
            shared: Vec::new(),
            registry: StyleRegistry::new(),
            tables: StyleTables::new(settings),
        }
    }

    /// Load the shared styles and start with empty tables
    ///
    /// On error the manager is left as it was.
    pub fn initialise(&mut self, shared: &[StyleDescriptor]) -> Result<()> {
        let mut registry = StyleRegistry::new();
        registry.extend_cascade(shared)?;

        self.shared = shared.to_vec();
        self.registry = registry;
        self.tables.reset();
        self.state = ManagerState::Ready;
        log::debug!("style manager initialised with {} shared styles", self.shared.len());
        Ok(())
    }

    /// [`initialise`](Self::initialise) with definitions looked up by key
    pub fn initialise_from<'k, I, C>(&mut self, keys: I, context: &C) -> Result<()>
    where
        I: IntoIterator<Item = &'k str>,
        C: ResourceContext + ?Sized,
    {
        let shared = collect_definitions(keys, context)?;
        self.initialise(&shared)
    }

    /// Replace the document-local styles
    ///
    /// The registry is rebuilt from the shared styles before `local` is
    /// overlaid, so styles from a previous call never survive. The output
    /// tables are kept: indices already handed out stay valid.
    pub fn set_current_overrides(&mut self, local: &[StyleDescriptor]) -> Result<()> {
        self.ensure_ready()?;

        let mut registry = StyleRegistry::new();
        registry.extend_cascade(&self.shared)?;
        registry.extend_cascade(local)?;
        self.registry = registry;
        log::debug!(
            "style registry reseeded: {} shared + {} local styles",
            self.shared.len(),
            local.len()
        );
        Ok(())
    }

    /// [`set_current_overrides`](Self::set_current_overrides) with
    /// definitions looked up by key
    pub fn set_current_overrides_from<'k, I, C>(&mut self, keys: I, context: &C) -> Result<()>
    where
        I: IntoIterator<Item = &'k str>,
        C: ResourceContext + ?Sized,
    {
        let local = collect_definitions(keys, context)?;
        self.set_current_overrides(&local)
    }

    /// Resolve a style key, applying an optional runtime override
    pub fn resolve(&self, key: &str, runtime: Option<&StyleOverride>) -> Result<StyleDescriptor> {
        self.ensure_ready()?;
        StyleResolver::new(&self.registry).resolve(key, runtime)
    }

    /// Get the cell-format index for a styled element
    ///
    /// Without a style key and without an override there is nothing to
    /// intern and the default format `0` is returned. An override without a
    /// key is applied to an empty cell style.
    pub fn get_or_create_cell_format(
        &mut self,
        style_key: Option<&str>,
        runtime: Option<&StyleOverride>,
    ) -> Result<u32> {
        self.ensure_ready()?;

        let runtime = runtime.filter(|r| !r.is_empty());
        let resolved = match (style_key.filter(|k| !k.is_empty()), runtime) {
            (None, None) => return Ok(0),
            (None, Some(runtime)) => runtime.apply_to(&StyleDescriptor::cell(""))?,
            (Some(key), runtime) => StyleResolver::new(&self.registry).resolve(key, runtime)?,
        };
        self.tables.intern_cell_format(&resolved)
    }

    /// Current lifecycle state
    pub fn state(&self) -> ManagerState {
        self.state
    }

    /// Check if the manager has been initialised
    pub fn is_ready(&self) -> bool {
        self.state == ManagerState::Ready
    }

    /// Settings the manager was created with
    pub fn settings(&self) -> &StyleSettings {
        self.tables.settings()
    }

    /// The active style registry (shared + current local styles)
    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// The output tables built so far
    pub fn tables(&self) -> &StyleTables {
        &self.tables
    }

    /// Consume the manager, keeping the output tables
    pub fn into_tables(self) -> StyleTables {
        self.tables
    }

    fn ensure_ready(&self) -> Result<()> {
        match self.state {
            ManagerState::Ready => Ok(()),
            ManagerState::Uninitialized => Err(Error::NotReady),
        }
    }
}

impl Default for StyleManager {
    fn default() -> Self {
        Self::new(StyleSettings::default())
    }
}

fn collect_definitions<'k, I, C>(keys: I, context: &C) -> Result<Vec<StyleDescriptor>>
where
    I: IntoIterator<Item = &'k str>,
    C: ResourceContext + ?Sized,
{
    keys.into_iter()
        .map(|key| {
            context
                .find_style_definition(key)
                .ok_or_else(|| Error::StyleNotFound(key.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::StyleLibrary;
    use crate::style::Color;
    use pretty_assertions::assert_eq;

    fn shared() -> Vec<StyleDescriptor> {
        vec![
            StyleDescriptor::cell("Default").font_size(10.0),
            StyleDescriptor::cell("Header").based_on("Default").bold(true),
        ]
    }

    #[test]
    fn test_not_ready() {
        let mut manager = StyleManager::default();

        assert_eq!(manager.state(), ManagerState::Uninitialized);
        assert_eq!(
            manager.get_or_create_cell_format(Some("Default"), None),
            Err(Error::NotReady)
        );
        assert_eq!(manager.get_or_create_cell_format(None, None), Err(Error::NotReady));
        assert_eq!(manager.set_current_overrides(&[]), Err(Error::NotReady));
        assert_eq!(manager.resolve("Default", None), Err(Error::NotReady));
    }

    #[test]
    fn test_failed_initialise_stays_uninitialized() {
        let mut manager = StyleManager::default();
        let err = manager
            .initialise(&[StyleDescriptor::cell("Header").based_on("Default")])
            .unwrap_err();

        assert!(matches!(err, Error::UnknownBaseKey { .. }));
        assert!(!manager.is_ready());
    }

    #[test]
    fn test_unstyled_fast_path() {
        let mut manager = StyleManager::default();
        manager.initialise(&shared()).unwrap();

        assert_eq!(manager.get_or_create_cell_format(None, None), Ok(0));
        assert_eq!(manager.get_or_create_cell_format(Some(""), None), Ok(0));
        assert_eq!(
            manager.get_or_create_cell_format(None, Some(&StyleOverride::new())),
            Ok(0)
        );
        assert_eq!(manager.tables().cell_formats().len(), 1);
    }

    #[test]
    fn test_override_without_key() {
        let mut manager = StyleManager::default();
        manager.initialise(&shared()).unwrap();
        let runtime = StyleOverride::new().background(Color::YELLOW);

        let index = manager.get_or_create_cell_format(None, Some(&runtime)).unwrap();
        let format = manager.tables().cell_formats().get(index).unwrap();

        assert_eq!(index, 1);
        assert_eq!(format.fill_id, Some(2));
        assert_eq!(format.font_id, None);
    }

    #[test]
    fn test_missing_style() {
        let mut manager = StyleManager::default();
        manager.initialise(&shared()).unwrap();

        assert_eq!(
            manager.get_or_create_cell_format(Some("Footer"), None),
            Err(Error::StyleNotFound("Footer".to_string()))
        );
    }

    #[test]
    fn test_initialise_from_context() {
        let library: StyleLibrary = shared().into_iter().collect();
        let mut manager = StyleManager::default();
        manager
            .initialise_from(["Default", "Header"], &library)
            .unwrap();

        assert_eq!(manager.registry().len(), 2);
        assert_eq!(
            manager.initialise_from(["Default", "Missing"], &library),
            Err(Error::StyleNotFound("Missing".to_string()))
        );
        // the failed call left the previous registry in place
        assert_eq!(manager.registry().len(), 2);
    }

    #[test]
    fn test_reinitialise_clears_tables() {
        let mut manager = StyleManager::default();
        manager.initialise(&shared()).unwrap();
        manager.get_or_create_cell_format(Some("Header"), None).unwrap();
        assert_eq!(manager.tables().cell_formats().len(), 2);

        manager.initialise(&shared()).unwrap();
        assert_eq!(manager.tables().cell_formats().len(), 1);
        assert_eq!(manager.tables().fonts().len(), 1);
    }
}
