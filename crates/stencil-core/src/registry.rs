//! Insertion-ordered, key-unique collection of style descriptors
//!
//! Cascade insertion flattens a style's `based_on` chain as the style is
//! added: the stored descriptor already holds every inherited attribute.
//! Since a style can only be based on one that was inserted before it,
//! a `based_on` cycle can never be built and lookups never walk a chain.

use indexmap::IndexMap;

use crate::descriptor::StyleDescriptor;
use crate::error::{Error, Result};

/// Registry of style descriptors, indexable by position and by key
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    styles: IndexMap<String, StyleDescriptor>,
}

impl StyleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a descriptor as is
    pub fn add(&mut self, descriptor: StyleDescriptor) -> Result<()> {
        if descriptor.key.is_empty() {
            return Err(Error::EmptyKey);
        }
        if self.styles.contains_key(&descriptor.key) {
            return Err(Error::DuplicateKey(descriptor.key));
        }
        self.styles.insert(descriptor.key.clone(), descriptor);
        Ok(())
    }

    /// Look up a descriptor by key
    pub fn find_by_key(&self, key: &str) -> Option<&StyleDescriptor> {
        self.styles.get(key)
    }

    /// Add a descriptor, merging it over its base style first
    ///
    /// The stored entry keeps the descriptor's own key and `based_on`, with
    /// every attribute it leaves unset inherited from the base.
    pub fn merge_cascade_insert(&mut self, descriptor: &StyleDescriptor) -> Result<()> {
        let Some(base_key) = descriptor.base_key() else {
            return self.add(descriptor.clone());
        };

        let base = self
            .styles
            .get(base_key)
            .ok_or_else(|| Error::UnknownBaseKey {
                key: descriptor.key.clone(),
                base: base_key.to_string(),
            })?;
        let merged = StyleDescriptor::merge_over(base, descriptor)?;
        self.add(merged)
    }

    /// Cascade-insert a sequence of descriptors in order
    pub fn extend_cascade<'a, I>(&mut self, descriptors: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a StyleDescriptor>,
    {
        for descriptor in descriptors {
            self.merge_cascade_insert(descriptor)?;
        }
        Ok(())
    }

    /// Remove every descriptor
    pub fn reset(&mut self) {
        self.styles.clear();
    }

    /// Get a descriptor by insertion position
    pub fn get_index(&self, index: usize) -> Option<&StyleDescriptor> {
        self.styles.get_index(index).map(|(_, style)| style)
    }

    /// Position of a key in insertion order
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.styles.get_index_of(key)
    }

    /// Check if a key is registered
    pub fn contains_key(&self, key: &str) -> bool {
        self.styles.contains_key(key)
    }

    /// Get the number of descriptors
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Iterate over descriptors in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &StyleDescriptor> {
        self.styles.values()
    }

    /// Iterate over keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_and_find() {
        let mut registry = StyleRegistry::new();
        registry.add(StyleDescriptor::generic("A")).unwrap();
        registry.add(StyleDescriptor::cell("B")).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.find_by_key("B").map(|s| s.is_cell()), Some(true));
        assert_eq!(registry.find_by_key("missing"), None);
        assert_eq!(registry.keys().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(registry.index_of("B"), Some(1));
        assert_eq!(registry.get_index(0).map(|s| s.key.as_str()), Some("A"));
    }

    #[test]
    fn test_duplicate_key() {
        let mut registry = StyleRegistry::new();
        registry.add(StyleDescriptor::generic("A")).unwrap();

        let err = registry.add(StyleDescriptor::cell("A")).unwrap_err();
        assert_eq!(err, Error::DuplicateKey("A".to_string()));
        assert_eq!(registry.len(), 1);
        assert!(!registry.find_by_key("A").unwrap().is_cell());
    }

    #[test]
    fn test_empty_key() {
        let mut registry = StyleRegistry::new();
        assert_eq!(
            registry.add(StyleDescriptor::generic("")),
            Err(Error::EmptyKey)
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_cascade_insert_without_base_clones() {
        let mut registry = StyleRegistry::new();
        let style = StyleDescriptor::generic("A").background(Color::RED);
        registry.merge_cascade_insert(&style).unwrap();

        assert_eq!(registry.find_by_key("A"), Some(&style));
    }

    #[test]
    fn test_cascade_insert_empty_base_key_is_no_base() {
        let mut registry = StyleRegistry::new();
        registry
            .merge_cascade_insert(&StyleDescriptor::generic("A").based_on(""))
            .unwrap();

        assert!(registry.contains_key("A"));
    }

    #[test]
    fn test_cascade_insert_inherits() {
        let mut registry = StyleRegistry::new();
        registry
            .merge_cascade_insert(
                &StyleDescriptor::generic("A")
                    .background(Color::RED)
                    .border_color(Color::BLUE),
            )
            .unwrap();
        registry
            .merge_cascade_insert(&StyleDescriptor::generic("B").based_on("A"))
            .unwrap();
        registry
            .merge_cascade_insert(
                &StyleDescriptor::generic("C")
                    .based_on("B")
                    .background(Color::GREEN),
            )
            .unwrap();

        let b = registry.find_by_key("B").unwrap();
        assert_eq!(b.key, "B");
        assert_eq!(b.background_color, Some(Color::RED));
        assert_eq!(b.border_color, Some(Color::BLUE));

        let c = registry.find_by_key("C").unwrap();
        assert_eq!(c.background_color, Some(Color::GREEN));
        assert_eq!(c.border_color, Some(Color::BLUE));
    }

    #[test]
    fn test_cascade_insert_unknown_base() {
        let mut registry = StyleRegistry::new();
        let err = registry
            .merge_cascade_insert(&StyleDescriptor::generic("B").based_on("A"))
            .unwrap_err();

        assert_eq!(
            err,
            Error::UnknownBaseKey {
                key: "B".to_string(),
                base: "A".to_string()
            }
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_cascade_insert_cannot_reference_later_style() {
        // "A" based on "B" fails even though "B" (based on "A") follows it,
        // which is how cycles are ruled out.
        let mut registry = StyleRegistry::new();
        let styles = [
            StyleDescriptor::generic("A").based_on("B"),
            StyleDescriptor::generic("B").based_on("A"),
        ];
        let err = registry.extend_cascade(&styles).unwrap_err();

        assert!(matches!(err, Error::UnknownBaseKey { .. }));
    }

    #[test]
    fn test_cascade_insert_incompatible_kind() {
        let mut registry = StyleRegistry::new();
        registry
            .merge_cascade_insert(&StyleDescriptor::cell("A").bold(true))
            .unwrap();
        let err = registry
            .merge_cascade_insert(&StyleDescriptor::generic("B").based_on("A"))
            .unwrap_err();

        assert!(matches!(err, Error::IncompatibleBaseKind { .. }));
        assert!(!registry.contains_key("B"));
    }

    #[test]
    fn test_reset() {
        let mut registry = StyleRegistry::new();
        registry.add(StyleDescriptor::generic("A")).unwrap();
        registry.reset();

        assert!(registry.is_empty());
        assert_eq!(registry.find_by_key("A"), None);
        registry.add(StyleDescriptor::generic("A")).unwrap();
    }
}
