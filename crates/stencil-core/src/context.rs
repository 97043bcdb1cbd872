//! Sources of style definitions

use crate::descriptor::StyleDescriptor;

/// Something that can look up style definitions by key
///
/// Template loaders implement this over whatever resource dictionaries they
/// parsed; the style manager only asks for definitions while it seeds its
/// registry.
pub trait ResourceContext {
    /// Look up a style definition by key
    fn find_style_definition(&self, key: &str) -> Option<StyleDescriptor>;
}

/// An ordered list of style definitions
///
/// The simplest [`ResourceContext`]: a style section as loaded from a
/// template, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StyleLibrary {
    styles: Vec<StyleDescriptor>,
}

impl StyleLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a definition
    pub fn push(&mut self, style: StyleDescriptor) {
        self.styles.push(style);
    }

    /// Append a definition, builder style
    pub fn with(mut self, style: StyleDescriptor) -> Self {
        self.push(style);
        self
    }

    /// Definitions in declaration order
    pub fn styles(&self) -> &[StyleDescriptor] {
        &self.styles
    }

    /// Keys in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.styles.iter().map(|s| s.key.as_str())
    }

    /// Get the number of definitions
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the library is empty
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl From<Vec<StyleDescriptor>> for StyleLibrary {
    fn from(styles: Vec<StyleDescriptor>) -> Self {
        Self { styles }
    }
}

impl FromIterator<StyleDescriptor> for StyleLibrary {
    fn from_iter<I: IntoIterator<Item = StyleDescriptor>>(iter: I) -> Self {
        Self {
            styles: iter.into_iter().collect(),
        }
    }
}

impl ResourceContext for StyleLibrary {
    fn find_style_definition(&self, key: &str) -> Option<StyleDescriptor> {
        // Later definitions shadow earlier ones, as in a resource dictionary
        self.styles.iter().rev().find(|s| s.key == key).cloned()
    }
}

impl<C: ResourceContext + ?Sized> ResourceContext for &C {
    fn find_style_definition(&self, key: &str) -> Option<StyleDescriptor> {
        (**self).find_style_definition(key)
    }
}
