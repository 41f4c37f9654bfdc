//! The base hero registry.

use skirmish_foundation::Monster;

/// Fixed, ordered list of base hero templates.
///
/// Each template has a unique base name; its position in the list is
/// the hero's stable index in the replay format (encoded as
/// `-(index + 2)` in slot grids), regardless of level.
#[derive(Clone, Debug, Default)]
pub struct HeroRegistry {
    templates: Vec<Monster>,
}

impl HeroRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a base hero template.
    ///
    /// Duplicate base names are ignored so indices stay stable.
    pub fn register(&mut self, template: Monster) {
        if self.find(template.base_name()).is_none() {
            self.templates.push(template);
        }
    }

    /// Looks up a template by exact base name.
    #[must_use]
    pub fn find(&self, base_name: &str) -> Option<&Monster> {
        self.templates.iter().find(|t| t.base_name() == base_name)
    }

    /// Returns the replay index for a base name.
    #[must_use]
    pub fn index_of(&self, base_name: &str) -> Option<usize> {
        self.templates.iter().position(|t| t.base_name() == base_name)
    }

    /// Returns the templates in registry order.
    #[must_use]
    pub fn templates(&self) -> &[Monster] {
        &self.templates
    }

    /// Returns the number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl FromIterator<Monster> for HeroRegistry {
    fn from_iter<T: IntoIterator<Item = Monster>>(iter: T) -> Self {
        let mut registry = Self::new();
        for template in iter {
            registry.register(template);
        }
        registry
    }
}
