//! Per-type registration of translatable attribute names.

use crate::translatable::accessor::{parse_longest_first, Accessor};

/// Ordered, append-only set of translatable attribute names for one type.
///
/// Usually declared once per entity type in a `once_cell::sync::Lazy` static
/// and shared by every instance of that type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeRegistry {
    names: Vec<String>,
    longest_first: Vec<String>,
}

impl AttributeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry with `names` already registered.
    pub fn with_attributes<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        registry.register(names);
        registry
    }

    /// Appends each name not yet registered. Repeated calls are cumulative.
    ///
    /// Empty names are ignored since they can never form an accessor.
    pub fn register<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if name.is_empty() || self.contains(&name) {
                continue;
            }
            let at = self
                .longest_first
                .partition_point(|registered| registered.len() >= name.len());
            self.longest_first.insert(at, name.clone());
            self.names.push(name);
        }
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|registered| registered == name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Parses an accessor name against this registry.
    pub fn parse(&self, name: &str) -> Option<Accessor> {
        parse_longest_first(name, self.longest_first.as_slice())
    }
}
