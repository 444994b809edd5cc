//! Element Attributes
//!
//! Ordered attribute storage with name lookup.

use std::collections::HashMap;

/// Named node map (attribute collection)
#[derive(Debug, Clone, Default)]
pub struct NamedNodeMap {
    attributes: Vec<Attr>,
    by_name: HashMap<String, usize>,
}

/// Single attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

impl Attr {
    /// Attribute names are ASCII case-insensitive; stored lowercased.
    pub fn new(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            value: value.into(),
        }
    }
}

impl NamedNodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        let index = *self.by_name.get(&name.to_ascii_lowercase())?;
        self.attributes.get(index).map(|a| a.value.as_str())
    }

    /// Set attribute, returning the previous value
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) -> Option<String> {
        let attr = Attr::new(name, value);
        if let Some(&index) = self.by_name.get(&attr.name) {
            let old = std::mem::replace(&mut self.attributes[index], attr);
            Some(old.value)
        } else {
            self.by_name.insert(attr.name.clone(), self.attributes.len());
            self.attributes.push(attr);
            None
        }
    }

    /// Remove attribute, returning its value
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let index = self.by_name.remove(&name.to_ascii_lowercase())?;
        for idx in self.by_name.values_mut() {
            if *idx > index {
                *idx -= 1;
            }
        }
        Some(self.attributes.remove(index).value)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.by_name.contains_key(&name.to_ascii_lowercase())
    }

    /// Toggle a boolean attribute; returns whether it is now present
    pub fn toggle_attribute(&mut self, name: &str, force: Option<bool>) -> bool {
        let present = force.unwrap_or(!self.has_attribute(name));
        if present {
            if !self.has_attribute(name) {
                self.set_attribute(name, "");
            }
        } else {
            self.remove_attribute(name);
        }
        present
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attr> {
        self.attributes.iter()
    }
}
