//! Computed style of the document element
//!
//! Only custom properties (`--name`) are tracked; they are what token
//! consumers read at runtime.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct ComputedStyle {
    custom: BTreeMap<String, String>,
}

impl ComputedStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom property. Names without the leading `--` are ignored.
    pub fn set_property(&mut self, name: &str, value: &str) -> bool {
        if !name.starts_with("--") {
            tracing::debug!(name, "ignoring non-custom property");
            return false;
        }
        self.custom.insert(name.to_string(), value.to_string());
        true
    }

    pub fn remove_property(&mut self, name: &str) -> Option<String> {
        self.custom.remove(name)
    }

    /// `getPropertyValue(name).trim()`: empty string when unset
    pub fn property_value(&self, name: &str) -> String {
        self.custom
            .get(name)
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }

    pub fn extend<I, K, V>(&mut self, props: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (name, value) in props {
            self.set_property(name.as_ref(), value.as_ref());
        }
    }

    pub fn len(&self) -> usize {
        self.custom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.custom.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.custom.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_value_trimmed() {
        let mut style = ComputedStyle::new();
        assert!(style.set_property("--bg-page", "  #F6F7F5 "));
        assert_eq!(style.property_value("--bg-page"), "#F6F7F5");
        assert_eq!(style.property_value("--missing"), "");
    }

    #[test]
    fn test_rejects_regular_properties() {
        let mut style = ComputedStyle::new();
        assert!(!style.set_property("color", "red"));
        assert!(style.is_empty());
    }
}
