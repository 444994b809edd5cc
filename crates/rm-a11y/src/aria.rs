//! ARIA Support
//!
//! The roles and live-region states the behaviors read and write.

use rm_dom::{Document, NodeId};

/// ARIA role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AriaRole {
    Alert,
    AlertDialog,
    Button,
    Dialog,
    Link,
    Status,
    Tab,
    TabList,
    TabPanel,
    Region,
    Presentation,
}

impl AriaRole {
    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim().to_ascii_lowercase().as_str() {
            "alert" => Self::Alert,
            "alertdialog" => Self::AlertDialog,
            "button" => Self::Button,
            "dialog" => Self::Dialog,
            "link" => Self::Link,
            "status" => Self::Status,
            "tab" => Self::Tab,
            "tablist" => Self::TabList,
            "tabpanel" => Self::TabPanel,
            "region" => Self::Region,
            "none" | "presentation" => Self::Presentation,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alert => "alert",
            Self::AlertDialog => "alertdialog",
            Self::Button => "button",
            Self::Dialog => "dialog",
            Self::Link => "link",
            Self::Status => "status",
            Self::Tab => "tab",
            Self::TabList => "tablist",
            Self::TabPanel => "tabpanel",
            Self::Region => "region",
            Self::Presentation => "presentation",
        }
    }

    /// Role of an element, from its `role` attribute
    pub fn of(doc: &Document, id: NodeId) -> Option<Self> {
        doc.get_attribute(id, "role").and_then(Self::parse)
    }

    /// Implicit live-region politeness of the role
    pub fn live_mode(&self) -> Option<LiveRegionMode> {
        match self {
            Self::Status => Some(LiveRegionMode::Polite),
            Self::Alert => Some(LiveRegionMode::Assertive),
            _ => None,
        }
    }
}

/// Live region mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveRegionMode {
    Polite,
    Assertive,
}

impl LiveRegionMode {
    pub fn from_polite(polite: bool) -> Self {
        if polite { Self::Polite } else { Self::Assertive }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "polite" => Some(Self::Polite),
            "assertive" => Some(Self::Assertive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Polite => "polite",
            Self::Assertive => "assertive",
        }
    }

    /// Role carried by each message announced at this urgency
    pub fn message_role(&self) -> AriaRole {
        match self {
            Self::Polite => AriaRole::Status,
            Self::Assertive => AriaRole::Alert,
        }
    }
}

/// `aria-*` boolean attribute value as written by the behaviors
pub fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_role() {
        assert_eq!(AriaRole::parse("Dialog"), Some(AriaRole::Dialog));
        assert_eq!(AriaRole::parse("tablist"), Some(AriaRole::TabList));
        assert_eq!(AriaRole::parse("none"), Some(AriaRole::Presentation));
        assert_eq!(AriaRole::parse("banana"), None);
        assert_eq!(AriaRole::TabPanel.as_str(), "tabpanel");
    }

    #[test]
    fn test_live_modes() {
        assert_eq!(LiveRegionMode::from_polite(true), LiveRegionMode::Polite);
        assert_eq!(LiveRegionMode::Assertive.message_role(), AriaRole::Alert);
        assert_eq!(AriaRole::Status.live_mode(), Some(LiveRegionMode::Polite));
        assert_eq!(LiveRegionMode::parse("assertive"), Some(LiveRegionMode::Assertive));
    }

    #[test]
    fn test_role_of_element() {
        let mut doc = Document::new();
        let body = doc.body();
        let dialog = doc.append_element(body, "div", &[("role", "dialog")]).unwrap();
        assert_eq!(AriaRole::of(&doc, dialog), Some(AriaRole::Dialog));
        assert_eq!(AriaRole::of(&doc, body), None);
    }
}
