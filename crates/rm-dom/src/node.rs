//! DOM Node
//!
//! Links are stored as `NodeId`s into the tree arena rather than pointers,
//! so a node never owns its neighbours.

use crate::{NamedNodeMap, NodeId};

/// DOM Node - Core structure
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if root or detached)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn with_data(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a new element node
    pub fn element(tag: &str) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a new text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::with_data(NodeData::Text(content.into()))
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::with_data(NodeData::Document)
    }

    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
}

/// Element-specific data
#[derive(Debug)]
pub struct ElementData {
    /// Lowercased tag name
    pub tag: String,
    pub attrs: NamedNodeMap,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: NamedNodeMap::new(),
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get_attribute(name)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.has_attribute(name)
    }

    /// `id` attribute
    pub fn id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    /// Whitespace-separated `class` tokens
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.get_attr("class").unwrap_or("").split_ascii_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// Parsed `tabindex`, `None` when absent or not an integer
    pub fn tab_index(&self) -> Option<i32> {
        self.get_attr("tabindex")?.trim().parse().ok()
    }

    /// Natively interactive element
    pub fn is_interactive(&self) -> bool {
        matches!(
            self.tag.as_str(),
            "a" | "button" | "input" | "select" | "textarea"
        )
    }

    /// `disabled` only applies to form controls
    pub fn is_disabled(&self) -> bool {
        matches!(
            self.tag.as_str(),
            "button" | "input" | "select" | "textarea"
        ) && self.has_attr("disabled")
    }

    /// Inline `display: none`
    pub fn is_display_none(&self) -> bool {
        let Some(style) = self.get_attr("style") else {
            return false;
        };
        style.split(';').any(|decl| {
            let mut parts = decl.splitn(2, ':');
            let prop = parts.next().unwrap_or("").trim();
            let value = parts.next().unwrap_or("").trim();
            prop.eq_ignore_ascii_case("display") && value.eq_ignore_ascii_case("none")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_flags() {
        let mut el = ElementData::new("BUTTON");
        assert_eq!(el.tag, "button");
        assert!(el.is_interactive());
        assert!(!el.is_disabled());

        el.attrs.set_attribute("disabled", "");
        assert!(el.is_disabled());
    }

    #[test]
    fn test_disabled_ignored_on_div() {
        let mut el = ElementData::new("div");
        el.attrs.set_attribute("disabled", "");
        assert!(!el.is_disabled());
    }

    #[test]
    fn test_display_none() {
        let mut el = ElementData::new("div");
        el.attrs.set_attribute("style", "color: red; display : NONE");
        assert!(el.is_display_none());

        el.attrs.set_attribute("style", "display: block");
        assert!(!el.is_display_none());
    }

    #[test]
    fn test_tab_index_parse() {
        let mut el = ElementData::new("div");
        assert_eq!(el.tab_index(), None);
        el.attrs.set_attribute("tabindex", "-1");
        assert_eq!(el.tab_index(), Some(-1));
        el.attrs.set_attribute("tabindex", "x");
        assert_eq!(el.tab_index(), None);
    }
}
