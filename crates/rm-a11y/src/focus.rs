//! Focus Management
//!
//! The "interactive" predicate shared by the behaviors.

use rm_dom::{Compound, Document, NodeId, Selector, SelectorList};

/// Selector text of the interactive predicate
pub const INTERACTIVE_SELECTOR: &str =
    r#"a, button, input, select, textarea, [tabindex]:not([tabindex="-1"])"#;

fn interactive_selector() -> SelectorList {
    let tag = |t: &str| Compound {
        parts: vec![Selector::Tag(t.to_string())],
    };
    let tabindex = Compound {
        parts: vec![
            Selector::Attr {
                name: "tabindex".into(),
                value: None,
            },
            Selector::Not(Box::new(Compound {
                parts: vec![Selector::Attr {
                    name: "tabindex".into(),
                    value: Some("-1".into()),
                }],
            })),
        ],
    };
    SelectorList {
        compounds: vec![
            tag("a"),
            tag("button"),
            tag("input"),
            tag("select"),
            tag("textarea"),
            tabindex,
        ],
    }
}

/// Interactive, enabled, rendered descendants of `container` in tree
/// order. Always walks the live tree; callers must not cache the result
/// across interactions.
pub fn focusable_elements(doc: &Document, container: NodeId) -> Vec<NodeId> {
    let selector = interactive_selector();
    doc.select(container, &selector)
        .filter(|&id| {
            let enabled = doc.element(id).is_some_and(|el| !el.is_disabled());
            enabled && doc.is_rendered(id)
        })
        .collect()
}

/// Tab index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabIndex {
    /// tabindex="-1": focusable by script only
    Programmatic,
    /// tabindex="0" or positive
    Sequential(i32),
}

impl TabIndex {
    /// Parse a `tabindex` attribute value
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().parse::<i32>() {
            Ok(n) if n < 0 => Some(Self::Programmatic),
            Ok(n) => Some(Self::Sequential(n)),
            Err(_) => None,
        }
    }

    /// Roving tabindex: the active item is the single tab stop
    pub fn roving(active: bool) -> i32 {
        if active { 0 } else { -1 }
    }

    pub fn is_tab_stop(&self) -> bool {
        matches!(self, Self::Sequential(_))
    }
}
