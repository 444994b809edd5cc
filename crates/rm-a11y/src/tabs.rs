//! Tabs behavior
//!
//! Roving tabindex plus `aria-selected` for `role="tablist"` roots. The
//! selected tab is read back from `aria-selected`; no index is mirrored.
//!
//! Tabs and their panels are paired once at init. Tabs or panels added
//! afterwards are not tracked.

use crate::aria::bool_attr;
use crate::focus::TabIndex;
use crate::{A11yError, AriaRole, Result};
use rm_dom::{Document, EventType, Key, NodeId};
use std::rc::Rc;

const TAB_SELECTOR: &str = r#"[role="tab"]"#;

#[derive(Debug)]
struct Pairing {
    tabs: Vec<NodeId>,
    panels: Vec<NodeId>,
}

/// Handle returned by [`init_tabs`]. The behavior stays attached when the
/// handle is dropped.
#[derive(Debug, Clone)]
pub struct TabSet {
    root: NodeId,
    pairing: Rc<Pairing>,
}

/// Attach tab behavior under `root` and activate the tab marked
/// `aria-selected="true"` (index 0 when none is).
///
/// Fails fast on malformed markup: no tabs, a tab without
/// `aria-controls`, or a reference to an id that is not in the document.
pub fn init_tabs(doc: &mut Document, root: NodeId) -> Result<TabSet> {
    if doc.element(root).is_none() {
        return Err(A11yError::NodeNotFound(root));
    }
    if AriaRole::of(doc, root) != Some(AriaRole::TabList) {
        tracing::warn!(?root, "tabs root is missing role=\"tablist\"");
    }

    let tabs = doc.query_selector_all(root, TAB_SELECTOR)?;
    if tabs.is_empty() {
        return Err(A11yError::EmptyTabList(root));
    }

    let panels = tabs
        .iter()
        .enumerate()
        .map(|(index, &tab)| {
            let reference = doc
                .get_attribute(tab, "aria-controls")
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .ok_or(A11yError::MissingPanelReference { index })?;
            doc.get_element_by_id(reference)
                .ok_or_else(|| A11yError::PanelNotFound {
                    index,
                    reference: reference.to_string(),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    let set = TabSet {
        root,
        pairing: Rc::new(Pairing { tabs, panels }),
    };

    for (index, &tab) in set.pairing.tabs.iter().enumerate() {
        let on_click = set.clone();
        doc.add_event_listener(tab, EventType::Click, move |doc, _| {
            on_click.activate(doc, index);
        });

        let on_key = set.clone();
        doc.add_event_listener(tab, EventType::KeyDown, move |doc, event| {
            let Some(key) = event.key.as_ref() else { return };
            if let Some(next) = on_key.arrow_target(index, key) {
                event.prevent_default();
                on_key.activate(doc, next);
            }
        });
    }

    let initial = set.selected_in_markup(doc).unwrap_or(0);
    set.activate(doc, initial);
    tracing::debug!(?root, tabs = set.len(), initial, "tabs initialized");
    Ok(set)
}

impl TabSet {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.pairing.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairing.tabs.is_empty()
    }

    pub fn tabs(&self) -> &[NodeId] {
        &self.pairing.tabs
    }

    pub fn panels(&self) -> &[NodeId] {
        &self.pairing.panels
    }

    /// Index of the tab whose `aria-selected` is "true"
    pub fn active_index(&self, doc: &Document) -> Option<usize> {
        self.selected_in_markup(doc)
    }

    fn selected_in_markup(&self, doc: &Document) -> Option<usize> {
        self.pairing
            .tabs
            .iter()
            .position(|&tab| doc.get_attribute(tab, "aria-selected") == Some("true"))
    }

    /// Select tab `index`, show its panel, hide the others and focus it.
    /// Out-of-range indices are ignored.
    pub fn activate(&self, doc: &mut Document, index: usize) {
        if index >= self.len() {
            tracing::warn!(index, len = self.len(), "tab index out of range");
            return;
        }

        for (i, (&tab, &panel)) in self.pairing.tabs.iter().zip(&self.pairing.panels).enumerate() {
            let selected = i == index;
            let results = [
                doc.set_attribute(tab, "aria-selected", bool_attr(selected)),
                doc.set_tab_index(tab, TabIndex::roving(selected)),
                doc.set_hidden(panel, !selected),
            ];
            for err in results.into_iter().filter_map(|r| r.err()) {
                tracing::warn!(%err, tab = i, "tab pairing no longer valid");
            }
        }

        doc.focus(self.pairing.tabs[index]);
        tracing::trace!(root = ?self.root, index, "tab activated");
    }

    /// Arrow-key movement from `from`, wrapping both ways
    fn arrow_target(&self, from: usize, key: &Key) -> Option<usize> {
        let len = self.len();
        let next = match key {
            Key::ArrowRight | Key::ArrowDown => (from + 1) % len,
            Key::ArrowLeft | Key::ArrowUp => (from + len - 1) % len,
            _ => return None,
        };
        (next != from).then_some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(count: usize, selected: Option<usize>) -> (Document, NodeId) {
        let mut doc = Document::new();
        let body = doc.body();
        let list = doc.append_element(body, "div", &[("role", "tablist")]).unwrap();
        for i in 0..count {
            let panel_id = format!("panel-{i}");
            let mut attrs = vec![("role", "tab"), ("aria-controls", panel_id.as_str())];
            if selected == Some(i) {
                attrs.push(("aria-selected", "true"));
            }
            doc.append_element(list, "button", &attrs).unwrap();
        }
        for i in 0..count {
            let panel_id = format!("panel-{i}");
            doc.append_element(body, "div", &[("role", "tabpanel"), ("id", panel_id.as_str())])
                .unwrap();
        }
        (doc, list)
    }

    #[test]
    fn test_initial_activation_defaults_to_first() {
        let (mut doc, list) = build(3, None);
        let set = init_tabs(&mut doc, list).unwrap();

        assert_eq!(set.active_index(&doc), Some(0));
        assert_eq!(doc.focused(), Some(set.tabs()[0]));
        assert_eq!(doc.get_attribute(set.tabs()[1], "aria-selected"), Some("false"));
        assert_eq!(doc.get_attribute(set.tabs()[1], "tabindex"), Some("-1"));
        assert!(!doc.is_hidden(set.panels()[0]));
        assert!(doc.is_hidden(set.panels()[2]));
    }

    #[test]
    fn test_initial_activation_honours_markup() {
        let (mut doc, list) = build(3, Some(2));
        let set = init_tabs(&mut doc, list).unwrap();
        assert_eq!(set.active_index(&doc), Some(2));
        assert_eq!(doc.get_attribute(set.tabs()[2], "tabindex"), Some("0"));
    }

    #[test]
    fn test_click_activates() {
        let (mut doc, list) = build(3, None);
        let set = init_tabs(&mut doc, list).unwrap();

        doc.click(set.tabs()[1]);
        assert_eq!(set.active_index(&doc), Some(1));
        assert!(!doc.is_hidden(set.panels()[1]));
        assert!(doc.is_hidden(set.panels()[0]));
    }

    #[test]
    fn test_arrow_keys_wrap() {
        let (mut doc, list) = build(3, None);
        let set = init_tabs(&mut doc, list).unwrap();

        doc.press_key(Key::ArrowLeft, false);
        assert_eq!(set.active_index(&doc), Some(2));
        assert_eq!(doc.focused(), Some(set.tabs()[2]));
        doc.press_key(Key::ArrowDown, false);
        assert_eq!(set.active_index(&doc), Some(0));
        doc.press_key(Key::ArrowUp, false);
        assert_eq!(set.active_index(&doc), Some(2));
    }

    #[test]
    fn test_other_keys_ignored() {
        let (mut doc, list) = build(3, Some(1));
        let set = init_tabs(&mut doc, list).unwrap();

        assert!(doc.press_key(Key::Enter, false));
        assert!(doc.press_key(Key::Character('x'), false));
        assert_eq!(set.active_index(&doc), Some(1));
    }

    #[test]
    fn test_single_tab_arrow_is_noop() {
        let (mut doc, list) = build(1, None);
        let set = init_tabs(&mut doc, list).unwrap();
        assert!(doc.press_key(Key::ArrowRight, false));
        assert_eq!(set.active_index(&doc), Some(0));
    }

    #[test]
    fn test_late_tabs_not_tracked() {
        let (mut doc, list) = build(2, None);
        let set = init_tabs(&mut doc, list).unwrap();
        doc.append_element(list, "button", &[("role", "tab"), ("aria-controls", "panel-0")])
            .unwrap();

        assert_eq!(set.len(), 2);
        doc.press_key(Key::ArrowRight, false);
        doc.press_key(Key::ArrowRight, false);
        assert_eq!(set.active_index(&doc), Some(0));
    }

    #[test]
    fn test_malformed_markup_fails_fast() {
        let mut doc = Document::new();
        let body = doc.body();
        let list = doc.append_element(body, "div", &[("role", "tablist")]).unwrap();
        assert_eq!(init_tabs(&mut doc, list).unwrap_err(), A11yError::EmptyTabList(list));

        doc.append_element(list, "button", &[("role", "tab")]).unwrap();
        assert_eq!(
            init_tabs(&mut doc, list).unwrap_err(),
            A11yError::MissingPanelReference { index: 0 }
        );

        let mut doc = Document::new();
        let body = doc.body();
        let list = doc.append_element(body, "div", &[("role", "tablist")]).unwrap();
        doc.append_element(list, "button", &[("role", "tab"), ("aria-controls", "nope")])
            .unwrap();
        assert_eq!(
            init_tabs(&mut doc, list).unwrap_err(),
            A11yError::PanelNotFound {
                index: 0,
                reference: "nope".into()
            }
        );
    }
}
