//! Document - High-level document API
//!
//! Owns the tree plus everything a page shares: focus, listeners,
//! timers and the document element's computed custom properties.

use crate::dom_events::{Callback, EventListeners};
use crate::timers::TimerQueue;
use crate::{
    ComputedStyle, DomError, DomTree, ElementData, Event, EventType, Key, ListenerId, NodeId,
    Result, SelectorList, TimerId,
};
use std::rc::Rc;
use std::time::Duration;

/// HTML Document
pub struct Document {
    tree: DomTree,
    html_element: NodeId,
    head_element: NodeId,
    body_element: NodeId,
    /// `None` means the body is the active element
    focused: Option<NodeId>,
    listeners: EventListeners,
    timers: TimerQueue,
    style: ComputedStyle,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("nodes", &self.tree.len())
            .field("focused", &self.focused)
            .field("listeners", &self.listeners.len())
            .field("timers", &self.timers.len())
            .finish()
    }
}

impl Document {
    /// Create a document with `<html><head></head><body></body></html>`
    pub fn new() -> Self {
        let mut tree = DomTree::new();
        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        // Fresh nodes: linking cannot fail
        let _ = tree.append_child(NodeId::ROOT, html);
        let _ = tree.append_child(html, head);
        let _ = tree.append_child(html, body);

        Self {
            tree,
            html_element: html,
            head_element: head,
            body_element: body,
            focused: None,
            listeners: EventListeners::default(),
            timers: TimerQueue::default(),
            style: ComputedStyle::new(),
        }
    }

    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Get `<html>` element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    pub fn head(&self) -> NodeId {
        self.head_element
    }

    pub fn body(&self) -> NodeId {
        self.body_element
    }

    // ------------------------------------------------------------------
    // Tree mutation
    // ------------------------------------------------------------------

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.tree.create_element(tag)
    }

    pub fn create_text(&mut self, content: impl Into<String>) -> NodeId {
        self.tree.create_text(content)
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.tree.append_child(parent, child)
    }

    /// Create an element with attributes and append it to `parent`
    pub fn append_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        attrs: &[(&str, &str)],
    ) -> Result<NodeId> {
        let id = self.create_element(tag);
        if let Some(el) = self.element_mut(id) {
            for (name, value) in attrs {
                el.attrs.set_attribute(name, *value);
            }
        }
        self.append_child(parent, id)?;
        Ok(id)
    }

    /// Create a text node and append it to `parent`
    pub fn append_text(&mut self, parent: NodeId, content: impl Into<String>) -> Result<NodeId> {
        let id = self.create_text(content);
        self.append_child(parent, id)?;
        Ok(id)
    }

    /// `node.remove()`: detach from the parent
    pub fn remove(&mut self, id: NodeId) {
        self.tree.detach(id);
        self.fixup_focus();
    }

    pub fn is_connected(&self, id: NodeId) -> bool {
        self.tree.is_connected(id)
    }

    pub fn text_content(&self, id: NodeId) -> String {
        self.tree.text_content(id)
    }

    // ------------------------------------------------------------------
    // Elements and attributes
    // ------------------------------------------------------------------

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.tree.get(id)?.as_element()
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.tree.get_mut(id)?.as_element_mut()
    }

    fn require_element_mut(&mut self, id: NodeId) -> Result<&mut ElementData> {
        match self.tree.get_mut(id) {
            None => Err(DomError::NodeNotFound(id)),
            Some(node) => node.as_element_mut().ok_or(DomError::NotAnElement(id)),
        }
    }

    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?.get_attr(name)
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.element(id).is_some_and(|el| el.has_attr(name))
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> Result<()> {
        self.require_element_mut(id)?.attrs.set_attribute(name, value);
        self.fixup_focus();
        Ok(())
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Result<Option<String>> {
        let old = self.require_element_mut(id)?.attrs.remove_attribute(name);
        self.fixup_focus();
        Ok(old)
    }

    /// `element.hidden = hidden`
    pub fn set_hidden(&mut self, id: NodeId, hidden: bool) -> Result<()> {
        self.require_element_mut(id)?
            .attrs
            .toggle_attribute("hidden", Some(hidden));
        self.fixup_focus();
        Ok(())
    }

    pub fn is_hidden(&self, id: NodeId) -> bool {
        self.has_attribute(id, "hidden")
    }

    /// `element.tabIndex = index`
    pub fn set_tab_index(&mut self, id: NodeId, index: i32) -> Result<()> {
        self.require_element_mut(id)?
            .attrs
            .set_attribute("tabindex", index.to_string());
        Ok(())
    }

    /// First connected element whose `id` attribute equals `id`
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .descendants(NodeId::ROOT)
            .find(|&n| self.element(n).and_then(ElementData::id) == Some(id))
    }

    /// Matching descendants of `root` in tree order
    pub fn query_selector_all(&self, root: NodeId, selector: &str) -> Result<Vec<NodeId>> {
        let list = SelectorList::parse(selector)?;
        Ok(self.select(root, &list).collect())
    }

    pub fn query_selector(&self, root: NodeId, selector: &str) -> Result<Option<NodeId>> {
        let list = SelectorList::parse(selector)?;
        Ok(self.select(root, &list).next())
    }

    /// Matching descendants for an already parsed selector list
    pub fn select<'a>(
        &'a self,
        root: NodeId,
        list: &'a SelectorList,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.tree
            .descendants(root)
            .filter(move |&n| self.element(n).is_some_and(|el| list.matches(el)))
    }

    // ------------------------------------------------------------------
    // Rendering and focus
    // ------------------------------------------------------------------

    /// Whether the element generates a box: connected, and neither it nor
    /// an ancestor is `hidden` or `display: none`.
    pub fn is_rendered(&self, id: NodeId) -> bool {
        if self.element(id).is_none() || !self.tree.is_connected(id) {
            return false;
        }
        std::iter::once(id)
            .chain(self.tree.ancestors(id))
            .filter_map(|n| self.element(n))
            .all(|el| !el.has_attr("hidden") && !el.is_display_none())
    }

    /// Whether `focus()` on the element would take effect
    pub fn is_focusable(&self, id: NodeId) -> bool {
        let Some(el) = self.element(id) else {
            return false;
        };
        (el.is_interactive() || el.tab_index().is_some())
            && !el.is_disabled()
            && self.is_rendered(id)
    }

    /// Focused element, `None` when focus rests on the body
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// `document.activeElement`
    pub fn active_element(&self) -> NodeId {
        self.focused.unwrap_or(self.body_element)
    }

    /// `element.focus()`; a no-op returning false for unfocusable targets
    pub fn focus(&mut self, id: NodeId) -> bool {
        if !self.is_focusable(id) {
            tracing::trace!(?id, "focus ignored: element not focusable");
            return false;
        }
        self.focused = Some(id);
        true
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Focus falls back to the body once the focused element stops being
    /// focusable (hidden, removed, disabled).
    fn fixup_focus(&mut self) {
        if let Some(id) = self.focused {
            if !self.is_focusable(id) {
                tracing::trace!(?id, "focused element lost focusability");
                self.focused = None;
            }
        }
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    /// `target.addEventListener(type, callback)`. Use `NodeId::ROOT` for
    /// document-level listeners.
    pub fn add_event_listener<F>(&mut self, target: NodeId, event_type: EventType, callback: F) -> ListenerId
    where
        F: Fn(&mut Document, &mut Event) + 'static,
    {
        let callback: Callback = Rc::new(callback);
        self.listeners.add(target, event_type, callback)
    }

    pub fn remove_event_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn has_listener(&self, id: ListenerId) -> bool {
        self.listeners.contains(id)
    }

    pub fn listener_count(&self, target: NodeId, event_type: EventType) -> usize {
        self.listeners.count_for(target, event_type)
    }

    /// Dispatch along target → ancestors. Returns false when a listener
    /// called `prevent_default`.
    pub fn dispatch_event(&mut self, mut event: Event) -> bool {
        let path: Vec<NodeId> = std::iter::once(event.target)
            .chain(self.tree.ancestors(event.target))
            .collect();

        for node in path {
            event.current_target = node;
            for (id, callback) in self.listeners.snapshot(node, event.event_type) {
                // Removed by an earlier listener of this dispatch
                if !self.listeners.contains(id) {
                    continue;
                }
                callback(self, &mut event);
            }
            if event.is_propagation_stopped() {
                break;
            }
        }

        !event.is_default_prevented()
    }

    /// Simulate a key press on the active element, including the default
    /// Tab action (sequential focus navigation).
    pub fn press_key(&mut self, key: Key, shift_key: bool) -> bool {
        let target = self.active_element();
        let is_tab = key == Key::Tab;
        let proceed = self.dispatch_event(Event::keydown(target, key, shift_key));
        if proceed && is_tab {
            self.move_focus(shift_key);
        }
        proceed
    }

    /// Simulate a pointer click: focus, then dispatch `click`
    pub fn click(&mut self, id: NodeId) -> bool {
        if self.is_focusable(id) {
            self.focused = Some(id);
        }
        self.dispatch_event(Event::click(id))
    }

    // ------------------------------------------------------------------
    // Timers
    // ------------------------------------------------------------------

    /// `setTimeout(callback, delay)`
    pub fn set_timeout<F>(&mut self, delay: Duration, callback: F) -> TimerId
    where
        F: FnOnce(&mut Document) + 'static,
    {
        self.timers.set_timeout(delay, Box::new(callback))
    }

    pub fn clear_timeout(&mut self, id: TimerId) -> bool {
        self.timers.clear(id)
    }

    /// Advance the virtual clock, running every timer that comes due.
    /// Returns the number of callbacks fired.
    pub fn advance(&mut self, by: Duration) -> usize {
        let until = self.timers.now() + by;
        let mut fired = 0;
        while let Some(callback) = self.timers.pop_due(until) {
            callback(self);
            fired += 1;
        }
        self.timers.set_now(until);
        fired
    }

    /// Virtual time since the document was created
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn time_until_next_timer(&self) -> Option<Duration> {
        self.timers.time_until_next()
    }

    // ------------------------------------------------------------------
    // Style
    // ------------------------------------------------------------------

    /// `getComputedStyle(document.documentElement)`
    pub fn style(&self) -> &ComputedStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut ComputedStyle {
        &mut self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_document_structure() {
        let doc = Document::new();
        assert_eq!(doc.element(doc.body()).unwrap().tag, "body");
        assert_eq!(doc.tree().parent(doc.body()), Some(doc.document_element()));
        assert_eq!(doc.active_element(), doc.body());
    }

    #[test]
    fn test_get_element_by_id_skips_detached() {
        let mut doc = Document::new();
        let body = doc.body();
        let panel = doc.append_element(body, "div", &[("id", "p1")]).unwrap();
        assert_eq!(doc.get_element_by_id("p1"), Some(panel));

        doc.remove(panel);
        assert_eq!(doc.get_element_by_id("p1"), None);
    }

    #[test]
    fn test_focus_rules() {
        let mut doc = Document::new();
        let body = doc.body();
        let div = doc.append_element(body, "div", &[]).unwrap();
        let button = doc.append_element(div, "button", &[]).unwrap();
        let disabled = doc.append_element(div, "input", &[("disabled", "")]).unwrap();
        let programmatic = doc.append_element(div, "div", &[("tabindex", "-1")]).unwrap();

        assert!(!doc.focus(div));
        assert!(!doc.focus(disabled));
        assert!(doc.focus(programmatic));
        assert!(doc.focus(button));
        assert_eq!(doc.focused(), Some(button));

        doc.set_hidden(div, true).unwrap();
        assert_eq!(doc.focused(), None);
        assert!(!doc.focus(button));
    }

    #[test]
    fn test_dispatch_bubbles_to_document() {
        let mut doc = Document::new();
        let body = doc.body();
        let button = doc.append_element(body, "button", &[]).unwrap();
        let log = Rc::new(RefCell::new(Vec::new()));

        for target in [button, body, NodeId::ROOT] {
            let log = Rc::clone(&log);
            doc.add_event_listener(target, EventType::Click, move |_, event| {
                log.borrow_mut().push(event.current_target);
            });
        }

        assert!(doc.click(button));
        assert_eq!(*log.borrow(), vec![button, body, NodeId::ROOT]);
    }

    #[test]
    fn test_listener_removed_mid_dispatch_does_not_fire() {
        let mut doc = Document::new();
        let body = doc.body();
        let fired = Rc::new(RefCell::new(false));

        let second_id = Rc::new(RefCell::new(None));
        let sid = Rc::clone(&second_id);
        doc.add_event_listener(body, EventType::Click, move |doc, _| {
            if let Some(id) = *sid.borrow() {
                doc.remove_event_listener(id);
            }
        });
        let f = Rc::clone(&fired);
        let id = doc.add_event_listener(body, EventType::Click, move |_, _| {
            *f.borrow_mut() = true;
        });
        *second_id.borrow_mut() = Some(id);

        doc.click(body);
        assert!(!*fired.borrow());
    }

    #[test]
    fn test_stop_propagation() {
        let mut doc = Document::new();
        let body = doc.body();
        let button = doc.append_element(body, "button", &[]).unwrap();
        let reached = Rc::new(RefCell::new(false));

        doc.add_event_listener(button, EventType::Click, |_, event| event.stop_propagation());
        let r = Rc::clone(&reached);
        doc.add_event_listener(NodeId::ROOT, EventType::Click, move |_, _| {
            *r.borrow_mut() = true;
        });

        doc.click(button);
        assert!(!*reached.borrow());
    }

    #[test]
    fn test_prevent_default_blocks_tab_navigation() {
        let mut doc = Document::new();
        let body = doc.body();
        let a = doc.append_element(body, "button", &[]).unwrap();
        let _b = doc.append_element(body, "button", &[]).unwrap();
        doc.focus(a);

        doc.add_event_listener(a, EventType::KeyDown, |_, event| event.prevent_default());
        assert!(!doc.press_key(Key::Tab, false));
        assert_eq!(doc.focused(), Some(a));
    }

    #[test]
    fn test_timers_fire_in_order() {
        let mut doc = Document::new();
        let body = doc.body();
        let log = Rc::new(RefCell::new(Vec::new()));

        for (delay, label) in [(300, "c"), (100, "a"), (200, "b")] {
            let log = Rc::clone(&log);
            doc.set_timeout(Duration::from_millis(delay), move |_| {
                log.borrow_mut().push(label);
            });
        }
        let node = doc.append_element(body, "div", &[]).unwrap();
        doc.set_timeout(Duration::from_millis(150), move |doc| doc.remove(node));

        assert_eq!(doc.advance(Duration::from_millis(199)), 2);
        assert!(!doc.is_connected(node));
        assert_eq!(doc.advance(Duration::from_millis(200)), 2);
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
        assert_eq!(doc.now(), Duration::from_millis(399));
    }

    #[test]
    fn test_query_selector_all() {
        let mut doc = Document::new();
        let body = doc.body();
        let list = doc.append_element(body, "div", &[("role", "tablist")]).unwrap();
        let t1 = doc.append_element(list, "button", &[("role", "tab")]).unwrap();
        let t2 = doc.append_element(list, "button", &[("role", "tab")]).unwrap();
        doc.append_element(body, "button", &[("role", "tab")]).unwrap();

        assert_eq!(doc.query_selector_all(list, "[role=\"tab\"]").unwrap(), vec![t1, t2]);
        assert!(doc.query_selector_all(list, "div >").is_err());
    }
}
