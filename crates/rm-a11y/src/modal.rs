//! Modal dialog behavior
//!
//! Focus trap plus Escape dismissal for
//! `<div role="dialog" aria-modal="true" hidden>` containers. The DOM stays
//! the source of truth for visibility; the only session state kept here is
//! the opener to restore focus to.

use crate::focus::focusable_elements;
use crate::{A11yError, AriaRole, Result};
use rm_dom::{Document, Event, EventType, Key, ListenerId, NodeId};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct ModalSession {
    /// Element focused when `open()` ran
    opener: Option<NodeId>,
    /// Container-scoped Tab trap
    trap: Option<ListenerId>,
    /// Document-level Escape handler
    escape: Option<ListenerId>,
}

/// Handle returned by [`init_modal`]. Clones share one session.
#[derive(Debug, Clone)]
pub struct Modal {
    container: NodeId,
    session: Rc<RefCell<ModalSession>>,
}

/// Attach modal behavior to a dialog container.
pub fn init_modal(doc: &Document, container: NodeId) -> Result<Modal> {
    if doc.element(container).is_none() {
        return Err(A11yError::NodeNotFound(container));
    }
    if AriaRole::of(doc, container) != Some(AriaRole::Dialog) {
        tracing::warn!(?container, "modal container is missing role=\"dialog\"");
    }
    if doc.get_attribute(container, "aria-modal") != Some("true") {
        tracing::warn!(?container, "modal container is missing aria-modal=\"true\"");
    }

    Ok(Modal {
        container,
        session: Rc::new(RefCell::new(ModalSession::default())),
    })
}

impl Modal {
    pub fn container(&self) -> NodeId {
        self.container
    }

    /// Whether the key handlers are currently attached
    pub fn is_open(&self) -> bool {
        self.session.borrow().trap.is_some()
    }

    /// Element focus returns to on close
    pub fn opener(&self) -> Option<NodeId> {
        self.session.borrow().opener
    }

    /// Show the dialog, trap Tab inside it and focus its first interactive
    /// descendant (or the container itself). Calling it again while open
    /// re-captures the opener without attaching duplicate handlers. Does
    /// nothing when the container has left the document.
    pub fn open(&self, doc: &mut Document) {
        let container = self.container;
        if !doc.is_connected(container) {
            tracing::warn!(?container, "modal container is no longer in the document");
            return;
        }
        if let Err(err) = doc.set_hidden(container, false) {
            tracing::warn!(%err, "could not reveal modal container");
            return;
        }

        {
            let mut session = self.session.borrow_mut();
            session.opener = doc.focused();

            if session.trap.is_none() {
                session.trap = Some(doc.add_event_listener(
                    container,
                    EventType::KeyDown,
                    move |doc, event| trap_tab(doc, container, event),
                ));
            }
            if session.escape.is_none() {
                let modal = self.clone();
                session.escape = Some(doc.add_event_listener(
                    NodeId::ROOT,
                    EventType::KeyDown,
                    move |doc, event| {
                        if event.is_key(&Key::Escape) {
                            modal.close(doc);
                        }
                    },
                ));
            }
        }

        let target = focusable_elements(doc, container)
            .first()
            .copied()
            .unwrap_or(container);
        doc.focus(target);
        tracing::debug!(?container, opener = ?self.opener(), ?target, "modal opened");
    }

    /// Hide the dialog, detach both handlers and return focus to the
    /// opener. Safe to call repeatedly.
    pub fn close(&self, doc: &mut Document) {
        let (trap, escape, opener) = {
            let mut session = self.session.borrow_mut();
            (
                session.trap.take(),
                session.escape.take(),
                session.opener.take(),
            )
        };

        if let Err(err) = doc.set_hidden(self.container, true) {
            tracing::warn!(%err, "modal container vanished before close");
        }
        for id in [trap, escape].into_iter().flatten() {
            doc.remove_event_listener(id);
        }

        // Gone or no longer focusable openers are skipped by `focus`
        if let Some(opener) = opener {
            doc.focus(opener);
        }
        tracing::debug!(container = ?self.container, ?opener, "modal closed");
    }
}

/// Wrap Tab from the last interactive element to the first, and
/// Shift+Tab from the first to the last. Recomputes the set every time.
fn trap_tab(doc: &mut Document, container: NodeId, event: &mut Event) {
    if !event.is_key(&Key::Tab) {
        return;
    }
    let focusable = focusable_elements(doc, container);
    let (Some(&first), Some(&last)) = (focusable.first(), focusable.last()) else {
        return;
    };

    let active = doc.focused();
    if event.shift_key && active == Some(first) {
        event.prevent_default();
        doc.focus(last);
    } else if !event.shift_key && active == Some(last) {
        event.prevent_default();
        doc.focus(first);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        doc: Document,
        opener: NodeId,
        dialog: NodeId,
        buttons: Vec<NodeId>,
    }

    fn fixture(count: usize) -> Fixture {
        let mut doc = Document::new();
        let body = doc.body();
        let opener = doc.append_element(body, "button", &[("id", "open")]).unwrap();
        let dialog = doc
            .append_element(
                body,
                "div",
                &[("role", "dialog"), ("aria-modal", "true"), ("tabindex", "-1"), ("hidden", "")],
            )
            .unwrap();
        let buttons = (0..count)
            .map(|_| doc.append_element(dialog, "button", &[]).unwrap())
            .collect();
        doc.append_element(body, "button", &[("id", "after")]).unwrap();
        Fixture {
            doc,
            opener,
            dialog,
            buttons,
        }
    }

    #[test]
    fn test_open_reveals_and_focuses_first() {
        let mut f = fixture(3);
        f.doc.focus(f.opener);
        let modal = init_modal(&f.doc, f.dialog).unwrap();

        modal.open(&mut f.doc);
        assert!(!f.doc.is_hidden(f.dialog));
        assert_eq!(f.doc.focused(), Some(f.buttons[0]));
        assert!(modal.is_open());
        assert_eq!(modal.opener(), Some(f.opener));
    }

    #[test]
    fn test_tab_wraps_inside() {
        let mut f = fixture(3);
        let modal = init_modal(&f.doc, f.dialog).unwrap();
        modal.open(&mut f.doc);

        f.doc.press_key(Key::Tab, false);
        f.doc.press_key(Key::Tab, false);
        assert_eq!(f.doc.focused(), Some(f.buttons[2]));
        f.doc.press_key(Key::Tab, false);
        assert_eq!(f.doc.focused(), Some(f.buttons[0]));
        f.doc.press_key(Key::Tab, true);
        assert_eq!(f.doc.focused(), Some(f.buttons[2]));
    }

    #[test]
    fn test_escape_closes_and_restores_focus() {
        let mut f = fixture(2);
        f.doc.focus(f.opener);
        let modal = init_modal(&f.doc, f.dialog).unwrap();
        modal.open(&mut f.doc);

        f.doc.press_key(Key::Escape, false);
        assert!(f.doc.is_hidden(f.dialog));
        assert!(!modal.is_open());
        assert_eq!(f.doc.focused(), Some(f.opener));
        assert_eq!(f.doc.listener_count(NodeId::ROOT, EventType::KeyDown), 0);
        assert_eq!(f.doc.listener_count(f.dialog, EventType::KeyDown), 0);
    }

    #[test]
    fn test_empty_modal_focuses_container_and_tab_is_noop() {
        let mut f = fixture(0);
        let modal = init_modal(&f.doc, f.dialog).unwrap();
        modal.open(&mut f.doc);
        assert_eq!(f.doc.focused(), Some(f.dialog));

        let mut event = Event::keydown(f.dialog, Key::Tab, false);
        trap_tab(&mut f.doc, f.dialog, &mut event);
        assert!(!event.is_default_prevented());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut f = fixture(1);
        let modal = init_modal(&f.doc, f.dialog).unwrap();
        modal.close(&mut f.doc);
        modal.close(&mut f.doc);
        assert!(f.doc.is_hidden(f.dialog));

        modal.open(&mut f.doc);
        modal.close(&mut f.doc);
        modal.close(&mut f.doc);
        assert_eq!(f.doc.listener_count(NodeId::ROOT, EventType::KeyDown), 0);
    }

    #[test]
    fn test_reopen_recaptures_opener_without_duplicate_handlers() {
        let mut f = fixture(2);
        let modal = init_modal(&f.doc, f.dialog).unwrap();
        f.doc.focus(f.opener);
        modal.open(&mut f.doc);
        modal.open(&mut f.doc);

        assert_eq!(modal.opener(), Some(f.buttons[0]));
        assert_eq!(f.doc.listener_count(NodeId::ROOT, EventType::KeyDown), 1);
        assert_eq!(f.doc.listener_count(f.dialog, EventType::KeyDown), 1);
    }

    #[test]
    fn test_removed_opener_is_noop() {
        let mut f = fixture(1);
        f.doc.focus(f.opener);
        let modal = init_modal(&f.doc, f.dialog).unwrap();
        modal.open(&mut f.doc);

        f.doc.remove(f.opener);
        modal.close(&mut f.doc);
        assert_eq!(f.doc.focused(), None);
    }

    #[test]
    fn test_trap_sees_buttons_added_while_open() {
        let mut f = fixture(1);
        let modal = init_modal(&f.doc, f.dialog).unwrap();
        modal.open(&mut f.doc);
        let added = f.doc.append_element(f.dialog, "button", &[]).unwrap();

        f.doc.press_key(Key::Tab, false);
        assert_eq!(f.doc.focused(), Some(added));
        f.doc.press_key(Key::Tab, false);
        assert_eq!(f.doc.focused(), Some(f.buttons[0]));
    }

    #[test]
    fn test_open_after_container_removed_is_noop() {
        let mut f = fixture(2);
        let modal = init_modal(&f.doc, f.dialog).unwrap();
        f.doc.remove(f.dialog);
        f.doc.focus(f.opener);

        modal.open(&mut f.doc);
        assert!(!modal.is_open());
        assert_eq!(modal.opener(), None);
        assert_eq!(f.doc.focused(), Some(f.opener));
        assert_eq!(f.doc.listener_count(f.dialog, EventType::KeyDown), 0);
        assert_eq!(f.doc.listener_count(NodeId::ROOT, EventType::KeyDown), 0);

        f.doc.press_key(Key::Escape, false);
        assert_eq!(f.doc.focused(), Some(f.opener));
    }

    #[test]
    fn test_missing_container() {
        let doc = Document::new();
        assert!(matches!(
            init_modal(&doc, NodeId::ROOT),
            Err(A11yError::NodeNotFound(_))
        ));
    }
}
