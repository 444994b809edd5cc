//! DOM Events
//!
//! Keyboard and pointer events plus the listener registry.

use crate::{Document, NodeId};
use std::rc::Rc;

/// DOM event types handled by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    KeyDown,
    Click,
}

/// Keyboard key, named after `KeyboardEvent.key`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Tab,
    Escape,
    Enter,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Character(char),
    Other(String),
}

impl Key {
    /// Parse a `KeyboardEvent.key` value
    pub fn parse(s: &str) -> Self {
        match s {
            "Tab" => Self::Tab,
            "Escape" | "Esc" => Self::Escape,
            "Enter" => Self::Enter,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            "Home" => Self::Home,
            "End" => Self::End,
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Character(c),
                    _ => Self::Other(s.to_string()),
                }
            }
        }
    }
}

/// DOM event
#[derive(Debug, Clone)]
pub struct Event {
    pub event_type: EventType,
    pub target: NodeId,
    pub current_target: NodeId,
    /// Key for keyboard events, `None` for clicks
    pub key: Option<Key>,
    pub shift_key: bool,
    pub cancelable: bool,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl Event {
    fn new(event_type: EventType, target: NodeId) -> Self {
        Self {
            event_type,
            target,
            current_target: target,
            key: None,
            shift_key: false,
            cancelable: true,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// Create keydown event
    pub fn keydown(target: NodeId, key: Key, shift_key: bool) -> Self {
        Self {
            key: Some(key),
            shift_key,
            ..Self::new(EventType::KeyDown, target)
        }
    }

    /// Create click event
    pub fn click(target: NodeId) -> Self {
        Self::new(EventType::Click, target)
    }

    /// Whether this is a keydown for `key`
    pub fn is_key(&self, key: &Key) -> bool {
        self.key.as_ref() == Some(key)
    }

    /// Prevent default action
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    /// Stop propagation after the current target
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Handle returned by `add_event_listener`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub(crate) type Callback = Rc<dyn Fn(&mut Document, &mut Event)>;

struct Registration {
    id: ListenerId,
    target: NodeId,
    event_type: EventType,
    callback: Callback,
}

/// Listener registry, in registration order
#[derive(Default)]
pub(crate) struct EventListeners {
    entries: Vec<Registration>,
    next_id: u64,
}

impl EventListeners {
    pub fn add(&mut self, target: NodeId, event_type: EventType, callback: Callback) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.entries.push(Registration {
            id,
            target,
            event_type,
            callback,
        });
        id
    }

    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|r| r.id != id);
        self.entries.len() != before
    }

    pub fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|r| r.id == id)
    }

    /// Snapshot of listeners for one target; callbacks are cloned out so
    /// they can run with the document mutably borrowed.
    pub fn snapshot(&self, target: NodeId, event_type: EventType) -> Vec<(ListenerId, Callback)> {
        self.entries
            .iter()
            .filter(|r| r.target == target && r.event_type == event_type)
            .map(|r| (r.id, Rc::clone(&r.callback)))
            .collect()
    }

    pub fn count_for(&self, target: NodeId, event_type: EventType) -> usize {
        self.entries
            .iter()
            .filter(|r| r.target == target && r.event_type == event_type)
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
