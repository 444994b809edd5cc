//! RM DOM - Document Object Model host
//!
//! Arena-backed document the accessibility behaviors attach to.
//! Provides focus, keyboard/click event dispatch, a virtual timer
//! queue and the document element's custom properties.

mod attributes;
mod document;
mod dom_events;
mod navigation;
mod node;
mod selector;
mod style;
mod timers;
mod tree;

pub use attributes::{Attr, NamedNodeMap};
pub use document::Document;
pub use dom_events::{Event, EventType, Key, ListenerId};
pub use node::{ElementData, Node, NodeData};
pub use selector::{Compound, Selector, SelectorList};
pub use style::ComputedStyle;
pub use timers::TimerId;
pub use tree::DomTree;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// The document node
    pub const ROOT: NodeId = NodeId(0);
    /// Null link
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Raw arena index
    pub fn index(self) -> u32 {
        self.0
    }
}

/// DOM error
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DomError {
    #[error("Node {0:?} does not exist")]
    NodeNotFound(NodeId),

    #[error("Node {0:?} is not an element")]
    NotAnElement(NodeId),

    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Cannot insert {child:?} into its own subtree")]
    HierarchyRequest { child: NodeId },
}

pub type Result<T> = std::result::Result<T, DomError>;
