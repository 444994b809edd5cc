//! RM Accessibility
//!
//! Keyboard and screen-reader behaviors for brand markup.
//!
//! Features:
//! - Modal focus trap with Escape dismissal and focus restore
//! - Roving-tabindex tab sets synchronized with their panels
//! - Shared live region for toast announcements
//! - WCAG contrast audit of the active custom properties

pub mod announce;
pub mod aria;
pub mod contrast;
pub mod focus;
pub mod modal;
pub mod tabs;

pub use announce::{AnnounceOptions, Announcer, TOAST_DURATION};
pub use aria::{AriaRole, LiveRegionMode};
pub use contrast::{ContrastCheck, ContrastReport, StyleSource, DEFAULT_CHECKS, contrast_ratio, verify};
pub use focus::{TabIndex, focusable_elements};
pub use modal::{Modal, init_modal};
pub use tabs::{TabSet, init_tabs};

use rm_dom::{DomError, NodeId};

/// Accessibility error
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum A11yError {
    #[error("Node {0:?} is not an element in the document")]
    NodeNotFound(NodeId),

    #[error("Tab list {0:?} contains no role=\"tab\" elements")]
    EmptyTabList(NodeId),

    #[error("Tab {index} has no aria-controls reference")]
    MissingPanelReference { index: usize },

    #[error("Tab {index} controls '{reference}' but no element has that id")]
    PanelNotFound { index: usize, reference: String },

    #[error(transparent)]
    Dom(#[from] DomError),
}

pub type Result<T> = std::result::Result<T, A11yError>;
