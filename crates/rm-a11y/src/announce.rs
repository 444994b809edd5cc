//! Toast announcements
//!
//! One shared live region per document, created lazily on the first
//! announcement and never torn down. Its politeness is fixed by that first
//! call. Every message is its own child node and removes itself after
//! [`TOAST_DURATION`]; there is no queue, coalescing or cap.

use crate::aria::LiveRegionMode;
use crate::Result;
use rm_dom::{Document, NodeId};
use std::cell::Cell;
use std::time::Duration;

/// How long a toast stays in the live region
pub const TOAST_DURATION: Duration = Duration::from_millis(4000);

/// Class of the shared region
pub const REGION_CLASS: &str = "rm-toasts";
/// Class of each message node
pub const TOAST_CLASS: &str = "rm-toast";

/// Options for [`Announcer::announce`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnounceOptions {
    pub polite: bool,
}

impl Default for AnnounceOptions {
    fn default() -> Self {
        Self { polite: true }
    }
}

impl AnnounceOptions {
    pub fn assertive() -> Self {
        Self { polite: false }
    }
}

/// Announcement channel for one document. Create it once with the
/// document and hand it to whatever needs to announce.
#[derive(Debug, Default)]
pub struct Announcer {
    region: Cell<Option<NodeId>>,
}

impl Announcer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The live region, if it exists yet
    pub fn region(&self) -> Option<NodeId> {
        self.region.get()
    }

    /// Announce `message`; returns the toast node.
    pub fn announce(&self, doc: &mut Document, message: &str, options: AnnounceOptions) -> Result<NodeId> {
        let mode = LiveRegionMode::from_polite(options.polite);
        let region = self.ensure_region(doc, mode)?;

        let toast = doc.append_element(
            region,
            "div",
            &[("class", TOAST_CLASS), ("role", mode.message_role().as_str())],
        )?;
        doc.append_text(toast, message)?;

        doc.set_timeout(TOAST_DURATION, move |doc| {
            doc.remove(toast);
            tracing::trace!(?toast, "toast expired");
        });
        tracing::debug!(?toast, mode = mode.as_str(), message, "announced");
        Ok(toast)
    }

    /// Alias of [`Announcer::announce`]
    pub fn toast(&self, doc: &mut Document, message: &str, options: AnnounceOptions) -> Result<NodeId> {
        self.announce(doc, message, options)
    }

    /// Reuse the remembered region, adopt one already in the markup, or
    /// create it with the politeness of the current call.
    fn ensure_region(&self, doc: &mut Document, mode: LiveRegionMode) -> Result<NodeId> {
        if let Some(region) = self.region.get() {
            return Ok(region);
        }

        let selector = format!(".{REGION_CLASS}");
        let region = match doc.query_selector(NodeId::ROOT, &selector)? {
            Some(existing) => {
                tracing::debug!(?existing, "adopting live region from markup");
                existing
            }
            None => {
                let body = doc.body();
                let region = doc.append_element(
                    body,
                    "div",
                    &[
                        ("class", REGION_CLASS),
                        ("aria-live", mode.as_str()),
                        ("aria-atomic", "true"),
                    ],
                )?;
                tracing::debug!(?region, mode = mode.as_str(), "live region created");
                region
            }
        };

        self.region.set(Some(region));
        Ok(region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toasts(doc: &Document, region: NodeId) -> Vec<String> {
        doc.tree()
            .children(region)
            .map(|t| doc.text_content(t))
            .collect()
    }

    #[test]
    fn test_first_call_fixes_politeness() {
        let mut doc = Document::new();
        let announcer = Announcer::new();
        announcer.announce(&mut doc, "Saved", AnnounceOptions::default()).unwrap();
        announcer.announce(&mut doc, "Error", AnnounceOptions::assertive()).unwrap();

        let region = announcer.region().unwrap();
        assert_eq!(doc.get_attribute(region, "aria-live"), Some("polite"));
        assert_eq!(doc.get_attribute(region, "aria-atomic"), Some("true"));
        assert_eq!(doc.tree().parent(region), Some(doc.body()));
        assert_eq!(toasts(&doc, region), ["Saved", "Error"]);
    }

    #[test]
    fn test_assertive_first_call() {
        let mut doc = Document::new();
        let announcer = Announcer::new();
        let toast = announcer.toast(&mut doc, "Failed", AnnounceOptions::assertive()).unwrap();

        let region = announcer.region().unwrap();
        assert_eq!(doc.get_attribute(region, "aria-live"), Some("assertive"));
        assert_eq!(doc.get_attribute(toast, "role"), Some("alert"));
        assert_eq!(doc.get_attribute(toast, "class"), Some(TOAST_CLASS));
    }

    #[test]
    fn test_region_created_once() {
        let mut doc = Document::new();
        let announcer = Announcer::new();
        for i in 0..5 {
            announcer.announce(&mut doc, &format!("msg {i}"), AnnounceOptions::default()).unwrap();
        }
        let regions = doc.query_selector_all(NodeId::ROOT, ".rm-toasts").unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(doc.tree().children(regions[0]).count(), 5);
    }

    #[test]
    fn test_adopts_region_from_markup() {
        let mut doc = Document::new();
        let body = doc.body();
        let existing = doc
            .append_element(body, "div", &[("class", "rm-toasts"), ("aria-live", "assertive")])
            .unwrap();

        let announcer = Announcer::new();
        announcer.announce(&mut doc, "Hi", AnnounceOptions::default()).unwrap();
        assert_eq!(announcer.region(), Some(existing));
        assert_eq!(doc.get_attribute(existing, "aria-live"), Some("assertive"));
    }

    #[test]
    fn test_toast_removed_after_duration() {
        let mut doc = Document::new();
        let announcer = Announcer::new();
        let toast = announcer.announce(&mut doc, "Saved", AnnounceOptions::default()).unwrap();

        doc.advance(TOAST_DURATION - Duration::from_millis(1));
        assert!(doc.is_connected(toast));
        doc.advance(Duration::from_millis(1));
        assert!(!doc.is_connected(toast));
        assert!(doc.is_connected(announcer.region().unwrap()));
    }

    #[test]
    fn test_toasts_expire_on_their_own_timers() {
        let mut doc = Document::new();
        let announcer = Announcer::new();
        let saved = announcer.announce(&mut doc, "Saved", AnnounceOptions::default()).unwrap();
        doc.advance(Duration::from_millis(1500));
        let error = announcer.announce(&mut doc, "Error", AnnounceOptions::assertive()).unwrap();
        let region = announcer.region().unwrap();

        // t = 4000: first toast is due, second has 1500ms left
        doc.advance(Duration::from_millis(2500));
        assert!(!doc.is_connected(saved));
        assert!(doc.is_connected(error));
        assert_eq!(toasts(&doc, region), ["Error"]);

        doc.advance(Duration::from_millis(1499));
        assert!(doc.is_connected(error));
        doc.advance(Duration::from_millis(1));
        assert!(!doc.is_connected(error));
        assert!(toasts(&doc, region).is_empty());
        assert!(doc.is_connected(region));
    }
}
