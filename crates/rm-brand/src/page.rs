//! Page - a document styled with the brand custom properties

use crate::Config;
use rm_a11y::{A11yError, AnnounceOptions, Announcer, ContrastReport};
use rm_dom::{Document, NodeId};
use rm_tokens::{ColorMode, Tokens, css_variables};

#[cfg(feature = "devtools")]
use rm_devtools::{Console, DevGlobals, DevtoolsError};

/// A document carrying the brand custom properties of one color mode,
/// plus the services that act on it.
#[derive(Debug)]
pub struct Page {
    pub document: Document,
    pub announcer: Announcer,
    mode: ColorMode,
    #[cfg(feature = "devtools")]
    pub console: Console,
    #[cfg(feature = "devtools")]
    pub globals: DevGlobals,
}

impl Page {
    /// Create a page in `config.mode`
    pub fn new(config: &Config) -> Self {
        #[cfg(feature = "devtools")]
        let globals = {
            let mut globals = DevGlobals::new();
            globals.install_a11y();
            globals
        };

        let mut page = Self {
            document: Document::new(),
            announcer: Announcer::new(),
            mode: config.mode,
            #[cfg(feature = "devtools")]
            console: Console::new(),
            #[cfg(feature = "devtools")]
            globals,
        };
        page.apply_mode(config.mode);
        page
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Switch color mode: rewrites the custom properties and the
    /// `data-theme` attribute on the root element.
    pub fn set_mode(&mut self, mode: ColorMode) {
        if mode != self.mode {
            self.apply_mode(mode);
        }
    }

    fn apply_mode(&mut self, mode: ColorMode) {
        let vars = css_variables(&Tokens::for_mode(mode));
        let count = vars.len();
        self.document.style_mut().extend(vars);

        let root = self.document.document_element();
        if let Err(err) = self.document.set_attribute(root, "data-theme", mode.as_str()) {
            tracing::warn!(%err, "could not mark root element with color mode");
        }
        self.mode = mode;
        tracing::debug!(mode = mode.as_str(), properties = count, "color mode applied");
    }

    /// Contrast audit of the current custom properties
    pub fn verify(&self) -> Vec<ContrastReport> {
        rm_a11y::verify(&self.document)
    }

    /// Announce through the page's live region
    pub fn announce(&mut self, message: &str, options: AnnounceOptions) -> Result<NodeId, A11yError> {
        self.announcer.announce(&mut self.document, message, options)
    }

    /// Call a dev global such as `RM_A11Y.verify`
    #[cfg(feature = "devtools")]
    pub fn invoke(&mut self, path: &str) -> Result<serde_json::Value, DevtoolsError> {
        self.globals.invoke(path, &self.document, &mut self.console)
    }

    /// Contrast audit through `RM_A11Y.verify`, so the table also lands in
    /// the console. The audit runs once.
    #[cfg(feature = "devtools")]
    pub fn audit(&mut self) -> Result<Vec<ContrastReport>, DevtoolsError> {
        let rows = self.invoke("RM_A11Y.verify")?;
        Ok(serde_json::from_value(rows)?)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_properties_follow_mode() {
        let mut page = Page::default();
        assert_eq!(page.document.style().property_value("--bg-page"), "#F6F7F5");
        let root = page.document.document_element();
        assert_eq!(page.document.get_attribute(root, "data-theme"), Some("light"));

        page.set_mode(ColorMode::Dark);
        assert_eq!(page.mode(), ColorMode::Dark);
        assert_eq!(page.document.style().property_value("--bg-page"), "#0F1115");
        assert_eq!(page.document.style().property_value("--rm-space"), "#2D334D");
        assert_eq!(page.document.get_attribute(root, "data-theme"), Some("dark"));
    }

    #[test]
    fn test_announce_uses_one_region() {
        let mut page = Page::default();
        page.announce("Saved", AnnounceOptions::default()).unwrap();
        page.announce("Saved again", AnnounceOptions::default()).unwrap();
        let region = page.announcer.region().unwrap();
        assert_eq!(page.document.tree().children(region).count(), 2);
    }

    #[cfg(feature = "devtools")]
    #[test]
    fn test_dev_global_installed() {
        let mut page = Page::default();
        let rows = page.invoke("RM_A11Y.verify").unwrap();
        assert_eq!(rows.as_array().map(Vec::len), Some(6));
        assert!(!page.console.messages().is_empty());
    }

    #[cfg(feature = "devtools")]
    #[test]
    fn test_audit_prints_one_table_and_returns_reports() {
        let mut page = Page::new(&Config {
            mode: ColorMode::Dark,
            ..Config::default()
        });
        let reports = page.audit().unwrap();
        assert_eq!(page.console.messages().len(), 1);
        assert!(page.console.last().unwrap().message.contains("'Table header'"));
        assert_eq!(reports, page.verify());
        assert!(reports.iter().any(|r| !r.pass));
    }
}
