//! Dev globals
//!
//! Named callables reachable by dotted path (`RM_A11Y.verify`), the
//! counterpart of functions hung off `window` for manual use from a
//! devtools console.

use crate::console::Console;
use crate::{DevtoolsError, Result};
use rm_dom::Document;
use serde_json::Value;
use std::collections::BTreeMap;

/// Namespace of the accessibility helpers
pub const A11Y_NAMESPACE: &str = "RM_A11Y";

type Global = Box<dyn Fn(&Document, &mut Console) -> Result<Value>>;

/// Registry of dev globals
#[derive(Default)]
pub struct DevGlobals {
    entries: BTreeMap<String, Global>,
}

impl std::fmt::Debug for DevGlobals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DevGlobals")
            .field("paths", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl DevGlobals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `namespace.name`, replacing any previous entry
    pub fn register<F>(&mut self, namespace: &str, name: &str, f: F)
    where
        F: Fn(&Document, &mut Console) -> Result<Value> + 'static,
    {
        let path = format!("{namespace}.{name}");
        tracing::debug!(%path, "dev global registered");
        self.entries.insert(path, Box::new(f));
    }

    /// Install `RM_A11Y.verify`: audits the document's custom properties,
    /// prints the result table and returns the rows.
    pub fn install_a11y(&mut self) {
        self.register(A11Y_NAMESPACE, "verify", |doc, console| {
            let rows = rm_a11y::verify(doc);
            console.table(&rows)?;
            Ok(serde_json::to_value(&rows)?)
        });
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn invoke(&self, path: &str, doc: &Document, console: &mut Console) -> Result<Value> {
        let global = self
            .entries
            .get(path)
            .ok_or_else(|| DevtoolsError::UnknownGlobal(path.to_string()))?;
        tracing::debug!(path, "invoking dev global");
        global(doc, console)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styled_document(vars: &[(&str, &str)]) -> Document {
        let mut doc = Document::new();
        for (name, value) in vars {
            doc.style_mut().set_property(name, *value);
        }
        doc
    }

    #[test]
    fn test_unknown_global() {
        let globals = DevGlobals::new();
        let doc = Document::new();
        let mut console = Console::new();
        let err = globals.invoke("RM_A11Y.verify", &doc, &mut console).unwrap_err();
        assert!(matches!(err, DevtoolsError::UnknownGlobal(ref p) if p == "RM_A11Y.verify"));
    }

    #[test]
    fn test_verify_prints_and_returns_rows() {
        let doc = styled_document(&[
            ("--text-primary", "#18191E"),
            ("--bg-page", "#F6F7F5"),
        ]);
        let mut globals = DevGlobals::new();
        globals.install_a11y();
        assert!(globals.contains("RM_A11Y.verify"));

        let mut console = Console::new();
        let rows = globals.invoke("RM_A11Y.verify", &doc, &mut console).unwrap();
        let rows = rows.as_array().unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0]["Name"], "Body text");
        assert_eq!(rows[0]["Ratio"], 16.33);
        assert_eq!(rows[0]["Pass"], true);
        // unset properties audit as black on black
        assert_eq!(rows[3]["Ratio"], 1.0);
        assert!(console.last().unwrap().message.contains("'Body text'"));
    }

    #[test]
    fn test_custom_global() {
        let mut globals = DevGlobals::new();
        globals.register("RM_DEBUG", "ping", |_, console| {
            console.log("pong");
            Ok(Value::Bool(true))
        });
        let mut console = Console::new();
        let out = globals.invoke("RM_DEBUG.ping", &Document::new(), &mut console).unwrap();
        assert_eq!(out, Value::Bool(true));
        assert_eq!(globals.paths().collect::<Vec<_>>(), ["RM_DEBUG.ping"]);
    }
}
