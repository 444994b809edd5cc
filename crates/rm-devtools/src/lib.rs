//! RM DevTools
//!
//! Diagnostics meant for a developer at a console, not for automated
//! pipelines.
//!
//! Features:
//! - Console (log, info, warn, error, table)
//! - Dev globals such as `RM_A11Y.verify`

pub mod console;
pub mod globals;

pub use console::{Console, ConsoleMessage, LogLevel, render_table};
pub use globals::{A11Y_NAMESPACE, DevGlobals};

/// DevTools error
#[derive(Debug, thiserror::Error)]
pub enum DevtoolsError {
    #[error("No dev global registered at '{0}'")]
    UnknownGlobal(String),

    #[error("Value could not be converted to JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DevtoolsError>;
