//! Configuration

use rm_tokens::ColorMode;

/// Options shared by [`Page`](crate::Page) and the CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Color mode the custom properties are resolved for
    pub mode: ColorMode,

    /// Treat a failed contrast check as an error
    pub strict: bool,

    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: ColorMode::Light,
            strict: false,
            pretty: true,
        }
    }
}
