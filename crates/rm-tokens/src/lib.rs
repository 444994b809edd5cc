//! RM Design Tokens
//!
//! Brand values shared by the theme adapter, the stylesheet and
//! application code.
//!
//! # Example
//! ```rust
//! use rm_tokens::{ColorMode, Tokens};
//!
//! let dark = Tokens::for_mode(ColorMode::Dark);
//! assert_eq!(dark.background.page, "#0F1115");
//! assert_eq!(dark.colors.galaxy, "#7A64A0");
//! ```

pub mod css;
pub mod tokens;

pub use css::{css_variables, stylesheet};
pub use tokens::*;

use serde::{Deserialize, Serialize};

/// Color scheme a token set is resolved for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown color mode '{other}' (expected light or dark)")),
        }
    }
}
