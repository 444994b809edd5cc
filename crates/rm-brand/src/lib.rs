//! RM Brand
//!
//! Brand tokens, the component theme built from them and the
//! accessibility behaviors that brand markup relies on.
//!
//! # Example
//! ```rust
//! use rm_brand::{Config, Page};
//! use rm_brand::tokens::ColorMode;
//!
//! let page = Page::new(&Config { mode: ColorMode::Light, ..Config::default() });
//! assert!(page.verify().iter().all(|r| r.pass));
//! ```

mod config;
mod page;

pub use config::Config;
pub use page::Page;

// Re-export sub-crates for advanced usage
pub use rm_a11y as a11y;
#[cfg(feature = "devtools")]
pub use rm_devtools as devtools;
pub use rm_dom as dom;
pub use rm_theme as theme;
pub use rm_tokens as tokens;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
