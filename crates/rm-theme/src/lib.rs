//! RM Theme
//!
//! Builds the configuration object a component library's theme factory
//! consumes, with every value taken from the brand tokens.
//!
//! # Example
//! ```rust
//! use rm_theme::theme_config;
//! use rm_tokens::LIGHT;
//!
//! let theme = theme_config(&LIGHT).unwrap();
//! assert_eq!(theme.shape.border_radius, 8);
//! assert_eq!(theme.spacing(2.0), "0.5rem");
//! ```

pub mod components;
pub mod palette;
pub mod typography;

pub use palette::{ColorScheme, ColorSchemes, Palette};
pub use typography::{Typography, TypographyVariant};

use rm_tokens::{DARK, Tokens};
use serde::{Serialize, Serializer};

/// Number of elevation levels in [`ThemeConfig::shadows`]
pub const SHADOW_LEVELS: usize = 25;

/// Largest spacing factor precomputed in the serialized theme
pub const MAX_SPACING_FACTOR: u32 = 16;

/// rem per spacing unit
pub const SPACING_UNIT_REM: f64 = 0.25;

/// Theme construction error
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("Token '{token}' should be a pixel length, got '{value}'")]
    NotPixels { token: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ThemeError>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    pub border_radius: u32,
}

/// Spacing function `factor -> "{0.25 * factor}rem"`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spacing;

impl Spacing {
    pub fn at(&self, factor: f64) -> String {
        format!("{}rem", SPACING_UNIT_REM * factor)
    }
}

impl Serialize for Spacing {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq((0..=MAX_SPACING_FACTOR).map(|f| self.at(f64::from(f))))
    }
}

/// Complete theme configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub color_schemes: ColorSchemes,
    pub typography: Typography,
    pub shape: Shape,
    pub spacing: Spacing,
    pub shadows: Vec<String>,
    pub components: serde_json::Map<String, serde_json::Value>,
}

impl ThemeConfig {
    /// Spacing for a factor, e.g. `2.0 -> "0.5rem"`
    pub fn spacing(&self, factor: f64) -> String {
        self.spacing.at(factor)
    }

    /// Elevation shadow, `"none"` at level 0
    pub fn shadow(&self, level: usize) -> Option<&str> {
        self.shadows.get(level).map(String::as_str)
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Integer part of a pixel length (`"8px" -> 8`, `"6.5px" -> 6`). Only a
/// plain decimal number with an optional `px` unit is accepted.
pub fn parse_px(token: &'static str, value: &str) -> Result<u32> {
    let not_pixels = || ThemeError::NotPixels {
        token,
        value: value.to_string(),
    };
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed);

    let (integer, fraction) = number.split_once('.').unwrap_or((number, ""));
    let digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if integer.is_empty() || !digits(integer) || !digits(fraction) {
        return Err(not_pixels());
    }
    integer.parse().map_err(|_| not_pixels())
}

/// Elevation ramp; level 1 is the brand soft shadow
pub fn shadows(tokens: &Tokens) -> Vec<String> {
    const BRAND: [&str; 2] = [
        "0 2px 4px rgba(0,0,0,.06), 0 8px 20px rgba(0,0,0,.08)",
        "0 4px 8px rgba(0,0,0,.08), 0 12px 24px rgba(0,0,0,.1)",
    ];
    // (umbra y, blur, spread) (penumbra y, blur, spread) (ambient y, blur, spread)
    const MATERIAL: [[(i32, i32, i32); 3]; 21] = [
        [(2, 4, -1), (4, 5, 0), (1, 10, 0)],
        [(3, 5, -1), (5, 8, 0), (1, 14, 0)],
        [(3, 5, -1), (6, 10, 0), (1, 18, 0)],
        [(4, 5, -2), (7, 10, 1), (2, 16, 1)],
        [(5, 5, -3), (8, 10, 1), (3, 14, 2)],
        [(5, 6, -3), (9, 12, 1), (3, 16, 2)],
        [(6, 6, -3), (10, 14, 1), (4, 18, 3)],
        [(6, 7, -4), (11, 15, 1), (4, 20, 3)],
        [(7, 8, -4), (12, 17, 2), (5, 22, 4)],
        [(7, 8, -4), (13, 19, 2), (5, 24, 4)],
        [(7, 9, -4), (14, 21, 2), (5, 26, 4)],
        [(8, 9, -5), (15, 22, 2), (6, 28, 5)],
        [(8, 10, -5), (16, 24, 2), (6, 30, 5)],
        [(8, 11, -5), (17, 26, 2), (6, 32, 5)],
        [(9, 11, -5), (18, 28, 2), (7, 34, 6)],
        [(9, 12, -6), (19, 29, 2), (7, 36, 6)],
        [(10, 13, -6), (20, 31, 3), (8, 38, 7)],
        [(10, 13, -6), (21, 33, 3), (8, 40, 7)],
        [(10, 14, -6), (22, 35, 3), (8, 42, 7)],
        [(11, 14, -7), (23, 36, 3), (9, 44, 8)],
        [(11, 15, -7), (24, 38, 3), (9, 46, 8)],
    ];

    let mut out = Vec::with_capacity(SHADOW_LEVELS);
    out.push("none".to_string());
    out.push(tokens.shadow.soft.to_string());
    out.extend(BRAND.iter().map(|s| s.to_string()));
    out.extend(MATERIAL.iter().map(|[u, p, a]| {
        format!(
            "0px {}px {}px {}px rgba(0,0,0,0.2),0px {}px {}px {}px rgba(0,0,0,0.14),0px {}px {}px {}px rgba(0,0,0,0.12)",
            u.0, u.1, u.2, p.0, p.1, p.2, a.0, a.1, a.2
        )
    }));
    out
}

/// Theme configuration for a token set. The dark color scheme applies the
/// dark overrides on top of `tokens`.
pub fn theme_config(tokens: &Tokens) -> Result<ThemeConfig> {
    let border_radius = parse_px("radius.m", tokens.radius.m)?;
    let dark = tokens.with_overrides(&DARK);

    let config = ThemeConfig {
        color_schemes: ColorSchemes {
            light: ColorScheme {
                palette: Palette::light(tokens),
            },
            dark: ColorScheme {
                palette: Palette::dark(&dark),
            },
        },
        typography: Typography::from_tokens(tokens),
        shape: Shape { border_radius },
        spacing: Spacing,
        shadows: shadows(tokens),
        components: components::overrides(tokens),
    };
    tracing::debug!(
        components = config.components.len(),
        shadows = config.shadows.len(),
        border_radius,
        "theme configuration built"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rm_tokens::LIGHT;

    #[test]
    fn test_parse_px() {
        assert_eq!(parse_px("radius.m", "8px"), Ok(8));
        assert_eq!(parse_px("radius.m", " 12 "), Ok(12));
        assert_eq!(parse_px("radius.m", "6.5px"), Ok(6));
        assert!(matches!(
            parse_px("radius.m", "0.5rem"),
            Err(ThemeError::NotPixels { token: "radius.m", .. })
        ));
        for value in ["1.5em", "2rem", "50%", "px", "", ".5px", "-4px", "8 px", "1e2px", "8.px.2"] {
            assert!(parse_px("radius.m", value).is_err(), "{value:?} accepted");
        }
    }

    #[test]
    fn test_rem_radius_rejected_by_theme() {
        let mut tokens = LIGHT;
        tokens.radius.m = "0.5rem";
        assert_eq!(
            theme_config(&tokens).unwrap_err(),
            ThemeError::NotPixels {
                token: "radius.m",
                value: "0.5rem".into()
            }
        );
    }

    #[test]
    fn test_spacing_function() {
        let theme = theme_config(&LIGHT).unwrap();
        assert_eq!(theme.spacing(0.0), "0rem");
        assert_eq!(theme.spacing(1.0), "0.25rem");
        assert_eq!(theme.spacing(4.0), "1rem");
        assert_eq!(theme.spacing(1.5), "0.375rem");
    }

    #[test]
    fn test_shadow_ramp() {
        let shadows = shadows(&LIGHT);
        assert_eq!(shadows.len(), SHADOW_LEVELS);
        assert_eq!(shadows[0], "none");
        assert_eq!(shadows[1], LIGHT.shadow.soft);
        assert_eq!(
            shadows[4],
            "0px 2px 4px -1px rgba(0,0,0,0.2),0px 4px 5px 0px rgba(0,0,0,0.14),0px 1px 10px 0px rgba(0,0,0,0.12)"
        );
        assert_eq!(
            shadows[24],
            "0px 11px 15px -7px rgba(0,0,0,0.2),0px 24px 38px 3px rgba(0,0,0,0.14),0px 9px 46px 8px rgba(0,0,0,0.12)"
        );
    }

    #[test]
    fn test_json_shape() {
        let json = theme_config(&LIGHT).unwrap().to_json();
        assert_eq!(json["shape"]["borderRadius"], 8);
        assert_eq!(json["spacing"].as_array().unwrap().len(), 17);
        assert_eq!(json["spacing"][2], "0.5rem");
        assert_eq!(json["shadows"].as_array().unwrap().len(), 25);
        assert_eq!(json["typography"]["fontSize"], 16);
        assert_eq!(json["colorSchemes"]["light"]["palette"]["primary"]["main"], "#7A64A0");
        assert_eq!(json["colorSchemes"]["dark"]["palette"]["background"]["default"], "#0F1115");
    }

    #[test]
    fn test_bad_radius_rejected() {
        let mut tokens = LIGHT;
        tokens.radius.m = "var(--radius)";
        assert!(theme_config(&tokens).is_err());
    }
}
