//! Contrast audit
//!
//! WCAG 2.x relative luminance and contrast ratio over the brand custom
//! properties. Only `#rgb` / `#rrggbb` values are understood; anything
//! else (`rgb()`, named colors, empty) is audited as black.

use rm_dom::{ComputedStyle, Document};
use serde::{Deserialize, Serialize};

/// Where custom property values come from
pub trait StyleSource {
    /// Trimmed value of a custom property, empty when unset
    fn custom_property(&self, name: &str) -> String;
}

impl StyleSource for ComputedStyle {
    fn custom_property(&self, name: &str) -> String {
        self.property_value(name)
    }
}

impl StyleSource for Document {
    fn custom_property(&self, name: &str) -> String {
        self.style().property_value(name)
    }
}

/// One foreground/background pair and its minimum ratio
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastCheck {
    pub name: &'static str,
    pub foreground: &'static str,
    pub background: &'static str,
    pub minimum: f64,
}

/// The audited pairs
pub const DEFAULT_CHECKS: [ContrastCheck; 6] = [
    ContrastCheck {
        name: "Body text",
        foreground: "--text-primary",
        background: "--bg-page",
        minimum: 4.5,
    },
    ContrastCheck {
        name: "Secondary text",
        foreground: "--text-secondary",
        background: "--bg-page",
        minimum: 3.0,
    },
    ContrastCheck {
        name: "Link on bg",
        foreground: "--link",
        background: "--bg-page",
        minimum: 4.5,
    },
    ContrastCheck {
        name: "Button primary",
        foreground: "--rm-moon",
        background: "--rm-space",
        minimum: 4.5,
    },
    ContrastCheck {
        name: "Input border on surface",
        foreground: "--rm-space",
        background: "--bg-surface",
        minimum: 3.0,
    },
    ContrastCheck {
        name: "Table header",
        foreground: "--text-primary",
        background: "--rm-dust",
        minimum: 4.5,
    },
];

/// Result row of an audit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContrastReport {
    pub name: String,
    /// Rounded to two decimals
    pub ratio: f64,
    #[serde(rename = "Min")]
    pub minimum: f64,
    /// Judged on the unrounded ratio
    pub pass: bool,
}

/// Parse `#rgb` or `#rrggbb` (leading `#` optional)
pub fn parse_hex(value: &str) -> Option<[u8; 3]> {
    let hex = value.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut out = [0u8; 3];
            for (slot, c) in out.iter_mut().zip(hex.chars()) {
                let digit = c.to_digit(16)? as u8;
                *slot = digit * 17;
            }
            Some(out)
        }
        6 => Some([channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?]),
        _ => None,
    }
}

/// Channels of a color value; unparseable values fall back to black
pub fn normalize_color(value: &str) -> [u8; 3] {
    parse_hex(value).unwrap_or_else(|| {
        tracing::debug!(value, "non-hex color audited as black");
        [0, 0, 0]
    })
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance in [0, 1]
pub fn relative_luminance([r, g, b]: [u8; 3]) -> f64 {
    0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
}

/// Contrast ratio in [1, 21], symmetric in its arguments
pub fn contrast_ratio(a: [u8; 3], b: [u8; 3]) -> f64 {
    let (la, lb) = (relative_luminance(a), relative_luminance(b));
    let (hi, lo) = if la >= lb { (la, lb) } else { (lb, la) };
    (hi + 0.05) / (lo + 0.05)
}

impl ContrastCheck {
    /// Evaluate against live custom property values
    pub fn evaluate(&self, style: &impl StyleSource) -> ContrastReport {
        let fg = normalize_color(&style.custom_property(self.foreground));
        let bg = normalize_color(&style.custom_property(self.background));
        let ratio = contrast_ratio(fg, bg);
        ContrastReport {
            name: self.name.to_string(),
            ratio: (ratio * 100.0).round() / 100.0,
            minimum: self.minimum,
            pass: ratio >= self.minimum,
        }
    }
}

/// Audit [`DEFAULT_CHECKS`]
pub fn verify(style: &impl StyleSource) -> Vec<ContrastReport> {
    verify_checks(style, &DEFAULT_CHECKS)
}

/// Audit an arbitrary set of checks
pub fn verify_checks(style: &impl StyleSource, checks: &[ContrastCheck]) -> Vec<ContrastReport> {
    let reports: Vec<_> = checks.iter().map(|c| c.evaluate(style)).collect();
    for r in &reports {
        if r.pass {
            tracing::info!(name = %r.name, ratio = r.ratio, min = r.minimum, "contrast ok");
        } else {
            tracing::warn!(name = %r.name, ratio = r.ratio, min = r.minimum, "contrast below minimum");
        }
    }
    reports
}
