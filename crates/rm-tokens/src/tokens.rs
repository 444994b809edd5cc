//! Token tables
//!
//! [`LIGHT`] holds the base values; [`DARK`] overrides the subset that
//! changes in dark mode. Keys serialize in camelCase, matching the names
//! front-end code uses.

use crate::ColorMode;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fonts {
    pub display: &'static str,
    pub body: &'static str,
    pub mono: &'static str,
}

/// Brand base colors
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BrandColors {
    /// near-black
    pub infinite: &'static str,
    /// near-white
    pub moon: &'static str,
    /// dark blue-gray for headers/emphasis
    pub space: &'static str,
    /// primary purple accent
    pub galaxy: &'static str,
    /// light sage for subtle backgrounds
    pub dust: &'static str,
    /// warm gold tint
    pub estrella: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextColors {
    pub primary: &'static str,
    pub secondary: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FontSizes {
    pub xs: &'static str,
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Spacing {
    #[serde(rename = "1")]
    pub s1: &'static str,
    #[serde(rename = "2")]
    pub s2: &'static str,
    #[serde(rename = "3")]
    pub s3: &'static str,
    #[serde(rename = "4")]
    pub s4: &'static str,
    #[serde(rename = "6")]
    pub s6: &'static str,
    #[serde(rename = "8")]
    pub s8: &'static str,
}

impl Spacing {
    /// `(step, value)` pairs in ascending order
    pub fn steps(&self) -> [(u8, &'static str); 6] {
        [
            (1, self.s1),
            (2, self.s2),
            (3, self.s3),
            (4, self.s4),
            (6, self.s6),
            (8, self.s8),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSpacing {
    pub slider_label_gap: &'static str,
    pub slider_thumb_size: &'static str,
    pub slider_track_height: &'static str,
    pub slider_container_padding: &'static str,
}

/// Framework-agnostic slider styling
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderTokens {
    pub margin_top: &'static str,
    pub margin_bottom: &'static str,
    pub padding_left: &'static str,
    pub padding_right: &'static str,

    pub thumb_width: &'static str,
    pub thumb_height: &'static str,
    pub thumb_background_color: &'static str,
    pub thumb_hover_box_shadow: &'static str,
    pub thumb_focus_box_shadow: &'static str,

    pub track_height: &'static str,
    pub track_background_color: &'static str,
    pub track_border: &'static str,

    pub rail_height: &'static str,
    pub rail_background_color: &'static str,
    pub rail_opacity: u8,

    pub value_label_background_color: &'static str,
    pub value_label_border_radius: &'static str,
    pub value_label_padding: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FontWeights {
    pub regular: u16,
    pub semibold: u16,
    pub bold: u16,
    pub extrabold: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LetterSpacing {
    pub caps: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinkColors {
    pub default: &'static str,
    pub hover: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Backgrounds {
    pub page: &'static str,
    pub surface: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Borders {
    pub subtle: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shadows {
    pub soft: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Radii {
    pub s: &'static str,
    pub m: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlSizes {
    pub height: &'static str,
    pub padding_x: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatusColors {
    pub bg: &'static str,
    pub text: &'static str,
    pub border: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Status {
    pub success: StatusColors,
    pub danger: StatusColors,
}

/// Accent ramp
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Accent {
    #[serde(rename = "50")]
    pub a50: &'static str,
    #[serde(rename = "100")]
    pub a100: &'static str,
    #[serde(rename = "200")]
    pub a200: &'static str,
    #[serde(rename = "300")]
    pub a300: &'static str,
    #[serde(rename = "600")]
    pub a600: &'static str,
    #[serde(rename = "700")]
    pub a700: &'static str,
}

impl Accent {
    /// `(step, value)` pairs in ascending order
    pub fn steps(&self) -> [(u16, &'static str); 6] {
        [
            (50, self.a50),
            (100, self.a100),
            (200, self.a200),
            (300, self.a300),
            (600, self.a600),
            (700, self.a700),
        ]
    }
}

/// Neutral tints
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tints {
    pub dust12: &'static str,
}

/// Complete token set
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tokens {
    pub fonts: Fonts,
    pub colors: BrandColors,
    pub text: TextColors,
    pub font_size: FontSizes,
    pub spacing: Spacing,
    pub component: ComponentSpacing,
    pub slider: SliderTokens,
    pub font_weight: FontWeights,
    pub letter_spacing: LetterSpacing,
    pub link: LinkColors,
    pub background: Backgrounds,
    pub border: Borders,
    pub shadow: Shadows,
    pub radius: Radii,
    pub control: ControlSizes,
    pub status: Status,
    pub accent: Accent,
    pub tint: Tints,
}

/// Values that change in dark mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DarkOverrides {
    pub background: Backgrounds,
    pub text: TextColors,
    pub border: Borders,
    pub shadow: Shadows,
    pub accent: Accent,
    pub link: LinkColors,
}

pub const LIGHT: Tokens = Tokens {
    fonts: Fonts {
        display: r#""Raleway", "Roboto", sans-serif"#,
        body: r#""Roboto", "Segoe UI", -apple-system, system-ui, sans-serif"#,
        mono: r#""Roboto Mono", "Courier New", monospace"#,
    },
    colors: BrandColors {
        infinite: "#18191E",
        moon: "#F7F8F6",
        space: "#2D334D",
        galaxy: "#7A64A0",
        dust: "#DBE6E3",
        estrella: "#E0C169",
    },
    text: TextColors {
        primary: "#18191E",
        secondary: "#4B5163",
    },
    font_size: FontSizes {
        xs: "0.75rem",
        sm: "0.875rem",
        md: "1rem",
        lg: "1.125rem",
        xl: "1.25rem",
    },
    spacing: Spacing {
        s1: "0.25rem",
        s2: "0.5rem",
        s3: "0.75rem",
        s4: "1rem",
        s6: "1.5rem",
        s8: "2rem",
    },
    component: ComponentSpacing {
        slider_label_gap: "1.5rem",
        slider_thumb_size: "20px",
        slider_track_height: "8px",
        // Keeps the thumb from overflowing the container
        slider_container_padding: "2rem",
    },
    slider: SliderTokens {
        margin_top: "1.5rem",
        margin_bottom: "1.5rem",
        padding_left: "2rem",
        padding_right: "2rem",

        thumb_width: "20px",
        thumb_height: "20px",
        thumb_background_color: "#7A64A0",
        thumb_hover_box_shadow: "0 0 0 8px rgba(122, 100, 160, 0.16)",
        thumb_focus_box_shadow: "0 0 0 12px rgba(122, 100, 160, 0.24)",

        track_height: "8px",
        track_background_color: "#7A64A0",
        track_border: "none",

        rail_height: "8px",
        rail_background_color: "#CDD3DB",
        rail_opacity: 1,

        value_label_background_color: "#7A64A0",
        value_label_border_radius: "4px",
        value_label_padding: "4px 8px",
    },
    font_weight: FontWeights {
        regular: 400,
        semibold: 600,
        bold: 700,
        extrabold: 800,
    },
    letter_spacing: LetterSpacing { caps: "0.5px" },
    link: LinkColors {
        default: "#5A4286",
        hover: "#4B386F",
    },
    background: Backgrounds {
        page: "#F6F7F5",
        surface: "#FFFFFF",
    },
    border: Borders { subtle: "#CDD3DB" },
    shadow: Shadows {
        soft: "0 1px 2px rgba(0,0,0,.04), 0 6px 18px rgba(0,0,0,.06)",
    },
    radius: Radii { s: "6px", m: "8px" },
    control: ControlSizes {
        height: "40px",
        padding_x: "14px",
    },
    status: Status {
        success: StatusColors {
            bg: "#E6F4E6",
            text: "#134E13",
            border: "#96C49A",
        },
        danger: StatusColors {
            bg: "#FCE6E8",
            text: "#7E1E26",
            border: "#E7A3AB",
        },
    },
    accent: Accent {
        a50: "#F2ECF9",
        a100: "#E8DEF7",
        a200: "#D7CAF2",
        a300: "#C2B1EA",
        a600: "#7A64A0",
        a700: "#5A4286",
    },
    tint: Tints { dust12: "#EEF3F1" },
};

pub const DARK: DarkOverrides = DarkOverrides {
    background: Backgrounds {
        page: "#0F1115",
        surface: "#171A22",
    },
    text: TextColors {
        primary: "#EDEFF3",
        secondary: "#B7BECA",
    },
    border: Borders { subtle: "#30364A" },
    shadow: Shadows {
        soft: "0 1px 2px rgba(0,0,0,.55), 0 8px 24px rgba(0,0,0,.35)",
    },
    accent: Accent {
        a50: "#241F2B",
        a100: "#2E2837",
        a200: "#3A3250",
        a300: "#4D4070",
        a600: "#BCA7E0",
        a700: "#A894D0",
    },
    link: LinkColors {
        default: "#A894D0",
        hover: "#BCA7E0",
    },
};

impl Tokens {
    /// Base tokens with dark overrides applied
    pub fn with_overrides(self, dark: &DarkOverrides) -> Tokens {
        Tokens {
            background: dark.background,
            text: dark.text,
            border: dark.border,
            shadow: dark.shadow,
            accent: dark.accent,
            link: dark.link,
            ..self
        }
    }

    /// Resolved token set for a color mode
    pub fn for_mode(mode: ColorMode) -> Tokens {
        match mode {
            ColorMode::Light => LIGHT,
            ColorMode::Dark => LIGHT.with_overrides(&DARK),
        }
    }

    /// JSON export
    pub fn to_json(&self) -> serde_json::Value {
        // Plain structs of strings and integers always serialize
        serde_json::to_value(self).unwrap_or_default()
    }
}
