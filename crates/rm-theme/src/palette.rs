//! Color palettes

use rm_tokens::Tokens;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteColor {
    pub main: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrast_text: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteBackground {
    pub default: &'static str,
    pub paper: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteText {
    pub primary: &'static str,
    pub secondary: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteLink {
    pub main: &'static str,
    pub hover: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    pub primary: PaletteColor,
    pub secondary: PaletteColor,
    pub background: PaletteBackground,
    pub text: PaletteText,
    pub error: PaletteColor,
    pub success: PaletteColor,
    pub link: PaletteLink,
    pub divider: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorScheme {
    pub palette: Palette,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorSchemes {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Palette {
    /// Light palette: galaxy primary on the page/surface backgrounds
    pub fn light(t: &Tokens) -> Self {
        Self {
            primary: PaletteColor {
                main: t.colors.galaxy,
                dark: Some(t.accent.a700),
                light: Some(t.accent.a200),
                contrast_text: Some(t.colors.moon),
            },
            secondary: PaletteColor {
                main: t.colors.space,
                dark: None,
                light: None,
                contrast_text: Some(t.colors.moon),
            },
            ..Self::common(t)
        }
    }

    /// Dark palette. Expects tokens with the dark overrides applied; the
    /// primary moves to the lightened accent so it holds contrast on the
    /// dark backgrounds.
    pub fn dark(t: &Tokens) -> Self {
        Self {
            primary: PaletteColor {
                main: t.accent.a600,
                dark: Some(t.accent.a700),
                light: Some(t.accent.a300),
                contrast_text: Some(t.colors.infinite),
            },
            secondary: PaletteColor {
                main: t.colors.dust,
                dark: None,
                light: None,
                contrast_text: Some(t.colors.infinite),
            },
            ..Self::common(t)
        }
    }

    fn common(t: &Tokens) -> Self {
        let status = |s: &rm_tokens::StatusColors| PaletteColor {
            main: s.text,
            dark: None,
            light: Some(s.bg),
            contrast_text: None,
        };
        Self {
            primary: PaletteColor {
                main: t.colors.galaxy,
                dark: None,
                light: None,
                contrast_text: None,
            },
            secondary: PaletteColor {
                main: t.colors.space,
                dark: None,
                light: None,
                contrast_text: None,
            },
            background: PaletteBackground {
                default: t.background.page,
                paper: t.background.surface,
            },
            text: PaletteText {
                primary: t.text.primary,
                secondary: t.text.secondary,
            },
            error: status(&t.status.danger),
            success: status(&t.status.success),
            link: PaletteLink {
                main: t.link.default,
                hover: t.link.hover,
            },
            divider: t.border.subtle,
        }
    }
}
