//! Type scale

use rm_tokens::Tokens;
use serde::Serialize;

/// Root font size in pixels (1rem)
pub const BASE_FONT_SIZE: u32 = 16;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyVariant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<&'static str>,
    pub font_size: &'static str,
    pub font_weight: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: &'static str,
    pub font_size: u32,
    pub h1: TypographyVariant,
    pub h2: TypographyVariant,
    pub h3: TypographyVariant,
    pub h4: TypographyVariant,
    pub h5: TypographyVariant,
    pub h6: TypographyVariant,
    pub body1: TypographyVariant,
    pub body2: TypographyVariant,
    pub button: TypographyVariant,
    pub caption: TypographyVariant,
}

impl Typography {
    pub fn from_tokens(t: &Tokens) -> Self {
        let display = |font_size, font_weight| TypographyVariant {
            font_family: Some(t.fonts.display),
            font_size,
            font_weight,
            ..Default::default()
        };
        let body = |font_size, font_weight| TypographyVariant {
            font_family: Some(t.fonts.body),
            font_size,
            font_weight,
            ..Default::default()
        };
        let w = &t.font_weight;
        let fs = &t.font_size;

        Self {
            font_family: t.fonts.body,
            font_size: BASE_FONT_SIZE,
            h1: TypographyVariant {
                letter_spacing: Some("2px"),
                text_transform: Some("uppercase"),
                ..display("clamp(2rem, 1.5rem + 2vw, 2.5rem)", w.extrabold)
            },
            h2: display("clamp(1.5rem, 1.25rem + 1vw, 1.75rem)", w.bold),
            h3: TypographyVariant {
                letter_spacing: Some(t.letter_spacing.caps),
                text_transform: Some("uppercase"),
                ..display(fs.xl, w.extrabold)
            },
            h4: display(fs.lg, w.bold),
            h5: display(fs.md, w.bold),
            h6: display(fs.sm, w.bold),
            body1: body(fs.md, w.regular),
            body2: body(fs.sm, w.regular),
            button: TypographyVariant {
                text_transform: Some("none"),
                ..body(fs.md, w.semibold)
            },
            caption: TypographyVariant {
                font_family: None,
                ..body(fs.xs, w.regular)
            },
        }
    }
}
