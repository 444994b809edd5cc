//! Per-component style overrides
//!
//! Keys are the component library's component names; each value holds a
//! `styleOverrides` object of nested selectors.

use rm_tokens::Tokens;
use serde_json::{Map, Value, json};

/// Row striping shared by tables and data grids: dust at 30%
const STRIPE: &str = "rgba(219, 230, 227, 0.3)";
/// Row hover: estrella at 20%
const ROW_HOVER: &str = "rgba(224, 193, 105, 0.2)";

fn focus_ring(t: &Tokens) -> Value {
    json!({
        "outline": format!("2px solid {}", t.colors.galaxy),
        "outlineOffset": "-2px",
    })
}

/// Style overrides for every themed component
pub fn overrides(t: &Tokens) -> Map<String, Value> {
    let mut components = Map::new();
    let mut add = |name: &str, style: Value| {
        components.insert(name.to_string(), json!({ "styleOverrides": style }));
    };
    let w = &t.font_weight;

    add(
        "MuiCssBaseline",
        json!({
            "a": {
                "color": t.link.default,
                "textDecorationOffset": "3px",
                "&:hover": { "color": t.link.hover },
            },
            "*[disabled], *[readonly]": {
                "opacity": "0.7 !important",
                "cursor": "not-allowed !important",
            },
        }),
    );

    add(
        "MuiButton",
        json!({
            "root": {
                "textTransform": "none",
                "fontWeight": w.semibold,
                "borderRadius": t.radius.m,
                "padding": format!("8px {}", t.control.padding_x),
                "minHeight": t.control.height,
            },
            "contained": {
                "boxShadow": t.shadow.soft,
                "&:hover": { "boxShadow": t.shadow.soft },
            },
        }),
    );

    add(
        "MuiTextField",
        json!({
            "root": {
                "& .MuiOutlinedInput-root": {
                    "borderRadius": t.radius.m,
                    "& fieldset": { "borderColor": t.border.subtle, "borderWidth": "1px" },
                    "&:hover fieldset": { "borderColor": t.text.secondary },
                    "&.Mui-focused fieldset": {
                        "borderColor": t.colors.galaxy,
                        "borderWidth": "2px",
                        "boxShadow": format!("0 0 0 1px {}", t.colors.galaxy),
                    },
                },
            },
        }),
    );

    add(
        "MuiOutlinedInput",
        json!({
            "root": {
                "backgroundColor": "transparent",
                "& .MuiOutlinedInput-notchedOutline": { "borderColor": t.border.subtle },
                "&:hover .MuiOutlinedInput-notchedOutline": { "borderColor": t.text.secondary },
                "&.Mui-focused .MuiOutlinedInput-notchedOutline": {
                    "borderColor": t.colors.galaxy,
                    "borderWidth": "2px",
                },
            },
            "input": { "color": t.text.primary, "fontWeight": w.regular },
        }),
    );

    add(
        "MuiSelect",
        json!({
            "select": {
                "color": t.text.primary,
                "fontWeight": w.regular,
                "backgroundColor": "transparent",
            },
        }),
    );

    add(
        "MuiInput",
        json!({
            "root": {
                "&.Mui-focused": {
                    "outline": format!("2px solid {}", t.colors.galaxy),
                    "outlineOffset": "1px",
                },
            },
        }),
    );

    add(
        "MuiInputLabel",
        json!({
            "root": {
                "color": t.text.secondary,
                "&.Mui-focused": { "color": t.colors.galaxy },
            },
            "outlined": {
                "backgroundColor": "transparent",
                "&.MuiInputLabel-shrink": { "backgroundColor": "transparent" },
            },
        }),
    );

    add("MuiMenuItem", json!({ "root": { "fontSize": t.font_size.md } }));

    add(
        "MuiPaper",
        json!({
            "root": {
                "backgroundColor": t.background.surface,
                "boxShadow": t.shadow.soft,
                "borderRadius": t.radius.m,
                "backgroundImage": "none",
            },
            "elevation1": { "boxShadow": t.shadow.soft },
        }),
    );

    add(
        "MuiCard",
        json!({ "root": { "boxShadow": t.shadow.soft, "borderRadius": t.radius.m } }),
    );

    add(
        "MuiChip",
        json!({
            "root": { "borderRadius": t.radius.s, "fontWeight": w.semibold },
            "filled": {
                "backgroundColor": t.accent.a100,
                "color": t.accent.a700,
                "&.MuiChip-clickable:hover": { "backgroundColor": t.accent.a200 },
            },
        }),
    );

    add(
        "MuiTab",
        json!({
            "root": {
                "fontSize": t.font_size.md,
                "fontWeight": w.semibold,
                "textTransform": "none",
                "color": t.text.secondary,
                "&.Mui-selected": {
                    "color": t.colors.galaxy,
                    "backgroundColor": "rgba(122, 100, 160, 0.05)",
                    "fontWeight": w.semibold,
                },
            },
        }),
    );

    add(
        "MuiTabs",
        json!({ "indicator": { "backgroundColor": t.colors.galaxy, "height": 3 } }),
    );

    add(
        "MuiTableHead",
        json!({
            "root": {
                "& .MuiTableCell-head": {
                    "textTransform": "uppercase",
                    "letterSpacing": t.letter_spacing.caps,
                    "fontWeight": w.extrabold,
                    "backgroundColor": t.colors.space,
                    "color": t.colors.moon,
                    "borderBottom": format!("2px solid {}", t.colors.galaxy),
                },
            },
        }),
    );

    add(
        "MuiTableBody",
        json!({
            "root": {
                "& .MuiTableRow-root": {
                    "&:nth-of-type(even)": { "backgroundColor": STRIPE },
                    "&:hover": {
                        "backgroundColor": ROW_HOVER,
                        "transition": "background-color 0.2s ease",
                    },
                },
            },
        }),
    );

    add(
        "MuiTableCell",
        json!({ "root": { "borderBottom": format!("1px solid {}", t.border.subtle) } }),
    );

    add(
        "MuiDataGrid",
        json!({
            "root": {
                "border": format!("1px solid {}", t.border.subtle),
                "borderRadius": "10px",
                "fontFamily": t.fonts.body,
            },
            "columnHeaders": {
                "backgroundColor": t.colors.space,
                "borderBottom": format!("2px solid {}", t.colors.galaxy),
                "minHeight": "48px !important",
                "maxHeight": "48px !important",
            },
            "columnHeader": {
                "backgroundColor": t.colors.space,
                "color": t.colors.moon,
                "fontFamily": t.fonts.display,
                "fontWeight": w.extrabold,
                "textTransform": "uppercase",
                "letterSpacing": t.letter_spacing.caps,
                "fontSize": t.font_size.sm,
                "&:focus, &:focus-within": focus_ring(t),
            },
            "columnHeaderTitle": { "fontFamily": t.fonts.display, "fontWeight": w.extrabold },
            "columnSeparator": { "color": t.colors.galaxy },
            "cell": {
                "borderBottom": format!("1px solid {}", t.border.subtle),
                "&:focus, &:focus-within": focus_ring(t),
            },
            "row": {
                "&:nth-of-type(even)": { "backgroundColor": STRIPE },
                "&:hover": {
                    "backgroundColor": format!("{ROW_HOVER} !important"),
                    "transition": "background-color 0.2s ease",
                },
            },
            "footerContainer": { "borderTop": format!("1px solid {}", t.border.subtle) },
        }),
    );

    let s = &t.slider;
    add(
        "MuiSlider",
        json!({
            "root": {
                "height": s.track_height,
                "padding": format!("0 {}", s.padding_left),
                "& .MuiSlider-thumb": {
                    "width": s.thumb_width,
                    "height": s.thumb_height,
                    "backgroundColor": s.thumb_background_color,
                    "&:hover": { "boxShadow": s.thumb_hover_box_shadow },
                    "&.Mui-focusVisible": { "boxShadow": s.thumb_focus_box_shadow },
                },
                "& .MuiSlider-track": {
                    "backgroundColor": s.track_background_color,
                    "border": s.track_border,
                    "height": s.track_height,
                },
                "& .MuiSlider-rail": {
                    "backgroundColor": s.rail_background_color,
                    "opacity": s.rail_opacity,
                    "height": s.rail_height,
                },
                "& .MuiSlider-valueLabel": {
                    "backgroundColor": s.value_label_background_color,
                    "borderRadius": s.value_label_border_radius,
                    "padding": s.value_label_padding,
                },
            },
        }),
    );

    components
}
