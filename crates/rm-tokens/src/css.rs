//! CSS custom properties
//!
//! Flattens a token set into `--name: value` pairs and renders the brand
//! stylesheet. The dark block only carries properties whose value differs
//! from the light one.

use crate::{ColorMode, Tokens};
use std::fmt::Write;

/// Custom properties of a resolved token set, in declaration order
pub fn css_variables(tokens: &Tokens) -> Vec<(String, String)> {
    let mut vars: Vec<(String, String)> = Vec::with_capacity(64);
    let mut push = |name: &str, value: &str| vars.push((format!("--{name}"), value.to_string()));

    let c = &tokens.colors;
    push("rm-infinite", c.infinite);
    push("rm-moon", c.moon);
    push("rm-space", c.space);
    push("rm-galaxy", c.galaxy);
    push("rm-dust", c.dust);
    push("rm-estrella", c.estrella);

    push("text-primary", tokens.text.primary);
    push("text-secondary", tokens.text.secondary);
    push("link", tokens.link.default);
    push("link-hover", tokens.link.hover);
    push("bg-page", tokens.background.page);
    push("bg-surface", tokens.background.surface);
    push("border-subtle", tokens.border.subtle);
    push("shadow-soft", tokens.shadow.soft);
    push("radius-s", tokens.radius.s);
    push("radius-m", tokens.radius.m);

    push("font-display", tokens.fonts.display);
    push("font-body", tokens.fonts.body);
    push("font-mono", tokens.fonts.mono);

    let fs = &tokens.font_size;
    for (name, value) in [("xs", fs.xs), ("sm", fs.sm), ("md", fs.md), ("lg", fs.lg), ("xl", fs.xl)] {
        push(&format!("fs-{name}"), value);
    }
    for (step, value) in tokens.spacing.steps() {
        push(&format!("space-{step}"), value);
    }
    for (step, value) in tokens.accent.steps() {
        push(&format!("accent-{step}"), value);
    }
    push("tint-dust12", tokens.tint.dust12);

    push("control-height", tokens.control.height);
    push("control-padding-x", tokens.control.padding_x);

    let s = &tokens.slider;
    push("slider-label-gap", tokens.component.slider_label_gap);
    push("slider-thumb-size", s.thumb_width);
    push("slider-track-height", s.track_height);
    push("slider-container-padding", tokens.component.slider_container_padding);
    push("slider-thumb-bg", s.thumb_background_color);
    push("slider-track-bg", s.track_background_color);
    push("slider-rail-bg", s.rail_background_color);

    for (name, status) in [("success", &tokens.status.success), ("danger", &tokens.status.danger)] {
        push(&format!("{name}-bg"), status.bg);
        push(&format!("{name}-text"), status.text);
        push(&format!("{name}-border"), status.border);
    }

    vars
}

/// Properties of `mode` whose value differs from the light set
pub fn overrides(mode: ColorMode) -> Vec<(String, String)> {
    let light = css_variables(&Tokens::for_mode(ColorMode::Light));
    css_variables(&Tokens::for_mode(mode))
        .into_iter()
        .zip(light)
        .filter(|(ours, base)| ours.1 != base.1)
        .map(|(ours, _)| ours)
        .collect()
}

fn write_block(out: &mut String, selector: &str, vars: &[(String, String)], indent: &str) {
    let _ = writeln!(out, "{indent}{selector} {{");
    for (name, value) in vars {
        let _ = writeln!(out, "{indent}  {name}: {value};");
    }
    let _ = writeln!(out, "{indent}}}");
}

/// Brand stylesheet: light values on `:root`, dark overrides behind an
/// explicit `data-theme` switch and the user's color scheme preference.
pub fn stylesheet() -> String {
    let light = css_variables(&Tokens::for_mode(ColorMode::Light));
    let dark = overrides(ColorMode::Dark);

    let mut out = String::new();
    write_block(&mut out, ":root", &light, "");
    out.push('\n');
    write_block(&mut out, r#"[data-theme="dark"]"#, &dark, "");
    out.push('\n');
    out.push_str("@media (prefers-color-scheme: dark) {\n");
    write_block(&mut out, r#":root:not([data-theme="light"])"#, &dark, "  ");
    out.push_str("}\n");
    tracing::debug!(light = light.len(), dark = dark.len(), "stylesheet rendered");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(vars: &'a [(String, String)], name: &str) -> Option<&'a str> {
        vars.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_audited_properties_present() {
        let vars = css_variables(&Tokens::for_mode(ColorMode::Light));
        for name in [
            "--text-primary",
            "--text-secondary",
            "--bg-page",
            "--bg-surface",
            "--link",
            "--rm-moon",
            "--rm-space",
            "--rm-dust",
        ] {
            assert!(lookup(&vars, name).is_some(), "{name} missing");
        }
        assert_eq!(lookup(&vars, "--space-6"), Some("1.5rem"));
        assert_eq!(lookup(&vars, "--accent-50"), Some("#F2ECF9"));
        assert_eq!(lookup(&vars, "--danger-text"), Some("#7E1E26"));
    }

    #[test]
    fn test_names_unique() {
        let vars = css_variables(&Tokens::for_mode(ColorMode::Light));
        let mut names: Vec<_> = vars.iter().map(|(n, _)| n.as_str()).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(before, names.len());
    }

    #[test]
    fn test_dark_overrides_only_changed() {
        let dark = overrides(ColorMode::Dark);
        assert_eq!(lookup(&dark, "--bg-page"), Some("#0F1115"));
        assert_eq!(lookup(&dark, "--link"), Some("#A894D0"));
        assert!(lookup(&dark, "--rm-space").is_none());
        assert!(lookup(&dark, "--font-body").is_none());
        assert!(overrides(ColorMode::Light).is_empty());
    }

    #[test]
    fn test_stylesheet_blocks() {
        let css = stylesheet();
        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --text-primary: #18191E;\n"));
        assert!(css.contains("[data-theme=\"dark\"] {\n"));
        assert!(css.contains("@media (prefers-color-scheme: dark) {\n"));
        assert!(css.contains("    --text-primary: #EDEFF3;\n"));
        assert_eq!(css.matches('{').count(), css.matches('}').count());
    }
}
