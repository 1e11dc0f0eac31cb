//! Theme configuration for egui.
//!
//! Light visuals with the canvas palette taken from the config file.

use crate::config::{parse_hex_color, PaletteConfig};
use egui::{Color32, Stroke, Visuals};

/// Resolved canvas colours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color32,
    pub button: Color32,
    pub button_hover: Color32,
    pub item_fill: Color32,
    pub item_border: Color32,
    pub selected: Color32,
    pub text: Color32,
    pub hint_text: Color32,
}

fn color(value: &str, fallback: &str) -> Color32 {
    let [r, g, b] = parse_hex_color(value)
        .or_else(|| parse_hex_color(fallback))
        .unwrap_or([0, 0, 0]);
    Color32::from_rgb(r, g, b)
}

impl Theme {
    /// Resolve a palette, falling back to the default entry for bad colours.
    pub fn from_palette(palette: &PaletteConfig) -> Self {
        let defaults = PaletteConfig::default();
        let text = color(&palette.text, &defaults.text);
        Self {
            background: color(&palette.background, &defaults.background),
            button: color(&palette.button, &defaults.button),
            button_hover: color(&palette.button_hover, &defaults.button_hover),
            item_fill: color(&palette.item_fill, &defaults.item_fill),
            item_border: color(&palette.item_border, &defaults.item_border),
            selected: color(&palette.selected, &defaults.selected),
            text,
            hint_text: text.gamma_multiply(0.6),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette(&PaletteConfig::default())
    }
}

/// Apply light visuals so prompt windows match the white canvas.
pub fn apply_light_theme(ctx: &egui::Context, theme: &Theme) {
    let mut style = (*ctx.style()).clone();

    style.visuals = Visuals::light();
    style.visuals.panel_fill = theme.background;
    style.visuals.window_fill = theme.background;

    // Buttons inside prompts reuse the toolbar colours
    style.visuals.widgets.inactive.weak_bg_fill = theme.button;
    style.visuals.widgets.inactive.bg_fill = theme.button;
    style.visuals.widgets.hovered.weak_bg_fill = theme.button_hover;
    style.visuals.widgets.hovered.bg_fill = theme.button_hover;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, theme.text);
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, theme.text);

    style.visuals.selection.bg_fill = theme.selected;
    style.visuals.selection.stroke = Stroke::new(1.0, theme.text);

    // Rounding
    style.visuals.window_rounding = 8.0.into();
    style.visuals.widgets.inactive.rounding = 4.0.into();
    style.visuals.widgets.hovered.rounding = 4.0.into();
    style.visuals.widgets.active.rounding = 4.0.into();

    // Spacing
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.window_margin = 12.0.into();
    style.spacing.button_padding = egui::vec2(12.0, 6.0);

    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_colours() {
        let theme = Theme::default();
        assert_eq!(theme.background, Color32::WHITE);
        assert_eq!(theme.button, Color32::from_rgb(0x8F, 0xB9, 0xFF));
        assert_eq!(theme.selected, Color32::from_rgb(0xFF, 0xB3, 0xB3));
    }

    #[test]
    fn test_bad_colour_falls_back() {
        let palette = PaletteConfig {
            item_fill: "not a colour".to_string(),
            ..PaletteConfig::default()
        };
        let theme = Theme::from_palette(&palette);
        assert_eq!(theme.item_fill, Color32::from_rgb(0xFF, 0xF2, 0xCC));
    }
}
