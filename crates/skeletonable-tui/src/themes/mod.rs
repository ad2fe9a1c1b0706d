//! Theme registry and loader

pub(crate) mod gruvbox;
mod nord;

use skeletonable_core::config::{ThemeColorOverrides, ThemeConfig};
use ratatui::style::Color;

use crate::color::parse_hex_color;
use crate::theme::Theme;

/// Load a theme by name from config, unknown names fall back to gruvbox-dark
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let base = match config.name.to_lowercase().as_str() {
        "gruvbox-light" => gruvbox::light(),
        "gruvbox-dark" => gruvbox::dark(),
        "nord" => nord::default(),
        other => {
            tracing::warn!(theme = other, "unknown theme, using gruvbox-dark");
            gruvbox::dark()
        }
    };

    apply_overrides(base, &config.colors)
}

fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let slots: [(&Option<String>, &mut Color); 7] = [
        (&overrides.bg0, &mut theme.bg0),
        (&overrides.bg1, &mut theme.bg1),
        (&overrides.fg0, &mut theme.fg0),
        (&overrides.grey, &mut theme.grey),
        (&overrides.accent, &mut theme.accent),
        (&overrides.highlight, &mut theme.highlight),
        (&overrides.divider, &mut theme.divider),
    ];
    for (hex, slot) in slots {
        if let Some(color) = hex.as_deref().and_then(parse_hex_color) {
            *slot = color;
        }
    }

    theme
}

/// Get list of available theme names
pub fn available_themes() -> Vec<&'static str> {
    vec!["gruvbox-dark", "gruvbox-light", "nord"]
}
