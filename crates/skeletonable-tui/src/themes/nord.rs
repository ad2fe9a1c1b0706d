//! Nord theme
//! https://www.nordtheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        bg0: Color::Rgb(0x2e, 0x34, 0x40),       // nord0
        bg1: Color::Rgb(0x3b, 0x42, 0x52),       // nord1
        fg0: Color::Rgb(0xec, 0xef, 0xf4),       // nord6
        grey: Color::Rgb(0x5e, 0x68, 0x7a),      // nord3 lighter
        accent: Color::Rgb(0x8f, 0xbc, 0xbb),    // nord7
        highlight: Color::Rgb(0x43, 0x4c, 0x5e), // nord2
        divider: Color::Rgb(0x4c, 0x56, 0x6a),   // nord3
    }
}
