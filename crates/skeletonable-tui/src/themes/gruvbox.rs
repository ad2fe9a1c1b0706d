//! Gruvbox theme
//! https://github.com/morhetz/gruvbox

use ratatui::style::Color;
use crate::theme::Theme;

pub fn dark() -> Theme {
    Theme {
        bg0: Color::Rgb(0x28, 0x28, 0x28),
        bg1: Color::Rgb(0x32, 0x30, 0x2f),
        fg0: Color::Rgb(0xd4, 0xbe, 0x98),
        grey: Color::Rgb(0x92, 0x83, 0x74),
        accent: Color::Rgb(0x89, 0xb4, 0x82),
        highlight: Color::Rgb(0x45, 0x40, 0x3d),
        divider: Color::Rgb(0x7c, 0x6f, 0x64),
    }
}

pub fn light() -> Theme {
    Theme {
        bg0: Color::Rgb(0xfb, 0xf1, 0xc7),
        bg1: Color::Rgb(0xf2, 0xe5, 0xbc),
        fg0: Color::Rgb(0x65, 0x47, 0x35),
        grey: Color::Rgb(0x92, 0x83, 0x74),
        accent: Color::Rgb(0x42, 0x7b, 0x58),
        highlight: Color::Rgb(0xeb, 0xdb, 0xb2),
        divider: Color::Rgb(0xa8, 0x99, 0x84),
    }
}
