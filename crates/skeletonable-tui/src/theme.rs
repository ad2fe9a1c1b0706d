use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Table background
    pub bg0: Color,
    /// Header background
    pub bg1: Color,
    pub fg0: Color,
    pub grey: Color,
    pub accent: Color,
    /// Background of the profile row
    pub highlight: Color,
    pub divider: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::gruvbox::dark()
    }
}
