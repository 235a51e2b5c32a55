use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,
    pub border: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub muted: Color,

    // Accents
    pub accent: Color,
    pub accent_alt: Color,

    // Semantic colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::midnight::default()
    }
}
