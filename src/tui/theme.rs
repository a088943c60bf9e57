use ratatui::style::Color;

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub highlight: Color,
    pub accent: Color,
    pub selection_bg: Color,
    pub green: Color,
    pub red: Color,
    pub yellow: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0F, 0x17, 0x2A),
            text: Color::Rgb(0xCB, 0xD5, 0xE1),
            text_bright: Color::Rgb(0xF8, 0xFA, 0xFC),
            dim: Color::Rgb(0x64, 0x74, 0x8B),
            highlight: Color::Rgb(0x81, 0x8C, 0xF8),
            accent: Color::Rgb(0x63, 0x66, 0xF1),
            selection_bg: Color::Rgb(0x1E, 0x29, 0x3B),
            green: Color::Rgb(0x4A, 0xDE, 0x80),
            red: Color::Rgb(0xF8, 0x71, 0x71),
            yellow: Color::Rgb(0xFA, 0xCC, 0x15),
        }
    }
}
