use crossterm::style::Color;

/// Color theme for the editor
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Grid border color
    pub border: Color,
    /// Box border color (thicker 3x3 separators)
    pub box_border: Color,
    /// User-entered value color
    pub filled: Color,
    /// Solution hint (placeholder) color
    pub hint: Color,
    /// Focused cell background
    pub selected_bg: Color,
    /// Status line text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            border: Color::Rgb { r: 70, g: 75, b: 90 },
            box_border: Color::Rgb { r: 130, g: 140, b: 170 },
            filled: Color::Rgb { r: 255, g: 255, b: 255 },
            hint: Color::Rgb { r: 120, g: 130, b: 160 },
            selected_bg: Color::Rgb { r: 70, g: 90, b: 140 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb { r: 248, g: 248, b: 252 },
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            border: Color::Rgb { r: 180, g: 180, b: 195 },
            box_border: Color::Rgb { r: 60, g: 60, b: 80 },
            filled: Color::Rgb { r: 0, g: 0, b: 0 },
            hint: Color::Rgb { r: 150, g: 150, b: 170 },
            selected_bg: Color::Rgb { r: 180, g: 200, b: 255 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
        }
    }
}
