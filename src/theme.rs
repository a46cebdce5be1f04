//! Colors for the demo window
//!
//! Two built-in themes; `Theme::by_name` resolves the configured one.

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

/// Colors for the toggle button
#[derive(Debug, Clone)]
pub struct ToggleTheme {
    pub background: Color,
    pub background_hover: Color,
    pub background_pressed: Color,
    pub border: Color,
    pub glyph: Color,
    pub glyph_expanded: Color,
    pub focus_ring: Color,
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color,
    pub content_block: Color,
    pub panel_background: Color,
    pub panel_border: Color,
    pub nav_item: Color,
    pub nav_item_hover: Color,
    pub focus_ring: Color,
    /// Dims the content behind an overlay panel (alpha blended)
    pub scrim: Color,
    pub toggle: ToggleTheme,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color::rgb(0x1E, 0x1F, 0x22),
            content_block: Color::rgb(0x2B, 0x2D, 0x30),
            panel_background: Color::rgb(0x25, 0x27, 0x2A),
            panel_border: Color::rgb(0x39, 0x3B, 0x40),
            nav_item: Color::rgb(0x34, 0x37, 0x3C),
            nav_item_hover: Color::rgb(0x2E, 0x43, 0x6E),
            focus_ring: Color::rgb(0x35, 0x74, 0xF0),
            scrim: Color::rgba(0x00, 0x00, 0x00, 0x80),
            toggle: ToggleTheme {
                background: Color::rgb(0x2B, 0x2D, 0x30),
                background_hover: Color::rgb(0x39, 0x3B, 0x40),
                background_pressed: Color::rgb(0x43, 0x45, 0x4A),
                border: Color::rgb(0x4E, 0x51, 0x57),
                glyph: Color::rgb(0xDF, 0xE1, 0xE5),
                glyph_expanded: Color::rgb(0x54, 0x8A, 0xF7),
                focus_ring: Color::rgb(0x35, 0x74, 0xF0),
            },
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color::rgb(0xFF, 0xFF, 0xFF),
            content_block: Color::rgb(0xEB, 0xEC, 0xF0),
            panel_background: Color::rgb(0xF7, 0xF8, 0xFA),
            panel_border: Color::rgb(0xDF, 0xE1, 0xE5),
            nav_item: Color::rgb(0xE4, 0xE6, 0xEB),
            nav_item_hover: Color::rgb(0xD4, 0xE2, 0xFF),
            focus_ring: Color::rgb(0x35, 0x74, 0xF0),
            scrim: Color::rgba(0x00, 0x00, 0x00, 0x40),
            toggle: ToggleTheme {
                background: Color::rgb(0xFF, 0xFF, 0xFF),
                background_hover: Color::rgb(0xEB, 0xEC, 0xF0),
                background_pressed: Color::rgb(0xDF, 0xE1, 0xE5),
                border: Color::rgb(0xC9, 0xCC, 0xD6),
                glyph: Color::rgb(0x27, 0x28, 0x2E),
                glyph_expanded: Color::rgb(0x35, 0x74, 0xF0),
                focus_ring: Color::rgb(0x35, 0x74, 0xF0),
            },
        }
    }

    /// Resolve a built-in theme by name
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }

    /// Resolve by name, falling back to dark with a warning
    pub fn by_name_or_default(name: &str) -> Self {
        Self::by_name(name).unwrap_or_else(|| {
            tracing::warn!("Unknown theme '{}', using dark", name);
            Self::dark()
        })
    }
}
