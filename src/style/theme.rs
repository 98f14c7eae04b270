//! Theme color tables supplying the series defaults.

use crate::color::{self, ColorU8};

/// A theme, for styling chart elements
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Theme {
    #[default]
    /// Light theme
    Light,
    /// Dark theme
    Dark,
    /// A custom theme
    Custom(ThemePalette),
}

impl Theme {
    /// Get the background color of the theme
    pub const fn background(&self) -> ColorU8 {
        self.palette().background
    }

    /// Get the foreground color of the theme
    pub const fn foreground(&self) -> ColorU8 {
        self.palette().foreground
    }

    /// Get the default series accent color of the theme
    pub const fn accent(&self) -> ColorU8 {
        self.palette().accent
    }

    /// Get the theme palette
    pub const fn palette(&self) -> &ThemePalette {
        match self {
            Theme::Light => &ThemePalette::LIGHT,
            Theme::Dark => &ThemePalette::DARK,
            Theme::Custom(palette) => palette,
        }
    }

    /// Check whether the theme is dark or light
    /// A theme is considered dark if its background color has a luminance < 0.5
    pub fn is_dark(&self) -> bool {
        self.background().luminance() < 0.5
    }
}

/// The colors used in a theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemePalette {
    /// Background color
    pub background: ColorU8,
    /// Foreground color
    pub foreground: ColorU8,
    /// Default series accent color
    pub accent: ColorU8,
}

impl ThemePalette {
    /// The light built-in theme palette
    pub const LIGHT: Self = Self {
        background: color::WHITE,
        foreground: color::BLACK,
        accent: ColorU8::from_html(b"#1f77b4"),
    };

    /// The dark built-in theme palette
    pub const DARK: Self = Self {
        background: ColorU8::from_html(b"#1e1e2e"),
        foreground: color::WHITE,
        accent: ColorU8::from_html(b"#aec7e8"),
    };
}
