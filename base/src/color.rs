//! RGBA colors.

/// An 8-bit per channel RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorU8 {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl ColorU8 {
    /// Build an opaque color from red, green and blue components
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        ColorU8 { r, g, b, a: 255 }
    }

    /// Build a color from red, green, blue and alpha components
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        ColorU8 { r, g, b, a }
    }

    /// Build a color from an HTML hex string such as `#1f77b4` or `#fff`
    ///
    /// Panics at compile time on malformed input, so only suitable for
    /// literals.
    pub const fn from_html(hex: &[u8]) -> Self {
        if hex[0] != b'#' {
            panic!("Invalid hex color");
        }
        match hex.len() {
            4 => {
                let r = hex_to_u8(hex[1]);
                let g = hex_to_u8(hex[2]);
                let b = hex_to_u8(hex[3]);
                ColorU8::from_rgb(r << 4 | r, g << 4 | g, b << 4 | b)
            }
            7 => {
                let r = hex_to_u8(hex[1]) << 4 | hex_to_u8(hex[2]);
                let g = hex_to_u8(hex[3]) << 4 | hex_to_u8(hex[4]);
                let b = hex_to_u8(hex[5]) << 4 | hex_to_u8(hex[6]);
                ColorU8::from_rgb(r, g, b)
            }
            9 => {
                let r = hex_to_u8(hex[1]) << 4 | hex_to_u8(hex[2]);
                let g = hex_to_u8(hex[3]) << 4 | hex_to_u8(hex[4]);
                let b = hex_to_u8(hex[5]) << 4 | hex_to_u8(hex[6]);
                let a = hex_to_u8(hex[7]) << 4 | hex_to_u8(hex[8]);
                ColorU8::from_rgba(r, g, b, a)
            }
            _ => panic!("Invalid hex color"),
        }
    }

    /// The red component
    pub const fn red(&self) -> u8 {
        self.r
    }

    /// The green component
    pub const fn green(&self) -> u8 {
        self.g
    }

    /// The blue component
    pub const fn blue(&self) -> u8 {
        self.b
    }

    /// The alpha component
    pub const fn alpha(&self) -> u8 {
        self.a
    }

    /// The components as an array
    pub const fn rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// The color as an HTML hex string
    pub fn html(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// A copy with the alpha channel scaled by `opacity`
    ///
    /// Panics if `opacity` is outside `0.0..=1.0`.
    pub const fn with_opacity(self, opacity: f32) -> Self {
        assert!(0.0 <= opacity && opacity <= 1.0);
        ColorU8 {
            a: (self.a as f32 * opacity) as u8,
            ..self
        }
    }

    /// Relative luminance of the color, between 0.0 and 1.0
    pub fn luminance(&self) -> f32 {
        let [r, g, b, _] = self.rgba();
        (0.2126 * r as f32 + 0.7152 * g as f32 + 0.0722 * b as f32) / 255.0
    }
}

const fn hex_to_u8(hex: u8) -> u8 {
    match hex {
        b'0'..=b'9' => hex - b'0',
        b'a'..=b'f' => hex - b'a' + 10,
        b'A'..=b'F' => hex - b'A' + 10,
        _ => panic!("Invalid hex character"),
    }
}

/// Opaque white
pub const WHITE: ColorU8 = ColorU8::from_rgb(255, 255, 255);
/// Opaque black
pub const BLACK: ColorU8 = ColorU8::from_rgb(0, 0, 0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_html_short_and_long() {
        assert_eq!(ColorU8::from_html(b"#fff"), WHITE);
        assert_eq!(ColorU8::from_html(b"#ffffff"), WHITE);
        assert_eq!(
            ColorU8::from_html(b"#ff000080").rgba(),
            [255, 0, 0, 128]
        );
    }

    #[test]
    fn with_opacity_scales_alpha() {
        let c = ColorU8::from_rgb(10, 20, 30).with_opacity(0.5);
        assert_eq!(c.alpha(), 127);
    }

    #[test]
    #[should_panic]
    fn with_opacity_rejects_out_of_range() {
        let _ = WHITE.with_opacity(1.5);
    }

    #[test]
    fn html_round_trip() {
        assert_eq!(ColorU8::from_html(b"#1f77b4").html(), "#1f77b4");
    }

    #[test]
    fn luminance_extremes() {
        assert!(BLACK.luminance() < 0.01);
        assert!(WHITE.luminance() > 0.99);
    }
}
