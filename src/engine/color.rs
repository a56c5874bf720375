use std::fmt;

/// An sRGB color with 8-bit channels, as understood by canvas fill styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Builds a color from a packed `0xRRGGBB` value.
    pub const fn hex(packed: u32) -> Self {
        Color::rgb((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
    }

    /// Hue in degrees, saturation and lightness in `[0, 1]`.
    pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = lightness - c / 2.0;
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let to_byte = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Color::rgb(to_byte(r), to_byte(g), to_byte(b))
    }

    /// Lightens (positive) or darkens (negative) every channel by a fraction
    /// of its distance to white or black.
    pub fn shade(self, percent: f32) -> Self {
        let target = if percent < 0.0 { 0.0 } else { 255.0 };
        let p = percent.abs().min(1.0);
        let mix = |c: u8| {
            let c = c as f32;
            (c + ((target - c) * p).round()).clamp(0.0, 255.0) as u8
        };
        Color { r: mix(self.r), g: mix(self.g), b: mix(self.b), a: self.a }
    }

    /// CSS representation suitable for `fillStyle`.
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a as f32 / 255.0)
        }
    }
}
