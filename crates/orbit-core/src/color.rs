use std::fmt;

/// sRGB color with a straight (non-premultiplied) alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a packed `0xRRGGBB` value.
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            a: 1.0,
        }
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a >= 1.0 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Inner/outer stops of a blob's radial gradient.
pub type GradientStops = (Rgba, Rgba);

pub const BLOB_PALETTE: [GradientStops; 4] = [
    (Rgba::new(79, 70, 229, 0.4), Rgba::new(56, 189, 248, 0.0)),
    (Rgba::new(56, 189, 248, 0.32), Rgba::new(14, 116, 144, 0.0)),
    (Rgba::new(148, 163, 184, 0.18), Rgba::new(15, 23, 42, 0.0)),
    (Rgba::new(139, 92, 246, 0.28), Rgba::new(15, 23, 42, 0.0)),
];

pub const GLOBE_PALETTE: [Rgba; 3] = [
    Rgba::hex(0x38bdf8), // sky
    Rgba::hex(0x6366f1), // indigo
    Rgba::hex(0x94a3b8), // slate
];

pub const ACCENT: Rgba = Rgba::hex(0x38bdf8);
pub const SLATE: Rgba = Rgba::new(148, 163, 184, 1.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_colors_print_as_hex() {
        assert_eq!(Rgba::hex(0x38bdf8).to_css(), "#38bdf8");
    }

    #[test]
    fn translucent_colors_print_as_rgba() {
        assert_eq!(SLATE.with_alpha(0.15).to_css(), "rgba(148, 163, 184, 0.15)");
    }
}
