use std::fmt;

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    pub fn with_alpha(self, a: f64) -> Rgba {
        Rgba { rgb: self, a: a.clamp(0.0, 1.0) }
    }

    pub fn pick<R: Rng + ?Sized>(palette: &[Rgb], rng: &mut R) -> Rgb {
        if palette.is_empty() {
            return Rgb::new(255, 255, 255);
        }
        palette[rng.gen_range(0..palette.len())]
    }
}

/// Color plus alpha, formatted as a CSS `rgba()` string for the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub a: f64,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba { rgb: Rgb::new(0, 0, 0), a: 0.0 };
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.rgb.r, self.rgb.g, self.rgb.b, self.a)
    }
}
