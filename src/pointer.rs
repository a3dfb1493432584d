use crate::color::{Rgb, Rgba};
use crate::config::PointerConfig;
use crate::surface::{ColorStop, Surface};
use crate::viewport::Viewport;

const GLOW_INNER: Rgb = Rgb::new(0, 212, 255);
const GLOW_OUTER: Rgb = Rgb::new(255, 107, 157);

/// Last known cursor position and the strength of its glow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
    pub influence: f64,
}

impl Pointer {
    pub fn centered(viewport: &Viewport) -> Self {
        let (x, y) = viewport.center();
        Pointer { x, y, influence: 0.0 }
    }

    pub fn on_move(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
        self.influence = 1.0;
    }

    pub fn on_leave(&mut self) {
        self.influence = 0.0;
    }

    /// Draws the glow if influence is above the cutoff, then decays it.
    pub fn draw(&mut self, surface: &mut dyn Surface, viewport: &Viewport, config: &PointerConfig) {
        if self.influence <= config.cutoff {
            return;
        }

        let stops = [
            ColorStop::new(0.0, GLOW_INNER.with_alpha(0.1 * self.influence)),
            ColorStop::new(0.5, GLOW_OUTER.with_alpha(0.05 * self.influence)),
            ColorStop::new(1.0, Rgba::TRANSPARENT),
        ];
        surface.fill_radial_gradient(self.x, self.y, config.radius, &stops, viewport.width, viewport.height);

        self.influence *= config.decay;
    }
}
