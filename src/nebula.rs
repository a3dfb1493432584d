use rand::Rng;

use crate::color::{Rgb, Rgba};
use crate::config::{NebulaConfig, Range};
use crate::constants::{NEBULA_COLORS, NEBULA_SWAY};
use crate::surface::{ColorStop, Surface};
use crate::viewport::Viewport;

const OPACITY: Range = Range::new(0.05, 0.2);

/// A slow radial-gradient cloud. `layer` picks its color and phase-shifts its sway.
#[derive(Debug, Clone)]
pub struct NebulaCloud {
    pub layer: usize,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub vx: f64,
    pub vy: f64,
    pub opacity: f64,
    pub color: Rgb,
}

impl NebulaCloud {
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        viewport: &Viewport,
        config: &NebulaConfig,
        layer: usize,
    ) -> Self {
        let (x, y) = viewport.random_point(rng);
        NebulaCloud {
            layer,
            x,
            y,
            radius: config.radius.sample(rng),
            vx: (rng.gen::<f64>() - 0.5) * config.drift,
            vy: (rng.gen::<f64>() - 0.5) * config.drift,
            opacity: OPACITY.sample(rng),
            color: NEBULA_COLORS[layer % NEBULA_COLORS.len()],
        }
    }

    /// Sway offset at `time_ms`, independent of the linear drift.
    pub fn sway(&self, time_ms: f64, speed: f64) -> (f64, f64) {
        let phase = self.layer as f64;
        (
            (time_ms * speed + phase).sin() * NEBULA_SWAY.0,
            (time_ms * speed * 0.7 + phase).cos() * NEBULA_SWAY.1,
        )
    }

    pub fn draw(&self, surface: &mut dyn Surface, viewport: &Viewport, config: &NebulaConfig, time_ms: f64) {
        let (ox, oy) = self.sway(time_ms, config.animation_speed);
        let stops = [
            ColorStop::new(0.0, self.color.with_alpha(self.opacity)),
            ColorStop::new(0.5, self.color.with_alpha(self.opacity * 0.5)),
            ColorStop::new(1.0, Rgba::TRANSPARENT),
        ];
        surface.fill_radial_gradient(
            self.x + ox,
            self.y + oy,
            self.radius,
            &stops,
            viewport.width,
            viewport.height,
        );
    }

    pub fn update(&mut self, viewport: &Viewport) {
        self.x += self.vx;
        self.y += self.vy;
        viewport.wrap(&mut self.x, &mut self.y, self.radius);
    }
}
