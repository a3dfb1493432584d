use std::f64::consts::TAU;

use rand::Rng;

use crate::color::Rgb;
use crate::config::{ParticleConfig, Range};
use crate::constants::{PARTICLE_COLOR, WRAP_MARGIN};
use crate::surface::Surface;
use crate::viewport::Viewport;

const OPACITY: Range = Range::new(0.1, 0.5);
const PULSE_SPEED: Range = Range::new(0.01, 0.03);

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub vx: f64,
    pub vy: f64,
    pub opacity: f64,
    /// `None` when the particle does not pulse.
    pub pulse: Option<Pulse>,
    pub color: Rgb,
}

#[derive(Debug, Clone, Copy)]
pub struct Pulse {
    pub phase: f64,
    pub speed: f64,
}

impl Particle {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, viewport: &Viewport, config: &ParticleConfig) -> Self {
        let (x, y) = viewport.random_point(rng);
        let radius = config.radius.sample(rng);
        let vx = (rng.gen::<f64>() - 0.5) * config.drift;
        let vy = (rng.gen::<f64>() - 0.5) * config.drift;
        let opacity = OPACITY.sample(rng);
        let pulse = config.pulse.then(|| Pulse {
            phase: rng.gen::<f64>() * TAU,
            speed: PULSE_SPEED.sample(rng),
        });

        Particle { x, y, radius, vx, vy, opacity, pulse, color: PARTICLE_COLOR }
    }

    pub fn current_opacity(&self) -> f64 {
        let pulse = self.pulse.map_or(1.0, |p| p.phase.sin() * 0.3 + 0.7);
        (self.opacity * pulse).clamp(0.0, 1.0)
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_circle(self.x, self.y, self.radius, self.color.with_alpha(self.current_opacity()));
    }

    pub fn update(&mut self, viewport: &Viewport) {
        self.x += self.vx;
        self.y += self.vy;
        if let Some(pulse) = self.pulse.as_mut() {
            pulse.phase = (pulse.phase + pulse.speed) % TAU;
        }
        viewport.wrap(&mut self.x, &mut self.y, WRAP_MARGIN);
    }
}
