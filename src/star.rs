use std::f64::consts::TAU;

use rand::Rng;

use crate::color::Rgb;
use crate::config::{Range, StarConfig};
use crate::constants::{STAR_COLORS, STAR_TWINKLE_BASE, WRAP_MARGIN};
use crate::surface::Surface;
use crate::viewport::Viewport;

const OPACITY: Range = Range::new(0.2, 1.0);
const BRIGHTNESS: Range = Range::new(0.2, 1.0);

#[derive(Debug, Clone)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub vx: f64,
    pub vy: f64,
    pub opacity: f64,
    pub brightness: f64,
    pub twinkle_phase: f64,
    pub twinkle_speed: f64,
    pub color: Rgb,
}

impl Star {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, viewport: &Viewport, config: &StarConfig) -> Self {
        let (x, y) = viewport.random_point(rng);
        Star {
            x,
            y,
            radius: config.radius.sample(rng),
            vx: (rng.gen::<f64>() - 0.5) * config.drift,
            vy: (rng.gen::<f64>() - 0.5) * config.drift,
            opacity: OPACITY.sample(rng),
            brightness: BRIGHTNESS.sample(rng),
            twinkle_phase: rng.gen::<f64>() * TAU,
            twinkle_speed: rng.gen::<f64>() * config.twinkle_speed + STAR_TWINKLE_BASE,
            color: Rgb::pick(&STAR_COLORS, rng),
        }
    }

    /// Twinkle swings between 0.2 and 1.0 of the base opacity.
    pub fn current_opacity(&self) -> f64 {
        let twinkle = self.twinkle_phase.sin() * 0.4 + 0.6;
        (self.opacity * twinkle * self.brightness).clamp(0.0, 1.0)
    }

    pub fn draw(&self, surface: &mut dyn Surface, config: &StarConfig) {
        let alpha = self.current_opacity();
        surface.fill_circle(self.x, self.y, self.radius, self.color.with_alpha(alpha));

        if self.radius > config.halo_threshold {
            surface.fill_circle(
                self.x,
                self.y,
                self.radius * config.halo_scale,
                self.color.with_alpha(alpha * config.halo_alpha),
            );
        }
    }

    pub fn update(&mut self, viewport: &Viewport) {
        self.x += self.vx;
        self.y += self.vy;
        self.twinkle_phase = (self.twinkle_phase + self.twinkle_speed) % TAU;
        viewport.wrap(&mut self.x, &mut self.y, WRAP_MARGIN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::surface::recorder::Recorder;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn stars(n: usize) -> (Vec<Star>, Viewport, StarConfig) {
        let mut rng = StdRng::seed_from_u64(7);
        let vp = Viewport::new(640.0, 480.0);
        let config = Config::default().stars;
        let stars = (0..n).map(|_| Star::new(&mut rng, &vp, &config)).collect();
        (stars, vp, config)
    }

    #[test]
    fn construction_respects_radius_and_viewport() {
        let (stars, vp, config) = stars(200);
        for s in &stars {
            assert!(s.radius >= config.radius.min && s.radius <= config.radius.max);
            assert!(vp.contains(s.x, s.y, 0.0));
            assert!(STAR_COLORS.contains(&s.color));
        }
    }

    #[test]
    fn stays_in_wrap_bounds_with_valid_opacity() {
        let (mut stars, vp, _) = stars(100);
        // exaggerate drift so wrapping actually happens
        for s in stars.iter_mut() {
            s.vx *= 200.0;
            s.vy *= 200.0;
        }
        for _ in 0..500 {
            for s in stars.iter_mut() {
                s.update(&vp);
                assert!(vp.contains(s.x, s.y, WRAP_MARGIN));
                let a = s.current_opacity();
                assert!((0.0..=1.0).contains(&a));
            }
        }
    }

    #[test]
    fn only_large_stars_get_a_halo() {
        let (mut stars, _, config) = stars(2);
        stars[0].radius = 1.0;
        stars[1].radius = 2.2;

        let mut small = Recorder::default();
        stars[0].draw(&mut small, &config);
        assert_eq!(small.circles().len(), 1);

        let mut large = Recorder::default();
        stars[1].draw(&mut large, &config);
        let circles = large.circles();
        assert_eq!(circles.len(), 2);
        approx::assert_relative_eq!(circles[1].2, 2.2 * config.halo_scale);
        approx::assert_relative_eq!(circles[1].3.a, circles[0].3.a * config.halo_alpha);
    }
}
