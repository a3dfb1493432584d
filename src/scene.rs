use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::Config;
use crate::constants::BACKGROUND_STOPS;
use crate::constellation;
use crate::nebula::NebulaCloud;
use crate::particle::Particle;
use crate::pointer::Pointer;
use crate::shooting_star::ShootingStar;
use crate::star::Star;
use crate::surface::{ColorStop, Surface};
use crate::viewport::Viewport;

/// Everything the frame loop and the event handlers touch.
pub struct Starfield<R = SmallRng> {
    pub config: Config,
    pub viewport: Viewport,
    pub stars: Vec<Star>,
    pub shooting_stars: Vec<ShootingStar>,
    pub particles: Vec<Particle>,
    pub nebula: Vec<NebulaCloud>,
    pub pointer: Pointer,
    last_frame: f64,
    rng: R,
}

pub type SharedStarfield = Rc<RefCell<Starfield>>;

impl Starfield {
    pub fn new(config: Config, width: f64, height: f64) -> Self {
        Starfield::with_rng(config, width, height, SmallRng::from_entropy())
    }
}

impl<R: Rng> Starfield<R> {
    pub fn with_rng(config: Config, width: f64, height: f64, rng: R) -> Self {
        let viewport = Viewport::new(width, height);
        let mut field = Starfield {
            config,
            viewport,
            stars: Vec::new(),
            shooting_stars: Vec::new(),
            particles: Vec::new(),
            nebula: Vec::new(),
            pointer: Pointer::centered(&viewport),
            last_frame: 0.0,
            rng,
        };
        field.populate();
        field
    }

    /// Adopts a new viewport size and rebuilds every pool for it.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::new(width, height);
        self.populate();
        log::debug!(
            "starfield resized to {}x{}: {} stars, {} particles, {} shooting stars, {} clouds",
            self.viewport.width,
            self.viewport.height,
            self.stars.len(),
            self.particles.len(),
            self.shooting_stars.len(),
            self.nebula.len(),
        );
    }

    fn populate(&mut self) {
        let vp = self.viewport;
        let cfg = &self.config;
        let rng = &mut self.rng;

        self.stars.clear();
        self.shooting_stars.clear();
        self.particles.clear();
        self.nebula.clear();

        let star_count = cfg.stars.population.count(&vp);
        self.stars.extend((0..star_count).map(|_| Star::new(rng, &vp, &cfg.stars)));

        self.shooting_stars
            .extend((0..cfg.shooting_stars.count).map(|_| ShootingStar::new(rng, &vp, &cfg.shooting_stars)));

        let particle_count = cfg.particles.population.count(&vp);
        self.particles
            .extend((0..particle_count).map(|_| Particle::new(rng, &vp, &cfg.particles)));

        self.nebula
            .extend((0..cfg.nebula.layers).map(|layer| NebulaCloud::new(rng, &vp, &cfg.nebula, layer)));
    }

    /// Whether enough time has passed since the last rendered frame.
    pub fn frame_due(&self, now_ms: f64) -> bool {
        match self.config.frame_interval_ms {
            Some(interval) => now_ms - self.last_frame >= interval,
            None => true,
        }
    }

    /// Renders and advances one frame if the gate allows. Returns whether it did.
    pub fn frame(&mut self, now_ms: f64, surface: &mut dyn Surface) -> bool {
        if !self.frame_due(now_ms) {
            return false;
        }

        let vp = self.viewport;
        let cfg = &self.config;
        let rng = &mut self.rng;

        let background: Vec<ColorStop> = BACKGROUND_STOPS
            .iter()
            .map(|&(offset, rgb)| ColorStop::new(offset, rgb.with_alpha(1.0)))
            .collect();
        surface.fill_vertical_gradient(vp.width, vp.height, &background);

        for cloud in self.nebula.iter_mut() {
            cloud.draw(surface, &vp, &cfg.nebula, now_ms);
            cloud.update(&vp);
        }

        constellation::draw_constellations(&self.stars, surface, rng, &cfg.constellations);

        for particle in self.particles.iter_mut() {
            particle.draw(surface);
            particle.update(&vp);
        }

        for star in self.stars.iter_mut() {
            star.draw(surface, &cfg.stars);
            star.update(&vp);
        }

        for shooting_star in self.shooting_stars.iter_mut() {
            shooting_star.draw(surface);
            shooting_star.update(rng, &vp, &cfg.shooting_stars);
        }

        self.pointer.draw(surface, &vp, &cfg.pointer);

        self.last_frame = now_ms;
        true
    }
}
