use std::collections::VecDeque;

use rand::Rng;

use crate::color::Rgb;
use crate::config::{Aim, ShootingStarConfig, Spawn};
use crate::constants::{
    SHOOTING_STAR_COLOR, SHOOTING_STAR_GLOW_ALPHA, SHOOTING_STAR_GLOW_RADIUS,
    SHOOTING_STAR_HEAD_RADIUS, SHOOTING_STAR_TRAIL_ALPHA,
};
use crate::surface::Surface;
use crate::viewport::Viewport;

const HEAD_COLOR: Rgb = Rgb::new(255, 255, 255);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShootingStarState {
    Active,
    /// Spent; respawns once `frames_left` reaches zero.
    Dormant { frames_left: u32 },
}

#[derive(Debug, Clone)]
pub struct ShootingStar {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub opacity: f64,
    pub life: u32,
    /// Most recent position first.
    pub trail: VecDeque<(f64, f64)>,
    pub state: ShootingStarState,
    pub color: Rgb,
}

impl ShootingStar {
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        viewport: &Viewport,
        config: &ShootingStarConfig,
    ) -> Self {
        let mut star = ShootingStar {
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            opacity: 1.0,
            life: config.life,
            trail: VecDeque::with_capacity(config.trail_length + 1),
            state: ShootingStarState::Active,
            color: SHOOTING_STAR_COLOR,
        };
        star.reset(rng, viewport, config);
        star
    }

    pub fn reset<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        viewport: &Viewport,
        config: &ShootingStarConfig,
    ) {
        let (x, y) = spawn_point(rng, viewport, config.spawn);
        let heading = match config.aim {
            Aim::Center { jitter } => {
                let (cx, cy) = viewport.center();
                (cy - y).atan2(cx - x) + (rng.gen::<f64>() - 0.5) * jitter
            }
            Aim::Heading { range } => range.sample(rng),
        };
        let speed = config.speed.sample(rng);

        self.x = x;
        self.y = y;
        self.vx = heading.cos() * speed;
        self.vy = heading.sin() * speed;
        self.opacity = 1.0;
        self.life = config.life;
        self.trail.clear();
        self.state = ShootingStarState::Active;
    }

    pub fn is_active(&self) -> bool {
        self.state == ShootingStarState::Active
    }

    pub fn is_off_screen(&self, viewport: &Viewport, margin: f64) -> bool {
        !viewport.contains(self.x, self.y, margin)
    }

    pub fn update<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        viewport: &Viewport,
        config: &ShootingStarConfig,
    ) {
        match self.state {
            ShootingStarState::Active => {
                self.trail.push_front((self.x, self.y));
                self.trail.truncate(config.trail_length);

                self.x += self.vx;
                self.y += self.vy;
                self.life = self.life.saturating_sub(1);
                self.opacity = (self.life as f64 / config.life.max(1) as f64).clamp(0.0, 1.0);

                if self.life == 0 || self.is_off_screen(viewport, config.offscreen_margin) {
                    self.go_dormant(rng, viewport, config);
                }
            }
            ShootingStarState::Dormant { frames_left } => {
                if frames_left <= 1 {
                    self.reset(rng, viewport, config);
                } else {
                    self.state = ShootingStarState::Dormant { frames_left: frames_left - 1 };
                }
            }
        }
    }

    fn go_dormant<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        viewport: &Viewport,
        config: &ShootingStarConfig,
    ) {
        let delay = config.reset_delay.sample(rng);
        if delay == 0 {
            self.reset(rng, viewport, config);
            return;
        }
        self.opacity = 0.0;
        self.trail.clear();
        self.state = ShootingStarState::Dormant { frames_left: delay };
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        if !self.is_active() {
            return;
        }

        // Oldest points first so newer ones layer on top
        let len = self.trail.len() as f64;
        for (i, &(x, y)) in self.trail.iter().enumerate().rev() {
            let freshness = 1.0 - i as f64 / len;
            let alpha = freshness * self.opacity * SHOOTING_STAR_TRAIL_ALPHA;
            let radius = freshness * 2.0 + 0.5;
            surface.fill_circle(x, y, radius, self.color.with_alpha(alpha));
        }

        surface.fill_circle(self.x, self.y, SHOOTING_STAR_HEAD_RADIUS, HEAD_COLOR.with_alpha(self.opacity));
        surface.fill_circle(
            self.x,
            self.y,
            SHOOTING_STAR_GLOW_RADIUS,
            self.color.with_alpha(self.opacity * SHOOTING_STAR_GLOW_ALPHA),
        );
    }
}

fn spawn_point<R: Rng + ?Sized>(rng: &mut R, viewport: &Viewport, spawn: Spawn) -> (f64, f64) {
    let (w, h) = (viewport.width, viewport.height);
    match spawn {
        Spawn::Edges { offset } => match rng.gen_range(0..4) {
            0 => (rng.gen::<f64>() * w, -offset),
            1 => (w + offset, rng.gen::<f64>() * h),
            2 => (rng.gen::<f64>() * w, h + offset),
            _ => (-offset, rng.gen::<f64>() * h),
        },
        Spawn::UpperBand { fraction } => (rng.gen::<f64>() * w, rng.gen::<f64>() * h * fraction),
    }
}
