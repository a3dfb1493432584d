use crate::color::Rgb;

// Frame pacing
pub const TARGET_FPS: f64 = 60.0;

// Stars
pub const STAR_AREA_PER_STAR: f64 = 8000.0;
pub const STAR_MAX_COUNT: usize = 200;
pub const STAR_FIXED_COUNT: usize = 150;
pub const STAR_MIN_RADIUS: f64 = 0.5;
pub const STAR_MAX_RADIUS: f64 = 2.5;
pub const STAR_TWINKLE_SPEED: f64 = 0.02;
pub const STAR_TWINKLE_BASE: f64 = 0.005;
pub const STAR_DRIFT: f64 = 0.2;
pub const STAR_HALO_THRESHOLD: f64 = 1.8;
pub const STAR_HALO_SCALE: f64 = 2.5;
pub const STAR_HALO_ALPHA: f64 = 0.15;

/// Margin past the viewport edge before stars and particles wrap.
pub const WRAP_MARGIN: f64 = 10.0;

// Shooting stars
pub const SHOOTING_STAR_COUNT: usize = 2;
pub const SHOOTING_STAR_SIMPLE_COUNT: usize = 1;
pub const SHOOTING_STAR_TRAIL: usize = 25;
pub const SHOOTING_STAR_LIFE: u32 = 120;
pub const SHOOTING_STAR_SPEED: (f64, f64) = (3.0, 8.0);
pub const SHOOTING_STAR_SIMPLE_SPEED: (f64, f64) = (4.0, 10.0);
pub const SHOOTING_STAR_SPAWN_OFFSET: f64 = 50.0;
pub const SHOOTING_STAR_OFFSCREEN: f64 = 100.0;
pub const SHOOTING_STAR_AIM_JITTER: f64 = 0.8;
pub const SHOOTING_STAR_BAND: f64 = 0.3;
pub const SHOOTING_STAR_HEADING: (f64, f64) = (std::f64::consts::FRAC_PI_6, std::f64::consts::FRAC_PI_3);
// 2-7 seconds at the target rate
pub const SHOOTING_STAR_DELAY: (u32, u32) = (120, 420);
pub const SHOOTING_STAR_HEAD_RADIUS: f64 = 3.0;
pub const SHOOTING_STAR_GLOW_RADIUS: f64 = 8.0;
pub const SHOOTING_STAR_GLOW_ALPHA: f64 = 0.3;
pub const SHOOTING_STAR_TRAIL_ALPHA: f64 = 0.6;
pub const SHOOTING_STAR_COLOR: Rgb = Rgb::new(0, 212, 255);

// Particles
pub const PARTICLE_AREA_PER_PARTICLE: f64 = 15000.0;
pub const PARTICLE_MAX_COUNT: usize = 80;
pub const PARTICLE_FIXED_COUNT: usize = 50;
pub const PARTICLE_MIN_RADIUS: f64 = 0.3;
pub const PARTICLE_MAX_RADIUS: f64 = 1.5;
pub const PARTICLE_DRIFT: f64 = 0.3;
pub const PARTICLE_COLOR: Rgb = Rgb::new(0, 212, 255);

// Nebula
pub const NEBULA_LAYERS: usize = 4;
pub const NEBULA_SIMPLE_LAYERS: usize = 3;
pub const NEBULA_ANIMATION_SPEED: f64 = 0.0005;
pub const NEBULA_MIN_RADIUS: f64 = 200.0;
pub const NEBULA_MAX_RADIUS: f64 = 500.0;
pub const NEBULA_DRIFT: f64 = 0.1;
pub const NEBULA_SWAY: (f64, f64) = (30.0, 20.0);

// Constellations
pub const CONSTELLATION_CHANCE: f64 = 0.1;
pub const CONSTELLATION_STAR_LIMIT: usize = 50;
pub const CONSTELLATION_STEP: usize = 5;
pub const CONSTELLATION_DISTANCE: f64 = 120.0;
pub const CONSTELLATION_LINE_CHANCE: f64 = 0.003;
pub const CONSTELLATION_ALPHA: f64 = 0.15;

// Pointer glow
pub const POINTER_GLOW_RADIUS: f64 = 150.0;
pub const POINTER_DECAY: f64 = 0.95;
pub const POINTER_SIMPLE_CUTOFF: f64 = 0.01;

pub const STAR_COLORS: [Rgb; 6] = [
    Rgb::new(255, 255, 255), // White
    Rgb::new(0, 212, 255),   // Cyan
    Rgb::new(255, 182, 193), // Light pink
    Rgb::new(173, 216, 230), // Light blue
    Rgb::new(255, 255, 224), // Light yellow
    Rgb::new(255, 107, 157), // Pink
];

pub const NEBULA_COLORS: [Rgb; 5] = [
    Rgb::new(75, 0, 130),    // Indigo
    Rgb::new(72, 61, 139),   // Dark slate blue
    Rgb::new(0, 212, 255),   // Cyan
    Rgb::new(255, 107, 157), // Pink
    Rgb::new(138, 43, 226),  // Blue violet
];

pub const BACKGROUND_STOPS: [(f64, Rgb); 4] = [
    (0.0, Rgb::new(0x0a, 0x0a, 0x0a)),
    (0.3, Rgb::new(0x1a, 0x0a, 0x2e)),
    (0.7, Rgb::new(0x16, 0x21, 0x3e)),
    (1.0, Rgb::new(0x0f, 0x34, 0x60)),
];

pub const CANVAS_ID: &str = "spaceCanvas";
pub const CONFIG_ATTRIBUTE: &str = "data-starfield";
