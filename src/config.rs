use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::*;
use crate::error::StarfieldError;
use crate::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Area-scaled pools, edge spawns aimed at the center, deferred resets.
    #[default]
    Enhanced,
    /// Fixed pools, upper-band spawns on a fixed heading, immediate resets.
    Simple,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Range { min, max }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.min + rng.gen::<f64>() * (self.max - self.min)
    }

    fn normalize(&mut self) {
        if self.min > self.max {
            std::mem::swap(&mut self.min, &mut self.max);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRange {
    pub min: u32,
    pub max: u32,
}

impl FrameRange {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.gen_range(self.min..=self.max)
    }
}

/// How many entities a pool holds for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Population {
    /// `min(max, floor(area / area_per_entity))`
    Scaled { area_per_entity: f64, max: usize },
    Fixed(usize),
}

impl Population {
    pub fn set_max(&mut self, cap: usize) {
        match self {
            Population::Scaled { max, .. } => *max = cap,
            Population::Fixed(n) => *n = cap,
        }
    }

    pub fn count(&self, viewport: &Viewport) -> usize {
        match *self {
            Population::Scaled { area_per_entity, max } => {
                if area_per_entity <= 0.0 {
                    return max;
                }
                let scaled = (viewport.area() / area_per_entity).floor();
                (scaled as usize).min(max)
            }
            Population::Fixed(n) => n,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spawn {
    /// Just outside a random viewport edge.
    Edges { offset: f64 },
    /// Anywhere across the width, within the top `fraction` of the height.
    UpperBand { fraction: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aim {
    /// Toward the viewport center, jittered by up to `±jitter / 2` radians.
    Center { jitter: f64 },
    /// A heading drawn from `range` radians, independent of spawn point.
    Heading { range: Range },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarConfig {
    pub population: Population,
    pub radius: Range,
    pub twinkle_speed: f64,
    pub drift: f64,
    pub halo_threshold: f64,
    pub halo_scale: f64,
    pub halo_alpha: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShootingStarConfig {
    pub count: usize,
    pub trail_length: usize,
    pub life: u32,
    pub speed: Range,
    pub spawn: Spawn,
    pub aim: Aim,
    pub offscreen_margin: f64,
    /// Frames a spent shooting star waits before respawning.
    pub reset_delay: FrameRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleConfig {
    pub population: Population,
    pub radius: Range,
    pub drift: f64,
    pub pulse: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NebulaConfig {
    pub layers: usize,
    pub animation_speed: f64,
    pub radius: Range,
    pub drift: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstellationConfig {
    pub chance: f64,
    pub star_limit: usize,
    pub step: usize,
    pub distance: f64,
    pub line_chance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerConfig {
    pub radius: f64,
    pub decay: f64,
    /// The glow is drawn only while influence is above this.
    pub cutoff: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub variant: Variant,
    /// Minimum milliseconds between rendered frames; `None` renders every refresh.
    pub frame_interval_ms: Option<f64>,
    pub stars: StarConfig,
    pub shooting_stars: ShootingStarConfig,
    pub particles: ParticleConfig,
    pub nebula: NebulaConfig,
    pub constellations: ConstellationConfig,
    pub pointer: PointerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config::for_variant(Variant::default())
    }
}

impl Config {
    pub fn for_variant(variant: Variant) -> Self {
        let enhanced = variant == Variant::Enhanced;

        let stars = StarConfig {
            population: if enhanced {
                Population::Scaled { area_per_entity: STAR_AREA_PER_STAR, max: STAR_MAX_COUNT }
            } else {
                Population::Fixed(STAR_FIXED_COUNT)
            },
            radius: Range::new(STAR_MIN_RADIUS, STAR_MAX_RADIUS),
            twinkle_speed: STAR_TWINKLE_SPEED,
            drift: STAR_DRIFT,
            halo_threshold: STAR_HALO_THRESHOLD,
            halo_scale: STAR_HALO_SCALE,
            halo_alpha: STAR_HALO_ALPHA,
        };

        let shooting_stars = if enhanced {
            ShootingStarConfig {
                count: SHOOTING_STAR_COUNT,
                trail_length: SHOOTING_STAR_TRAIL,
                life: SHOOTING_STAR_LIFE,
                speed: Range::new(SHOOTING_STAR_SPEED.0, SHOOTING_STAR_SPEED.1),
                spawn: Spawn::Edges { offset: SHOOTING_STAR_SPAWN_OFFSET },
                aim: Aim::Center { jitter: SHOOTING_STAR_AIM_JITTER },
                offscreen_margin: SHOOTING_STAR_OFFSCREEN,
                reset_delay: FrameRange { min: SHOOTING_STAR_DELAY.0, max: SHOOTING_STAR_DELAY.1 },
            }
        } else {
            ShootingStarConfig {
                count: SHOOTING_STAR_SIMPLE_COUNT,
                trail_length: SHOOTING_STAR_TRAIL,
                life: SHOOTING_STAR_LIFE,
                speed: Range::new(SHOOTING_STAR_SIMPLE_SPEED.0, SHOOTING_STAR_SIMPLE_SPEED.1),
                spawn: Spawn::UpperBand { fraction: SHOOTING_STAR_BAND },
                aim: Aim::Heading {
                    range: Range::new(SHOOTING_STAR_HEADING.0, SHOOTING_STAR_HEADING.1),
                },
                offscreen_margin: SHOOTING_STAR_OFFSCREEN,
                reset_delay: FrameRange { min: 0, max: 0 },
            }
        };

        let particles = ParticleConfig {
            population: if enhanced {
                Population::Scaled {
                    area_per_entity: PARTICLE_AREA_PER_PARTICLE,
                    max: PARTICLE_MAX_COUNT,
                }
            } else {
                Population::Fixed(PARTICLE_FIXED_COUNT)
            },
            radius: Range::new(PARTICLE_MIN_RADIUS, PARTICLE_MAX_RADIUS),
            drift: PARTICLE_DRIFT,
            pulse: enhanced,
        };

        Config {
            variant,
            frame_interval_ms: enhanced.then(|| 1000.0 / TARGET_FPS),
            stars,
            shooting_stars,
            particles,
            nebula: NebulaConfig {
                layers: if enhanced { NEBULA_LAYERS } else { NEBULA_SIMPLE_LAYERS },
                animation_speed: NEBULA_ANIMATION_SPEED,
                radius: Range::new(NEBULA_MIN_RADIUS, NEBULA_MAX_RADIUS),
                drift: NEBULA_DRIFT,
            },
            constellations: ConstellationConfig {
                chance: CONSTELLATION_CHANCE,
                star_limit: CONSTELLATION_STAR_LIMIT,
                step: CONSTELLATION_STEP,
                distance: CONSTELLATION_DISTANCE,
                line_chance: CONSTELLATION_LINE_CHANCE,
            },
            pointer: PointerConfig {
                radius: POINTER_GLOW_RADIUS,
                decay: POINTER_DECAY,
                cutoff: if enhanced { 0.0 } else { POINTER_SIMPLE_CUTOFF },
            },
        }
    }

    /// Builds a config from a JSON override. The `variant` key picks the base
    /// table, every other key replaces the matching field of that base.
    pub fn from_json(json: &str) -> Result<Self, StarfieldError> {
        let mut overrides: Value = serde_json::from_str(json)?;
        let variant = match overrides.get("variant") {
            Some(v) => serde_json::from_value(v.clone())?,
            None => Variant::default(),
        };
        let star_cap = take_max_count(&mut overrides, "stars")?;
        let particle_cap = take_max_count(&mut overrides, "particles")?;

        let mut merged = serde_json::to_value(Config::for_variant(variant))?;
        merge(&mut merged, overrides, false);

        let mut config: Config = serde_json::from_value(merged)?;
        if let Some(cap) = star_cap {
            config.stars.population.set_max(cap);
        }
        if let Some(cap) = particle_cap {
            config.particles.population.set_max(cap);
        }
        config.normalize();
        Ok(config)
    }

    /// Reads an optional override, keeping the defaults when it is malformed.
    pub fn from_override(json: Option<&str>) -> Self {
        match json.map(str::trim).filter(|s| !s.is_empty()) {
            None => Config::default(),
            Some(json) => Config::from_json(json).unwrap_or_else(|e| {
                log::warn!("ignoring starfield override: {}", e);
                Config::default()
            }),
        }
    }

    fn normalize(&mut self) {
        self.stars.radius.normalize();
        self.shooting_stars.speed.normalize();
        self.particles.radius.normalize();
        self.nebula.radius.normalize();
        if let Aim::Heading { range } = &mut self.shooting_stars.aim {
            range.normalize();
        }
        let delay = &mut self.shooting_stars.reset_delay;
        if delay.min > delay.max {
            std::mem::swap(&mut delay.min, &mut delay.max);
        }
        self.constellations.step = self.constellations.step.max(1);
        self.shooting_stars.life = self.shooting_stars.life.max(1);
        self.pointer.decay = self.pointer.decay.clamp(0.0, 1.0);
    }
}

/// Fields holding an externally tagged enum rather than a struct table.
const ENUM_FIELDS: [&str; 3] = ["population", "spawn", "aim"];

/// `max_count` is shorthand for the population cap of `stars` or `particles`.
fn take_max_count(overrides: &mut Value, table: &str) -> Result<Option<usize>, StarfieldError> {
    let cap = overrides
        .get_mut(table)
        .and_then(Value::as_object_mut)
        .and_then(|t| t.remove("max_count"));
    Ok(match cap {
        Some(v) => Some(serde_json::from_value(v)?),
        None => None,
    })
}

// Struct tables merge key by key; unknown keys are carried along and ignored
// by serde. An enum value is replaced outright when the override names a
// different variant tag.
fn merge(base: &mut Value, overrides: Value, is_enum: bool) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides))
            if !is_enum || overrides.keys().all(|k| base.contains_key(k)) =>
        {
            for (key, value) in overrides {
                let child_is_enum = ENUM_FIELDS.contains(&key.as_str());
                match base.get_mut(&key) {
                    Some(slot) => merge(slot, value, child_is_enum),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_hd_area_scaled_counts() {
        let config = Config::for_variant(Variant::Enhanced);
        let vp = Viewport::new(1920.0, 1080.0);
        let expected_stars = 200usize.min((1920.0 * 1080.0 / 8000.0_f64).floor() as usize);
        let expected_particles = 80usize.min((1920.0 * 1080.0 / 15000.0_f64).floor() as usize);
        assert_eq!(config.stars.population.count(&vp), expected_stars);
        assert_eq!(config.particles.population.count(&vp), expected_particles);
        assert_eq!(expected_stars, 200);
        assert_eq!(expected_particles, 80);
    }

    #[test]
    fn small_viewport_scales_below_cap() {
        let config = Config::default();
        let vp = Viewport::new(400.0, 300.0);
        assert_eq!(config.stars.population.count(&vp), 15);
        assert_eq!(config.particles.population.count(&vp), 8);
        assert_eq!(config.stars.population.count(&Viewport::new(0.0, 0.0)), 0);
    }

    #[test]
    fn simple_variant_uses_fixed_counts() {
        let config = Config::for_variant(Variant::Simple);
        let vp = Viewport::new(320.0, 200.0);
        assert_eq!(config.stars.population.count(&vp), STAR_FIXED_COUNT);
        assert_eq!(config.particles.population.count(&vp), PARTICLE_FIXED_COUNT);
        assert_eq!(config.frame_interval_ms, None);
        assert_eq!(config.shooting_stars.reset_delay, FrameRange { min: 0, max: 0 });
    }

    #[test]
    fn override_picks_variant_and_patches_fields() {
        let config = Config::from_json(
            r#"{"variant":"simple","stars":{"population":{"fixed":12}},"pointer":{"radius":90.0}}"#,
        )
        .unwrap();
        assert_eq!(config.variant, Variant::Simple);
        assert_eq!(config.stars.population, Population::Fixed(12));
        assert_eq!(config.pointer.radius, 90.0);
        // untouched fields come from the simple table
        assert_eq!(config.shooting_stars.count, SHOOTING_STAR_SIMPLE_COUNT);
        assert_eq!(config.pointer.cutoff, POINTER_SIMPLE_CUTOFF);
    }

    #[test]
    fn override_ranges_are_normalized() {
        let config =
            Config::from_json(r#"{"shooting_stars":{"speed":{"min":9.0,"max":2.0}}}"#).unwrap();
        assert_eq!(config.shooting_stars.speed, Range::new(2.0, 9.0));
    }

    #[test]
    fn max_count_caps_the_population() {
        let config = Config::from_json(r#"{"stars":{"max_count":120}}"#).unwrap();
        assert_eq!(
            config.stars.population,
            Population::Scaled { area_per_entity: STAR_AREA_PER_STAR, max: 120 }
        );
        assert_eq!(config.stars.population.count(&Viewport::new(1920.0, 1080.0)), 120);
        // the rest of the table keeps its defaults
        assert_eq!(config.stars.radius, Config::default().stars.radius);

        let simple =
            Config::from_json(r#"{"variant":"simple","particles":{"max_count":7}}"#).unwrap();
        assert_eq!(simple.particles.population, Population::Fixed(7));
        assert!(Config::from_json(r#"{"stars":{"max_count":-3}}"#).is_err());
    }

    #[test]
    fn unknown_keys_leave_the_table_intact() {
        let config = Config::from_json(r#"{"pointer":{"glow":1.0}}"#).unwrap();
        assert_eq!(config.pointer, Config::default().pointer);
    }

    #[test]
    fn enum_override_with_same_tag_merges_fields() {
        let config =
            Config::from_json(r#"{"particles":{"population":{"scaled":{"max":10}}}}"#).unwrap();
        assert_eq!(
            config.particles.population,
            Population::Scaled { area_per_entity: PARTICLE_AREA_PER_PARTICLE, max: 10 }
        );
    }

    #[test]
    fn override_can_switch_enum_shapes() {
        let config = Config::from_json(r#"{"shooting_stars":{"spawn":{"upper_band":{"fraction":0.2}}}}"#)
            .unwrap();
        assert_eq!(config.variant, Variant::Enhanced);
        assert_eq!(config.shooting_stars.spawn, Spawn::UpperBand { fraction: 0.2 });
        let empty = Config::from_json("{}").unwrap();
        assert_eq!(empty.variant, Variant::Enhanced);
        assert_eq!(empty.stars.population, Config::default().stars.population);
    }

    #[test]
    fn malformed_override_falls_back_to_defaults() {
        assert!(Config::from_json("{not json").is_err());
        assert!(Config::from_json(r#"{"variant":"dazzling"}"#).is_err());
        assert_eq!(Config::from_override(Some("{not json")), Config::default());
        assert_eq!(Config::from_override(Some("   ")), Config::default());
        assert_eq!(Config::from_override(None), Config::default());
    }
}
