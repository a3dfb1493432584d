use rand::Rng;

use crate::config::ConstellationConfig;
use crate::constants::{CONSTELLATION_ALPHA, SHOOTING_STAR_COLOR};
use crate::star::Star;
use crate::surface::Surface;

/// Occasionally links nearby stars with faint lines. Nothing is kept between
/// frames, so the lines flicker in and out. Returns the number of lines drawn.
pub fn draw_constellations<R: Rng + ?Sized>(
    stars: &[Star],
    surface: &mut dyn Surface,
    rng: &mut R,
    config: &ConstellationConfig,
) -> usize {
    if rng.gen::<f64>() >= config.chance {
        return 0;
    }

    let color = SHOOTING_STAR_COLOR.with_alpha(CONSTELLATION_ALPHA);
    let step = config.step.max(1);
    let limit = stars.len().min(config.star_limit);
    let mut drawn = 0;

    for i in (0..limit).step_by(step) {
        for j in (i + step..limit).step_by(step) {
            let (a, b) = (&stars[i], &stars[j]);
            let distance = (a.x - b.x).hypot(a.y - b.y);
            if distance < config.distance && rng.gen::<f64>() < config.line_chance {
                surface.stroke_line((a.x, a.y), (b.x, b.y), color, 1.0);
                drawn += 1;
            }
        }
    }
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::surface::recorder::Recorder;
    use crate::viewport::Viewport;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn clustered_stars(n: usize) -> Vec<Star> {
        let mut rng = StdRng::seed_from_u64(5);
        let vp = Viewport::new(50.0, 50.0);
        let config = Config::default().stars;
        (0..n).map(|_| Star::new(&mut rng, &vp, &config)).collect()
    }

    #[test]
    fn never_draws_when_chance_is_zero() {
        let stars = clustered_stars(60);
        let mut config = Config::default().constellations;
        config.chance = 0.0;
        let mut rec = Recorder::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(draw_constellations(&stars, &mut rec, &mut rng, &config), 0);
        assert!(rec.ops.is_empty());
    }

    #[test]
    fn links_every_close_sampled_pair_when_forced() {
        let stars = clustered_stars(60);
        let mut config = Config::default().constellations;
        config.chance = 1.0;
        config.line_chance = 1.0;
        let mut rec = Recorder::default();
        let mut rng = StdRng::seed_from_u64(1);

        // first 50 stars at step 5 -> 10 sampled stars -> 45 pairs, all within 120px
        let drawn = draw_constellations(&stars, &mut rec, &mut rng, &config);
        assert_eq!(drawn, 45);
        assert_eq!(rec.lines(), 45);
    }

    #[test]
    fn distant_stars_are_never_linked() {
        let mut stars = clustered_stars(10);
        for (i, s) in stars.iter_mut().enumerate() {
            s.x = i as f64 * 1000.0;
        }
        let mut config = Config::default().constellations;
        config.chance = 1.0;
        config.line_chance = 1.0;
        config.step = 1;
        let mut rec = Recorder::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(draw_constellations(&stars, &mut rec, &mut rng, &config), 0);
    }
}
