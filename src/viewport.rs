use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        // NaN or negative sizes degrade to an empty viewport
        Viewport {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> (f64, f64) {
        (rng.gen::<f64>() * self.width, rng.gen::<f64>() * self.height)
    }

    /// Moves a point that has left the viewport inflated by `margin` to the
    /// opposite inflated edge. Each axis wraps independently.
    pub fn wrap(&self, x: &mut f64, y: &mut f64, margin: f64) {
        if *x < -margin {
            *x = self.width + margin;
        } else if *x > self.width + margin {
            *x = -margin;
        }
        if *y < -margin {
            *y = self.height + margin;
        } else if *y > self.height + margin {
            *y = -margin;
        }
    }

    pub fn contains(&self, x: f64, y: f64, margin: f64) -> bool {
        x >= -margin && x <= self.width + margin && y >= -margin && y <= self.height + margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_to_opposite_inflated_edge() {
        let vp = Viewport::new(100.0, 50.0);
        let (mut x, mut y) = (-10.5, 60.1);
        vp.wrap(&mut x, &mut y, 10.0);
        assert_eq!((x, y), (110.0, -10.0));

        let (mut x, mut y) = (110.2, -10.01);
        vp.wrap(&mut x, &mut y, 10.0);
        assert_eq!((x, y), (-10.0, 60.0));
    }

    #[test]
    fn points_inside_margin_are_untouched() {
        let vp = Viewport::new(100.0, 50.0);
        let (mut x, mut y) = (-9.0, 55.0);
        vp.wrap(&mut x, &mut y, 10.0);
        assert_eq!((x, y), (-9.0, 55.0));
        assert!(vp.contains(x, y, 10.0));
    }

    #[test]
    fn negative_size_becomes_empty() {
        let vp = Viewport::new(-4.0, 30.0);
        assert_eq!(vp.area(), 0.0);
    }
}
