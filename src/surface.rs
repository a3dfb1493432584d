use crate::color::Rgba;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Rgba,
}

impl ColorStop {
    pub fn new(offset: f64, color: Rgba) -> Self {
        ColorStop { offset, color }
    }
}

/// The drawing commands the starfield issues each frame. Implemented for the
/// browser's 2D context in `canvas.rs`.
pub trait Surface {
    /// Fills `0,0 .. width,height` with a top-to-bottom linear gradient.
    fn fill_vertical_gradient(&mut self, width: f64, height: f64, stops: &[ColorStop]);

    /// Fills `0,0 .. width,height` with a radial gradient centered at `cx,cy`.
    /// The gradient falloff confines the visible effect to `radius`.
    fn fill_radial_gradient(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        stops: &[ColorStop],
        width: f64,
        height: f64,
    );

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba);

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgba, line_width: f64);
}

#[cfg(test)]
pub mod recorder {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawOp {
        Background { width: f64, height: f64, stops: Vec<ColorStop> },
        Radial { cx: f64, cy: f64, radius: f64, stops: Vec<ColorStop> },
        Circle { x: f64, y: f64, radius: f64, color: Rgba },
        Line { from: (f64, f64), to: (f64, f64), color: Rgba, width: f64 },
    }

    /// Captures draw commands for assertions.
    #[derive(Debug, Default)]
    pub struct Recorder {
        pub ops: Vec<DrawOp>,
    }

    impl Recorder {
        pub fn circles(&self) -> Vec<(f64, f64, f64, Rgba)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    DrawOp::Circle { x, y, radius, color } => Some((*x, *y, *radius, *color)),
                    _ => None,
                })
                .collect()
        }

        pub fn lines(&self) -> usize {
            self.ops.iter().filter(|op| matches!(op, DrawOp::Line { .. })).count()
        }

        pub fn radials(&self) -> usize {
            self.ops.iter().filter(|op| matches!(op, DrawOp::Radial { .. })).count()
        }
    }

    impl Surface for Recorder {
        fn fill_vertical_gradient(&mut self, width: f64, height: f64, stops: &[ColorStop]) {
            self.ops.push(DrawOp::Background { width, height, stops: stops.to_vec() });
        }

        fn fill_radial_gradient(
            &mut self,
            cx: f64,
            cy: f64,
            radius: f64,
            stops: &[ColorStop],
            _width: f64,
            _height: f64,
        ) {
            self.ops.push(DrawOp::Radial { cx, cy, radius, stops: stops.to_vec() });
        }

        fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
            self.ops.push(DrawOp::Circle { x, y, radius, color });
        }

        fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgba, line_width: f64) {
            self.ops.push(DrawOp::Line { from, to, color, width: line_width });
        }
    }
}
