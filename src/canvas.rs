use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

use crate::color::Rgba;
use crate::error::StarfieldError;
use crate::input::Listener;
use crate::scene::SharedStarfield;
use crate::surface::{ColorStop, Surface};

pub fn find_canvas(id: &str) -> Result<HtmlCanvasElement, StarfieldError> {
    let document = web_sys::window()
        .ok_or(StarfieldError::NoWindow)?
        .document()
        .ok_or(StarfieldError::NoDocument)?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| StarfieldError::CanvasNotFound(id.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| StarfieldError::NotACanvas(id.to_string()))
}

pub fn get_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, StarfieldError> {
    canvas
        .get_context("2d")?
        .ok_or(StarfieldError::ContextUnavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| StarfieldError::ContextUnavailable)
}

pub fn viewport_size() -> Result<(f64, f64), StarfieldError> {
    let window = web_sys::window().ok_or(StarfieldError::NoWindow)?;
    let w = window.inner_width()?.as_f64().unwrap_or(0.0);
    let h = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((w, h))
}

/// Matches the canvas backing store to the window and returns the new size.
pub fn resize(canvas: &HtmlCanvasElement) -> Result<(f64, f64), StarfieldError> {
    let (w, h) = viewport_size()?;
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    Ok((w, h))
}

pub fn setup_resize_handler(
    canvas: HtmlCanvasElement,
    state: SharedStarfield,
) -> Result<Listener, StarfieldError> {
    let window = web_sys::window().ok_or(StarfieldError::NoWindow)?;
    Listener::new(&window, "resize", move |_: web_sys::Event| match resize(&canvas) {
        Ok((w, h)) => state.borrow_mut().resize(w, h),
        Err(e) => log::warn!("resize skipped: {}", e),
    })
}

fn add_stops(gradient: &CanvasGradient, stops: &[ColorStop]) {
    for stop in stops {
        let _ = gradient.add_color_stop(stop.offset as f32, &stop.color.to_string());
    }
}

impl Surface for CanvasRenderingContext2d {
    fn fill_vertical_gradient(&mut self, width: f64, height: f64, stops: &[ColorStop]) {
        let gradient = self.create_linear_gradient(0.0, 0.0, 0.0, height);
        add_stops(&gradient, stops);
        self.set_fill_style_canvas_gradient(&gradient);
        self.fill_rect(0.0, 0.0, width, height);
    }

    fn fill_radial_gradient(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        stops: &[ColorStop],
        width: f64,
        height: f64,
    ) {
        if let Ok(gradient) = self.create_radial_gradient(cx, cy, 0.0, cx, cy, radius.max(0.0)) {
            add_stops(&gradient, stops);
            self.set_fill_style_canvas_gradient(&gradient);
            self.fill_rect(0.0, 0.0, width, height);
        }
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        self.begin_path();
        let _ = self.arc(x, y, radius.max(0.0), 0.0, TAU);
        self.set_fill_style_str(&color.to_string());
        self.fill();
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgba, line_width: f64) {
        self.set_stroke_style_str(&color.to_string());
        self.set_line_width(line_width);
        self.begin_path();
        self.move_to(from.0, from.1);
        self.line_to(to.0, to.1);
        self.stroke();
    }
}
