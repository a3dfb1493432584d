use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use crate::canvas;
use crate::config::Config;
use crate::constants::CONFIG_ATTRIBUTE;
use crate::error::StarfieldError;
use crate::input::{self, Listener};
use crate::scene::{SharedStarfield, Starfield};

struct LoopInner {
    raf_id: Cell<Option<i32>>,
    stopped: Cell<bool>,
    frame: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    listeners: RefCell<Vec<Listener>>,
}

impl LoopInner {
    fn request_frame(&self) {
        if self.stopped.get() {
            return;
        }
        let Some(window) = web_sys::window() else { return };
        if let Some(frame) = self.frame.borrow().as_ref() {
            match window.request_animation_frame(frame.as_ref().unchecked_ref()) {
                Ok(id) => self.raf_id.set(Some(id)),
                Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
            }
        }
    }

    fn stop(&self) {
        if self.stopped.replace(true) {
            return;
        }
        if let Some(id) = self.raf_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        for listener in self.listeners.borrow_mut().drain(..) {
            listener.detach();
        }
        self.frame.borrow_mut().take();
        log::info!("starfield stopped");
    }
}

/// Owns the running animation. Stopping or dropping it cancels the pending
/// frame and detaches every listener.
pub struct LoopHandle {
    inner: Rc<LoopInner>,
}

impl LoopHandle {
    /// Safe to call more than once; later calls do nothing.
    pub fn stop(&self) {
        self.inner.stop();
    }
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        self.inner.stop();
    }
}

/// Override JSON the host page put on `<body data-starfield=...>`, if any.
pub fn page_override() -> Option<String> {
    web_sys::window()?
        .document()?
        .body()?
        .get_attribute(CONFIG_ATTRIBUTE)
}

/// Starts the starfield on the canvas with the given id, applying any
/// `<body data-starfield>` override.
pub fn launch(canvas_id: &str) -> Result<LoopHandle, StarfieldError> {
    let canvas = canvas::find_canvas(canvas_id)?;
    let config = Config::from_override(page_override().as_deref());
    start(canvas, config)
}

pub fn start(canvas: HtmlCanvasElement, config: Config) -> Result<LoopHandle, StarfieldError> {
    let mut ctx = canvas::get_context(&canvas)?;
    let (w, h) = canvas::resize(&canvas)?;
    let variant = config.variant;
    let state: SharedStarfield = Rc::new(RefCell::new(Starfield::new(config, w, h)));

    let inner = Rc::new(LoopInner {
        raf_id: Cell::new(None),
        stopped: Cell::new(false),
        frame: RefCell::new(None),
        listeners: RefCell::new(Vec::new()),
    });

    let window = web_sys::window().ok_or(StarfieldError::NoWindow)?;
    let mut listeners = input::setup_pointer(&canvas, &state)?;
    listeners.push(canvas::setup_resize_handler(canvas.clone(), state.clone())?);
    let unload: Weak<LoopInner> = Rc::downgrade(&inner);
    listeners.push(Listener::new(&window, "beforeunload", move |_: web_sys::Event| {
        if let Some(inner) = unload.upgrade() {
            inner.stop();
        }
    })?);
    *inner.listeners.borrow_mut() = listeners;

    let weak = Rc::downgrade(&inner);
    let state_frame = state.clone();
    *inner.frame.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        let Some(inner) = weak.upgrade() else { return };
        if inner.stopped.get() {
            return;
        }

        state_frame.borrow_mut().frame(timestamp, &mut ctx);

        // Request next frame
        inner.request_frame();
    }) as Box<dyn FnMut(f64)>));

    inner.request_frame();

    {
        let s = state.borrow();
        log::info!(
            "starfield started ({:?}) at {}x{}: {} stars, {} particles",
            variant,
            w,
            h,
            s.stars.len(),
            s.particles.len(),
        );
    }

    Ok(LoopHandle { inner })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle_handle() -> LoopHandle {
        LoopHandle {
            inner: Rc::new(LoopInner {
                raf_id: Cell::new(None),
                stopped: Cell::new(false),
                frame: RefCell::new(None),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    #[test]
    fn stop_is_idempotent() {
        let handle = idle_handle();
        assert!(!handle.inner.stopped.get());
        handle.stop();
        assert!(handle.inner.stopped.get());
        handle.stop();
        assert!(handle.inner.stopped.get());
        // no frame may be requested once stopped
        handle.inner.request_frame();
        assert_eq!(handle.inner.raf_id.get(), None);
    }
}
