use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlCanvasElement, MouseEvent};

use crate::error::StarfieldError;
use crate::scene::SharedStarfield;

/// A DOM event listener that stays attached until `detach` is called.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, StarfieldError> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Listener {
            target: target.clone(),
            event,
            closure,
        })
    }

    pub fn detach(self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

pub fn setup_pointer(
    canvas: &HtmlCanvasElement,
    state: &SharedStarfield,
) -> Result<Vec<Listener>, StarfieldError> {
    let state_mm = state.clone();
    let mousemove = Listener::new(canvas, "mousemove", move |e: Event| {
        if let Some(e) = e.dyn_ref::<MouseEvent>() {
            state_mm
                .borrow_mut()
                .pointer
                .on_move(e.client_x() as f64, e.client_y() as f64);
        }
    })?;

    let state_ml = state.clone();
    let mouseleave = Listener::new(canvas, "mouseleave", move |_: Event| {
        state_ml.borrow_mut().pointer.on_leave();
    })?;

    Ok(vec![mousemove, mouseleave])
}
