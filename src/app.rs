use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::constants::CANVAS_ID;
use crate::frame_loop::{self, LoopHandle};

#[component]
pub fn App() -> impl IntoView {
    let handle: Rc<RefCell<Option<LoopHandle>>> = Rc::new(RefCell::new(None));

    // Start once the canvas is in the DOM
    let handle_mount = send_wrapper::SendWrapper::new(handle.clone());
    Effect::new(move |_| {
        if handle_mount.borrow().is_some() {
            return;
        }
        match frame_loop::launch(CANVAS_ID) {
            Ok(h) => *handle_mount.borrow_mut() = Some(h),
            Err(e) => log::error!("starfield disabled: {}", e),
        }
    });

    let handle_cleanup = send_wrapper::SendWrapper::new(handle);
    on_cleanup(move || {
        // cancels the pending frame and detaches listeners
        if let Some(h) = handle_cleanup.borrow_mut().take() {
            h.stop();
        }
    });

    view! {
        <canvas id=CANVAS_ID class="starfield"></canvas>
    }
}
