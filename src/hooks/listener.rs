use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Window};

use crate::error::MotionError;

/// Passive window event listener, removed again when dropped.
pub struct WindowListener<F: ?Sized> {
    window: Window,
    event: &'static str,
    callback: Closure<F>,
}

impl<F: ?Sized> WindowListener<F> {
    pub fn new(window: &Window, event: &'static str, callback: Closure<F>) -> Result<Self, MotionError> {
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            window: window.clone(),
            event,
            callback,
        })
    }
}

impl<F: ?Sized> Drop for WindowListener<F> {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove {} listener: {:?}", self.event, err);
        }
    }
}

pub fn window() -> Result<Window, MotionError> {
    web_sys::window().ok_or(MotionError::Missing("window"))
}
