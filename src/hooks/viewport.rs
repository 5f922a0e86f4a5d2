use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use web_sys::MouseEvent;
use yew::prelude::*;

use super::listener::{window, WindowListener};
use crate::error::MotionError;
use crate::motion::{ViewportAction, ViewportSignal};

impl Reducible for ViewportSignal {
    type Action = ViewportAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

type Listeners = (
    WindowListener<dyn FnMut()>,
    WindowListener<dyn FnMut(MouseEvent)>,
);

fn attach(dispatcher: UseReducerDispatcher<ViewportSignal>) -> Result<Listeners, MotionError> {
    let window = window()?;

    let on_scroll = {
        let dispatcher = dispatcher.clone();
        let window = window.clone();
        Closure::wrap(Box::new(move || {
            if let Ok(offset) = window.scroll_y() {
                dispatcher.dispatch(ViewportAction::Scrolled(offset));
            }
        }) as Box<dyn FnMut()>)
    };
    let on_pointer = {
        let dispatcher = dispatcher.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            dispatcher.dispatch(ViewportAction::PointerMoved {
                x: f64::from(event.client_x()),
                y: f64::from(event.client_y()),
            });
        }) as Box<dyn FnMut(MouseEvent)>)
    };

    let scroll = WindowListener::new(&window, "scroll", on_scroll)?;
    let pointer = WindowListener::new(&window, "mousemove", on_pointer)?;

    // Initial sample, the page may be restored mid-scroll
    let offset = window.scroll_y()?;
    dispatcher.dispatch(ViewportAction::Scrolled(offset));

    Ok((scroll, pointer))
}

/// Latest scroll offset and pointer position for the lifetime of the
/// calling component.
#[hook]
pub fn use_viewport_signal() -> ViewportSignal {
    let signal = use_reducer(ViewportSignal::default);

    {
        let dispatcher = signal.dispatcher();
        use_effect_with_deps(
            move |_| {
                let listeners = match attach(dispatcher) {
                    Ok(listeners) => {
                        debug!("Viewport listeners attached");
                        Some(listeners)
                    }
                    Err(err) => {
                        warn!("Viewport effects disabled: {}", err);
                        None
                    }
                };
                move || drop(listeners)
            },
            (),
        );
    }

    *signal
}
