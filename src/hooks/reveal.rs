use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::listener::window;
use crate::error::MotionError;
use crate::motion::reveal::visible_share;
use crate::motion::{visible_ratio, Reveal, RevealOptions};

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct SectionObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Latches on the spot if the element already qualifies at mount, otherwise
/// hands it to an observer that latches on the first qualifying entry.
fn watch(
    node: &NodeRef,
    options: RevealOptions,
    reveal: UseStateSetter<Reveal>,
) -> Result<Option<SectionObserver>, MotionError> {
    let element = node
        .cast::<Element>()
        .ok_or(MotionError::Missing("section element"))?;
    let window = window()?;

    let viewport_height = window.inner_height()?.as_f64().unwrap_or(0.0);
    let rect = element.get_bounding_client_rect();
    let ratio = visible_ratio(rect.top(), rect.bottom(), options.effective_height(viewport_height));
    if Reveal::Hidden.observe(ratio, options.threshold).is_revealed() {
        debug!("Section {} in view at mount", element.id());
        reveal.set(Reveal::Revealed);
        return Ok(None);
    }

    let threshold = options.threshold;
    let mount_area = options.effective_height(viewport_height);
    let latch = Rc::new(Cell::new(Reveal::Hidden));
    let callback: EntriesCallback = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let height = entry.bounding_client_rect().height();
                let share = if height > 0.0 {
                    let area = entry.root_bounds().map_or(mount_area, |root| root.height());
                    visible_share(entry.intersection_rect().height(), height, area)
                } else {
                    entry.intersection_ratio()
                };
                let before = latch.get();
                let after = before.observe(share, threshold);
                if after != before {
                    let target = entry.target();
                    debug!("Section {} revealed", target.id());
                    latch.set(after);
                    reveal.set(after);
                    // Nothing left to watch for once latched
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    let thresholds: Array = options
        .observer_thresholds(rect.height(), viewport_height)
        .into_iter()
        .map(JsValue::from_f64)
        .collect();
    init.set_threshold(&thresholds);
    init.set_root_margin(&options.root_margin());
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(&element);

    Ok(Some(SectionObserver {
        observer,
        _callback: callback,
    }))
}

/// One-shot reveal flag for the element behind the returned `NodeRef`.
/// Eager sections start revealed and never attach an observer.
#[hook]
pub fn use_reveal(options: RevealOptions, eager: bool) -> (NodeRef, Reveal) {
    let node = use_node_ref();
    let reveal = use_state_eq(|| Reveal::initial(eager));

    {
        let node = node.clone();
        let setter = reveal.setter();
        let already = reveal.is_revealed();
        use_effect_with_deps(
            move |_| {
                let observer = if already {
                    None
                } else {
                    match watch(&node, options, setter.clone()) {
                        Ok(observer) => observer,
                        Err(err) => {
                            // Better shown without animation than stuck hidden
                            warn!("Reveal observer unavailable: {}", err);
                            setter.set(Reveal::Revealed);
                            None
                        }
                    }
                };
                move || drop(observer)
            },
            (),
        );
    }

    (node, *reveal)
}
