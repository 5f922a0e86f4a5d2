use std::num::NonZeroUsize;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

use crate::motion::{AutoplayPolicy, Rotator, RotatorAction};

impl Reducible for Rotator {
    type Action = RotatorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if action.is_manual() {
            debug!("Showcase {:?}: {} -> {}", action, self.index(), next.index());
        }
        Rc::new(next)
    }
}

/// Rotating showcase position, advanced every `interval_ms` while mounted.
#[hook]
pub fn use_showcase(
    len: NonZeroUsize,
    interval_ms: u32,
    policy: AutoplayPolicy,
) -> UseReducerHandle<Rotator> {
    let rotator = use_reducer(move || Rotator::new(len));
    let generation = policy.timer_generation(&rotator);

    {
        let dispatcher = rotator.dispatcher();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(interval_ms, move || {
                    dispatcher.dispatch(RotatorAction::Tick);
                });
                // Dropping the interval cancels it
                move || drop(interval)
            },
            (generation, interval_ms),
        );
    }

    rotator
}
