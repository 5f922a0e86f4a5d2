// Property tests for the pure animation state.
// The crate is a wasm binary, so the pure modules are included directly.

#![allow(dead_code)]
mod error {
    include!("../src/error.rs");
}
mod motion {
    pub mod color {
        include!("../src/motion/color.rs");
    }
    pub mod reveal {
        include!("../src/motion/reveal.rs");
    }
    pub mod rotator {
        include!("../src/motion/rotator.rs");
    }
}

use std::num::NonZeroUsize;

use motion::color::{ColorStop, Gradient, Rgb};
use motion::reveal::Reveal;
use motion::rotator::{next_index, prev_index, Rotator, RotatorAction};
use proptest::prelude::*;

fn rgb() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

/// 1..6 stops with strictly increasing offsets.
fn gradient() -> impl Strategy<Value = Gradient> {
    (-500.0f64..500.0, prop::collection::vec((1.0f64..800.0, rgb()), 1..6)).prop_map(
        |(start, steps)| {
            let mut offset = start;
            let stops = steps
                .into_iter()
                .map(|(gap, color)| {
                    let stop = ColorStop { offset, color };
                    offset += gap;
                    stop
                })
                .collect();
            Gradient::new(stops).unwrap()
        },
    )
}

fn len_and_index() -> impl Strategy<Value = (NonZeroUsize, usize)> {
    (1usize..64).prop_flat_map(|n| (Just(NonZeroUsize::new(n).unwrap()), 0..n))
}

proptest! {
    #[test]
    fn n_nexts_return_to_start((len, start) in len_and_index()) {
        let mut index = start;
        for _ in 0..len.get() {
            index = next_index(index, len);
        }
        prop_assert_eq!(index, start);
    }

    #[test]
    fn prev_and_next_are_inverse((len, index) in len_and_index()) {
        prop_assert_eq!(prev_index(next_index(index, len), len), index);
        prop_assert_eq!(next_index(prev_index(index, len), len), index);
    }

    #[test]
    fn rotator_index_stays_in_range(
        (len, _) in len_and_index(),
        actions in prop::collection::vec(
            prop_oneof![
                Just(RotatorAction::Tick),
                Just(RotatorAction::Next),
                Just(RotatorAction::Prev),
                any::<usize>().prop_map(RotatorAction::Jump),
            ],
            0..40,
        ),
    ) {
        let mut rotator = Rotator::new(len);
        for action in actions {
            rotator = rotator.apply(action);
            prop_assert!(rotator.index() < len.get());
        }
    }

    #[test]
    fn revealed_never_reverts(
        first in 0.15f64..=1.0,
        later in prop::collection::vec(0.0f64..=1.0, 0..20),
    ) {
        let mut state = Reveal::Hidden.observe(first, 0.15);
        prop_assert!(state.is_revealed());
        for ratio in later {
            state = state.observe(ratio, 0.15);
            prop_assert_eq!(state, Reveal::Revealed);
        }
    }

    #[test]
    fn exact_stop_offsets_are_unblended(gradient in gradient()) {
        for stop in gradient.stops() {
            prop_assert_eq!(gradient.color_at(stop.offset), stop.color);
        }
    }

    #[test]
    fn outside_the_range_clamps_to_endpoints(gradient in gradient(), overshoot in 0.0f64..10_000.0) {
        let stops = gradient.stops();
        let first = stops[0];
        let last = stops[stops.len() - 1];
        prop_assert_eq!(gradient.color_at(first.offset - overshoot), first.color);
        prop_assert_eq!(gradient.color_at(last.offset + overshoot), last.color);
    }

    #[test]
    fn blends_stay_between_neighbours(gradient in gradient(), t in 0.0f64..=1.0) {
        let stops = gradient.stops();
        prop_assume!(stops.len() >= 2);
        let (lower, upper) = (stops[0], stops[1]);
        let color = gradient.color_at(lower.offset + (upper.offset - lower.offset) * t);
        for (c, a, b) in [
            (color.r, lower.color.r, upper.color.r),
            (color.g, lower.color.g, upper.color.g),
            (color.b, lower.color.b, upper.color.b),
        ] {
            prop_assert!(c >= a.min(b) && c <= a.max(b));
        }
    }
}
