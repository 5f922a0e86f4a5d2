// End-to-end scenarios for the animation layer, host-side.

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
    pub mod viewport {
        include!("../src/motion/viewport.rs");
    }
}

use std::num::NonZeroUsize;

use motion::color::{Gradient, Rgb};
use motion::reveal::{visible_ratio, Reveal, RevealOptions};
use motion::rotator::{AutoplayPolicy, Rotator, RotatorAction};
use motion::viewport::{ViewportAction, ViewportSignal};

const REVEAL: RevealOptions = RevealOptions {
    threshold: 0.15,
    bottom_margin_px: 50.0,
};

#[test]
fn midpoint_background_between_black_and_light_grey() {
    let gradient = Gradient::from_hex_stops(&[(0.0, "#000000"), (900.0, "#f5f5f5")]).unwrap();
    let color = gradient.color_at(450.0);
    assert_eq!(color, Rgb::new(123, 123, 123));
    assert_eq!(color.to_string(), "rgb(123,123,123)");
}

#[test]
fn four_project_showcase_cycles_back_to_start() {
    let mut rotator = Rotator::new(NonZeroUsize::new(4).unwrap());
    let sequence: Vec<usize> = (0..4)
        .map(|_| {
            rotator = rotator.apply(RotatorAction::Next);
            rotator.index()
        })
        .collect();
    assert_eq!(sequence, vec![1, 2, 3, 0]);
}

#[test]
fn autoplay_keeps_running_through_manual_navigation() {
    let policy = AutoplayPolicy::default();
    let start = Rotator::new(NonZeroUsize::new(6).unwrap());
    let generation = policy.timer_generation(&start);

    // user clicks a dot, then the timer fires
    let rotator = start.apply(RotatorAction::Jump(4));
    assert_eq!(policy.timer_generation(&rotator), generation);
    let rotator = rotator.apply(RotatorAction::Tick);
    assert_eq!(rotator.index(), 5);
    assert_eq!(rotator.apply(RotatorAction::Tick).index(), 0);
}

#[test]
fn section_in_view_at_mount_is_revealed_without_observer_callback() {
    // a single section filling the first screen
    let viewport_height = 900.0;
    let ratio = visible_ratio(0.0, 700.0, REVEAL.effective_height(viewport_height));
    assert!(Reveal::Hidden.observe(ratio, REVEAL.threshold).is_revealed());
}

#[test]
fn section_below_the_fold_waits_then_stays_revealed() {
    let viewport_height = 900.0;
    let mut state = Reveal::initial(false);

    // rect.top as the page scrolls down, then back up past it
    for top in [1400.0, 1000.0, 840.0, 700.0, 200.0, -900.0, -2000.0, 1400.0] {
        let ratio = visible_ratio(top, top + 800.0, REVEAL.effective_height(viewport_height));
        state = state.observe(ratio, REVEAL.threshold);
        if top >= 850.0 && !state.is_revealed() {
            assert_eq!(ratio, 0.0);
        }
    }
    assert!(state.is_revealed());
}

#[test]
fn section_taller_than_the_screen_still_reveals() {
    // stacked pricing cards on a landscape phone
    let area = REVEAL.effective_height(350.0);
    let mut state = Reveal::initial(false);
    for top in [600.0, 280.0, 0.0, -1000.0] {
        state = state.observe(visible_ratio(top, top + 5000.0, area), REVEAL.threshold);
    }
    assert!(state.is_revealed());

    let thresholds = REVEAL.observer_thresholds(5000.0, 350.0);
    assert!(thresholds[0] < REVEAL.threshold);
}

#[test]
fn scroll_and_pointer_updates_are_independent() {
    let mut signal = ViewportSignal::default();
    for action in [
        ViewportAction::Scrolled(120.0),
        ViewportAction::PointerMoved { x: 40.0, y: 60.0 },
        ViewportAction::Scrolled(480.0),
    ] {
        signal = signal.apply(action);
    }
    assert_eq!(signal.scroll_offset, 480.0);
    assert_eq!((signal.pointer_x, signal.pointer_y), (40.0, 60.0));
}
