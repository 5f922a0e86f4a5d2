pub mod color;
pub mod reveal;
pub mod rotator;
pub mod viewport;

pub use color::Gradient;
pub use reveal::{visible_ratio, Reveal, RevealOptions};
pub use rotator::{AutoplayPolicy, Rotator, RotatorAction};
pub use viewport::{ViewportAction, ViewportSignal};
