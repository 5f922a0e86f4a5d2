mod active_section;
mod listener;
mod reveal;
mod showcase;
mod viewport;

pub use active_section::use_active_section;
pub use reveal::use_reveal;
pub use showcase::use_showcase;
pub use viewport::use_viewport_signal;
