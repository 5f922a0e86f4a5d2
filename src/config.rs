use log::Level;

use crate::motion::{AutoplayPolicy, RevealOptions};

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const SHOWCASE_INTERVAL_MS: u32 = 5000;
pub const SHOWCASE_AUTOPLAY: AutoplayPolicy = AutoplayPolicy::Continue;

pub const REVEAL: RevealOptions = RevealOptions {
    threshold: 0.15,
    bottom_margin_px: 50.0,
};

pub const NAV_SCROLL_THRESHOLD: f64 = 24.0;
// y coordinate (client px) a section must span to count as the active one
pub const ACTIVE_SECTION_PROBE: f64 = 100.0;
pub const CURSOR_SIZE: f64 = 48.0;

pub const CONTACT_EMAIL: &str = "ryan@rydev.fr";
pub const CONTACT_SUBJECT: &str = "New project enquiry";

pub fn contact_href() -> String {
    format!(
        "mailto:{}?subject={}",
        CONTACT_EMAIL,
        urlencoding::encode(CONTACT_SUBJECT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_link_prefills_recipient_and_subject() {
        assert_eq!(
            contact_href(),
            "mailto:ryan@rydev.fr?subject=New%20project%20enquiry"
        );
    }
}
