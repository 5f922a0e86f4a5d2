// One-shot reveal latch for page sections.

// Browsers report intersection ratios slightly under the configured threshold
// on the callback that crosses it.
const RATIO_TOLERANCE: f64 = 1e-3;

/// Hidden -> Revealed, never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reveal {
    #[default]
    Hidden,
    Revealed,
}

impl Reveal {
    pub fn initial(eager: bool) -> Self {
        if eager {
            Reveal::Revealed
        } else {
            Reveal::Hidden
        }
    }

    pub fn observe(self, ratio: f64, threshold: f64) -> Self {
        match self {
            Reveal::Revealed => Reveal::Revealed,
            Reveal::Hidden if crosses(ratio, threshold) => Reveal::Revealed,
            Reveal::Hidden => Reveal::Hidden,
        }
    }

    pub fn is_revealed(self) -> bool {
        self == Reveal::Revealed
    }

    /// Class added next to `reveal` once the section has been seen.
    pub fn modifier(self) -> Option<&'static str> {
        self.is_revealed().then_some("revealed")
    }
}

fn crosses(ratio: f64, threshold: f64) -> bool {
    ratio > 0.0 && ratio + RATIO_TOLERANCE >= threshold
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    /// Shrinks the bottom of the viewport so sections reveal slightly after
    /// their top edge enters.
    pub bottom_margin_px: f64,
}

impl RevealOptions {
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }

    /// Height of the observation area for a viewport of `viewport_height`.
    pub fn effective_height(&self, viewport_height: f64) -> f64 {
        (viewport_height - self.bottom_margin_px).max(0.0)
    }

    /// Intersection ratios the observer reports at, for an element of
    /// `element_height`. Besides the configured threshold this includes the
    /// own-ratio at which a taller element covers `threshold` of the area.
    pub fn observer_thresholds(&self, element_height: f64, viewport_height: f64) -> Vec<f64> {
        let area = self.effective_height(viewport_height);
        let covering = if element_height > 0.0 {
            self.threshold * area / element_height
        } else {
            self.threshold
        };
        if covering > 0.0 && covering < self.threshold {
            vec![covering, self.threshold]
        } else {
            vec![self.threshold]
        }
    }
}

/// How much of a section counts as seen: its own visible share, or the share
/// of the observation area it covers when that is larger. Sections taller
/// than the area can never show `threshold` of themselves, so they count by
/// the second measure.
pub fn visible_share(visible: f64, element_height: f64, area_height: f64) -> f64 {
    if !(visible > 0.0) {
        return 0.0;
    }
    let own = if element_height > 0.0 { visible / element_height } else { 1.0 };
    let covered = if area_height > 0.0 { visible / area_height } else { 0.0 };
    own.max(covered).clamp(0.0, 1.0)
}

/// [`visible_share`] of an element spanning `top..bottom` (client
/// coordinates) against `0..viewport_height`. Zero-height elements count as
/// fully visible when their edge is on screen.
pub fn visible_ratio(top: f64, bottom: f64, viewport_height: f64) -> f64 {
    let height = bottom - top;
    if !(height > 0.0) {
        return if top >= 0.0 && top <= viewport_height { 1.0 } else { 0.0 };
    }
    let visible = (bottom.min(viewport_height) - top.max(0.0)).max(0.0);
    visible_share(visible, height, viewport_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 0.15;

    #[test]
    fn stays_hidden_below_threshold() {
        let state = Reveal::Hidden.observe(0.0, THRESHOLD).observe(0.05, THRESHOLD);
        assert_eq!(state, Reveal::Hidden);
    }

    #[test]
    fn latches_once_crossed() {
        let state = Reveal::Hidden.observe(0.2, THRESHOLD);
        assert_eq!(state, Reveal::Revealed);
        // scrolling back out does not hide it again
        assert_eq!(state.observe(0.0, THRESHOLD), Reveal::Revealed);
        assert_eq!(state.observe(0.1, THRESHOLD).observe(0.0, THRESHOLD), Reveal::Revealed);
    }

    #[test]
    fn tolerates_rounded_browser_ratio() {
        assert!(Reveal::Hidden.observe(0.1495, THRESHOLD).is_revealed());
    }

    #[test]
    fn zero_ratio_never_reveals_even_with_zero_threshold() {
        assert_eq!(Reveal::Hidden.observe(0.0, 0.0), Reveal::Hidden);
        assert_eq!(Reveal::Hidden.observe(0.01, 0.0), Reveal::Revealed);
    }

    #[test]
    fn eager_sections_start_revealed() {
        assert!(Reveal::initial(true).is_revealed());
        assert!(!Reveal::initial(false).is_revealed());
        assert_eq!(Reveal::initial(true).modifier(), Some("revealed"));
        assert_eq!(Reveal::Hidden.modifier(), None);
    }

    #[test]
    fn section_fully_in_view_at_mount_latches() {
        let options = RevealOptions { threshold: THRESHOLD, bottom_margin_px: 50.0 };
        let height = options.effective_height(900.0);
        let ratio = visible_ratio(80.0, 600.0, height);
        assert_eq!(ratio, 1.0);
        assert!(Reveal::Hidden.observe(ratio, options.threshold).is_revealed());
    }

    #[test]
    fn visible_ratio_covers_partial_and_offscreen() {
        assert_eq!(visible_ratio(500.0, 1500.0, 800.0), 0.375);
        assert_eq!(visible_ratio(-400.0, 2000.0, 800.0), 1.0);
        assert_eq!(visible_ratio(700.0, 900.0, 800.0), 0.5);
        assert_eq!(visible_ratio(900.0, 1200.0, 800.0), 0.0);
        assert_eq!(visible_ratio(-900.0, -100.0, 800.0), 0.0);
        assert_eq!(visible_ratio(100.0, 100.0, 800.0), 1.0);
    }

    #[test]
    fn root_margin_is_negative_bottom_inset() {
        let options = RevealOptions { threshold: 0.1, bottom_margin_px: 50.0 };
        assert_eq!(options.root_margin(), "0px 0px -50px 0px");
        assert_eq!(options.effective_height(30.0), 0.0);
    }

    #[test]
    fn section_taller_than_viewport_reveals_once_it_fills_enough() {
        let options = RevealOptions { threshold: THRESHOLD, bottom_margin_px: 50.0 };
        let area = options.effective_height(700.0);
        // 5000px section whose middle fills the whole screen
        let ratio = visible_ratio(-1000.0, 4000.0, area);
        assert_eq!(ratio, 1.0);
        assert!(Reveal::Hidden.observe(ratio, options.threshold).is_revealed());

        // only its top 60px peeking in
        let ratio = visible_ratio(590.0, 5590.0, area);
        assert!(!Reveal::Hidden.observe(ratio, options.threshold).is_revealed());
    }

    #[test]
    fn visible_share_takes_the_larger_measure() {
        assert_eq!(visible_share(0.0, 100.0, 800.0), 0.0);
        assert_eq!(visible_share(50.0, 100.0, 800.0), 0.5);
        assert_eq!(visible_share(400.0, 4000.0, 800.0), 0.5);
        assert_eq!(visible_share(10.0, 0.0, 800.0), 1.0);
    }

    #[test]
    fn tall_elements_get_a_covering_threshold() {
        let options = RevealOptions { threshold: 0.15, bottom_margin_px: 50.0 };
        let thresholds = options.observer_thresholds(6500.0, 700.0);
        assert_eq!(thresholds.len(), 2);
        assert!((thresholds[0] - 0.015).abs() < 1e-12);
        assert_eq!(thresholds[1], 0.15);
        assert_eq!(options.observer_thresholds(400.0, 700.0), vec![0.15]);
        assert_eq!(options.observer_thresholds(0.0, 700.0), vec![0.15]);
    }
}
