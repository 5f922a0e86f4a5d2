// Scroll and pointer driven style computations.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportSignal {
    pub scroll_offset: f64,
    pub pointer_x: f64,
    pub pointer_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportAction {
    Scrolled(f64),
    PointerMoved { x: f64, y: f64 },
}

impl ViewportSignal {
    /// Only the half of the signal the event is about changes.
    pub fn apply(self, action: ViewportAction) -> Self {
        match action {
            ViewportAction::Scrolled(offset) => Self {
                scroll_offset: offset,
                ..self
            },
            ViewportAction::PointerMoved { x, y } => Self {
                pointer_x: x,
                pointer_y: y,
                ..self
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroTransform {
    pub translate_y: f64,
    pub opacity: f64,
}

impl HeroTransform {
    pub fn style(&self) -> String {
        format!(
            "transform: translateY({:.2}px); opacity: {:.3};",
            self.translate_y, self.opacity
        )
    }
}

pub fn hero_transform(scroll_offset: f64) -> HeroTransform {
    let scroll = scroll_offset.max(0.0);
    HeroTransform {
        translate_y: scroll * 0.1,
        opacity: (1.0 - scroll * 0.001).clamp(0.0, 1.0),
    }
}

/// Rotation and scale of the large logo behind the hero copy.
pub fn hero_logo_style(scroll_offset: f64) -> String {
    let scroll = scroll_offset.max(0.0);
    format!(
        "transform: rotate({:.2}deg) scale({:.4});",
        scroll * 0.1,
        1.0 + scroll * 0.0005
    )
}

pub fn grid_drift(signal: &ViewportSignal) -> String {
    format!(
        "transform: translate({:.2}px, {:.2}px);",
        signal.pointer_x * 0.02,
        signal.pointer_y * 0.02
    )
}

/// Top-left corner for an overlay of `size` px centred on the pointer.
pub fn cursor_anchor(signal: &ViewportSignal, size: f64) -> (f64, f64) {
    let half = size / 2.0;
    (signal.pointer_x - half, signal.pointer_y - half)
}

pub fn is_scrolled(scroll_offset: f64, threshold: f64) -> bool {
    scroll_offset > threshold
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
}

impl Edge {
    fn property(self) -> &'static str {
        match self {
            Edge::Left => "left",
            Edge::Right => "right",
        }
    }
}

/// Decorative logo that drifts with the scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingLogo {
    pub size: f64,
    pub top: f64,
    pub top_rate: f64,
    pub edge: Edge,
    pub inset: f64,
    pub inset_rate: f64,
    pub spin: f64,
    pub desktop_only: bool,
}

impl FloatingLogo {
    pub fn position(&self, scroll_offset: f64) -> (f64, f64, f64) {
        (
            self.top + scroll_offset * self.top_rate,
            self.inset + scroll_offset * self.inset_rate,
            scroll_offset * self.spin,
        )
    }

    pub fn style(&self, scroll_offset: f64) -> String {
        let (top, inset, rotation) = self.position(scroll_offset);
        format!(
            "width: {size}px; height: {size}px; top: {top:.2}px; {edge}: {inset:.2}px; transform: rotate({rotation:.2}deg);",
            size = self.size,
            edge = self.edge.property(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds<'a> {
    pub id: &'a str,
    pub top: f64,
    pub bottom: f64,
}

/// First section whose client rect spans the horizontal `probe` line.
pub fn active_section<'a>(sections: &[SectionBounds<'a>], probe: f64) -> Option<&'a str> {
    sections
        .iter()
        .find(|section| section.top <= probe && section.bottom >= probe)
        .map(|section| section.id)
}
