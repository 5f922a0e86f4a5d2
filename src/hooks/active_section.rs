use yew::prelude::*;

use crate::content::NavSection;
use crate::motion::viewport::{active_section, SectionBounds};

/// Id of the section currently under `probe`, re-measured whenever
/// `scroll_offset` changes. Keeps the last match while between sections.
#[hook]
pub fn use_active_section(
    sections: &'static [NavSection],
    scroll_offset: f64,
    probe: f64,
) -> Option<&'static str> {
    let active = use_state_eq(|| None::<&'static str>);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    let bounds: Vec<SectionBounds<'static>> = sections
                        .iter()
                        .filter_map(|section| {
                            let rect = document.get_element_by_id(section.id)?.get_bounding_client_rect();
                            Some(SectionBounds {
                                id: section.id,
                                top: rect.top(),
                                bottom: rect.bottom(),
                            })
                        })
                        .collect();
                    if let Some(id) = active_section(&bounds, probe) {
                        active.set(Some(id));
                    }
                }
                || ()
            },
            scroll_offset,
        );
    }

    *active
}
