use yew::prelude::*;

use crate::config;
use crate::content::{FLOATING_LOGOS, LOGO_SRC};
use crate::motion::viewport::{cursor_anchor, grid_drift};
use crate::motion::ViewportSignal;

#[derive(Properties, PartialEq)]
pub struct BackdropProps {
    pub signal: ViewportSignal,
    pub cursor_visible: bool,
}

/// Fixed decoration behind the page: pointer-drifting grid, scroll-driven
/// floating logos and the cursor overlay.
#[function_component(Backdrop)]
pub fn backdrop(props: &BackdropProps) -> Html {
    let signal = props.signal;

    let logos = FLOATING_LOGOS.iter().map(|logo| {
        html! {
            <img
                src={LOGO_SRC}
                alt=""
                class={classes!("floating-logo", logo.desktop_only.then_some("desktop-only"))}
                style={logo.style(signal.scroll_offset)}
            />
        }
    });

    let cursor = if props.cursor_visible {
        let (left, top) = cursor_anchor(&signal, config::CURSOR_SIZE);
        html! {
            <div
                class="cursor-overlay"
                style={format!("left: {:.1}px; top: {:.1}px;", left, top)}
            >
                <img src={LOGO_SRC} alt="" />
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <>
            <div class="backdrop" aria-hidden="true">
                <div class="backdrop-grid" style={grid_drift(&signal)}></div>
                { for logos }
            </div>
            {cursor}
            <style>
                {r#"
                .backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 0;
                    overflow: hidden;
                    pointer-events: none;
                }
                .backdrop-grid {
                    position: absolute;
                    inset: -50px;
                    opacity: 0.2;
                    background-image:
                        linear-gradient(to right, #333 1px, transparent 1px),
                        linear-gradient(to bottom, #333 1px, transparent 1px);
                    background-size: 50px 50px;
                }
                .floating-logo {
                    position: absolute;
                    opacity: 0.05;
                    transition: all 0.1s ease-out;
                }
                .cursor-overlay {
                    position: fixed;
                    z-index: 50;
                    pointer-events: none;
                    transition: left 0.3s ease, top 0.3s ease;
                }
                .cursor-overlay img {
                    width: 3rem;
                    height: 3rem;
                    opacity: 0.3;
                    animation: spin 3s linear infinite;
                }
                @keyframes spin {
                    to { transform: rotate(360deg); }
                }
                @media (max-width: 768px) {
                    .floating-logo {
                        opacity: 0.03;
                    }
                    .floating-logo.desktop-only {
                        display: none;
                    }
                }
                "#}
            </style>
        </>
    }
}
