use log::warn;
use yew::prelude::*;

use crate::components::{
    backdrop::Backdrop, contact::Contact, footer::Footer, hero::Hero, nav::Nav,
    pricing::Pricing, process::Process, showcase::Showcase,
};
use crate::config;
use crate::content::{BACKGROUND_STOPS, NAV_SECTIONS, PROJECTS};
use crate::hooks::{use_active_section, use_viewport_signal};
use crate::motion::viewport::is_scrolled;
use crate::motion::Gradient;

#[function_component(Landing)]
pub fn landing() -> Html {
    let signal = use_viewport_signal();
    let active = use_active_section(NAV_SECTIONS, signal.scroll_offset, config::ACTIVE_SECTION_PROBE);
    let cursor_visible = use_state(|| false);

    let gradient = use_memo(
        |_| match Gradient::from_hex_stops(BACKGROUND_STOPS) {
            Ok(gradient) => Some(gradient),
            Err(err) => {
                warn!("Background gradient disabled: {}", err);
                None
            }
        },
        (),
    );
    let page_style = match &*gradient {
        Some(gradient) => format!("background-color: {};", gradient.color_at(signal.scroll_offset)),
        None => String::new(),
    };

    let on_cta_hover = {
        let cursor_visible = cursor_visible.clone();
        Callback::from(move |hovering: bool| cursor_visible.set(hovering))
    };

    html! {
        <div class="landing-page" style={page_style}>
            <Backdrop signal={signal} cursor_visible={*cursor_visible} />
            <Nav scrolled={is_scrolled(signal.scroll_offset, config::NAV_SCROLL_THRESHOLD)} active={active} />

            <main class="page-content">
                <Hero scroll_offset={signal.scroll_offset} on_cta_hover={on_cta_hover} />
                <Showcase projects={PROJECTS} />
                <Process />
                <Pricing />
                <Contact />
            </main>

            <Footer />
            <style>
                {r#"
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                }
                .landing-page {
                    position: relative;
                    min-height: 100vh;
                    overflow: hidden;
                    color: #fff;
                    background-color: #000;
                    font-family: system-ui, -apple-system, sans-serif;
                    -webkit-font-smoothing: antialiased;
                    transition: background-color 0.2s linear;
                }
                .page-content {
                    position: relative;
                    z-index: 1;
                }
                .page-content > section:not(.hero) {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                }
                .page-content > section.band {
                    max-width: none;
                    background: linear-gradient(to bottom, transparent, rgba(17, 24, 39, 0.8), transparent);
                }
                .band > * {
                    max-width: 80rem;
                    margin-left: auto;
                    margin-right: auto;
                }
                .section-heading {
                    margin-bottom: 3rem;
                }
                .section-heading h2,
                .contact h2 {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 700;
                    letter-spacing: -0.04em;
                    margin: 0 0 0.75rem;
                }
                .section-heading p {
                    max-width: 48rem;
                    color: #9ca3af;
                    font-size: 1.1rem;
                    line-height: 1.7;
                }
                .eyebrow {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 0.5rem;
                    font-size: 0.75rem;
                    font-weight: 600;
                    color: #6b7280;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                }
                .eyebrow.centered {
                    justify-content: center;
                }
                .eyebrow img {
                    width: 1.25rem;
                    height: 1.25rem;
                    opacity: 0.5;
                }

                /* One-shot reveal, the class is never removed once added */
                .reveal {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.8s ease-out, transform 0.8s ease-out;
                }
                .reveal.revealed {
                    opacity: 1;
                    transform: none;
                }
                .reveal .stagger {
                    opacity: 0;
                    transform: translateY(30px);
                    transition-property: opacity, transform;
                    transition-duration: 0.8s;
                    transition-timing-function: ease-out;
                }
                .reveal.revealed .stagger {
                    opacity: 1;
                    transform: none;
                }
                @media (prefers-reduced-motion: reduce) {
                    .reveal,
                    .reveal .stagger {
                        opacity: 1;
                        transform: none;
                        transition: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}
