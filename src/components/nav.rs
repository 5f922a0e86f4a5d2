use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{NavSection, LOGO_SRC, NAV_SECTIONS, STUDIO_NAME};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub scrolled: bool,
    pub active: Option<&'static str>,
}

fn nav_link(section: &NavSection, active: Option<&'static str>, onclick: Callback<MouseEvent>) -> Html {
    let is_active = active == Some(section.id);
    html! {
        <a
            href={format!("#{}", section.id)}
            class={classes!("nav-link", is_active.then_some("active"))}
            onclick={onclick}
        >
            {section.label}
        </a>
    }
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { scrolled, active } = *props;
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // No prevent_default here, the anchor still has to jump
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let links = NAV_SECTIONS
        .iter()
        .filter(|section| !matches!(section.id, "hero" | "contact"));

    html! {
        <nav class={classes!("top-nav", scrolled.then_some("scrolled"))}>
            <div class="nav-content">
                <a href="#hero" class="nav-logo">
                    <img src={LOGO_SRC} alt={STUDIO_NAME} />
                    <span>{STUDIO_NAME}</span>
                </a>

                <button
                    class="burger-menu"
                    aria-label="Toggle menu"
                    aria-expanded={(*menu_open).to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div class={classes!("nav-right", (*menu_open).then_some("mobile-menu-open"))}>
                    { for links.map(|section| nav_link(section, active, close_menu.clone())) }
                    <a
                        href="#contact"
                        class={classes!("nav-cta", (active == Some("contact")).then_some("active"))}
                        onclick={close_menu.clone()}
                    >
                        {"Contact"}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 40;
                    border-bottom: 1px solid transparent;
                    transition: background 0.3s ease, border-color 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(0, 0, 0, 0.6);
                    backdrop-filter: blur(16px);
                    border-bottom-color: #1f2937;
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0.75rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #fff;
                    text-decoration: none;
                    font-weight: 700;
                    letter-spacing: -0.03em;
                }
                .nav-logo img {
                    width: 2rem;
                    height: 2rem;
                    transition: transform 0.5s ease;
                }
                .nav-logo:hover img {
                    transform: rotate(180deg);
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    font-size: 0.8rem;
                }
                .nav-link {
                    color: #9ca3af;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .nav-link:hover,
                .nav-link.active {
                    color: #fff;
                }
                .nav-cta {
                    padding: 0.5rem 1rem;
                    color: #fff;
                    text-decoration: none;
                    background: linear-gradient(to right, #3b82f6, #9333ea);
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #fff;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        align-items: stretch;
                        padding: 1.5rem;
                        background: #000;
                        border-bottom: 1px solid #1f2937;
                        font-size: 1.1rem;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                    }
                    .nav-cta {
                        text-align: center;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
