use yew::prelude::*;

use crate::components::reveal_section::RevealSection;
use crate::content::{LOGO_SRC, STATS};
use crate::motion::viewport::{hero_logo_style, hero_transform};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub scroll_offset: f64,
    /// Fired with `true` when the pointer enters the primary call to action
    /// and `false` when it leaves.
    pub on_cta_hover: Callback<bool>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let transform = hero_transform(props.scroll_offset);

    let onmouseenter = {
        let on_cta_hover = props.on_cta_hover.clone();
        Callback::from(move |_: MouseEvent| on_cta_hover.emit(true))
    };
    let onmouseleave = {
        let on_cta_hover = props.on_cta_hover.clone();
        Callback::from(move |_: MouseEvent| on_cta_hover.emit(false))
    };

    html! {
        <RevealSection id="hero" class={classes!("hero")} eager={true}>
            <div class="hero-logo" aria-hidden="true">
                <img src={LOGO_SRC} alt="" style={hero_logo_style(props.scroll_offset)} />
            </div>

            <div class="hero-content">
                <h1 style={transform.style()}>
                    <span class="gradient-text">{"Building Digital"}<br />{"Experiences That"}</span>
                    <br />
                    <span class="accent-text">{"Stand Out"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"I design and develop premium portfolios and landing pages. Every project is crafted to turn visitors into customers while delivering an unforgettable experience."}
                </p>
                <div class="hero-cta-group">
                    <a href="#work" class="hero-cta" onmouseenter={onmouseenter} onmouseleave={onmouseleave}>
                        {"Explore My Work →"}
                    </a>
                    <a href="#contact" class="hero-secondary">{"Let's Connect"}</a>
                </div>

                <div class="hero-stats">
                    { for STATS.iter().map(|stat| html! {
                        <div class="stat">
                            <div class="stat-value">{stat.value}</div>
                            <div class="stat-label">{stat.label}</div>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 7rem 1.5rem 5rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    overflow: hidden;
                }
                .hero-logo {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    pointer-events: none;
                }
                .hero-logo img {
                    width: 500px;
                    height: 500px;
                    opacity: 0.05;
                    transition: transform 0.1s ease-out;
                }
                .hero-content {
                    position: relative;
                    z-index: 1;
                }
                .hero h1 {
                    font-size: clamp(3rem, 7vw, 4.5rem);
                    font-weight: 700;
                    line-height: 1.2;
                    letter-spacing: -0.04em;
                    margin-bottom: 1rem;
                }
                .gradient-text {
                    background: linear-gradient(to right, #fff, #d1d5db, #6b7280);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .accent-text {
                    background: linear-gradient(to right, #3b82f6, #9333ea);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-subtitle {
                    max-width: 48rem;
                    color: #9ca3af;
                    font-size: 1.2rem;
                    line-height: 1.7;
                    margin-bottom: 2rem;
                }
                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }
                .hero-cta {
                    padding: 0.75rem 1.5rem;
                    color: #fff;
                    text-decoration: none;
                    font-weight: 500;
                    background: linear-gradient(to right, #3b82f6, #9333ea);
                    transition: transform 0.2s ease;
                }
                .hero-cta:hover {
                    transform: scale(1.05);
                }
                .hero-secondary {
                    padding: 0.75rem 1.5rem;
                    color: #fff;
                    text-decoration: none;
                    border: 2px solid #374151;
                }
                .hero-secondary:hover {
                    border-color: #fff;
                }
                .hero-stats {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    max-width: 42rem;
                    margin-top: 3rem;
                }
                .stat-value {
                    font-size: 1.9rem;
                    font-weight: 700;
                }
                .stat-label {
                    font-size: 0.7rem;
                    color: #6b7280;
                    text-transform: uppercase;
                    letter-spacing: 0.08em;
                }
                @media (max-width: 768px) {
                    .hero-logo img {
                        width: 18rem;
                        height: 18rem;
                    }
                }
                "#}
            </style>
        </RevealSection>
    }
}
