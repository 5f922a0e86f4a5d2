use std::num::NonZeroUsize;

use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::reveal_section::RevealSection;
use crate::config;
use crate::content::{ProjectEntry, ProjectStatus, LOGO_SRC};
use crate::hooks::use_showcase;
use crate::motion::RotatorAction;

#[derive(Properties, PartialEq)]
pub struct ShowcaseProps {
    pub projects: &'static [ProjectEntry],
}

#[function_component(Showcase)]
pub fn showcase(props: &ShowcaseProps) -> Html {
    let carousel = match NonZeroUsize::new(props.projects.len()) {
        Some(len) => html! { <Carousel projects={props.projects} len={len} /> },
        None => html! {},
    };

    html! {
        <RevealSection id="work" class={classes!("work")}>
            <div class="section-heading">
                <div class="eyebrow">
                    <img src={LOGO_SRC} alt="" />
                    <span>{"Portfolio"}</span>
                </div>
                <h2><span class="gradient-text">{"Featured Work"}</span></h2>
                <p>
                    {"A curated selection of projects that show my approach to web design and development. Each site tells its own story and solves a specific business problem."}
                </p>
            </div>
            {carousel}
        </RevealSection>
    }
}

#[derive(Properties, PartialEq)]
struct CarouselProps {
    projects: &'static [ProjectEntry],
    len: NonZeroUsize,
}

#[function_component(Carousel)]
fn carousel(props: &CarouselProps) -> Html {
    let rotator = use_showcase(
        props.len,
        config::SHOWCASE_INTERVAL_MS,
        config::SHOWCASE_AUTOPLAY,
    );
    let index = rotator.index();

    {
        let dispatcher = rotator.dispatcher();
        use_event_with_window("keydown", move |e: KeyboardEvent| match e.key().as_str() {
            "ArrowRight" => dispatcher.dispatch(RotatorAction::Next),
            "ArrowLeft" => dispatcher.dispatch(RotatorAction::Prev),
            _ => {}
        });
    }

    let on_prev = {
        let dispatcher = rotator.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(RotatorAction::Prev))
    };
    let on_next = {
        let dispatcher = rotator.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(RotatorAction::Next))
    };

    let slides = props.projects.iter().enumerate().map(|(i, project)| {
        html! {
            <article
                class={classes!("slide", (i == index).then_some("current"))}
                aria-hidden={(i != index).to_string()}
            >
                <div class="slide-media">
                    <img src={project.image} alt={project.title} loading="lazy" />
                    <span class="slide-status">{project.status.label()}</span>
                </div>
                <div class="slide-body">
                    <div class="slide-meta">
                        <span>{project.category}</span>
                        <span>{project.year}</span>
                    </div>
                    <h3>
                        {project.title}
                        { if project.status == ProjectStatus::Live { html! { <span class="external">{"↗"}</span> } } else { html! {} } }
                    </h3>
                    <p>{project.description}</p>
                    <div class="tags">
                        { for project.tags.iter().map(|tag| html! { <span class="tag">{*tag}</span> }) }
                    </div>
                </div>
            </article>
        }
    });

    let dots = (0..props.len.get()).map(|i| {
        let onclick = {
            let dispatcher = rotator.dispatcher();
            Callback::from(move |_: MouseEvent| dispatcher.dispatch(RotatorAction::Jump(i)))
        };
        html! {
            <button
                class={classes!("dot", (i == index).then_some("current"))}
                aria-label={format!("Show project {}", i + 1)}
                onclick={onclick}
            />
        }
    });

    html! {
        <div class="carousel">
            <div class="carousel-viewport">
                <div
                    class="carousel-track"
                    style={format!("transform: translateX(-{}%);", index * 100)}
                >
                    { for slides }
                </div>
            </div>
            <div class="carousel-controls">
                <button class="carousel-arrow" aria-label="Previous project" onclick={on_prev}>{"←"}</button>
                <div class="carousel-dots">{ for dots }</div>
                <button class="carousel-arrow" aria-label="Next project" onclick={on_next}>{"→"}</button>
            </div>
            <style>
                {r#"
                .carousel-viewport {
                    overflow: hidden;
                }
                .carousel-track {
                    display: flex;
                    transition: transform 0.7s cubic-bezier(0.4, 0, 0.2, 1);
                }
                .slide {
                    flex: 0 0 100%;
                    display: grid;
                    grid-template-columns: 3fr 2fr;
                    gap: 2rem;
                    opacity: 0.4;
                    transition: opacity 0.7s ease;
                }
                .slide.current {
                    opacity: 1;
                }
                .slide-media {
                    position: relative;
                    aspect-ratio: 4 / 3;
                    overflow: hidden;
                    background: #111827;
                }
                .slide-media img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }
                .slide:hover .slide-media img {
                    transform: scale(1.1);
                }
                .slide-status {
                    position: absolute;
                    top: 0.75rem;
                    right: 0.75rem;
                    padding: 0.25rem 0.75rem;
                    font-size: 0.75rem;
                    background: rgba(0, 0, 0, 0.8);
                    border: 1px solid #374151;
                }
                .slide-meta {
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.75rem;
                    color: #6b7280;
                    text-transform: uppercase;
                    letter-spacing: 0.08em;
                }
                .slide-body h3 {
                    font-size: 1.6rem;
                    margin: 0.5rem 0;
                }
                .slide-body p {
                    color: #9ca3af;
                    line-height: 1.6;
                    font-size: 0.9rem;
                }
                .external {
                    margin-left: 0.5rem;
                    color: #60a5fa;
                }
                .tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.25rem;
                    margin-top: 1rem;
                }
                .tag {
                    padding: 0.1rem 0.5rem;
                    font-size: 0.75rem;
                    color: #9ca3af;
                    background: #111827;
                    border: 1px solid #1f2937;
                }
                .carousel-controls {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    margin-top: 2rem;
                }
                .carousel-arrow {
                    width: 2.5rem;
                    height: 2.5rem;
                    color: #fff;
                    background: none;
                    border: 2px solid #374151;
                    cursor: pointer;
                }
                .carousel-arrow:hover {
                    border-color: #fff;
                }
                .carousel-dots {
                    display: flex;
                    gap: 0.5rem;
                }
                .dot {
                    width: 0.6rem;
                    height: 0.6rem;
                    padding: 0;
                    border: none;
                    border-radius: 50%;
                    background: #374151;
                    cursor: pointer;
                    transition: background 0.3s ease, transform 0.3s ease;
                }
                .dot.current {
                    background: linear-gradient(to right, #3b82f6, #9333ea);
                    transform: scale(1.3);
                }
                @media (max-width: 768px) {
                    .slide {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
