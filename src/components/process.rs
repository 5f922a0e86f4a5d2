use yew::prelude::*;

use crate::components::reveal_section::RevealSection;
use crate::content::{LOGO_SRC, PROCESS};

#[function_component(Process)]
pub fn process() -> Html {
    html! {
        <RevealSection id="process" class={classes!("process", "band")}>
            <div class="section-heading">
                <div class="eyebrow">
                    <img src={LOGO_SRC} alt="" />
                    <span>{"Methodology"}</span>
                </div>
                <h2><span class="gradient-text">{"How I Work"}</span></h2>
                <p>
                    {"A streamlined four-phase process that delivers on time and on budget, with full visibility into your project from first call to launch."}
                </p>
            </div>

            <div class="steps-grid">
                { for PROCESS.iter().enumerate().map(|(index, step)| html! {
                    <div class="step stagger" style={format!("transition-delay: {:.1}s;", index as f64 * 0.1)}>
                        <div class="step-bar"></div>
                        <div class="step-number">{step.number}</div>
                        <div class="step-duration">{step.duration}</div>
                        <h3>{step.title}</h3>
                        <p>{step.description}</p>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .steps-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1rem;
                }
                .step {
                    position: relative;
                    padding: 1.25rem;
                    background: #111827;
                    border: 1px solid #1f2937;
                    transition: border-color 0.5s ease;
                }
                .step:hover {
                    border-color: #3b82f6;
                }
                .step-bar {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 3px;
                    background: linear-gradient(to right, #3b82f6, #9333ea);
                    transform: scaleX(0);
                    transform-origin: left;
                    transition: transform 0.5s ease;
                }
                .step:hover .step-bar {
                    transform: scaleX(1);
                }
                .step-number {
                    font-size: 2.5rem;
                    color: #3b82f6;
                    margin-bottom: 0.75rem;
                }
                .step-duration {
                    font-size: 0.7rem;
                    font-weight: 700;
                    color: #6b7280;
                    text-transform: uppercase;
                    letter-spacing: 0.08em;
                }
                .step h3 {
                    font-size: 1.25rem;
                    margin: 0.25rem 0 0.5rem;
                }
                .step p {
                    color: #9ca3af;
                    font-size: 0.8rem;
                    line-height: 1.6;
                }
                @media (max-width: 1024px) {
                    .steps-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 640px) {
                    .steps-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </RevealSection>
    }
}
