use yew::prelude::*;

use crate::components::reveal_section::RevealSection;
use crate::content::{PricingTier, LOGO_SRC, PRICING};

fn tier_card(index: usize, tier: &PricingTier) -> Html {
    let badge = if tier.highlighted {
        html! { <div class="tier-badge">{"Most Popular"}</div> }
    } else {
        html! {}
    };

    html! {
        <div
            class={classes!("tier", "stagger", tier.highlighted.then_some("highlighted"))}
            style={format!("transition-delay: {:.1}s;", index as f64 * 0.1)}
        >
            {badge}
            <div class="tier-header">
                <div class="tier-name">{tier.name}</div>
                <div class="tier-price">
                    <span class="price">{tier.price}</span>
                    <span class="euro">{format!("/ {}", tier.euro_price)}</span>
                </div>
                <div class="tier-description">{tier.description}</div>
            </div>
            <ul class="tier-features">
                { for tier.features.iter().map(|feature| html! {
                    <li><span class="check">{"✓"}</span>{*feature}</li>
                }) }
            </ul>
            <a href="#contact" class="tier-cta">{"Get Started"}</a>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <RevealSection id="pricing" class={classes!("pricing")}>
            <div class="section-heading">
                <div class="eyebrow">
                    <img src={LOGO_SRC} alt="" />
                    <span>{"Investment"}</span>
                </div>
                <h2><span class="gradient-text">{"Transparent Pricing"}</span></h2>
                <p>
                    {"Choose the package that fits your goals and budget. Every project includes hosting setup, deployment and post-launch support. No hidden fees."}
                </p>
            </div>

            <div class="tiers">
                { for PRICING.iter().enumerate().map(|(index, tier)| tier_card(index, tier)) }
            </div>
            <style>
                {r#"
                .tiers {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    align-items: start;
                }
                .tier {
                    position: relative;
                    padding: 1.5rem;
                    background: #111827;
                    border: 1px solid #1f2937;
                }
                .tier.highlighted {
                    background: linear-gradient(to bottom right, rgba(59, 130, 246, 0.1), rgba(147, 51, 234, 0.1));
                    border-color: #3b82f6;
                    box-shadow: 0 25px 50px rgba(59, 130, 246, 0.2);
                }
                .revealed .tier.highlighted {
                    transform: scale(1.05);
                }
                .tier-badge {
                    position: absolute;
                    top: -0.75rem;
                    left: 50%;
                    transform: translateX(-50%);
                    padding: 0.15rem 0.75rem;
                    font-size: 0.7rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    background: linear-gradient(to right, #3b82f6, #9333ea);
                }
                .tier-name {
                    font-size: 0.75rem;
                    font-weight: 700;
                    color: #6b7280;
                    text-transform: uppercase;
                    letter-spacing: 0.08em;
                }
                .tier-price .price {
                    font-size: 2.25rem;
                    font-weight: 700;
                }
                .tier-price .euro {
                    margin-left: 0.25rem;
                    font-size: 0.75rem;
                    color: #6b7280;
                }
                .tier-description {
                    color: #9ca3af;
                    font-size: 0.9rem;
                }
                .tier-features {
                    list-style: none;
                    padding: 0;
                    margin: 1rem 0 1.5rem;
                }
                .tier-features li {
                    display: flex;
                    gap: 0.5rem;
                    margin-bottom: 0.5rem;
                    color: #9ca3af;
                    font-size: 0.8rem;
                }
                .check {
                    color: #3b82f6;
                }
                .tier-cta {
                    display: block;
                    padding: 0.75rem;
                    text-align: center;
                    color: #fff;
                    text-decoration: none;
                    border: 2px solid #374151;
                }
                .tier.highlighted .tier-cta {
                    border: none;
                    background: linear-gradient(to right, #3b82f6, #9333ea);
                }
                @media (max-width: 768px) {
                    .tiers {
                        grid-template-columns: 1fr;
                    }
                    .revealed .tier.highlighted {
                        transform: none;
                    }
                }
                "#}
            </style>
        </RevealSection>
    }
}
