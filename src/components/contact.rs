use yew::prelude::*;

use crate::components::reveal_section::RevealSection;
use crate::config;
use crate::content::{LOGO_SRC, PROFILE_LINKS};

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <RevealSection id="contact" class={classes!("contact", "band")}>
            <div class="contact-logo" aria-hidden="true">
                <img src={LOGO_SRC} alt="" />
            </div>
            <div class="contact-content">
                <div class="eyebrow centered">
                    <img src={LOGO_SRC} alt="" />
                    <span>{"Let's Connect"}</span>
                </div>
                <h2><span class="gradient-text">{"Ready to Start"}<br />{"Your Project?"}</span></h2>
                <p>
                    {"Let's discuss your vision and create something exceptional together. I usually reply within 24 hours and offer a free consultation."}
                </p>
                <div class="contact-actions">
                    <a href={config::contact_href()} class="hero-cta">
                        {format!("✉ {}", config::CONTACT_EMAIL)}
                    </a>
                    { for PROFILE_LINKS.iter().map(|link| html! {
                        <a href={link.href} target="_blank" rel="noopener noreferrer" class="hero-secondary">
                            {link.label}
                        </a>
                    }) }
                </div>
                <div class="contact-note">{"Working with clients worldwide • Available for new projects"}</div>
            </div>
            <style>
                {r#"
                .contact {
                    position: relative;
                    text-align: center;
                }
                .contact-logo {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    pointer-events: none;
                }
                .contact-logo img {
                    width: 18rem;
                    height: 18rem;
                    opacity: 0.05;
                    animation: pulse 3s ease-in-out infinite;
                }
                @keyframes pulse {
                    50% { opacity: 0.02; }
                }
                .contact-content {
                    position: relative;
                    z-index: 1;
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .contact-content p {
                    color: #9ca3af;
                    font-size: 1.1rem;
                    line-height: 1.7;
                    margin: 0 auto 2rem;
                    max-width: 42rem;
                }
                .contact-actions {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 2rem;
                }
                .contact-note {
                    font-size: 0.75rem;
                    color: #6b7280;
                }
                "#}
            </style>
        </RevealSection>
    }
}
