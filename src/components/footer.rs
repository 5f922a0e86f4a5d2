use chrono::Datelike;
use yew::prelude::*;

use crate::content::{LOGO_SRC, PROFILE_LINKS, STUDIO_NAME};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="nav-logo">
                    <img src={LOGO_SRC} alt={STUDIO_NAME} />
                    <span>{STUDIO_NAME}</span>
                </div>
                <div class="copyright">
                    {format!("© {} {}. Crafted with precision in Paris.", year, STUDIO_NAME)}
                </div>
                <div class="footer-links">
                    { for PROFILE_LINKS.iter().map(|link| html! {
                        <a href={link.href} target="_blank" rel="noopener noreferrer">{link.label}</a>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    position: relative;
                    z-index: 1;
                    padding: 1.5rem;
                    border-top: 1px solid #111827;
                }
                .footer-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .copyright {
                    font-size: 0.75rem;
                    color: #6b7280;
                }
                .footer-links {
                    display: flex;
                    gap: 1rem;
                }
                .footer-links a {
                    color: #6b7280;
                    text-decoration: none;
                    font-size: 0.85rem;
                }
                .footer-links a:hover {
                    color: #fff;
                }
                "#}
            </style>
        </footer>
    }
}
