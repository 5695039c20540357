use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::content::{OWNER_NAME, SECTION_LINKS, SOCIAL_LINKS};

#[function_component(Footer)]
pub fn footer() -> Html {
    let current_year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-grid">
                    <div>
                        <a href="/" class="footer-brand gradient-text">{OWNER_NAME}</a>
                        <p class="footer-blurb">
                            {"Frontend & full-stack developer specializing in creating pixel-perfect, responsive websites with elegant animations and interactions."}
                        </p>
                        <div class="social-links">
                            { for SOCIAL_LINKS.iter().map(|(label, href)| html! {
                                <a href={*href} target="_blank" rel="noopener noreferrer">{*label}</a>
                            }) }
                        </div>
                    </div>

                    <div>
                        <h3>{"Navigation"}</h3>
                        <nav class="footer-nav">
                            { for SECTION_LINKS.iter().map(|(label, anchor)| html! {
                                <a href={*anchor}>{*label}</a>
                            }) }
                        </nav>
                    </div>

                    <div>
                        <h3>{"Contact"}</h3>
                        <p class="footer-blurb">{"Interested in working together? Contact me to discuss your project."}</p>
                        <a href="#contact" class="footer-cta gradient-bg">{"Start a project request"}</a>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("© {} {}. All rights reserved.", current_year, OWNER_NAME)}</p>
                    <div class="legal-links">
                        <a href="/privacy">{"Privacy Policy"}</a>
                        <a href="/terms">{"Terms of Service"}</a>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .site-footer { background: #f9fafb; border-top: 1px solid #e5e7eb; padding: 3rem 0; }
                .footer-content { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }
                .footer-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
                .footer-brand { font-size: 1.5rem; font-weight: 700; }
                .footer-blurb { margin-top: 1rem; color: #4b5563; max-width: 28rem; }
                .social-links { display: flex; gap: 1rem; margin-top: 1.5rem; }
                .social-links a, .footer-nav a { color: #4b5563; }
                .footer-nav { display: flex; flex-direction: column; gap: 0.5rem; }
                .site-footer h3 { font-weight: 700; font-size: 1.125rem; margin-bottom: 1rem; }
                .footer-cta { display: inline-block; margin-top: 1rem; padding: 0.5rem 1.25rem; border-radius: 0.5rem; color: #fff; }
                .footer-bottom {
                    border-top: 1px solid #e5e7eb;
                    margin-top: 2.5rem;
                    padding-top: 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    color: #6b7280;
                    font-size: 0.875rem;
                }
                .legal-links { display: flex; gap: 1.5rem; }
                @media (max-width: 768px) {
                    .footer-grid { grid-template-columns: 1fr; }
                    .footer-bottom { flex-direction: column; align-items: center; gap: 1rem; }
                }
                "#}
            </style>
        </footer>
    }
}
