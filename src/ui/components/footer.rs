//! Site footer

use leptos::prelude::*;

use crate::browser;
use crate::config;

/// Footer with brand blurb, quick links, and contact channels. Quick
/// links scroll to home-page sections; the privacy link is real internal
/// navigation handled by the router's click interception.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-grid">
                    <div>
                        <h3 class="footer-brand">"Velora"</h3>
                        <p class="footer-tagline">
                            "Safer · Smarter · More Compliant Aesthetic Care"
                        </p>
                        <p class="footer-small">
                            "Supported by Imperial College Enterprise Lab."
                        </p>
                    </div>
                    <div>
                        <h4>"Quick Links"</h4>
                        <div class="footer-links">
                            {["About", "Pilot", "Investors"]
                                .into_iter()
                                .map(|name| {
                                    view! {
                                        <button
                                            class="footer-link"
                                            on:click=move |_| {
                                                browser::scroll_into_view(&name.to_lowercase())
                                            }
                                        >
                                            {name}
                                        </button>
                                    }
                                })
                                .collect_view()}
                            <a class="footer-link" href="/privacy">"Privacy"</a>
                        </div>
                    </div>
                    <div>
                        <h4>"Connect"</h4>
                        <div class="footer-links">
                            <a
                                class="footer-link"
                                href=config::LINKEDIN_URL
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                "LinkedIn"
                            </a>
                            <a
                                class="footer-link"
                                href=format!("mailto:{}", config::CONTACT_EMAIL)
                                aria-label="Email the founder of Velora"
                            >
                                {config::CONTACT_EMAIL}
                            </a>
                        </div>
                    </div>
                </div>
                <hr class="footer-rule" />
                <p class="footer-legal">
                    "© 2025 Velora Intelligence Ltd · All rights reserved · \
                     Registered in England & Wales No. 16768922"
                </p>
            </div>
        </footer>
    }
}
