//! Static privacy policy page at /privacy

use leptos::prelude::*;

use crate::browser;
use crate::ui::components::{Footer, Header, SectionContainer};

const PRIVACY_EMAIL: &str = "privacy@velorapro.com";

struct PolicySection {
    heading: &'static str,
    paragraphs: &'static [&'static str],
}

const POLICY: [PolicySection; 10] = [
    PolicySection {
        heading: "1. Who we are",
        paragraphs: &[
            "Velora Intelligence Ltd (\"Velora\", \"we\", \"us\") is a UK-registered \
             company developing digital-health solutions for aesthetic clinics.",
            "Company number: 16768922",
            "Registered in England & Wales.",
        ],
    },
    PolicySection {
        heading: "2. Our commitment to privacy",
        paragraphs: &[
            "We handle all personal data lawfully, fairly, and transparently in \
             accordance with the UK General Data Protection Regulation (UK GDPR) and \
             Data Protection Act 2018.",
        ],
    },
    PolicySection {
        heading: "3. What information we collect",
        paragraphs: &[
            "Professional contact details (name, email, clinic name, role, message \
             content) — when you complete the \"Get in touch\" form.",
            "Business correspondence if you contact us directly by email.",
            "We do not collect patient data or use tracking cookies.",
        ],
    },
    PolicySection {
        heading: "4. How we use your information",
        paragraphs: &[
            "We use your details only to respond to investor or pilot enquiries and to \
             maintain our contact records under legitimate interest (B2B).",
            "We do not sell, share, or use your data for marketing without consent.",
        ],
    },
    PolicySection {
        heading: "5. Legal basis",
        paragraphs: &[
            "Processing is based on legitimate interests (Article 6(1)(f) UK GDPR) — \
             enabling B2B communication with clinics and investors.",
        ],
    },
    PolicySection {
        heading: "6. Data retention",
        paragraphs: &[
            "We keep professional contact data for up to 24 months, then securely \
             delete or anonymise it.",
        ],
    },
    PolicySection {
        heading: "7. Your rights",
        paragraphs: &[
            "You may request access, correction, or deletion of your data at any time.",
        ],
    },
    PolicySection {
        heading: "8. Security",
        paragraphs: &[
            "All systems are UK-hosted and encrypted. Access is limited to authorised \
             Velora personnel.",
        ],
    },
    PolicySection {
        heading: "9. Updates",
        paragraphs: &[
            "This policy may be updated periodically. Any significant changes will be \
             reflected on this page with a new \"last updated\" date.",
        ],
    },
    PolicySection {
        heading: "10. Contact",
        paragraphs: &[
            "Velora Intelligence Ltd, Registered in England & Wales No. 16768922.",
        ],
    },
];

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <div class="page page-privacy">
            <Header />
            <SectionContainer id="privacy-hero" background="blush">
                <div class="privacy-hero">
                    <h1>"Privacy Policy"</h1>
                    <p class="privacy-updated">"Last updated: October 2025"</p>
                </div>
            </SectionContainer>
            <SectionContainer id="privacy-content" background="white">
                <div class="privacy-body">
                    {POLICY
                        .iter()
                        .map(|section| {
                            view! {
                                <section class="privacy-section">
                                    <h2>{section.heading}</h2>
                                    {section
                                        .paragraphs
                                        .iter()
                                        .map(|paragraph| view! { <p>{*paragraph}</p> })
                                        .collect_view()}
                                </section>
                            }
                        })
                        .collect_view()}
                    <p class="privacy-contact">
                        "Questions or requests: "
                        <a href=format!("mailto:{PRIVACY_EMAIL}")>{PRIVACY_EMAIL}</a>
                    </p>
                    <div class="privacy-top">
                        <button
                            class="btn btn-outline"
                            on:click=move |_| browser::scroll_to_top()
                        >
                            "Back to Top"
                        </button>
                    </div>
                </div>
            </SectionContainer>
            <Footer />
        </div>
    }
}
