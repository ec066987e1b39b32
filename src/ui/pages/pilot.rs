//! Pilot landing page at /pilot

use leptos::prelude::*;

use crate::ui::components::{
    CountdownBanner, FaqSection, Footer, Header, PilotCard, SectionContainer, Timeline,
    TimelineStep,
};
use crate::ui::loi_embed::LoiEmbed;
use crate::{browser, config};

fn timeline_steps() -> Vec<TimelineStep> {
    vec![
        TimelineStep {
            icon: "✍",
            title: "Sign LOI",
            description: "Complete the Letter of Intent with your clinic details.",
        },
        TimelineStep {
            icon: "🧭",
            title: "Onboarding",
            description: "Brief introduction to VeloraPRO and setup.",
        },
        TimelineStep {
            icon: "🧪",
            title: "Pilot Testing",
            description: "Use the platform in real clinic workflows.",
        },
        TimelineStep {
            icon: "🏅",
            title: "Feedback & Recognition",
            description: "Share insights; receive safety-verified recognition.",
        },
    ]
}

fn faq_items() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "Is there any cost or obligation?",
            "No. Pilot participation is entirely voluntary, at no cost, and fully \
             non-binding. You may withdraw at any time without penalty or explanation.",
        ),
        (
            "How is my clinic data handled?",
            "All data is processed in accordance with UK GDPR (ICO standards), encrypted \
             at rest and in transit, and hosted on UK-based servers. No patient data is \
             shared with third parties.",
        ),
        (
            "How long does the pilot last?",
            "The pilot runs for approximately 8–12 weeks during Q1 2026. Exact dates \
             will be confirmed with participating clinics.",
        ),
        (
            "What are the eligibility criteria?",
            "We're looking for UK-based aesthetic clinics (preferably in London) offering \
             non-surgical treatments, with an interest in improving compliance and \
             patient safety.",
        ),
        (
            "How will results be used?",
            "Anonymised feedback will inform VeloraPRO's development. No clinic names or \
             identifiable data will be published without explicit consent. Participants \
             receive recognition as founding pilot clinics.",
        ),
    ]
}

#[component]
pub fn PilotPage() -> impl IntoView {
    view! {
        <div class="page page-pilot">
            <Header />
            <CountdownBanner deadline="15 Nov 2025" places_remaining=5 total_places=7 />
            <PilotHero />
            <OverviewSection />
            <BenefitsSection />
            <TimelineSection />
            <PilotFaqSection />
            <PilotFounderSection />
            <Footer />
        </div>
    }
}

#[component]
fn PilotHero() -> impl IntoView {
    let show_loi = RwSignal::new(false);

    view! {
        <section id="pilot-hero" class="hero hero-compact">
            <div class="hero-inner">
                <h1>
                    "Invitation to Join the Velora"
                    <br />
                    "Safety & Compliance Pilot — Q1 2026"
                </h1>
                <p class="hero-lede">
                    "Be part of a select group of UK clinics co-developing the future of \
                     aesthetic compliance and patient safety."
                </p>
                <div class="hero-actions">
                    <button
                        class="btn btn-primary"
                        aria-expanded=move || show_loi.get().to_string()
                        aria-controls="loi-signing-form"
                        on:click=move |_| show_loi.update(|open| *open = !*open)
                    >
                        {move || {
                            if show_loi.get() { "Hide LOI Form" } else { "Review & Sign LOI" }
                        }}
                    </button>
                    <a
                        class="btn btn-outline"
                        href=format!("mailto:{}", config::CONTACT_EMAIL)
                    >
                        "Talk to Founder"
                    </a>
                </div>
                {move || {
                    show_loi
                        .get()
                        .then(|| {
                            view! {
                                <div
                                    id="loi-signing-form"
                                    role="region"
                                    aria-label="Pilot Letter of Intent Signing Form"
                                >
                                    <LoiEmbed
                                        widget_url=config::PILOT_LOI_WIDGET_URL
                                        on_return=Callback::new(move |_| {
                                            show_loi.set(false);
                                            browser::scroll_to_top();
                                        })
                                    />
                                </div>
                            }
                        })
                }}
            </div>
        </section>
    }
}

#[component]
fn OverviewSection() -> impl IntoView {
    view! {
        <SectionContainer id="overview" background="white">
            <div class="overview">
                <h2>"What is VeloraPRO?"</h2>
                <p>
                    "VeloraPRO is a compliance and patient-safety platform designed \
                     specifically for non-surgical aesthetic practices. It streamlines \
                     documentation, consent, and regulatory alignment — making safety the \
                     default, not the exception."
                </p>
                <div class="alignment-badges">
                    {["JCCP", "CPSA", "ASA/CAP", "ICO", "CQC"]
                        .into_iter()
                        .map(|badge| view! { <div class="alignment-badge">{badge}</div> })
                        .collect_view()}
                </div>
            </div>
        </SectionContainer>
    }
}

#[component]
fn BenefitsSection() -> impl IntoView {
    view! {
        <SectionContainer id="benefits" background="cream">
            <div class="benefits">
                <h2>"Benefits for Pilot Clinics"</h2>
                <div class="pilot-grid">
                    <PilotCard icon="📄" label="Streamlined Documentation" />
                    <PilotCard icon="✔" label="Safer Consent & Record-Keeping" />
                    <PilotCard icon="👥" label="Patient Transparency" />
                    <PilotCard icon="🏅" label="Safety-Verified Recognition" />
                </div>
            </div>
        </SectionContainer>
    }
}

#[component]
fn TimelineSection() -> impl IntoView {
    view! {
        <SectionContainer id="timeline" background="white">
            <div class="timeline-section">
                <h2>"How It Works"</h2>
                <Timeline steps=timeline_steps() />
            </div>
        </SectionContainer>
    }
}

#[component]
fn PilotFaqSection() -> impl IntoView {
    view! {
        <SectionContainer id="faq" background="cream">
            <div class="faq-section">
                <h2>"Frequently Asked Questions"</h2>
                <FaqSection items=faq_items() />
            </div>
        </SectionContainer>
    }
}

#[component]
fn PilotFounderSection() -> impl IntoView {
    view! {
        <SectionContainer id="founder" background="white">
            <div class="founder-grid">
                <div class="founder-portrait" aria-hidden="true"></div>
                <div>
                    <h2>"Founder's Note."</h2>
                    <p>
                        "Velora was founded by Mohammad Ali P., an Imperial-trained health \
                         innovator, to close the compliance gap in aesthetic medicine. \
                         Combining clinical insight with digital-health governance, \
                         Velora's mission is to make safety the new standard in aesthetic \
                         care."
                    </p>
                    <p class="founder-footnote">
                        "Supported by Imperial College Enterprise Lab."
                    </p>
                </div>
            </div>
        </SectionContainer>
    }
}
