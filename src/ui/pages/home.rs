//! Single-page marketing home: hero plus anchored sections

use leptos::prelude::*;

use crate::ui::access_gate::AccessGatePanel;
use crate::ui::components::{
    FeatureCard, Footer, Header, PilotCard, SectionContainer,
};
use crate::ui::contact::ContactSection;
use crate::{browser, config};

const ALIGNMENT_BADGES: [&str; 5] = ["JCCP", "CPSA", "ASA/CAP", "ICO", "CQC"];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page page-home">
            <Header />
            <HeroSection />
            <AboutSection />
            <PilotSection />
            <InvestorsSection />
            <AlignmentSection />
            <FounderSection />
            <ContactSection />
            <Footer />
        </div>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section id="hero" class="hero">
            <div class="hero-inner">
                <h1>
                    "Safer, Smarter, More Compliant"
                    <br />
                    "Aesthetic Care."
                </h1>
                <p class="hero-lede">
                    "VELORA is building the UK's first regulated digital-health platform \
                     for non-surgical aesthetics, where technology protects patients and \
                     empowers professionals."
                </p>
                <div class="hero-actions">
                    <button
                        class="btn btn-primary"
                        on:click=move |_| browser::scroll_into_view("pilot")
                    >
                        "Join Pilot (Clinics)"
                    </button>
                    <button
                        class="btn btn-outline"
                        on:click=move |_| browser::scroll_into_view("investors")
                    >
                        "Investor Overview"
                    </button>
                </div>
                <p class="hero-footnote">"Supported by Imperial College Enterprise Lab"</p>
            </div>
        </section>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <SectionContainer id="about" background="cream">
            <div class="about-grid">
                <div>
                    <h2>"Technology That Safeguards Aesthetic Practice."</h2>
                    <p>
                        "VELORA bridges clinical excellence and digital safety. Our platform \
                         embeds compliance, data protection, and transparency into every \
                         aesthetic workflow, aligning with UK standards."
                    </p>
                </div>
                <div class="feature-stack">
                    <FeatureCard
                        icon="🛡"
                        label="Compliance by Design"
                        description="Built on verified UK frameworks."
                    />
                    <FeatureCard
                        icon="🔒"
                        label="Data Integrity"
                        description="Secure, encrypted, and UK-hosted."
                    />
                    <FeatureCard
                        icon="♡"
                        label="Transparency & Trust"
                        description="Protecting both patients and professionals."
                    />
                </div>
            </div>
        </SectionContainer>
    }
}

#[component]
fn PilotSection() -> impl IntoView {
    let show_gate = RwSignal::new(false);

    view! {
        <SectionContainer id="pilot" background="white">
            <div class="pilot-intro">
                <h2>"Join the Founding Pilot, Q1-Q2 2026"</h2>
                <p>
                    "We're inviting a select group of London and UK clinics to co-develop \
                     VeloraPRO, our compliance and patient-safety system. Participation is \
                     voluntary, at no cost, and fully non-binding."
                </p>
                <div class="pilot-grid">
                    <PilotCard icon="📄" label="Streamlined Documentation" />
                    <PilotCard icon="✔" label="Safer Consent & Record-Keeping" />
                    <PilotCard icon="👥" label="Patient Transparency" />
                    <PilotCard icon="🏅" label="Safety-Verified Recognition" />
                </div>
                <button
                    class="btn btn-primary"
                    aria-expanded=move || show_gate.get().to_string()
                    aria-controls="pilot-gate"
                    on:click=move |_| show_gate.set(true)
                >
                    "Review & Sign Pilot LOI"
                </button>
                <p class="pilot-footnote">"Voluntary · No cost · Non-binding"</p>
                <p class="pilot-smallprint">
                    "Your clinic enters its details before signing; a time-stamped copy is \
                     sent automatically."
                </p>
                {move || {
                    show_gate
                        .get()
                        .then(|| {
                            view! {
                                <AccessGatePanel on_close=Callback::new(move |_| {
                                    show_gate.set(false)
                                }) />
                            }
                        })
                }}
            </div>
        </SectionContainer>
    }
}

#[component]
fn InvestorsSection() -> impl IntoView {
    view! {
        <SectionContainer id="investors" background="taupe">
            <div class="investors">
                <h2>"A Regulated Digital-Health Venture — SEIS Ready."</h2>
                <div class="investor-grid">
                    <div class="investor-card">
                        <div class="investor-icon" aria-hidden="true">"🏅"</div>
                        <h3>"Market"</h3>
                        <p>
                            "The UK's £3 billion aesthetics market is expanding rapidly yet \
                             remains fragmented and under-regulated."
                        </p>
                    </div>
                    <div class="investor-card">
                        <div class="investor-icon" aria-hidden="true">"♡"</div>
                        <h3>"Why VELORA"</h3>
                        <p>
                            "Clinician-built • Safety-by-design • Governance-driven • \
                             Supported by Imperial College Enterprise Lab"
                        </p>
                    </div>
                    <div class="investor-card">
                        <div class="investor-icon" aria-hidden="true">"🛡"</div>
                        <h3>"Mission"</h3>
                        <p>
                            "To make aesthetic care safer, smarter, and more transparent \
                             through a trusted, compliant digital-health platform."
                        </p>
                    </div>
                </div>
                <button
                    class="btn btn-outline"
                    aria-label="Request investor information and open contact form"
                    on:click=move |_| browser::scroll_into_view("contact")
                >
                    "Request Investor Information"
                </button>
                <p class="investor-footnote">
                    "Investor materials are shared confidentially upon request."
                </p>
            </div>
        </SectionContainer>
    }
}

#[component]
fn AlignmentSection() -> impl IntoView {
    view! {
        <SectionContainer id="alignment" background="white">
            <div class="alignment">
                <h2>"Aligned with Leading UK Standards."</h2>
                <div class="alignment-badges">
                    {ALIGNMENT_BADGES
                        .into_iter()
                        .map(|badge| view! { <div class="alignment-badge">{badge}</div> })
                        .collect_view()}
                </div>
                <p class="alignment-note">
                    "Velora operates within the UK's emerging regulatory framework for \
                     aesthetic licensing under the Health & Care Act 2022 s.180."
                </p>
            </div>
        </SectionContainer>
    }
}

#[component]
fn FounderSection() -> impl IntoView {
    view! {
        <SectionContainer id="founder" background="cream">
            <div class="founder-grid">
                <div class="founder-portrait" aria-hidden="true"></div>
                <div>
                    <h2>"Founder's Note"</h2>
                    <p>
                        "Velora was founded by Dr Mohammad Alipanahi, an Imperial-trained \
                         health innovator, to close the compliance gap in aesthetic \
                         medicine. Combining clinical insight with digital-health \
                         governance, Velora's mission is to make safety the new standard \
                         in aesthetic care."
                    </p>
                    <a class="founder-link" href=format!("mailto:{}", config::CONTACT_EMAIL)>
                        {config::CONTACT_EMAIL}
                    </a>
                </div>
            </div>
        </SectionContainer>
    }
}
