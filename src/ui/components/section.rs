//! Section scaffolding and small content cards

use leptos::prelude::*;

/// Full-width page section with a centered content column.
#[component]
pub fn SectionContainer(
    #[prop(into)] id: String,
    #[prop(into, default = String::from("white"))] background: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class=format!("section section-{background}")>
            <div class="section-inner">{children()}</div>
        </section>
    }
}

/// Feature card: icon glyph, label, one-line description.
#[component]
pub fn FeatureCard(
    #[prop(into)] icon: String,
    #[prop(into)] label: String,
    #[prop(into)] description: String,
) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="feature-icon" aria-hidden="true">{icon}</div>
            <h3>{label}</h3>
            <p>{description}</p>
        </div>
    }
}

/// Compact pilot-benefit card: icon glyph and label only.
#[component]
pub fn PilotCard(#[prop(into)] icon: String, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <div class="pilot-card">
            <div class="pilot-icon" aria-hidden="true">{icon}</div>
            <p>{label}</p>
        </div>
    }
}

/// One step of the pilot timeline.
#[derive(Debug, Clone)]
pub struct TimelineStep {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Horizontal four-step timeline with a connecting line.
#[component]
pub fn Timeline(steps: Vec<TimelineStep>) -> impl IntoView {
    view! {
        <div class="timeline">
            <div class="timeline-line" aria-hidden="true"></div>
            <div class="timeline-steps">
                {steps
                    .into_iter()
                    .map(|step| {
                        view! {
                            <div class="timeline-step">
                                <div class="timeline-icon" aria-hidden="true">{step.icon}</div>
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
