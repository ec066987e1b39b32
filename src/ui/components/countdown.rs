//! Cohort countdown banner for the pilot page

use leptos::prelude::*;

/// Static banner naming the cohort deadline and remaining places. The
/// deadline is copy, not a live clock.
#[component]
pub fn CountdownBanner(
    #[prop(into)] deadline: String,
    places_remaining: u32,
    total_places: u32,
) -> impl IntoView {
    view! {
        <div class="countdown-banner">
            <div class="countdown-inner">
                <span class="countdown-deadline">
                    {format!("Cohort 1 closes {deadline}")}
                </span>
                <span class="countdown-divider" aria-hidden="true"></span>
                <span>
                    <strong>{places_remaining}</strong>
                    {format!(" of {total_places} places remaining")}
                </span>
            </div>
        </div>
    }
}
