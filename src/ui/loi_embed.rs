//! Embedded Letter of Intent signature widget
//!
//! The widget is a third-party iframe, so completion cannot be observed
//! from this origin. The visitor confirms manually, which flips the embed
//! into a confirmation card explaining the e-sign provider's email
//! verification step.

use leptos::prelude::*;

use crate::browser;

#[component]
pub fn LoiEmbed(
    #[prop(into)] widget_url: String,
    on_return: Callback<()>,
) -> impl IntoView {
    let completed = RwSignal::new(false);

    view! {
        <div class="loi-embed">
            {move || {
                if completed.get() {
                    view! {
                        <div class="loi-confirmation" role="status" aria-live="polite">
                            <div class="card-badge" aria-hidden="true">"✓"</div>
                            <h3>"Thank you for signing"</h3>
                            <p>
                                "Check your inbox: the e-signature provider sends a \
                                 verification email, and your Letter of Intent is only \
                                 final once you confirm it there."
                            </p>
                            <p>
                                "We'll be in touch with onboarding details shortly after."
                            </p>
                            <button
                                class="btn btn-primary"
                                on:click=move |_| {
                                    browser::scroll_to_top();
                                    on_return.run(());
                                }
                            >
                                "Return to Velora Home"
                            </button>
                        </div>
                    }
                        .into_any()
                } else {
                    let src = widget_url.clone();
                    view! {
                        <div class="loi-frame">
                            <iframe
                                src=src
                                title="Letter of Intent signature form"
                                width="100%"
                                height="720"
                                {..leptos::tachys::html::attribute::custom::custom_attribute("frameborder", "0")}
                            ></iframe>
                            <button
                                class="btn btn-soft"
                                on:click=move |_| completed.set(true)
                            >
                                "Already completed? Click here"
                            </button>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
