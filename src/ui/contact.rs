//! Contact section: form view wired to the submission controller
//!
//! The view is a thin shell around [`ContactController`]: every event
//! handler delegates to a controller method, and the one asynchronous
//! step (the transport call) runs between `precheck` and `finish` exactly
//! as the controller's tests drive it.

use leptos::prelude::*;

use crate::browser;
use crate::config;
use crate::state::{ContactController, Field, Precheck, SubmitPhase};
use crate::validate::InquiryType;

/// Kick off a submission attempt from the current controller state.
fn submit(controller: RwSignal<ContactController>) {
    let now = browser::now_ms();
    let Some(decision) = controller.try_update(|c| c.precheck(now)) else {
        return;
    };
    match decision {
        Precheck::Proceed(payload) => {
            #[cfg(target_arch = "wasm32")]
            {
                use crate::net::{run_submission, FormBackend};
                wasm_bindgen_futures::spawn_local(async move {
                    let result = run_submission(&payload, &FormBackend).await;
                    controller.update(|c| c.finish(result, now));
                });
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = payload;
            }
        }
        Precheck::Invalid(field) => browser::focus_control(field.control_name()),
        // Rejections already surfaced (or deliberately not) by precheck
        Precheck::AlreadySubmitting | Precheck::RateLimited | Precheck::Dropped => {}
    }
}

/// Reset a submitted form once hash navigation leaves the contact
/// section, so the next visit starts from a clean sheet.
#[cfg(target_arch = "wasm32")]
fn install_hash_reset(controller: RwSignal<ContactController>) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return;
    };
    let on_hashchange = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        controller.update(|c| c.reset_if_departed(&browser::current_hash()));
    });
    let _ = window
        .add_event_listener_with_callback("hashchange", on_hashchange.as_ref().unchecked_ref());
    on_hashchange.forget();
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let controller = RwSignal::new(ContactController::new());

    #[cfg(target_arch = "wasm32")]
    install_hash_reset(controller);

    view! {
        <super::components::SectionContainer id="contact" background="white">
            <div class="contact">
                <h2 class="section-title">"Get in Touch"</h2>
                {move || {
                    if controller.with(|c| c.phase == SubmitPhase::Succeeded) {
                        view! { <SuccessCard controller=controller /> }.into_any()
                    } else {
                        view! {
                            <div>
                                {move || {
                                    controller
                                        .with(|c| c.form_error.clone())
                                        .map(|notice| view! { <ErrorCard notice=notice /> })
                                }}
                                <ContactFormView controller=controller />
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </super::components::SectionContainer>
    }
}

#[component]
fn SuccessCard(controller: RwSignal<ContactController>) -> impl IntoView {
    view! {
        <div class="form-card success" role="status" aria-live="polite">
            <div class="card-badge" aria-hidden="true">"✓"</div>
            <h3>"Thanks — we've received your message"</h3>
            <p>"We'll respond within 2 business days."</p>
            <button
                class="btn btn-soft"
                aria-label="Back to Home"
                on:click=move |_| {
                    controller.update(|c| c.reset());
                    browser::scroll_to_top();
                    browser::clear_hash();
                }
            >
                "Back to Home"
            </button>
        </div>
    }
}

#[component]
fn ErrorCard(#[prop(into)] notice: String) -> impl IntoView {
    view! {
        <div class="form-card error" role="alert" aria-live="polite">
            <p>{notice}</p>
            <a
                class="btn btn-outline"
                href=format!("mailto:{}", config::CONTACT_EMAIL)
            >
                "Email us instead"
            </a>
        </div>
    }
}

#[component]
fn ContactFormView(controller: RwSignal<ContactController>) -> impl IntoView {
    let submitting = move || controller.with(|c| c.is_submitting());
    let disabled = move || {
        controller.with(|c| c.is_submitting() || !c.form.required_present())
    };

    view! {
        <form
            class="contact-form"
            novalidate
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                submit(controller);
            }
        >
            <FieldSlot controller=controller field=Field::Name>
                <input
                    type="text"
                    name="name"
                    placeholder="Name *"
                    aria-label="Your name"
                    prop:value=move || controller.with(|c| c.form.name.clone())
                    on:input=move |ev| {
                        controller.update(|c| c.edit(Field::Name, event_target_value(&ev)))
                    }
                    prop:disabled=submitting
                />
            </FieldSlot>

            <FieldSlot controller=controller field=Field::Inquiry>
                <select
                    name="type"
                    aria-label="Select your type"
                    prop:value=move || controller.with(|c| c.form.inquiry.clone())
                    on:change=move |ev| {
                        controller.update(|c| c.edit(Field::Inquiry, event_target_value(&ev)))
                    }
                    prop:disabled=submitting
                >
                    <option value="" disabled selected>"Clinic / Investor Type *"</option>
                    {InquiryType::ALL
                        .into_iter()
                        .map(|inquiry| {
                            view! {
                                <option value=inquiry.as_str()>{inquiry.label()}</option>
                            }
                        })
                        .collect_view()}
                </select>
            </FieldSlot>

            <FieldSlot controller=controller field=Field::Email>
                <input
                    type="email"
                    name="email"
                    placeholder="Email *"
                    aria-label="Your email address"
                    prop:value=move || controller.with(|c| c.form.email.clone())
                    on:input=move |ev| {
                        controller.update(|c| c.edit(Field::Email, event_target_value(&ev)))
                    }
                    prop:disabled=submitting
                />
            </FieldSlot>

            <div class="form-row">
                <input
                    type="text"
                    name="clinic"
                    placeholder="Clinic Name (optional)"
                    aria-label="Clinic name (optional)"
                    prop:value=move || controller.with(|c| c.form.clinic_name.clone())
                    on:input=move |ev| {
                        controller.update(|c| c.form.set_clinic_name(event_target_value(&ev)))
                    }
                    prop:disabled=submitting
                />
            </div>

            <FieldSlot controller=controller field=Field::Message>
                <textarea
                    name="message"
                    rows="6"
                    maxlength="2000"
                    placeholder="Message (minimum 20 characters) *"
                    aria-label="Your message"
                    prop:value=move || controller.with(|c| c.form.message.clone())
                    on:input=move |ev| {
                        controller.update(|c| c.edit(Field::Message, event_target_value(&ev)))
                    }
                    prop:disabled=submitting
                ></textarea>
            </FieldSlot>
            <p class="char-counter">
                {move || {
                    let len = controller.with(|c| c.form.message.chars().count());
                    format!("{len}/2000 characters")
                }}
            </p>

            // Honeypot: visually removed, never focusable. Humans leave it
            // empty; anything here makes the pipeline drop the submission.
            <div class="honeypot" aria-hidden="true">
                <label for="website">"Don't fill this out if you're human:"</label>
                <input
                    type="text"
                    id="website"
                    name="website"
                    tabindex="-1"
                    autocomplete="off"
                    prop:value=move || controller.with(|c| c.form.website.clone())
                    on:input=move |ev| {
                        controller.update(|c| c.form.set_website(event_target_value(&ev)))
                    }
                />
            </div>

            <p class="privacy-note">
                "Your details are processed under legitimate interest (B2B) \
                 solely for pilot/investor contact."
            </p>

            <button
                type="submit"
                class="btn btn-primary btn-wide"
                aria-label="Send message to Velora"
                prop:disabled=disabled
            >
                {move || if submitting() { "Sending…" } else { "Send Message" }}
            </button>
        </form>
    }
}

/// Wraps one validatable control with its inline error slot.
#[component]
fn FieldSlot(
    controller: RwSignal<ContactController>,
    field: Field,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form-row">
            {children()}
            {move || {
                controller
                    .with(|c| c.errors.get(field).map(str::to_string))
                    .map(|message| view! { <p class="field-error">{message}</p> })
            }}
        </div>
    }
}
