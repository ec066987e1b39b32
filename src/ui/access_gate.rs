//! Pilot access gate view
//!
//! Collects the invitation code, runs it through [`AccessGate`], and swaps
//! in the LOI embed once unlocked. The brute-force cooldown lives in the
//! state type; this view only mirrors it so the button can grey out.

use leptos::prelude::*;

use crate::browser;
use crate::config;
use crate::state::{AccessGate, UnlockAttempt};
use crate::ui::loi_embed::LoiEmbed;

#[component]
pub fn AccessGatePanel(on_close: Callback<()>) -> impl IntoView {
    let gate = RwSignal::new(AccessGate::new());
    let cooling = RwSignal::new(false);

    // Bring the gate into view and put the cursor in the code field as
    // soon as the panel mounts.
    Effect::new(move |_| {
        browser::scroll_into_view("pilot-gate");
        browser::focus_control("access-code");
    });

    let try_unlock = move || {
        let outcome = {
            let now = browser::now_ms();
            let mut result = UnlockAttempt::Empty;
            gate.update(|g| result = g.attempt_unlock(now));
            result
        };
        if outcome == UnlockAttempt::BadCode {
            cooling.set(true);
            #[cfg(target_arch = "wasm32")]
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(config::GATE_COOLDOWN_MS as u32).await;
                cooling.set(false);
            });
        }
    };

    view! {
        <div id="pilot-gate" class="access-gate">
            {move || {
                if gate.with(|g| g.unlocked) {
                    view! {
                        <LoiEmbed
                            widget_url=config::LOI_WIDGET_URL
                            on_return=Callback::new(move |_| {
                                gate.update(|g| g.close());
                                on_close.run(());
                            })
                        />
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="gate-card">
                            <h3>"Pilot Access"</h3>
                            <p>
                                "Enter the access code from your invitation letter to \
                                 review and sign the Letter of Intent."
                            </p>
                            <input
                                type="text"
                                name="access-code"
                                placeholder="Access code"
                                aria-label="Pilot access code"
                                autocomplete="off"
                                prop:value=move || gate.with(|g| g.entry.clone())
                                on:input=move |ev| {
                                    gate.update(|g| g.set_entry(event_target_value(&ev)))
                                }
                                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        try_unlock();
                                    }
                                }
                            />
                            {move || {
                                gate.with(|g| g.error.clone())
                                    .map(|message| {
                                        view! {
                                            <p class="field-error" role="alert">{message}</p>
                                        }
                                    })
                            }}
                            <div class="gate-actions">
                                <button
                                    class="btn btn-primary"
                                    prop:disabled=move || cooling.get()
                                    on:click=move |_| try_unlock()
                                >
                                    {move || {
                                        if cooling.get() { "Please wait…" } else { "Unlock" }
                                    }}
                                </button>
                                <button
                                    class="btn btn-outline"
                                    on:click=move |_| {
                                        gate.update(|g| g.close());
                                        on_close.run(());
                                    }
                                >
                                    "Cancel"
                                </button>
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
