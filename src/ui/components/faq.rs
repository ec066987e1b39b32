//! FAQ accordion

use leptos::prelude::*;

/// Single-open accordion over question/answer pairs.
#[component]
pub fn FaqSection(items: Vec<(&'static str, &'static str)>) -> impl IntoView {
    let open = RwSignal::new(None::<usize>);

    view! {
        <div class="faq">
            {items
                .into_iter()
                .enumerate()
                .map(|(index, (question, answer))| {
                    let is_open = move || open.get() == Some(index);
                    view! {
                        <div class="faq-item">
                            <button
                                class="faq-question"
                                aria-expanded=move || is_open().to_string()
                                on:click=move |_| {
                                    open.update(|current| {
                                        *current = if *current == Some(index) {
                                            None
                                        } else {
                                            Some(index)
                                        };
                                    })
                                }
                            >
                                <span>{question}</span>
                                <span class="faq-chevron" aria-hidden="true">
                                    {move || if is_open() { "▴" } else { "▾" }}
                                </span>
                            </button>
                            <div class="faq-answer" class:open=is_open>
                                <p>{answer}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
