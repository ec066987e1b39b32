//! Fixed page header with section navigation

use leptos::prelude::*;

use crate::browser;

const NAV_SECTIONS: [&str; 5] = ["About", "Pilot", "Investors", "Founder", "Contact"];

/// Banner shown on every page. The wordmark and the nav entries scroll to
/// named sections; on pages without a matching section the click is a
/// no-op.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header" role="banner">
            <div class="site-header-inner">
                <button
                    class="wordmark"
                    aria-label="Velora home"
                    on:click=move |_| browser::scroll_into_view("hero")
                >
                    "VELORA"
                </button>
                <nav class="site-nav" role="navigation" aria-label="Main navigation">
                    {NAV_SECTIONS
                        .into_iter()
                        .map(|name| {
                            view! {
                                <button
                                    class="nav-link"
                                    aria-label=format!("Navigate to {name}")
                                    on:click=move |_| {
                                        browser::scroll_into_view(&name.to_lowercase())
                                    }
                                >
                                    {name}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
