//! Root component: resolves the current path to a page and keeps it in
//! sync with history navigation.

use leptos::prelude::*;

use crate::browser;
use crate::router::Route;
use crate::ui::pages::{HomePage, PilotPage, PrivacyPage};

#[component]
pub fn App() -> impl IntoView {
    let (path, set_path) = signal(browser::current_path());

    #[cfg(target_arch = "wasm32")]
    crate::router::install(move |next| set_path.set(next));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = set_path;

    view! {
        {move || match Route::from_path(&path.get()) {
            Route::Home => view! { <HomePage /> }.into_any(),
            Route::Pilot => view! { <PilotPage /> }.into_any(),
            Route::Privacy => view! { <PrivacyPage /> }.into_any(),
        }}
    }
}
