//! Minimal client-side path router
//!
//! Maps the browser path onto one of three page views and keeps that
//! mapping in sync with intercepted internal link clicks and browser
//! back/forward navigation. No parameters, no query strings, no 404 view:
//! unknown paths render the home page.

/// The fixed set of page views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Home,
    Pilot,
    Privacy,
}

impl Route {
    /// Resolve a path to a view. Exact match with or without a trailing
    /// slash, checked in priority order; everything else is home.
    pub fn from_path(path: &str) -> Route {
        match path {
            "/pilot" | "/pilot/" => Route::Pilot,
            "/privacy" | "/privacy/" => Route::Privacy,
            _ => Route::Home,
        }
    }

    /// Canonical path for the view.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Pilot => "/pilot",
            Route::Privacy => "/privacy",
        }
    }
}

/// Decide whether an anchor href is internal, same-document navigation we
/// should intercept: a single leading slash, not protocol-relative.
pub fn internal_target(href: &str) -> Option<&str> {
    if href.starts_with('/') && !href.starts_with("//") {
        Some(href)
    } else {
        None
    }
}

/// Install the document-level listeners driving the route signal:
/// `popstate` for browser back/forward (the browser already moved, so only
/// the signal updates) and a click listener that intercepts internal
/// anchors, pushes history, and resets scroll. The closures live for the
/// page lifetime and are intentionally leaked.
#[cfg(target_arch = "wasm32")]
pub fn install(set_path: impl Fn(String) + Clone + 'static) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    use crate::browser;

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let on_popstate = {
        let set_path = set_path.clone();
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            set_path(browser::current_path());
        })
    };
    let _ = window
        .add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
    on_popstate.forget();

    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |event: web_sys::MouseEvent| {
        let Some(target) = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let Ok(Some(anchor)) = target.closest("a[href]") else {
            return;
        };
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };
        if let Some(path) = internal_target(&href) {
            event.prevent_default();
            browser::push_path(path);
            tracing::debug!(path, "intercepted internal navigation");
            set_path(path.to_string());
            browser::jump_to_top();
        }
    });
    let _ = document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    mod resolution {
        use super::*;

        #[test]
        fn test_pilot_with_and_without_trailing_slash() {
            assert_eq!(Route::from_path("/pilot"), Route::Pilot);
            assert_eq!(Route::from_path("/pilot/"), Route::Pilot);
        }

        #[test]
        fn test_privacy_with_and_without_trailing_slash() {
            assert_eq!(Route::from_path("/privacy"), Route::Privacy);
            assert_eq!(Route::from_path("/privacy/"), Route::Privacy);
        }

        #[test]
        fn test_root_is_home() {
            assert_eq!(Route::from_path("/"), Route::Home);
        }

        #[test]
        fn test_unknown_paths_fall_back_to_home() {
            assert_eq!(Route::from_path("/unknown-path"), Route::Home);
            assert_eq!(Route::from_path("/pilot/extra"), Route::Home);
            assert_eq!(Route::from_path(""), Route::Home);
        }

        #[test]
        fn test_no_prefix_matching() {
            // Only exact matches count; these are not the pilot page
            assert_eq!(Route::from_path("/pilots"), Route::Home);
            assert_eq!(Route::from_path("/privacy-policy"), Route::Home);
        }

        #[test]
        fn test_canonical_paths_round_trip() {
            for route in [Route::Home, Route::Pilot, Route::Privacy] {
                assert_eq!(Route::from_path(route.path()), route);
            }
        }
    }

    mod interception {
        use super::*;

        #[test]
        fn test_accepts_internal_paths() {
            assert_eq!(internal_target("/pilot"), Some("/pilot"));
            assert_eq!(internal_target("/"), Some("/"));
        }

        #[test]
        fn test_rejects_protocol_relative() {
            assert_eq!(internal_target("//evil.test/pilot"), None);
        }

        #[test]
        fn test_rejects_external_and_fragment_links() {
            assert_eq!(internal_target("https://example.test/"), None);
            assert_eq!(internal_target("mailto:founder@velorapro.com"), None);
            assert_eq!(internal_target("#contact"), None);
            assert_eq!(internal_target("pilot"), None);
        }
    }
}
