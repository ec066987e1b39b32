//! Thin facade over the browser environment
//!
//! Every `web-sys` touch point lives here so the rest of the crate compiles
//! and unit-tests on the native host. The native variants are inert stubs;
//! the view layer is the only caller and never runs outside the browser.

#[cfg(target_arch = "wasm32")]
mod imp {
    use wasm_bindgen::JsCast;
    use web_sys::{ScrollBehavior, ScrollToOptions};

    /// Milliseconds since the Unix epoch, from the browser clock.
    pub fn now_ms() -> f64 {
        js_sys::Date::now()
    }

    /// Whether the user asked for reduced motion. Falls back to `false`
    /// (animated) when the media query is unavailable.
    pub fn prefers_reduced_motion() -> bool {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
            .flatten()
            .map(|mql| mql.matches())
            .unwrap_or(false)
    }

    fn scroll_behavior() -> ScrollBehavior {
        if prefers_reduced_motion() {
            ScrollBehavior::Auto
        } else {
            ScrollBehavior::Smooth
        }
    }

    /// Scroll the viewport to the top, respecting reduced-motion.
    pub fn scroll_to_top() {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(scroll_behavior());
            window.scroll_to_with_scroll_to_options(&options);
        }
    }

    /// Instant scroll to the top. Used after intercepted link navigation,
    /// where the new page should appear already at its start.
    pub fn jump_to_top() {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    /// Scroll the element with the given id into view.
    pub fn scroll_into_view(id: &str) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(element) = document.get_element_by_id(id) {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(scroll_behavior());
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }

    /// Move keyboard focus to the form control with the given `name`
    /// attribute.
    pub fn focus_control(name: &str) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let selector = format!("[name=\"{name}\"]");
        if let Ok(Some(element)) = document.query_selector(&selector) {
            if let Some(html) = element.dyn_ref::<web_sys::HtmlElement>() {
                let _ = html.focus();
            }
        }
    }

    /// Current `window.location.pathname`, or `/` when unavailable.
    pub fn current_path() -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    /// Current `location.hash` including the leading `#`, or empty.
    pub fn current_hash() -> String {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }

    /// Push a new path onto session history without reloading.
    pub fn push_path(path: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.push_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(path),
                );
            }
        }
    }

    /// Replace the current history entry with the bare pathname, dropping
    /// any hash fragment.
    pub fn clear_hash() {
        if let Some(window) = web_sys::window() {
            if let (Ok(history), Ok(pathname)) = (window.history(), window.location().pathname()) {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&pathname),
                );
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use std::time::{SystemTime, UNIX_EPOCH};

    pub fn now_ms() -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as f64)
            .unwrap_or(0.0)
    }

    pub fn prefers_reduced_motion() -> bool {
        false
    }

    pub fn scroll_to_top() {}

    pub fn jump_to_top() {}

    pub fn scroll_into_view(_id: &str) {}

    pub fn focus_control(_name: &str) {}

    pub fn current_path() -> String {
        "/".to_string()
    }

    pub fn current_hash() -> String {
        String::new()
    }

    pub fn push_path(_path: &str) {}

    pub fn clear_hash() {}
}

pub use imp::*;
