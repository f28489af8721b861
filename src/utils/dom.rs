//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling,
//! and [`BrowserHost`], the page-backed [`Host`] handed to the interpreter.

use chrono::{NaiveDate, NaiveDateTime};
use pandash_core::{Host, Viewport};
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, Window};

use crate::config::TERMINAL_INPUT_ID;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Focus an element by CSS selector.
///
/// Returns `true` if the element was found and focused successfully.
pub fn focus_element(selector: &str) -> bool {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(element) = document.query_selector(selector).ok().flatten()
        && let Ok(html_element) = element.dyn_into::<web_sys::HtmlElement>()
    {
        html_element.focus().is_ok()
    } else {
        false
    }
}

/// Focus the terminal input element.
#[inline]
pub fn focus_terminal_input() {
    focus_element(&format!("#{}", TERMINAL_INPUT_ID));
}

// =============================================================================
// Page Effects
// =============================================================================

/// Replace the current page.
pub fn navigate(url: &str) {
    if let Some(window) = window()
        && let Err(e) = window.location().set_href(url)
    {
        log::warn!("navigation to {} failed: {:?}", url, e);
    }
}

/// Open a URL in a new tab.
pub fn open_tab(url: &str) {
    if let Some(window) = window()
        && let Err(e) = window.open_with_url_and_target(url, "_blank")
    {
        log::warn!("opening {} failed: {:?}", url, e);
    }
}

/// Smooth-scroll the element with `id` into view.
pub fn scroll_to(id: &str) {
    if let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

// =============================================================================
// Browser Host
// =============================================================================

/// [`Host`] answering from the live page.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

impl Host for BrowserHost {
    fn now(&self) -> NaiveDateTime {
        let date = js_sys::Date::new_0();
        NaiveDate::from_ymd_opt(
            date.get_full_year() as i32,
            date.get_month() + 1,
            date.get_date(),
        )
        .and_then(|d| d.and_hms_opt(date.get_hours(), date.get_minutes(), date.get_seconds()))
        .unwrap_or_default()
    }

    fn viewport(&self) -> Viewport {
        let fallback = Viewport::default();
        let Some(window) = window() else {
            return fallback;
        };
        let dimension = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>, or: u32| {
            v.ok().and_then(|v| v.as_f64()).map_or(or, |f| f as u32)
        };
        let cores = window.navigator().hardware_concurrency() as u32;
        Viewport {
            width: dimension(window.inner_width(), fallback.width),
            height: dimension(window.inner_height(), fallback.height),
            cores: if cores == 0 { fallback.cores } else { cores },
        }
    }

    fn has_anchor(&self, id: &str) -> bool {
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .is_some()
    }
}
