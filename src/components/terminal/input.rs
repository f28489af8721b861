//! Terminal input component with tab completion and history navigation.

use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

use crate::config::TERMINAL_INPUT_ID;

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

/// Terminal input line.
///
/// Keys: Enter submits, ArrowUp/ArrowDown recall history, Tab completes.
/// While `disabled` is set the field is inert and Enter is ignored.
#[component]
pub fn Input(
    #[prop(into)] prompt: Signal<String>,
    #[prop(into)] disabled: Signal<bool>,
    on_submit: Callback<String>,
    on_history_nav: Callback<i32, Option<String>>,
    on_complete: Callback<String, Option<String>>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let (input_value, set_input_value) = signal(String::new());

    // Refocus whenever the field becomes usable again
    Effect::new(move || {
        if !disabled.get()
            && let Some(input) = input_ref.get()
        {
            let _ = input.focus();
        }
    });

    let move_cursor_to_end = move || {
        if let Some(input) = input_ref.get() {
            let len = input.value().len() as u32;
            let _ = input.set_selection_range(len, len);
        }
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            if disabled.get_untracked() {
                return;
            }
            let value = input_value.get_untracked();
            set_input_value.set(String::new());
            on_submit.run(value);
        }
        "ArrowUp" => {
            ev.prevent_default();
            if let Some(cmd) = on_history_nav.run(-1) {
                set_input_value.set(cmd);
                move_cursor_to_end();
            }
        }
        "ArrowDown" => {
            ev.prevent_default();
            set_input_value.set(on_history_nav.run(1).unwrap_or_default());
            move_cursor_to_end();
        }
        "Tab" => {
            ev.prevent_default();
            if let Some(completed) = on_complete.run(input_value.get_untracked()) {
                set_input_value.set(completed);
                move_cursor_to_end();
            }
        }
        _ => {}
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        set_input_value.set(input.value());
    };

    view! {
        <div class=css::line>
            <span class=css::prompt>{prompt}</span>
            <input
                node_ref=input_ref
                id=TERMINAL_INPUT_ID
                type="text"
                class=css::input
                autocomplete="off"
                spellcheck="false"
                prop:value=input_value
                prop:disabled=disabled
                on:input=handle_input
                on:keydown=handle_keydown
            />
        </div>
    }
}
