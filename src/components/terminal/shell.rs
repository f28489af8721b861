//! Main shell component.
//!
//! Screen container: starts the boot sequence once and keeps the output
//! scrolled to the bottom.

use leptos::prelude::*;
use pandash_core::OutputLine;

use super::boot;
use super::terminal::Terminal;
use crate::app::AppContext;
use crate::utils::Scrollback;

stylance::import_crate_style!(css, "src/components/terminal/shell.module.css");

/// Auto-scroll output to bottom when the scrollback changes.
fn setup_autoscroll_effect(
    scrollback: RwSignal<Scrollback<OutputLine>>,
    output_ref: NodeRef<leptos::html::Div>,
) {
    Effect::new(move || {
        scrollback.track();
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });
}

#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let output_ref = NodeRef::<leptos::html::Div>::new();

    // Boot sequence runs once
    let boot_started = StoredValue::new(false);
    Effect::new(move || {
        if !boot_started.get_value() {
            boot_started.set_value(true);
            boot::run(ctx);
        }
    });

    setup_autoscroll_effect(ctx.terminal.scrollback, output_ref);

    view! {
        <div class=css::screen>
            <div class=css::scanline></div>
            <div class=css::main>
                <Terminal output_ref=output_ref />
            </div>
        </div>
    }
}
