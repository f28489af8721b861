//! Terminal view component.
//!
//! The terminal interface with output scrollback and command input.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use pandash_core::{CommandResult, Completion, Effect, OutputLine};
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::terminal::{Input, Output};
use crate::utils::dom::{self, BrowserHost};

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

// ============================================================================
// Result Application
// ============================================================================

fn apply_effect(ctx: AppContext, effect: Effect) {
    log::debug!("effect: {:?}", effect);
    match effect {
        Effect::ClearScreen => ctx.terminal.clear_screen(),
        Effect::Navigate(url) => dom::navigate(&url),
        Effect::OpenTab(url) => dom::open_tab(&url),
        Effect::ScrollTo(id) => dom::scroll_to(&id),
    }
}

/// Print a command result, then drain its deferred batches.
///
/// Input stays disabled until the last batch is printed.
fn apply_result(ctx: AppContext, result: CommandResult) {
    let CommandResult {
        output,
        effect,
        deferred,
    } = result;

    ctx.terminal.push_lines(output);
    if let Some(effect) = effect {
        apply_effect(ctx, effect);
    }
    if deferred.is_empty() {
        return;
    }

    ctx.terminal.busy.set(true);
    spawn_local(async move {
        for batch in deferred {
            TimeoutFuture::new(batch.delay_ms).await;
            ctx.terminal.push_lines(batch.lines);
        }
        ctx.terminal.busy.set(false);
        dom::focus_terminal_input();
    });
}

// ============================================================================
// Terminal Component
// ============================================================================

#[component]
pub fn Terminal(output_ref: NodeRef<leptos::html::Div>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let prompt = Signal::derive(move || ctx.prompt());
    let ready = Signal::derive(move || ctx.interpreter.with(Option::is_some));
    let busy = Signal::derive(move || ctx.terminal.busy.get());

    let on_submit = create_submit_callback(ctx);
    let on_history_nav = create_history_nav_callback(ctx);
    let on_complete = create_complete_callback(ctx);

    let handle_click = move |_| dom::focus_terminal_input();
    let terminal = ctx.terminal;

    view! {
        <div class=css::container on:click=handle_click>
            <div node_ref=output_ref class=css::output>
                <For
                    each=move || terminal.visible_lines()
                    key=|line| line.id
                    children=|line| view! { <Output line=line /> }
                />
            </div>

            <Show when=move || ready.get() fallback=|| ()>
                <div class=css::inputArea>
                    <Input
                        prompt=prompt
                        disabled=busy
                        on_submit=on_submit
                        on_history_nav=on_history_nav
                        on_complete=on_complete
                    />
                </div>
            </Show>
        </div>
    }
}

// ============================================================================
// Callback Factories
// ============================================================================

fn create_submit_callback(ctx: AppContext) -> Callback<String> {
    Callback::new(move |input: String| {
        if ctx.terminal.busy.get_untracked() {
            return;
        }

        let result = ctx.interpreter.with_untracked(|interp| {
            let interp = interp.as_ref()?;
            let echo = ctx
                .terminal
                .session
                .with_untracked(|session| interp.echo_line(session, &input));
            ctx.terminal.push_output(echo);
            ctx.terminal
                .session
                .try_update(|session| interp.submit(session, &input, &BrowserHost))
        });

        if let Some(result) = result {
            apply_result(ctx, result);
        }
    })
}

fn create_history_nav_callback(ctx: AppContext) -> Callback<i32, Option<String>> {
    Callback::new(move |direction: i32| ctx.terminal.navigate_history(direction))
}

/// Tab completion. Returns the new input value on a single match; on
/// several matches the candidates are printed instead.
fn create_complete_callback(ctx: AppContext) -> Callback<String, Option<String>> {
    Callback::new(move |input: String| {
        let completion = ctx.interpreter.with_untracked(|interp| {
            let interp = interp.as_ref()?;
            let echo = ctx
                .terminal
                .session
                .with_untracked(|session| interp.echo_line(session, &input));
            Some((interp.complete(&input), echo))
        });

        match completion {
            Some((Completion::Single(value), _)) => Some(value),
            Some((Completion::Multiple(names), echo)) => {
                ctx.terminal
                    .push_lines(vec![echo, OutputLine::info(names.join("  "))]);
                None
            }
            Some((Completion::None, _)) | None => None,
        }
    })
}
