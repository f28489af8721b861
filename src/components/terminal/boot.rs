//! Boot sequence logic
//!
//! Loads the site content, builds the interpreter and prints the MOTD.

use gloo_timers::future::TimeoutFuture;
use pandash_core::{Interpreter, OutputLine, SiteContent};
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::config::{MS_PER_SECOND, boot_delays};
use crate::utils::load_site_content;

/// Format elapsed time for boot messages
fn format_time(ms: f64) -> String {
    format!("[{:8.3}]", ms / MS_PER_SECOND)
}

/// Run the boot sequence
///
/// 1. Fetch site content (YAML, then JSON, then built-in fallback)
/// 2. Mount the virtual filesystem and start a session at home
/// 3. Print the message of the day
pub fn run(ctx: AppContext) {
    spawn_local(async move {
        let start = js_sys::Date::now();
        let elapsed = || js_sys::Date::now() - start;

        ctx.terminal.push_output(OutputLine::info(format!(
            "{} Loading site data...",
            format_time(elapsed())
        )));
        TimeoutFuture::new(boot_delays::KERNEL_INIT).await;

        let content = match load_site_content().await {
            Ok(content) => {
                ctx.terminal.push_output(OutputLine::success(format!(
                    "{} Mounted {} directories",
                    format_time(elapsed()),
                    content.terminal.filesystem.len()
                )));
                content
            }
            Err(e) => {
                log::error!("site data failed to load: {}", e);
                ctx.terminal.push_output(OutputLine::error(format!(
                    "{} Data load failed: {}",
                    format_time(elapsed()),
                    e
                )));
                SiteContent::fallback()
            }
        };
        TimeoutFuture::new(boot_delays::CONTENT_LOADED).await;

        let interpreter = Interpreter::new(content);
        ctx.terminal.push_output(OutputLine::empty());
        ctx.terminal.push_lines(interpreter.motd());
        ctx.start_session(interpreter);
    });
}
