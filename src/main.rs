mod app;
mod components;
mod config;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    init_logging();
    log::info!("pandash {}", env!("CARGO_PKG_VERSION"));

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, App).forget();
}

/// Route `log` records to the browser console. Debug builds log at `Debug`.
fn init_logging() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_logging_installs_once() {
        init_logging();
        init_logging();
        assert_eq!(log::max_level(), log::LevelFilter::Debug);
    }
}
