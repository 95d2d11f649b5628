#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // Windows release: hide console window
use cryptoscope::{Cli, run_app};
use log::LevelFilter;

#[cfg(not(target_arch = "wasm32"))]
use {clap::Parser, eframe::NativeOptions};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, prelude::*};

const LOG_TARGET: &str = "cryptoscope";

/// (everything else, this crate)
fn log_levels() -> (LevelFilter, LevelFilter) {
    if cfg!(debug_assertions) {
        (LevelFilter::Warn, LevelFilter::Info)
    } else {
        (LevelFilter::Error, LevelFilter::Error)
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn _keep_alive() {}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
fn init_log() {
    let (global_level, crate_level) = log_levels();
    let _ = fern::Dispatch::new()
        .level(global_level)
        .level_for(LOG_TARGET, crate_level)
        .chain(fern::Output::call(|record| {
            let msg = wasm_bindgen::JsValue::from(record.args().to_string());
            match record.level() {
                log::Level::Error => web_sys::console::error_1(&msg),
                log::Level::Warn => web_sys::console::warn_1(&msg),
                log::Level::Info => web_sys::console::info_1(&msg),
                log::Level::Debug | log::Level::Trace => web_sys::console::log_1(&msg),
            }
        }))
        .apply();
}

#[cfg(target_arch = "wasm32")]
fn find_canvas(id: &str) -> Result<web_sys::HtmlCanvasElement, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document on the global window")?
        .get_element_by_id(id)
        .ok_or_else(|| format!("no element with id '{id}'"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| format!("'{id}' is not a canvas").into())
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    init_log();

    let canvas = find_canvas("the_canvas_id")?;
    let args = Cli::default();

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(move |cc| Ok(Box::new(run_app(cc, args)?))),
        )
        .await
}

#[cfg(not(target_arch = "wasm32"))]
fn init_log() {
    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, crate_level) = log_levels();
    env_logger::Builder::new()
        .filter(None, global_level)
        .filter(Some(LOG_TARGET), crate_level)
        // RUST_LOG still wins when set
        .parse_default_env()
        .init();
}

#[cfg(not(target_arch = "wasm32"))]
fn native_options() -> NativeOptions {
    NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([480.0, 480.0])
            .with_title("Cryptoscope"),
        ..Default::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    init_log();
    let args = Cli::parse();
    log::debug!("Launching with {:?}", args);

    eframe::run_native(
        "Cryptoscope",
        native_options(),
        Box::new(move |cc| Ok(Box::new(run_app(cc, args)?))),
    )
}
