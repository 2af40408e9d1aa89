//! Data layer behind the sales analytics dashboard.
//!
//! This crate owns everything between the rendering surface and the API:
//! session lifecycle ([`session`]), per-dataset fetch state ([`datasets`]
//! and [`hooks`]), chart series derivation ([`charts`]), entry-form state
//! and submission ([`forms`]), and forecast query coordination
//! ([`prediction`]). The rendering surface itself lives in the host
//! application; it calls [`init`] once on startup and consumes the hooks
//! and stores from here.

pub mod api_client;
pub mod charts;
pub mod datasets;
pub mod forms;
pub mod hooks;
pub mod prediction;
pub mod session;
pub mod settings;

/// Initialize settings and logging. Call once before anything else.
pub fn init() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== SaleSage Data Layer Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());
    log::debug!("Debug mode: {}", settings.debug_mode);
}
