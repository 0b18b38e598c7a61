/// Plus Mailer - plus-address generator for the browser
/// Built with Rust + WASM + Yew

mod address;
mod config;
mod email_data;
mod error;
mod history;
mod state;
pub mod ui;

pub use config::GeneratorConfig;
pub use email_data::GeneratedEmail;
pub use error::ValidationError;
pub use history::History;
pub use state::{GeneratorAction, GeneratorState};

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export the pure generator for JavaScript access
#[wasm_bindgen]
pub fn plus_address(username: &str, counter: u32, domain: &str) -> Option<String> {
    address::validate(username, domain)
        .ok()
        .map(|(username, domain)| address::plus_address(username, counter.max(1), domain))
}

// Start the generator page with default settings
#[wasm_bindgen]
pub fn start_generator() {
    yew::Renderer::<ui::generator::App>::new().render();
}

// Start the generator page with a host-supplied settings object
#[wasm_bindgen]
pub fn start_generator_with_config(config: JsValue) -> Result<(), JsValue> {
    let config: GeneratorConfig = if config.is_null() || config.is_undefined() {
        GeneratorConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {:?}", e)))?
    };

    log::info!("Starting generator with {:?}", config);

    let props = ui::generator::AppProps { config };
    yew::Renderer::<ui::generator::App>::with_props(props).render();
    Ok(())
}
