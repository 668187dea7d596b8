//! Browser backend: reads wallet extensions off `window`.

mod environment;
mod provider;
mod signing;
mod util;

pub use environment::WindowEnvironment;
pub use provider::JsInjectedProvider;

/// Routes `tracing` output to the browser console. Safe to call more than once.
pub fn init_logging() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(tracing_wasm::set_as_global_default);
}
