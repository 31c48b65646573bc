use tracing::{debug, info, warn};

/// Component-tagged logging for the UI layer
///
/// Events go through `tracing`, which `init` routes to the browser console.
pub struct Logger;

impl Logger {
    /// Install the console subscriber and panic hook; call once before rendering
    pub fn init() {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    pub fn debug_with_component(component: &str, message: &str) {
        debug!(component, "{message}");
    }

    pub fn info_with_component(component: &str, message: &str) {
        info!(component, "{message}");
    }

    pub fn warn_with_component(component: &str, message: &str) {
        warn!(component, "{message}");
    }
}
