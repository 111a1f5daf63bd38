use wasm_bindgen::prelude::*;

use crate::application::Sandbox;
use crate::domain::config::SandboxConfig;
use crate::domain::logging::LogComponent;
use crate::{log_error, log_info};

/// Run the sandbox from JavaScript with an optional JSON configuration.
///
/// Resolves to the setup report serialized as JSON. Configuration errors,
/// a missing WebGL2 context and refused GPU allocations reject.
#[wasm_bindgen(js_name = runSandbox)]
pub fn run_sandbox(config_json: Option<String>) -> Result<String, JsValue> {
    let config = match config_json.as_deref() {
        Some(json) => SandboxConfig::from_json(json)?,
        None => SandboxConfig::default(),
    };

    let report = Sandbox::new(config).launch().map_err(|e| {
        log_error!(LogComponent::Presentation("WASM"), "sandbox failed: {}", e);
        JsValue::from(e)
    })?;

    log_info!(
        LogComponent::Presentation("WASM"),
        "sandbox finished, clean = {}",
        report.is_clean()
    );
    serde_json::to_string(&report).map_err(|e| JsValue::from_str(&e.to_string()))
}
