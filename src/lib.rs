use wasm_bindgen::prelude::*;

use crate::application::Sandbox;
use crate::domain::config::SandboxConfig;
use crate::domain::logging::{LogComponent, get_logger};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

/// Page entry point: install logging, then build and draw the quad once.
///
/// Never throws. Failures are reported on the console only.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = SandboxConfig::default();
    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new(config.log_level));
    domain::logging::init_logger(console_logger);
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider::new()));

    get_logger().info(LogComponent::Presentation("Start"), "WebGL2 sandbox starting");

    if let Err(e) = Sandbox::new(config).launch() {
        get_logger().error(
            LogComponent::Presentation("Start"),
            &format!("setup aborted: {}", e),
        );
    }
}
