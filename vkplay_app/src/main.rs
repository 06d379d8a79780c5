//! VkPlay: opens a window, creates a Vulkan instance and waits for the window to close
//!
//! Usage: `vkplay [config.toml|config.ron]`

use std::process::ExitCode;

use vk_bootstrap::foundation::logging;
use vk_bootstrap::prelude::*;

fn load_config() -> Result<AppConfig, AppError> {
    match std::env::args().nth(1) {
        Some(path) => Ok(AppConfig::load_from_file(&path)?),
        None => Ok(AppConfig::default()),
    }
}

fn run(config: AppConfig) -> Result<(), AppError> {
    let driver = AshDriver::load()?;
    let mut app = VulkanApp::new(config, driver);
    let result = app.run(GlfwWindow::open);
    log::debug!("Bootstrap finished in state: {}", app.state());
    result
}

/// Process exit status for a finished run, logging the failure if there was one
fn exit_status(result: &Result<(), AppError>) -> u8 {
    match result {
        Ok(()) => {
            log::info!("VkPlay finished successfully");
            0
        }
        Err(e) => {
            log::error!("{}", e);
            1
        }
    }
}

fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            logging::init("info");
            return ExitCode::from(exit_status(&Err(e)));
        }
    };

    logging::init(&config.log_level);
    log::info!("Starting VkPlay...");
    log::info!(
        "Validation layers {}",
        if config.validation_enabled() { "enabled" } else { "disabled" }
    );

    ExitCode::from(exit_status(&run(config)))
}
