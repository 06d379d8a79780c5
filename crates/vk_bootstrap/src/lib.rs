//! # VK Bootstrap
//!
//! Brings up a GLFW window and a Vulkan instance, hooks the validation layers'
//! debug report in debug builds, and idles until the window is closed.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vk_bootstrap::prelude::*;
//!
//! fn main() -> Result<(), AppError> {
//!     let config = AppConfig::default();
//!     let mut app = VulkanApp::new(config, AshDriver::load()?);
//!     app.run(GlfwWindow::open)
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod core;
pub mod foundation;
pub mod render;

mod application;

#[cfg(test)]
mod testing;

pub use application::{AppError, BootstrapState, VulkanApp};

/// Common imports for bootstrap users
pub mod prelude {
    pub use crate::{
        AppError, BootstrapState, VulkanApp,
        config::{Config, ConfigError, ConfigFormat},
        core::config::{AppConfig, InstanceConfig, WindowConfig},
        render::backends::vulkan::{AshDriver, GlfwWindow, GraphicsDriver, ScopedHandle},
        render::window::{WindowBackend, WindowError},
    };
}
