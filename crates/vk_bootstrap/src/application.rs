//! Application bootstrap and lifecycle
//!
//! [`VulkanApp`] brings a window and a Vulkan instance up in a fixed order,
//! hooks the validation layers' debug report when validation is on, and idles
//! until the window is closed:
//!
//! ```text
//! Uninitialized -> WindowCreated -> InstanceCreated -> [DebugCallbackRegistered]
//!               -> Running -> Terminated
//! ```
//!
//! Bring-up is all-or-nothing. Any failure returns an [`AppError`] and releases
//! whatever was already acquired, newest first.

use std::fmt;
use std::rc::Rc;

use ash::vk;
use thiserror::Error;

use crate::config::ConfigError;
use crate::core::config::{AppConfig, WindowConfig};
use crate::render::backends::vulkan::handle::ScopedHandle;
use crate::render::backends::vulkan::initialization::{
    checked_count, instance_extensions, missing_layers, reported_severities, GraphicsDriver,
    InstanceRequest, VulkanError,
};
use crate::render::window::{WindowBackend, WindowError};

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Window could not be opened or queried
    #[error("Window error: {0}")]
    Window(#[from] WindowError),

    /// Vulkan call failed
    #[error("Vulkan error: {0}")]
    Vulkan(#[from] VulkanError),

    /// Configuration file could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Configuration values are unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Validation was requested but some required layers are missing
    #[error("validation layers requested, but not available: {}", missing.join(", "))]
    ValidationLayersUnavailable {
        /// Required layers the loader does not provide
        missing: Vec<String>,
    },
}

/// Bring-up progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapState {
    /// Nothing acquired yet
    Uninitialized,
    /// Window is open
    WindowCreated,
    /// Instance exists
    InstanceCreated,
    /// Validation debug callback is registered
    DebugCallbackRegistered,
    /// Idling in the event loop
    Running,
    /// Everything has been released after a clean close
    Terminated,
}

impl fmt::Display for BootstrapState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Uninitialized => "uninitialized",
            Self::WindowCreated => "window created",
            Self::InstanceCreated => "instance created",
            Self::DebugCallbackRegistered => "debug callback registered",
            Self::Running => "running",
            Self::Terminated => "terminated",
        };
        f.write_str(name)
    }
}

/// Resources acquired during one run
///
/// Fields drop top to bottom: debug callback, instance, window.
struct Session<W> {
    debug_callback: ScopedHandle<vk::DebugReportCallbackEXT>,
    instance: ScopedHandle<vk::Instance>,
    window: W,
}

/// Window + instance bootstrap
pub struct VulkanApp<D: GraphicsDriver + 'static> {
    config: AppConfig,
    driver: Rc<D>,
    state: BootstrapState,
}

impl<D: GraphicsDriver + 'static> VulkanApp<D> {
    /// Create a bootstrap over `driver`
    pub fn new(config: AppConfig, driver: D) -> Self {
        Self {
            config,
            driver: Rc::new(driver),
            state: BootstrapState::Uninitialized,
        }
    }

    /// How far bring-up got
    ///
    /// After a failed run this is the last state that was reached.
    pub fn state(&self) -> BootstrapState {
        self.state
    }

    /// Run the whole lifecycle until the window is closed
    ///
    /// `open_window` is called once with the window settings.
    pub fn run<W, F>(&mut self, open_window: F) -> Result<(), AppError>
    where
        W: WindowBackend,
        F: FnOnce(&WindowConfig) -> Result<W, WindowError>,
    {
        self.config.validate().map_err(AppError::InvalidConfig)?;

        log::info!("Initialising GLFW window context...");
        let window = open_window(&self.config.window)?;
        let (width, height) = window.get_size();
        log::info!("Window \"{}\" opened at {}x{}", self.config.window.title, width, height);
        self.transition(BootstrapState::WindowCreated);

        let mut session = Session {
            debug_callback: ScopedHandle::empty(),
            instance: ScopedHandle::empty(),
            window,
        };

        log::info!("Starting Vulkan initialisation...");
        self.create_instance(&mut session)?;
        self.setup_debug_callback(&mut session)?;

        self.main_loop(&mut session.window);

        log::info!("Window closed, releasing Vulkan resources");
        drop(session);
        self.transition(BootstrapState::Terminated);
        Ok(())
    }

    fn transition(&mut self, next: BootstrapState) {
        log::info!("Bootstrap state: {} -> {}", self.state, next);
        self.state = next;
    }

    fn create_instance<W: WindowBackend>(&mut self, session: &mut Session<W>) -> Result<(), AppError> {
        log::info!("Creating Vulkan instance...");
        let enable_validation = self.config.validation_enabled();

        if enable_validation {
            self.check_validation_layer_support()?;
        }

        let window_extensions = session.window.required_instance_extensions()?;
        log::info!("Available GLFW extensions:");
        for extension in &window_extensions {
            log::info!("\t{}", extension);
        }

        let extensions = instance_extensions(&window_extensions, enable_validation);
        let layers = if enable_validation {
            self.config.validation_layers.clone()
        } else {
            Vec::new()
        };
        checked_count("extension", extensions.len())?;
        checked_count("layer", layers.len())?;

        let instance_config = &self.config.instance;
        let request = InstanceRequest {
            application_name: instance_config.application_name.clone(),
            application_version: instance_config.application_version,
            engine_name: instance_config.engine_name.clone(),
            engine_version: instance_config.engine_version,
            api_version: instance_config.api_version,
            extensions,
            layers,
        };

        let driver = Rc::clone(&self.driver);
        session.instance = ScopedHandle::new(move |instance: vk::Instance| {
            driver.destroy_instance(instance);
        });
        *session.instance.replace() = self.driver.create_instance(&request)?;

        self.transition(BootstrapState::InstanceCreated);
        Ok(())
    }

    fn check_validation_layer_support(&self) -> Result<(), AppError> {
        let available = self.driver.available_layers()?;
        let missing = missing_layers(&self.config.validation_layers, &available);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::ValidationLayersUnavailable { missing })
        }
    }

    fn setup_debug_callback<W: WindowBackend>(&mut self, session: &mut Session<W>) -> Result<(), AppError> {
        if !self.config.validation_enabled() {
            return Ok(());
        }

        let instance = session.instance.get();
        let driver = Rc::clone(&self.driver);
        session.debug_callback = ScopedHandle::with_parent(
            instance,
            move |instance: vk::Instance, callback: vk::DebugReportCallbackEXT| {
                driver.destroy_debug_report_callback(instance, callback);
            },
        );
        *session.debug_callback.replace() = self
            .driver
            .create_debug_report_callback(instance, reported_severities())?;

        log::info!("Validation debug callback registered");
        self.transition(BootstrapState::DebugCallbackRegistered);
        Ok(())
    }

    fn main_loop<W: WindowBackend>(&mut self, window: &mut W) {
        self.transition(BootstrapState::Running);
        log::info!("Main loop running...");
        while !window.should_close() {
            window.poll_events();
        }
    }
}
