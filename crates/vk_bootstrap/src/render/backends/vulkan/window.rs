//! Window management using GLFW
//!
//! Provides window creation and event polling for a Vulkan-only window

use crate::core::config::WindowConfig;
use crate::render::window::{WindowBackend, WindowError, WindowResult};

/// GLFW window wrapper with proper resource management
///
/// Dropping it destroys the window and then terminates GLFW.
pub struct GlfwWindow {
    window: glfw::PWindow,
    _events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    glfw: glfw::Glfw,
}

impl GlfwWindow {
    /// Initialize GLFW and open a fixed-size window with no client API
    pub fn open(config: &WindowConfig) -> WindowResult<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|_| WindowError::InitializationFailed)?;

        if !glfw.vulkan_supported() {
            return Err(WindowError::GlfwError("Vulkan loader not found by GLFW".to_string()));
        }

        // Vulkan presents on its own, no OpenGL context
        glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::NoApi));
        glfw.window_hint(glfw::WindowHint::Resizable(false));

        let (mut window, events) = glfw
            .create_window(config.width, config.height, &config.title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        window.set_close_polling(true);

        Ok(Self {
            window,
            _events: events,
            glfw,
        })
    }
}

impl WindowBackend for GlfwWindow {
    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    fn get_size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_size();
        (clamp_dimension(width), clamp_dimension(height))
    }

    fn required_instance_extensions(&self) -> WindowResult<Vec<String>> {
        self.glfw
            .get_required_instance_extensions()
            .ok_or(WindowError::GlfwError("Failed to get required extensions".to_string()))
    }
}

/// GLFW reports sizes as `i32`; negative values never describe a real client area
fn clamp_dimension(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}
