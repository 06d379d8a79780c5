//! Backend-agnostic window trait
//!
//! Everything the bootstrap asks of a window. Implemented by the GLFW window and
//! by the scripted window used in tests.

use thiserror::Error;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// The windowing library failed to initialize
    #[error("GLFW initialization failed")]
    InitializationFailed,

    /// The window itself could not be created
    #[error("Window creation failed")]
    CreationFailed,

    /// Any other windowing library error
    #[error("GLFW error: {0}")]
    GlfwError(String),
}

/// Result type for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// Interface the bootstrap uses to drive a window
///
/// Window operations must happen on the thread that created the window, so
/// there is no `Send` bound.
pub trait WindowBackend {
    /// Whether a close has been requested (close button, Alt+F4, or programmatically)
    fn should_close(&self) -> bool;

    /// Process pending window system events
    fn poll_events(&mut self);

    /// Current client area size in pixels
    fn get_size(&self) -> (u32, u32);

    /// Instance extensions the window system needs to present to this window
    fn required_instance_extensions(&self) -> WindowResult<Vec<String>>;
}
