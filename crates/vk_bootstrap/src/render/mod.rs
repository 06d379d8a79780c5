//! Rendering-side infrastructure: windows and the Vulkan backend

pub mod backends;
pub mod window;

pub use backends::vulkan::{AshDriver, GlfwWindow, GraphicsDriver, ScopedHandle};
pub use window::{WindowBackend, WindowError, WindowResult};
