//! Window management subsystem
//!
//! The bootstrap only needs a handful of window operations, captured by the
//! [`WindowBackend`] trait. The GLFW implementation lives with the Vulkan
//! backend (`../backends/vulkan/window.rs`) because it is what reports the
//! instance extensions Vulkan needs for presentation.

pub mod backend;

pub use backend::{WindowBackend, WindowError, WindowResult};
