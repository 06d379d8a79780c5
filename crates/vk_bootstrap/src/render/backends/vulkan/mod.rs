//! Vulkan backend
//!
//! Raw handle ownership, the driver seam and the GLFW window used to host the
//! instance.

pub mod handle;
pub mod initialization;
pub mod window;

pub use handle::{HandleSlot, NullHandle, ScopedHandle};
pub use initialization::{AshDriver, GraphicsDriver, InstanceRequest, VulkanError, VulkanResult};
pub use window::GlfwWindow;
