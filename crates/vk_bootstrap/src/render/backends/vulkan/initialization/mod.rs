//! Vulkan initialization components
//!
//! Instance creation, layer/extension negotiation and the validation
//! debug-report hookup.

pub mod context;
pub mod debug_report;
pub mod extensions;

pub use context::{AshDriver, GraphicsDriver, InstanceRequest, VulkanError, VulkanResult};
pub use debug_report::{debug_report_callback, reported_severities};
pub use extensions::{checked_count, debug_report_extension, instance_extensions, missing_layers};
