//! Validation-layer debug-report callback

use ash::vk;
use std::borrow::Cow;
use std::ffi::{c_void, CStr};
use std::os::raw::c_char;

use crate::foundation::logging::VALIDATION_TARGET;

/// Severities the bootstrap subscribes to
pub fn reported_severities() -> vk::DebugReportFlagsEXT {
    vk::DebugReportFlagsEXT::ERROR | vk::DebugReportFlagsEXT::WARNING
}

/// Log level a report with `flags` is emitted at
pub fn report_level(flags: vk::DebugReportFlagsEXT) -> log::Level {
    if flags.contains(vk::DebugReportFlagsEXT::ERROR) {
        log::Level::Error
    } else if flags.intersects(
        vk::DebugReportFlagsEXT::WARNING | vk::DebugReportFlagsEXT::PERFORMANCE_WARNING,
    ) {
        log::Level::Warn
    } else {
        log::Level::Debug
    }
}

/// Called by the validation layers for every report matching the subscribed flags
///
/// Never asks the driver to abort the triggering call.
pub unsafe extern "system" fn debug_report_callback(
    flags: vk::DebugReportFlagsEXT,
    _object_type: vk::DebugReportObjectTypeEXT,
    _object: u64,
    _location: usize,
    _message_code: i32,
    _layer_prefix: *const c_char,
    message: *const c_char,
    _user_data: *mut c_void,
) -> vk::Bool32 {
    let message = if message.is_null() {
        Cow::Borrowed("<no message>")
    } else {
        CStr::from_ptr(message).to_string_lossy()
    };

    log::log!(target: VALIDATION_TARGET, report_level(flags), "validation layer: {}", message);

    vk::FALSE
}
