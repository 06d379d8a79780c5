//! Instance layer and extension list assembly

use super::context::{VulkanError, VulkanResult};
use ash::vk;

/// Name of the debug-report instance extension
pub fn debug_report_extension() -> &'static str {
    // The registry name is plain ASCII
    vk::ExtDebugReportFn::name().to_str().unwrap_or("VK_EXT_debug_report")
}

/// Required layer names that are not in `available`, in required order
///
/// Matching is exact and case-sensitive.
pub fn missing_layers(required: &[String], available: &[String]) -> Vec<String> {
    required
        .iter()
        .filter(|name| !available.iter().any(|layer| layer == *name))
        .cloned()
        .collect()
}

/// Extensions to enable at instance creation
///
/// Everything the window system needs for presentation, plus the debug-report
/// extension when validation is on.
pub fn instance_extensions(window_required: &[String], enable_validation: bool) -> Vec<String> {
    let mut extensions = window_required.to_vec();
    if enable_validation {
        let debug_report = debug_report_extension();
        if !extensions.iter().any(|ext| ext == debug_report) {
            extensions.push(debug_report.to_string());
        }
    }
    extensions
}

/// Convert a name-list length to the `u32` count Vulkan expects
pub fn checked_count(kind: &'static str, len: usize) -> VulkanResult<u32> {
    u32::try_from(len).map_err(|_| VulkanError::TooManyNames { kind, count: len })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_all_layers_present() {
        let required = names(&["VK_LAYER_KHRONOS_validation"]);
        let available = names(&["VK_LAYER_MESA_device_select", "VK_LAYER_KHRONOS_validation"]);
        assert!(missing_layers(&required, &available).is_empty());
    }

    #[test]
    fn test_missing_layer_reported() {
        let required = names(&["VK_LAYER_KHRONOS_validation", "VK_LAYER_LUNARG_api_dump"]);
        let available = names(&["VK_LAYER_KHRONOS_validation"]);
        assert_eq!(missing_layers(&required, &available), names(&["VK_LAYER_LUNARG_api_dump"]));
    }

    #[test]
    fn test_layer_match_is_exact() {
        let required = names(&["VK_LAYER_KHRONOS_validation"]);
        let available = names(&["vk_layer_khronos_validation", "VK_LAYER_KHRONOS_validation2"]);
        assert_eq!(missing_layers(&required, &available), required);
    }

    #[test]
    fn test_extensions_without_validation() {
        let window = names(&["VK_KHR_surface", "VK_KHR_xcb_surface"]);
        assert_eq!(instance_extensions(&window, false), window);
    }

    #[test]
    fn test_extensions_with_validation() {
        let window = names(&["VK_KHR_surface", "VK_KHR_xcb_surface"]);
        let extensions = instance_extensions(&window, true);
        assert_eq!(extensions.len(), 3);
        assert_eq!(&extensions[..2], &window[..]);
        assert_eq!(extensions[2], "VK_EXT_debug_report");
    }

    #[test]
    fn test_debug_report_not_duplicated() {
        let window = names(&["VK_KHR_surface", "VK_EXT_debug_report"]);
        assert_eq!(instance_extensions(&window, true), window);
    }

    #[test]
    fn test_checked_count() {
        assert_eq!(checked_count("extension", 3).unwrap(), 3);
        #[cfg(target_pointer_width = "64")]
        assert!(matches!(
            checked_count("layer", u32::MAX as usize + 1),
            Err(VulkanError::TooManyNames { kind: "layer", .. })
        ));
    }
}
