//! Vulkan driver access
//!
//! The bootstrap talks to Vulkan through the [`GraphicsDriver`] trait so the
//! bring-up sequence can run against a recording driver in tests. [`AshDriver`]
//! is the real implementation on top of the system Vulkan loader.

use ash::{Entry, vk};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use thiserror::Error;

use super::debug_report::debug_report_callback;
use super::extensions::checked_count;

/// Vulkan-specific error types
#[derive(Error, Debug)]
pub enum VulkanError {
    /// The Vulkan loader library could not be loaded
    #[error("Failed to load Vulkan: {0}")]
    LoaderUnavailable(String),

    /// General Vulkan API error with result code
    #[error("Vulkan API error: {0:?}")]
    Api(vk::Result),

    /// An extension entry point could not be resolved
    #[error("Extension not present: {0} could not be resolved")]
    ExtensionNotPresent(&'static str),

    /// A layer or extension name cannot be passed to Vulkan
    #[error("Invalid name {0:?}: contains an interior NUL byte")]
    InvalidName(String),

    /// A name list does not fit in Vulkan's 32-bit count
    #[error("Too many {kind} names: {count}")]
    TooManyNames {
        /// Which list overflowed ("layer" or "extension")
        kind: &'static str,
        /// Length of the list
        count: usize,
    },
}

/// Result type for Vulkan operations
pub type VulkanResult<T> = Result<T, VulkanError>;

/// Everything needed to create an instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceRequest {
    /// Application name reported to the driver
    pub application_name: String,
    /// Application version (major, minor, patch)
    pub application_version: (u32, u32, u32),
    /// Engine name reported to the driver
    pub engine_name: String,
    /// Engine version (major, minor, patch)
    pub engine_version: (u32, u32, u32),
    /// Targeted API version (major, minor)
    pub api_version: (u32, u32),
    /// Instance extensions to enable
    pub extensions: Vec<String>,
    /// Instance layers to enable
    pub layers: Vec<String>,
}

/// The subset of the Vulkan API the bootstrap needs
pub trait GraphicsDriver {
    /// Names of all instance layers the loader can provide
    fn available_layers(&self) -> VulkanResult<Vec<String>>;

    /// Create an instance
    fn create_instance(&self, request: &InstanceRequest) -> VulkanResult<vk::Instance>;

    /// Destroy an instance created by [`create_instance`](Self::create_instance)
    fn destroy_instance(&self, instance: vk::Instance);

    /// Register the validation debug-report callback for the given severities
    ///
    /// Fails with [`VulkanError::ExtensionNotPresent`] when the driver does not
    /// expose the extension entry point.
    fn create_debug_report_callback(
        &self,
        instance: vk::Instance,
        flags: vk::DebugReportFlagsEXT,
    ) -> VulkanResult<vk::DebugReportCallbackEXT>;

    /// Unregister a debug-report callback
    fn destroy_debug_report_callback(
        &self,
        instance: vk::Instance,
        callback: vk::DebugReportCallbackEXT,
    );
}

const CREATE_DEBUG_REPORT: &str = "vkCreateDebugReportCallbackEXT";
const DESTROY_DEBUG_REPORT: &str = "vkDestroyDebugReportCallbackEXT";

/// [`GraphicsDriver`] backed by the system Vulkan loader
pub struct AshDriver {
    entry: Entry,
}

impl AshDriver {
    /// Load the Vulkan loader library
    pub fn load() -> VulkanResult<Self> {
        let entry = unsafe { Entry::load() }
            .map_err(|e| VulkanError::LoaderUnavailable(e.to_string()))?;
        Ok(Self { entry })
    }

    fn instance_proc(&self, instance: vk::Instance, name: &str) -> vk::PFN_vkVoidFunction {
        let name = CString::new(name).ok()?;
        unsafe { self.entry.get_instance_proc_addr(instance, name.as_ptr()) }
    }
}

fn to_cstring(name: &str) -> VulkanResult<CString> {
    CString::new(name).map_err(|_| VulkanError::InvalidName(name.to_string()))
}

fn to_cstrings(names: &[String]) -> VulkanResult<Vec<CString>> {
    names.iter().map(|name| to_cstring(name)).collect()
}

impl GraphicsDriver for AshDriver {
    fn available_layers(&self) -> VulkanResult<Vec<String>> {
        #[allow(unused_unsafe)]
        let layers = unsafe { self.entry.enumerate_instance_layer_properties() }
            .map_err(VulkanError::Api)?;

        Ok(layers
            .iter()
            .map(|layer| {
                unsafe { CStr::from_ptr(layer.layer_name.as_ptr()) }
                    .to_string_lossy()
                    .into_owned()
            })
            .collect())
    }

    fn create_instance(&self, request: &InstanceRequest) -> VulkanResult<vk::Instance> {
        let app_name = to_cstring(&request.application_name)?;
        let engine_name = to_cstring(&request.engine_name)?;
        let extensions = to_cstrings(&request.extensions)?;
        let layers = to_cstrings(&request.layers)?;
        checked_count("extension", extensions.len())?;
        checked_count("layer", layers.len())?;

        let extension_ptrs: Vec<*const c_char> = extensions.iter().map(|ext| ext.as_ptr()).collect();
        let layer_ptrs: Vec<*const c_char> = layers.iter().map(|layer| layer.as_ptr()).collect();

        let (app_major, app_minor, app_patch) = request.application_version;
        let (engine_major, engine_minor, engine_patch) = request.engine_version;
        let (api_major, api_minor) = request.api_version;
        let app_info = vk::ApplicationInfo::builder()
            .application_name(&app_name)
            .application_version(vk::make_api_version(0, app_major, app_minor, app_patch))
            .engine_name(&engine_name)
            .engine_version(vk::make_api_version(0, engine_major, engine_minor, engine_patch))
            .api_version(vk::make_api_version(0, api_major, api_minor, 0));

        let create_info = vk::InstanceCreateInfo::builder()
            .application_info(&app_info)
            .enabled_extension_names(&extension_ptrs)
            .enabled_layer_names(&layer_ptrs);

        let instance = unsafe {
            self.entry.create_instance(&create_info, None)
                .map_err(VulkanError::Api)?
        };
        Ok(instance.handle())
    }

    fn destroy_instance(&self, instance: vk::Instance) {
        unsafe {
            ash::Instance::load(self.entry.static_fn(), instance).destroy_instance(None);
        }
    }

    fn create_debug_report_callback(
        &self,
        instance: vk::Instance,
        flags: vk::DebugReportFlagsEXT,
    ) -> VulkanResult<vk::DebugReportCallbackEXT> {
        let create: vk::PFN_vkCreateDebugReportCallbackEXT =
            match self.instance_proc(instance, CREATE_DEBUG_REPORT) {
                Some(f) => unsafe { std::mem::transmute(f) },
                None => return Err(VulkanError::ExtensionNotPresent(CREATE_DEBUG_REPORT)),
            };

        let create_info = vk::DebugReportCallbackCreateInfoEXT::builder()
            .flags(flags)
            .pfn_callback(Some(debug_report_callback));

        let mut callback = vk::DebugReportCallbackEXT::null();
        let result = unsafe { create(instance, &*create_info, std::ptr::null(), &mut callback) };
        if result != vk::Result::SUCCESS {
            return Err(VulkanError::Api(result));
        }
        Ok(callback)
    }

    fn destroy_debug_report_callback(
        &self,
        instance: vk::Instance,
        callback: vk::DebugReportCallbackEXT,
    ) {
        match self.instance_proc(instance, DESTROY_DEBUG_REPORT) {
            Some(f) => unsafe {
                let destroy: vk::PFN_vkDestroyDebugReportCallbackEXT = std::mem::transmute(f);
                destroy(instance, callback, std::ptr::null());
            },
            None => log::warn!("{} unavailable, debug callback leaked", DESTROY_DEBUG_REPORT),
        }
    }
}
