//! Recording doubles for the window and driver seams
//!
//! Both doubles append to one shared event log so tests can assert the exact
//! order in which resources are acquired and released.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ash::vk::{self, Handle};

use crate::render::backends::vulkan::initialization::{GraphicsDriver, InstanceRequest, VulkanError, VulkanResult};
use crate::render::window::{WindowBackend, WindowResult};

pub(crate) type EventLog = Rc<RefCell<Vec<Event>>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    EnumerateLayers,
    CreateInstance { extensions: Vec<String>, layers: Vec<String> },
    DestroyInstance(u64),
    CreateCallback { instance: u64 },
    DestroyCallback { instance: u64, callback: u64 },
    Poll,
    WindowDropped,
}

pub(crate) struct RecordingDriver {
    events: EventLog,
    layers: Vec<String>,
    instance_result: Option<vk::Result>,
    debug_report: bool,
    next_instance: Cell<u64>,
    next_callback: Cell<u64>,
}

impl RecordingDriver {
    pub(crate) fn new() -> Self {
        Self {
            events: Rc::new(RefCell::new(Vec::new())),
            layers: Vec::new(),
            instance_result: None,
            debug_report: true,
            next_instance: Cell::new(1),
            next_callback: Cell::new(1),
        }
    }

    pub(crate) fn events(&self) -> EventLog {
        Rc::clone(&self.events)
    }

    pub(crate) fn with_layers(mut self, layers: &[&str]) -> Self {
        self.layers = layers.iter().map(|s| (*s).to_string()).collect();
        self
    }

    pub(crate) fn failing_instance(mut self, result: vk::Result) -> Self {
        self.instance_result = Some(result);
        self
    }

    pub(crate) fn without_debug_report(mut self) -> Self {
        self.debug_report = false;
        self
    }

    fn record(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}

impl GraphicsDriver for RecordingDriver {
    fn available_layers(&self) -> VulkanResult<Vec<String>> {
        self.record(Event::EnumerateLayers);
        Ok(self.layers.clone())
    }

    fn create_instance(&self, request: &InstanceRequest) -> VulkanResult<vk::Instance> {
        self.record(Event::CreateInstance {
            extensions: request.extensions.clone(),
            layers: request.layers.clone(),
        });
        if let Some(result) = self.instance_result {
            return Err(VulkanError::Api(result));
        }
        let raw = self.next_instance.get();
        self.next_instance.set(raw + 1);
        Ok(vk::Instance::from_raw(raw))
    }

    fn destroy_instance(&self, instance: vk::Instance) {
        self.record(Event::DestroyInstance(instance.as_raw()));
    }

    fn create_debug_report_callback(
        &self,
        instance: vk::Instance,
        _flags: vk::DebugReportFlagsEXT,
    ) -> VulkanResult<vk::DebugReportCallbackEXT> {
        if !self.debug_report {
            return Err(VulkanError::ExtensionNotPresent("vkCreateDebugReportCallbackEXT"));
        }
        self.record(Event::CreateCallback { instance: instance.as_raw() });
        let raw = self.next_callback.get();
        self.next_callback.set(raw + 1);
        Ok(vk::DebugReportCallbackEXT::from_raw(raw))
    }

    fn destroy_debug_report_callback(&self, instance: vk::Instance, callback: vk::DebugReportCallbackEXT) {
        self.record(Event::DestroyCallback {
            instance: instance.as_raw(),
            callback: callback.as_raw(),
        });
    }
}

/// Window that requests closing after a fixed number of polls
pub(crate) struct ScriptedWindow {
    events: EventLog,
    polls_until_close: usize,
    polls: usize,
}

impl ScriptedWindow {
    pub(crate) fn new(events: &EventLog, polls_until_close: usize) -> Self {
        Self {
            events: Rc::clone(events),
            polls_until_close,
            polls: 0,
        }
    }
}

impl WindowBackend for ScriptedWindow {
    fn should_close(&self) -> bool {
        self.polls >= self.polls_until_close
    }

    fn poll_events(&mut self) {
        self.polls += 1;
        self.events.borrow_mut().push(Event::Poll);
    }

    fn get_size(&self) -> (u32, u32) {
        (800, 600)
    }

    fn required_instance_extensions(&self) -> WindowResult<Vec<String>> {
        Ok(vec!["VK_KHR_surface".to_string(), "VK_KHR_xcb_surface".to_string()])
    }
}

impl Drop for ScriptedWindow {
    fn drop(&mut self) {
        self.events.borrow_mut().push(Event::WindowDropped);
    }
}
