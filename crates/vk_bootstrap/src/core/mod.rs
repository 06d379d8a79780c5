//! Core configuration types

pub mod config;

pub use config::{AppConfig, InstanceConfig, WindowConfig};
