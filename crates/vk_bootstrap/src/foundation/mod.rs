//! Foundation module - logging utilities

pub mod logging;
