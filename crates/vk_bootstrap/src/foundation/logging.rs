//! Logging setup
//!
//! Progress records go to stdout. Warnings, errors and everything the
//! validation layers report go to stderr.

use log::{Level, Log, Metadata, Record};

/// Log target used by the validation debug-report callback
pub const VALIDATION_TARGET: &str = "validation";

/// Output stream a record is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    /// Standard output
    Stdout,
    /// Standard error
    Stderr,
}

/// Stream for a record with the given level and target
pub fn stream_for(level: Level, target: &str) -> Stream {
    if target == VALIDATION_TARGET || level <= Level::Warn {
        Stream::Stderr
    } else {
        Stream::Stdout
    }
}

/// Two env_logger instances sharing one filter, one per output stream
struct SplitLogger {
    stdout: env_logger::Logger,
    stderr: env_logger::Logger,
}

impl Log for SplitLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.stdout.enabled(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        match stream_for(record.level(), record.target()) {
            Stream::Stdout => self.stdout.log(record),
            Stream::Stderr => self.stderr.log(record),
        }
    }

    fn flush(&self) {
        self.stdout.flush();
        self.stderr.flush();
    }
}

fn build(default_filter: &str, target: env_logger::Target) -> env_logger::Logger {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_target(false)
        .target(target)
        .build()
}

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence; otherwise `default_filter` (e.g. `"info"`) applies.
/// Calling it again is harmless.
pub fn init(default_filter: &str) {
    let logger = SplitLogger {
        stdout: build(default_filter, env_logger::Target::Stdout),
        stderr: build(default_filter, env_logger::Target::Stderr),
    };
    let max_level = logger.stdout.filter();

    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(max_level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_goes_to_stdout() {
        assert_eq!(stream_for(Level::Info, "vk_bootstrap::application"), Stream::Stdout);
        assert_eq!(stream_for(Level::Debug, "vkplay"), Stream::Stdout);
        assert_eq!(stream_for(Level::Trace, "vkplay"), Stream::Stdout);
    }

    #[test]
    fn test_warnings_and_errors_go_to_stderr() {
        assert_eq!(stream_for(Level::Warn, "vk_bootstrap::render"), Stream::Stderr);
        assert_eq!(stream_for(Level::Error, "vkplay"), Stream::Stderr);
    }

    #[test]
    fn test_validation_reports_go_to_stderr() {
        for level in [Level::Error, Level::Warn, Level::Info, Level::Debug] {
            assert_eq!(stream_for(level, VALIDATION_TARGET), Stream::Stderr);
        }
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init("info");
        init("debug");
        log::info!("logging initialised");
    }
}
