//! The `log` module defines an interface to the simulator's internal logging
//! facilities. This is not to be confused with _reporting_, which records
//! model output such as final person states.
//!
//! This module (re)exports the five logging macros: `error!`, `warn!`,
//! `info!`, `debug!` and `trace!` where `error!` represents the
//! highest-priority log messages and `trace!` the lowest. To emit a log
//! message, simply use one of these macros in your code.
//!
//! Logging is _disabled_ by default. Messages can be enabled from the
//! command line with `--log-level <level>`, or programmatically:
//!
//!  - `enable_logging()`: turns on all log messages
//!  - `disable_logging()`: turns off all log messages
//!  - `set_log_level(level: LevelFilter)`: enables only log messages with
//!    priority at least `level`

pub use log::{debug, error, info, trace, warn, LevelFilter};

use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::{Config, Handle};
use std::sync::{LazyLock, Mutex, MutexGuard};

// Use an ISO 8601 timestamp format and color coded level tag
const DEFAULT_LOG_PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%SZ)} {h({l})} {t} - {m}{n}";

// Logging disabled
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Off;

/// A global instance of the logging configuration.
static LOG_CONFIGURATION: LazyLock<Mutex<LogConfiguration>> = LazyLock::new(Mutex::default);

/// Holds logging configuration: the active filter level and a handle to the
/// global logger.
///
/// Because loggers are globally installed, only one instance of this struct
/// should exist. The public API are free functions which fetch the singleton
/// and call the appropriate member function.
#[derive(Debug)]
struct LogConfiguration {
    global_log_level: LevelFilter,
    root_handle: Option<Handle>,
}

impl Default for LogConfiguration {
    fn default() -> Self {
        Self {
            global_log_level: DEFAULT_LOG_LEVEL,
            root_handle: None,
        }
    }
}

impl LogConfiguration {
    /// Sets the global logger to conform to this `LogConfiguration`.
    fn set_config(&mut self) {
        let encoder = Box::new(PatternEncoder::new(DEFAULT_LOG_PATTERN));
        let stdout: ConsoleAppender = ConsoleAppender::builder().encoder(encoder).build();
        let config =
            Config::builder().appender(Appender::builder().build("stdout", Box::new(stdout)));

        // The `Root` determines the global log level
        let root = Root::builder()
            .appender("stdout")
            .build(self.global_log_level);
        let new_config = match config.build(root) {
            Err(e) => {
                panic!("failed to build config: {e}");
            }
            Ok(config) => config,
        };

        match self.root_handle {
            Some(ref mut handle) => {
                // The global logger has already been initialized
                handle.set_config(new_config);
            }

            None => {
                // The global logger has not yet been initialized
                self.root_handle = Some(log4rs::init_config(new_config).unwrap());
            }
        }
    }
}

fn get_log_configuration() -> MutexGuard<'static, LogConfiguration> {
    LOG_CONFIGURATION
        .lock()
        .expect("log configuration lock poisoned")
}

/// Enables only log messages with priority at least `level`.
pub fn set_log_level(level: LevelFilter) {
    let mut configuration = get_log_configuration();
    configuration.global_log_level = level;
    configuration.set_config();
}

/// Turns on all log messages.
pub fn enable_logging() {
    set_log_level(LevelFilter::Trace);
}

/// Turns off all log messages.
pub fn disable_logging() {
    set_log_level(DEFAULT_LOG_LEVEL);
}
