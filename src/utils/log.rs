use colored::Colorize;

//Log utils
#[derive(PartialEq, PartialOrd, Debug, Clone, Copy)]
/// This enum is used to represent the different log levels
pub enum LogLevel {
    Debug,
    Info,
    Log,
    Warn,
    Error,
}

impl LogLevel {
    /// Reads a level name as accepted by `TOPAZ_BUILD_LOG_LEVEL`.
    /// Unknown names fall back to `Log`.
    pub fn from_name(name: &str) -> LogLevel {
        match name {
            "Debug" => LogLevel::Debug,
            "Info" => LogLevel::Info,
            "Log" => LogLevel::Log,
            "Warn" => LogLevel::Warn,
            "Error" => LogLevel::Error,
            _ => LogLevel::Log,
        }
    }

    fn tag(self) -> colored::ColoredString {
        match self {
            LogLevel::Debug => "[DEBUG]".purple(),
            LogLevel::Info => "[INFO]".blue(),
            LogLevel::Log => "[LOG]".green(),
            LogLevel::Warn => "[WARN]".yellow(),
            LogLevel::Error => "[ERROR]".red(),
        }
    }
}

/// The threshold picked up from the environment, `Log` when unset.
pub fn current_level() -> LogLevel {
    match std::env::var("TOPAZ_BUILD_LOG_LEVEL") {
        Ok(val) => LogLevel::from_name(&val),
        Err(_) => LogLevel::Log,
    }
}

/// Whether a message at `level` passes the `threshold`.
/// Debug mode hides only `Info`; the `Log` status line always gets through.
pub fn should_log(level: LogLevel, threshold: LogLevel) -> bool {
    if threshold == LogLevel::Debug {
        level != LogLevel::Info
    } else {
        level >= threshold
    }
}

/// This function is used to log messages to the console
/// # Arguments
/// * `level` - The log level of the message
/// * `message` - The message to log
/// # Example
/// ```
/// use topaz_build::utils::{log, LogLevel};
/// log(LogLevel::Info, "Hello World!");
/// ```
///
/// # Level setting
/// The log level can be set by setting the environment variable `TOPAZ_BUILD_LOG_LEVEL`
/// to one of the following values:
/// * `Debug`
/// * `Info`
/// * `Log`
/// * `Warn`
/// * `Error`
/// If the environment variable is not set, the default log level is `Log`
pub fn log(level: LogLevel, message: &str) {
    if !should_log(level, current_level()) {
        return;
    }
    if level >= LogLevel::Warn {
        eprintln!("{} {}", level.tag(), message);
    } else {
        println!("{} {}", level.tag(), message);
    }
}
