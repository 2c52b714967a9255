/// Colored console logger
pub mod log;
/// Settings for the configure step
pub mod configs;

pub use configs::ToolConfig;
pub use log::{log, LogLevel};
