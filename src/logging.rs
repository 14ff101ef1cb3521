use log::{LevelFilter, SetLoggerError};
use log4rs::Handle;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::config::runtime::ConfigErrors;
use log4rs::encode::pattern::PatternEncoder;
use thiserror::Error;

/// Sets up logging to stdout and returns a handle to the logger
///
/// # Arguments
///
/// * 'log_level' - the log level filter for the root logger
pub fn setup_logger(log_level: LevelFilter) -> Result<Handle, LoggerError> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d(%Y-%m-%d %H:%M:%S)} {l} - {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(log_level))?;

    let handle = log4rs::init_config(config)?;

    Ok(handle)
}

/// Error depicting errors that occur while setting up the logger
///
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("LogConfigError: {0}")]
    LogConfigError(#[from] ConfigErrors),
    #[error("SetLoggerError: {0}")]
    SetLoggerError(#[from] SetLoggerError),
}
