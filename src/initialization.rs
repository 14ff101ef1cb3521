use log::{info, LevelFilter};
use anyhow::Result;
use thiserror::Error;
use crate::config::{load_config, ConfigError};
use crate::logging::{setup_logger, LoggerError};
use crate::manager_dwd::{Dwd, DwdError};
use crate::manager_mail::{Mail, MailError};

pub struct Mgr {
    pub dwd: Dwd,
    pub mail: Mail,
}

/// Initializes and returns a Mgr struct holding the configured DWD client and mail transport.
/// Configuration is loaded before any network client is built, so missing configuration
/// never results in network traffic.
///
pub fn init() -> Result<Mgr, InitializationError> {
    // Load configuration
    let config = load_config()?;

    // Setup logging
    let _ = setup_logger(LevelFilter::Info)?;

    // Print version
    info!("starting pollenreport version: {}", env!("CARGO_PKG_VERSION"));

    // Instantiate structs
    let dwd = Dwd::new()?;
    let mail = Mail::new(&config.mail)?;

    let mgr = Mgr {
        dwd,
        mail,
    };

    Ok(mgr)
}

/// Error depicting errors that occur while initializing the pollen report
///
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("ConfigurationError: {0}")]
    ConfigurationError(#[from] ConfigError),
    #[error("SetupLoggerError: {0}")]
    SetupLoggerError(#[from] LoggerError),
    #[error("DwdSetupError: {0}")]
    DwdSetupError(#[from] DwdError),
    #[error("MailSetupError: {0}")]
    MailSetupError(#[from] MailError),
}
