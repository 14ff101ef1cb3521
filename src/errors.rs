use thiserror::Error;

/// Error depicting errors that occur while creating and sending the pollen report
///
#[derive(Debug, Error)]
#[error("error while creating pollen report: {0}")]
pub struct PollenReportError(pub String);
