use log::info;
use anyhow::Result;
use thiserror::Error;
use crate::initialization::Mgr;
use crate::report::build_report;

/// Runs one fetch, render and send cycle.
/// Any stage failure aborts the run, nothing is retried.
///
/// # Arguments
///
/// * 'mgr' - struct with configured managers
pub fn run(mgr: &Mgr) -> Result<(), WorkerError> {
    info!("reading pollen forecast from DWD");
    let forecast = mgr.dwd.fetch()
        .map_err(|e| WorkerError::FetchError(format!("error fetching forecast: {}", e)))?;

    info!("forecast last updated: {}", forecast.last_update);

    info!("creating html report");
    let report = build_report(&forecast)
        .map_err(|e| WorkerError::ReportError(format!("error building report: {}", e)))?;

    info!("sending email");
    mgr.mail.send_report(&report)
        .map_err(|e| WorkerError::SendError(format!("error sending report: {}", e)))?;

    info!("finished");

    Ok(())
}

/// Error depicting errors that occur while running the report cycle
///
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("error while fetching forecast: {0}")]
    FetchError(String),
    #[error("error while building report: {0}")]
    ReportError(String),
    #[error("error while sending report: {0}")]
    SendError(String),
}
