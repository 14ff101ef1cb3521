use anyhow::Result;
use log::error;
use crate::errors::PollenReportError;
use crate::initialization::init;
use crate::worker::run;

mod config;
mod errors;
mod initialization;
mod logging;
mod manager_dwd;
mod manager_mail;
mod report;
mod worker;

fn main() -> Result<()> {
    // Load config and set up the DWD client and mail transport. If initialization fails,
    // we are pretty much out of luck and can't even log properly yet.
    let mgr = match init() {
        Ok(m) => m,
        Err(e) => {
            return Err(PollenReportError(format!("Initialization failed: {}", e)))?;
        }
    };

    // Fetch, render and send todays pollen report
    if let Err(e) = run(&mgr) {
        error!("Run failed: {}", e);
        return Err(PollenReportError(format!("Run failed: {}", e)))?;
    }

    Ok(())
}
