use anyhow::{anyhow, Result};
use log::{error, info};
use crate::analyse::{self, Config, Options};

pub fn extract(opts: Options) -> Result<()> {
    let cfg    = Config::new(opts)?;
    let report = analyse::run(&cfg)?;

    for series in &report.series {
        println!("{} {} {}", series.group, series.name, series.path.display());
    }

    for failure in &report.failed {
        error!("{}: {}", failure.name, failure.error);
    }

    info!("{} series extracted", report.series.len());

    match report.failed.len() {
        0 => Ok(()),
        n => Err(anyhow!("{} extractions failed", n)),
    }
}
