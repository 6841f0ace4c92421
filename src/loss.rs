use anyhow::Result;
use clap::{ArgMatches, value_t};
use crate::analyse::mode;
use crate::args::options;
use crate::extract::extract;

pub fn loss(args: &ArgMatches) -> Result<()> {
    let log_loss = value_t!(args, "log-loss", String)?;
    extract(options(args, mode(&log_loss)?)?)
}
