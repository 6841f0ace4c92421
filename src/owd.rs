use anyhow::Result;
use clap::ArgMatches;
use crate::args::{flag, options};
use crate::correlate::Mode;
use crate::extract::extract;

pub fn owd(args: &ArgMatches) -> Result<()> {
    let mut opts = options(args, Mode::Owd)?;
    opts.anchor_map = args.value_of("anchor-map").unwrap_or("").to_owned();
    opts.midpoint   = flag(args, "midpoint");
    extract(opts)
}
