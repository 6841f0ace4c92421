use std::path::PathBuf;
use std::str::FromStr;
use anyhow::Result;
use clap::{ArgMatches, value_t};
use crate::analyse::Options;
use crate::correlate::Mode;

pub fn opt<T: FromStr>(arg: Option<&str>) -> Result<Option<T>> {
    Ok(arg.map(|s| T::from_str(s).map_err(|_| {
        let msg  = format!("invalid argument value '{}'", s);
        let kind = clap::ErrorKind::InvalidValue;
        clap::Error::with_description(&msg, kind)
    })).transpose()?)
}

pub fn flag(args: &ArgMatches, name: &str) -> bool {
    args.value_of(name) == Some("1")
}

// Options shared by every subcommand.
pub fn options(args: &ArgMatches, mode: Mode) -> Result<Options> {
    let test_id = value_t!(args, "test-id", String)?;

    let mut opts = Options::new(&test_id, mode);
    opts.dir           = value_t!(args, "dir", PathBuf)?;
    opts.out_dir       = args.value_of("out-dir").map(PathBuf::from);
    opts.hosts         = args.value_of("hosts").map(PathBuf::from);
    opts.offsets       = args.value_of("offsets").map(PathBuf::from);
    opts.ts_correct    = flag(args, "ts-correct");
    opts.window        = opt(args.value_of("window"))?;
    opts.source_filter = args.value_of("source-filter").unwrap_or("").to_owned();
    opts.replot_only   = flag(args, "replot-only");
    opts.min_values    = opt(args.value_of("min-values"))?.unwrap_or(0);
    opts.workers       = opt(args.value_of("workers"))?;
    opts.cache         = args.value_of("cache").map(PathBuf::from);

    Ok(opts)
}
