use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;
use crate::cache::{FlowCache, Memory, Store};
use crate::clock::{Clock, Offsets, Raw};
use crate::correlate::Mode;
use crate::filter::SourceFilter;
use crate::hosts::Hosts;
use crate::Error;

#[derive(Debug)]
pub struct Options {
    pub test_id:       String,
    pub dir:           PathBuf,
    pub out_dir:       Option<PathBuf>,
    pub mode:          Mode,
    pub ts_correct:    bool,
    pub offsets:       Option<PathBuf>,
    pub hosts:         Option<PathBuf>,
    pub window:        Option<usize>,
    pub anchor_map:    String,
    pub midpoint:      bool,
    pub replot_only:   bool,
    pub source_filter: String,
    pub min_values:    usize,
    pub workers:       Option<usize>,
    pub cache:         Option<PathBuf>,
}

pub struct Config {
    pub tests:      Vec<String>,
    pub dir:        PathBuf,
    pub out_dir:    Option<PathBuf>,
    pub mode:       Mode,
    pub window:     Option<usize>,
    pub anchors:    Anchors,
    pub midpoint:   bool,
    pub replot:     bool,
    pub filter:     SourceFilter,
    pub min_values: usize,
    pub workers:    usize,
    pub hosts:      Hosts,
    pub clock:      Box<dyn Clock>,
    pub cache:      Box<dyn FlowCache>,
}

#[derive(Debug, Default, Eq, PartialEq)]
pub struct Anchors {
    map: HashMap<String, String>,
}

pub fn mode(log_loss: &str) -> Result<Mode, Error> {
    match log_loss {
        "1" => Ok(Mode::Events),
        "2" => Ok(Mode::Cumulative),
        _   => Err(Error::config("log_loss must be 1 (loss events) or 2 (cumulative loss)")),
    }
}

impl Options {
    pub fn new(test_id: &str, mode: Mode) -> Self {
        Self {
            test_id:       test_id.to_owned(),
            dir:           PathBuf::from("."),
            out_dir:       None,
            mode:          mode,
            ts_correct:    true,
            offsets:       None,
            hosts:         None,
            window:        None,
            anchor_map:    String::new(),
            midpoint:      false,
            replot_only:   false,
            source_filter: String::new(),
            min_values:    0,
            workers:       None,
            cache:         None,
        }
    }
}

impl Config {
    pub fn new(opts: Options) -> Result<Self, Error> {
        let tests = opts.test_id.split(';').map(str::trim).filter(|t| {
            !t.is_empty()
        }).map(String::from).collect::<Vec<_>>();

        if tests.is_empty() {
            return Err(Error::config("must specify test_id"));
        }

        if opts.mode == Mode::Owd && !opts.ts_correct {
            return Err(Error::config("must use ts_correct=1 when calculating OWD"));
        }

        if opts.window == Some(0) {
            return Err(Error::config("window must be at least 1"));
        }

        if !opts.anchor_map.is_empty() && opts.replot_only {
            return Err(Error::config("must specify replot_only=0 in conjunction with anchor_map"));
        }

        let anchors = opts.anchor_map.parse::<Anchors>()?;
        let filter  = opts.source_filter.parse::<SourceFilter>()?;

        let clock: Box<dyn Clock> = match (opts.ts_correct, &opts.offsets) {
            (true, Some(path)) => Box::new(Offsets::load(path)?),
            (true, None)       => return Err(Error::config("ts_correct=1 requires clock offsets")),
            (false, _)         => Box::new(Raw),
        };

        let hosts = match &opts.hosts {
            Some(path) => Hosts::load(path)?,
            None       => Hosts::identity(),
        };

        let cache: Box<dyn FlowCache> = match &opts.cache {
            Some(path) => Box::new(Store::open(path).map_err(|e| {
                Error::config(format!("flow cache {}: {}", path.display(), e))
            })?),
            None => Box::new(Memory::new()),
        };

        let workers = opts.workers.unwrap_or_else(num_cpus::get).max(1);

        Ok(Self {
            tests:      tests,
            dir:        opts.dir,
            out_dir:    opts.out_dir,
            mode:       opts.mode,
            window:     opts.window,
            anchors:    anchors,
            midpoint:   opts.midpoint,
            replot:     opts.replot_only,
            filter:     filter,
            min_values: opts.min_values,
            workers:    workers,
            hosts:      hosts,
            clock:      clock,
            cache:      cache,
        })
    }
}

impl Anchors {
    pub fn anchored(&self, src: &str, dst: &str) -> bool {
        self.map.get(src).map(|d| d == dst).unwrap_or(false)
    }
}

impl FromStr for Anchors {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut map = HashMap::new();

        for entry in s.split(';').map(str::trim).filter(|e| !e.is_empty()) {
            let mut split = entry.splitn(2, ':');
            match (split.next(), split.next()) {
                (Some(src), Some(dst)) if !src.is_empty() && !dst.is_empty() => {
                    map.insert(src.to_owned(), dst.to_owned());
                }
                _ => return Err(Error::config(format!("invalid anchor_map entry: {}", entry))),
            }
        }

        Ok(Self { map })
    }
}
