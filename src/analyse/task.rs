use std::fs;
use std::path::PathBuf;
use log::{debug, warn};
use crate::capture::{Fingerprints, Flow, Record};
use crate::correlate::{Cursor, Metric};
use crate::hosts::Host;
use crate::series::{self, Series};
use crate::Error;
use super::{Config, Context};

#[derive(Clone, Debug)]
pub struct Job {
    pub test:    String,
    pub group:   usize,
    pub name:    String,
    pub flow:    Flow,
    pub src:     Host,
    pub dst:     Host,
    pub src_cap: PathBuf,
    pub dst_cap: PathBuf,
    pub out:     PathBuf,
    pub select:  bool,
}

#[derive(Debug)]
pub enum Status {
    Done(usize),
    Skipped,
    Failed(Error),
}

pub fn run(job: &Job, cfg: &Config, ctx: &Context) -> Status {
    if !ctx.claim(&job.name) {
        return Status::Skipped;
    }

    if cfg.replot && job.out.is_file() {
        debug!("{} already extracted", job.name);
        return match series::count(&job.out) {
            Ok(n)  => Status::Done(n),
            Err(e) => Status::Failed(e.into()),
        };
    }

    debug!("extracting {} from {} and {}", job.name, job.src_cap.display(), job.dst_cap.display());

    match extract(job, cfg) {
        Ok(n)  => Status::Done(n),
        Err(e) => {
            let _ = fs::remove_file(&job.out);
            Status::Failed(e)
        }
    }
}

fn extract(job: &Job, cfg: &Config) -> Result<usize, Error> {
    let clock  = &*cfg.clock;
    let adjust = |rec: Result<Record, Error>, host: &Host| -> Result<Record, Error> {
        let rec = rec?;
        Ok(Record::new(clock.adjust(rec.ts, &host.name)?, rec.hash))
    };

    let dst = Fingerprints::open(&job.dst_cap, job.flow)?.map(|rec| {
        adjust(rec, &job.dst)
    }).collect::<Result<Vec<_>, Error>>()?;

    let src = Fingerprints::open(&job.src_cap, job.flow)?;

    let anchor     = cfg.anchors.anchored(&job.src.internal, &job.dst.internal);
    let mut metric = Metric::new(cfg.mode, anchor, cfg.midpoint);
    let mut cursor = Cursor::new(&dst, cfg.window);
    let mut series = Series::create(&job.out)?;
    let mut seen   = 0;

    for rec in src {
        let rec     = adjust(rec, &job.src)?;
        let outcome = cursor.step(&rec);
        if let Some(out) = metric.apply(&rec, outcome, &dst) {
            series.append(&out)?;
        }
        seen += 1;
    }

    let count = series.close()?;

    if metric.negative() > 0 {
        warn!("{}: {} negative delays, check clock offsets", job.name, metric.negative());
    }

    debug!("{}: {} packets at source, {} at destination, {} lost",
           job.name, seen, dst.len(), metric.lost());

    Ok(count)
}
