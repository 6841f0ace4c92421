use std::path::PathBuf;
use anyhow::Result;
use log::{debug, info, trace, warn};
use crate::cache::{self, Flows};
use crate::series;
use crate::Error;
use super::{Config, Context};
use super::files::{self, Dump};
use super::pool::pool;
use super::task::{self, Job, Status};

#[derive(Debug, Default)]
pub struct Report {
    pub series: Vec<Extracted>,
    pub failed: Vec<Failure>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Extracted {
    pub group: usize,
    pub name:  String,
    pub path:  PathBuf,
    pub count: usize,
}

#[derive(Debug)]
pub struct Failure {
    pub name:  String,
    pub error: Error,
}

pub fn run(cfg: &Config) -> Result<Report> {
    let ctx = Context::new();

    let mut dumps = Vec::new();
    for (index, test) in cfg.tests.iter().enumerate() {
        let found = files::dumps(&cfg.dir, test)?;
        if found.is_empty() {
            warn!("no captures for {}", test);
        }
        dumps.extend(found.into_iter().map(|dump| (index + 1, test.as_str(), dump)));
    }

    let found = pool(cfg.workers, dumps, |(group, test, dump)| {
        let flows = cache::flows(&*cfg.cache, &dump.path);
        (group, test, dump, flows)
    });

    let mut report = Report::default();
    let mut jobs   = Vec::new();

    for (group, test, dump, flows) in found {
        match flows {
            Ok(flows) => jobs.extend(plan(cfg, group, test, &dump, &flows)),
            Err(e)    => {
                warn!("capture {} failed: {}", dump.path.display(), e);
                report.failed.push(Failure {
                    name:  dump.path.display().to_string(),
                    error: e,
                });
            }
        }
    }

    debug!("planned {} flow extractions", jobs.len());

    let status = pool(cfg.workers, jobs, |job| {
        let status = task::run(&job, cfg, &ctx);
        (job, status)
    });

    for (job, status) in status {
        match status {
            Status::Done(count) if job.select && count >= cfg.min_values => {
                report.series.push(Extracted {
                    group: job.group,
                    name:  job.name,
                    path:  job.out,
                    count: count,
                });
            }
            Status::Done(count) => trace!("{} not selected ({} records)", job.name, count),
            Status::Skipped     => (),
            Status::Failed(e)   => {
                warn!("flow {} failed: {}", job.name, e);
                report.failed.push(Failure { name: job.name, error: e });
            }
        }
    }

    report.series.sort_by(|a, b| (a.group, &a.name).cmp(&(b.group, &b.name)));

    info!("extracted {} flows, {} selected, {} failed",
          ctx.len(), report.series.len(), report.failed.len());

    Ok(report)
}

fn plan(cfg: &Config, group: usize, test: &str, dump: &Dump, flows: &Flows) -> Vec<Job> {
    let dir     = dump.dir();
    let out_dir = cfg.out_dir.as_deref().unwrap_or(dir);

    flows.iter().filter_map(|flow| {
        let (src, dst) = match (cfg.hosts.get(&flow.src.addr), cfg.hosts.get(&flow.dst.addr)) {
            (Some(src), Some(dst)) => (src, dst),
            _                      => {
                trace!("{} in {} has no vantage host", flow, dump.host);
                return None;
            }
        };

        let name = format!("{}_{}_{}_{}", src.internal, flow.src.port, dst.internal, flow.dst.port);
        let long = match cfg.tests.len() {
            1 => name.clone(),
            _ => format!("{}_{}", test, name),
        };

        let select = cfg.filter.is_in((&src.internal, flow.src.port), (&dst.internal, flow.dst.port));

        Some(Job {
            test:    test.to_owned(),
            group:   group,
            src_cap: files::path(dir, test, &src.name, &dump.ext),
            dst_cap: files::path(dir, test, &dst.name, &dump.ext),
            out:     series::path(out_dir, test, &name, cfg.mode),
            name:    long,
            flow:    *flow,
            src:     src,
            dst:     dst,
            select:  select,
        })
    }).collect()
}
