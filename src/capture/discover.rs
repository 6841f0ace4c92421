use std::collections::BTreeSet;
use std::path::Path;
use log::debug;
use crate::Error;
use super::decode::key;
use super::flow::Flow;
use super::source::Source;

pub fn discover(path: &Path) -> Result<Vec<Flow>, Error> {
    let mut source = Source::open(path)?;
    let mut flows  = BTreeSet::new();

    while let Some(flow) = source.read(|_, frame| key(frame)) {
        flows.insert(flow?);
    }

    debug!("found {} flows in {}", flows.len(), path.display());

    Ok(flows.into_iter().collect())
}
