use std::path::Path;
use crate::Error;
use super::decode::fingerprint;
use super::flow::{Flow, Record};
use super::source::Source;

pub struct Fingerprints {
    source: Source,
    flow:   Flow,
}

impl Fingerprints {
    pub fn open(path: &Path, flow: Flow) -> Result<Self, Error> {
        let source = Source::open(path)?;
        Ok(Self { source, flow })
    }

    pub fn path(&self) -> &Path {
        self.source.path()
    }
}

impl Iterator for Fingerprints {
    type Item = Result<Record, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let flow = self.flow;
        self.source.read(|ts, frame| {
            fingerprint(&flow, frame).map(|hash| Record::new(ts, hash))
        })
    }
}
