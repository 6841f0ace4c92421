use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use log::debug;
use crate::Error;

pub trait Clock: Send + Sync {
    fn adjust(&self, ts: f64, host: &str) -> Result<f64, Error>;
}

// Seconds each vantage host's clock runs ahead of the reference host.
#[derive(Debug, Default)]
pub struct Offsets {
    map: HashMap<String, f64>,
}

#[derive(Debug)]
pub struct Raw;

impl Offsets {
    pub fn new(map: HashMap<String, f64>) -> Self {
        Self { map }
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        let text    = fs::read_to_string(path).map_err(|e| {
            Error::config(format!("offsets {}: {}", path.display(), e))
        })?;
        let offsets = text.parse::<Self>()?;
        debug!("loaded {} clock offsets from {}", offsets.map.len(), path.display());
        Ok(offsets)
    }
}

impl FromStr for Offsets {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut map = HashMap::new();

        for line in s.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut split = line.split_whitespace();
            let host   = split.next();
            let offset = split.next().map(f64::from_str);

            match (host, offset) {
                (Some(host), Some(Ok(offset))) => map.insert(host.to_owned(), offset),
                _ => return Err(Error::config(format!("invalid offset: {}", line))),
            };
        }

        Ok(Self { map })
    }
}

impl Clock for Offsets {
    fn adjust(&self, ts: f64, host: &str) -> Result<f64, Error> {
        match self.map.get(host) {
            Some(offset) => Ok(ts - offset),
            None         => Err(Error::Offset(host.to_owned())),
        }
    }
}

impl Clock for Raw {
    fn adjust(&self, ts: f64, _host: &str) -> Result<f64, Error> {
        Ok(ts)
    }
}
