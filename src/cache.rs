use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use log::{debug, trace};
use parking_lot::{Mutex, RwLock};
use crate::capture::{discover, Flow};
use crate::Error;

pub type Flows = Arc<Vec<Flow>>;

pub trait FlowCache: Send + Sync {
    fn lookup(&self, key: &Path) -> Option<Flows>;
    fn insert(&self, key: &Path, flows: Flows) -> Result<(), Error>;
}

#[derive(Debug, Default)]
pub struct Memory {
    map: RwLock<HashMap<PathBuf, Flows>>,
}

// Memory cache mirrored to a JSON file so later runs skip discovery.
#[derive(Debug)]
pub struct Store {
    mem:   Memory,
    path:  PathBuf,
    write: Mutex<()>,
}

pub fn flows(cache: &dyn FlowCache, path: &Path) -> Result<Flows, Error> {
    if let Some(flows) = cache.lookup(path) {
        trace!("flow cache hit for {}", path.display());
        return Ok(flows);
    }

    let flows = Arc::new(discover(path)?);
    cache.insert(path, flows.clone())?;

    Ok(flows)
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.map.read().len()
    }
}

impl FlowCache for Memory {
    fn lookup(&self, key: &Path) -> Option<Flows> {
        self.map.read().get(key).cloned()
    }

    fn insert(&self, key: &Path, flows: Flows) -> Result<(), Error> {
        self.map.write().entry(key.to_path_buf()).or_insert(flows);
        Ok(())
    }
}

impl Store {
    pub fn open(path: &Path) -> Result<Self, Error> {
        let map: HashMap<PathBuf, Flows> = match fs::read(path) {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(_)    => HashMap::new(),
        };

        debug!("flow cache {} holds {} captures", path.display(), map.len());

        Ok(Self {
            mem:   Memory { map: RwLock::new(map) },
            path:  path.to_path_buf(),
            write: Mutex::new(()),
        })
    }

    fn save(&self) -> Result<(), Error> {
        let _guard = self.write.lock();
        let json   = serde_json::to_vec(&*self.mem.map.read())?;
        let tmp    = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl FlowCache for Store {
    fn lookup(&self, key: &Path) -> Option<Flows> {
        self.mem.lookup(key)
    }

    fn insert(&self, key: &Path, flows: Flows) -> Result<(), Error> {
        self.mem.insert(key, flows)?;
        self.save()
    }
}
