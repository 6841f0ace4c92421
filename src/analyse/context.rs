use std::collections::HashSet;
use parking_lot::Mutex;

// Per-run record of which flows have been taken by a task.
#[derive(Debug, Default)]
pub struct Context {
    done: Mutex<HashSet<String>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claim(&self, name: &str) -> bool {
        self.done.lock().insert(name.to_owned())
    }

    pub fn len(&self) -> usize {
        self.done.lock().len()
    }
}
