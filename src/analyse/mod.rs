pub use config::{mode, Anchors, Config, Options};
pub use context::Context;
pub use run::{run, Extracted, Failure, Report};

pub mod files;

mod config;
mod context;
mod pool;
mod run;
mod task;
