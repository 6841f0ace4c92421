pub mod extract;
pub mod loss;
pub mod owd;

pub mod analyse;
pub mod args;
pub mod cache;
pub mod capture;
pub mod clock;
pub mod correlate;
pub mod filter;
pub mod hosts;
pub mod packet;
pub mod series;

mod error;

pub use error::Error;
