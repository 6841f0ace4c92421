pub mod decode;
pub mod flow;

pub use decode::{fingerprint, key};
pub use discover::discover;
pub use fingerprint::Fingerprints;
pub use flow::{Addr, Flow, Protocol, Record};
pub use source::Source;

mod discover;
mod fingerprint;
mod source;

#[cfg(test)]
mod test;

#[cfg(test)]
pub mod fixture;
