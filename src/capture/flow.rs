use std::fmt;
use std::net::IpAddr;
use serde::{Serialize, Deserialize};

#[derive(Copy, Clone, Debug, Serialize, Deserialize, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Flow {
    pub src:      Addr,
    pub dst:      Addr,
    pub protocol: Protocol,
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Protocol {
    TCP,
    UDP,
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Addr {
    pub addr: IpAddr,
    pub port: u16,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Record {
    pub ts:   f64,
    pub hash: u32,
}

impl Flow {
    pub fn new(protocol: Protocol, src: Addr, dst: Addr) -> Self {
        Self { src, dst, protocol }
    }
}

impl Record {
    pub fn new(ts: f64, hash: u32) -> Self {
        Self { ts, hash }
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -> {} {}", self.src, self.dst, self.protocol)
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Protocol::TCP => f.write_str("tcp"),
            Protocol::UDP => f.write_str("udp"),
        }
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.addr, self.port)
    }
}
