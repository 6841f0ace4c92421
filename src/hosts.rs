use std::collections::HashMap;
use std::fs;
use std::net::IpAddr;
use std::path::Path;
use std::str::FromStr;
use log::debug;
use crate::Error;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Host {
    pub name:     String,
    pub internal: String,
}

// Maps experiment network addresses to the vantage host whose capture holds
// them. Without a map every address is its own host.
#[derive(Debug, Default)]
pub struct Hosts {
    map: Option<HashMap<IpAddr, Host>>,
}

impl Hosts {
    pub fn identity() -> Self {
        Self { map: None }
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        let text  = fs::read_to_string(path).map_err(|e| {
            Error::config(format!("hosts {}: {}", path.display(), e))
        })?;
        let hosts = text.parse::<Self>()?;
        debug!("loaded {} hosts from {}", hosts.len(), path.display());
        Ok(hosts)
    }

    pub fn get(&self, addr: &IpAddr) -> Option<Host> {
        match &self.map {
            Some(map) => map.get(addr).cloned(),
            None      => Some(Host {
                name:     addr.to_string(),
                internal: addr.to_string(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.map.as_ref().map(HashMap::len).unwrap_or(0)
    }
}

impl FromStr for Hosts {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut map = HashMap::new();

        for line in s.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields = line.split_whitespace().collect::<Vec<_>>();
            let (addr, name, internal) = match fields[..] {
                [addr, name]           => (addr, name, addr),
                [addr, name, internal] => (addr, name, internal),
                _ => return Err(Error::config(format!("invalid host: {}", line))),
            };

            let addr = addr.parse::<IpAddr>().map_err(|e| {
                Error::config(format!("invalid host address {}: {}", addr, e))
            })?;

            map.insert(addr, Host {
                name:     name.to_owned(),
                internal: internal.to_owned(),
            });
        }

        Ok(Self { map: Some(map) })
    }
}

#[cfg(test)]
mod test {
    use std::net::IpAddr;
    use crate::Error;
    use super::{Host, Hosts};

    fn addr(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    #[test]
    fn parse() {
        let hosts = "172.16.10.2 testhost1\n# comment\n172.16.11.2 testhost2 server\n".parse::<Hosts>().unwrap();

        assert_eq!(2, hosts.len());
        assert_eq!(Some(Host { name: "testhost1".into(), internal: "172.16.10.2".into() }), hosts.get(&addr("172.16.10.2")));
        assert_eq!(Some(Host { name: "testhost2".into(), internal: "server".into() }), hosts.get(&addr("172.16.11.2")));
        assert_eq!(None, hosts.get(&addr("172.16.12.2")));
    }

    #[test]
    fn identity() {
        let host = Hosts::identity().get(&addr("10.0.0.1")).unwrap();
        assert_eq!("10.0.0.1", host.name);
        assert_eq!("10.0.0.1", host.internal);
    }

    #[test]
    fn invalid() {
        assert!(matches!("172.16.10.2".parse::<Hosts>(), Err(Error::Config(_))));
        assert!(matches!("nohost name".parse::<Hosts>(), Err(Error::Config(_))));
    }
}
