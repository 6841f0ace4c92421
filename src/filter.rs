use std::str::FromStr;
use crate::Error;

// Entries are `S_<addr>_<port>` or `D_<addr>_<port>`, `;` separated, with `*`
// matching any address or port.
#[derive(Debug, Default)]
pub struct SourceFilter {
    entries: Vec<Entry>,
}

#[derive(Debug)]
struct Entry {
    side: Side,
    addr: String,
    port: String,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Side {
    Src,
    Dst,
}

impl SourceFilter {
    pub fn is_in(&self, src: (&str, u16), dst: (&str, u16)) -> bool {
        self.entries.is_empty() || self.entries.iter().any(|e| {
            let (addr, port) = match e.side {
                Side::Src => src,
                Side::Dst => dst,
            };
            (e.addr == "*" || e.addr == addr) && (e.port == "*" || e.port == port.to_string())
        })
    }
}

impl FromStr for SourceFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let entries = s.split(';').map(str::trim).filter(|e| !e.is_empty()).map(|e| {
            let mut split = e.splitn(2, '_');
            let side = match split.next() {
                Some("S") => Side::Src,
                Some("D") => Side::Dst,
                _         => return Err(Error::config(format!("invalid source filter: {}", e))),
            };

            let rest = split.next().unwrap_or("");
            match rest.rfind('_') {
                Some(n) if n > 0 && n + 1 < rest.len() => Ok(Entry {
                    side: side,
                    addr: rest[..n].to_owned(),
                    port: rest[n + 1..].to_owned(),
                }),
                _ => Err(Error::config(format!("invalid source filter: {}", e))),
            }
        }).collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }
}
