use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use flate2::read::GzDecoder;
use log::trace;
use pcap::{Capture, Offline};
use tempfile::NamedTempFile;
use crate::Error;
use pcap::Error::*;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

pub struct Source {
    path: PathBuf,
    cap:  Capture<Offline>,
    done: bool,
    _tmp: Option<NamedTempFile>,
}

impl Source {
    pub fn open(path: &Path) -> Result<Self, Error> {
        let tmp = inflate(path).map_err(|e| Error::capture(path, e))?;

        let cap = match &tmp {
            Some(tmp) => Capture::from_file(tmp.path()),
            None      => Capture::from_file(path),
        }.map_err(|e| Error::capture(path, e))?;

        if cap.get_datalink().0 != 1 {
            return Err(Error::capture(path, "not ethernet"));
        }

        Ok(Self {
            path: path.to_path_buf(),
            cap:  cap,
            done: false,
            _tmp: tmp,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // Frames `f` rejects are skipped; only a read failure ends the scan early.
    pub fn read<T, F>(&mut self, mut f: F) -> Option<Result<T, Error>>
        where F: FnMut(f64, &[u8]) -> Option<T>
    {
        while !self.done {
            match self.cap.next() {
                Ok(pkt) => {
                    let ts = pkt.header.ts.tv_sec as f64 + pkt.header.ts.tv_usec as f64 / 1e6;
                    if let Some(value) = f(ts, pkt.data) {
                        return Some(Ok(value));
                    }
                }
                Err(NoMorePackets) => {
                    trace!("{} finished", self.path.display());
                    self.done = true;
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(Error::capture(&self.path, e)));
                }
            }
        }
        None
    }
}

fn inflate(path: &Path) -> io::Result<Option<NamedTempFile>> {
    let mut file  = File::open(path)?;
    let mut magic = Vec::with_capacity(2);
    file.by_ref().take(2).read_to_end(&mut magic)?;

    if magic != GZIP_MAGIC {
        return Ok(None);
    }

    file.seek(SeekFrom::Start(0))?;

    let mut tmp = NamedTempFile::new()?;
    let mut gz  = GzDecoder::new(BufReader::new(file));
    let bytes   = io::copy(&mut gz, &mut tmp)?;
    trace!("inflated {} to {} bytes", path.display(), bytes);

    Ok(Some(tmp))
}
