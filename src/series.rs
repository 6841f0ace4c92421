use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use crate::correlate::{Mode, Output};

pub struct Series<W: Write> {
    out:   W,
    count: usize,
}

pub enum Writer {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

pub fn path(dir: &Path, test: &str, name: &str, mode: Mode) -> PathBuf {
    dir.join(format!("{}_{}{}", test, name, mode.extension()))
}

// Records in an existing series file.
pub fn count(path: &Path) -> io::Result<usize> {
    let file = File::open(path)?;
    let read: Box<dyn Read> = match path.extension() {
        Some(ext) if ext == "gz" => Box::new(GzDecoder::new(file)),
        _                        => Box::new(file),
    };

    let mut count = 0;
    for line in BufReader::new(read).lines() {
        if !line?.trim().is_empty() {
            count += 1;
        }
    }
    Ok(count)
}

impl Series<Writer> {
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = BufWriter::new(File::create(path)?);
        let out  = match path.extension() {
            Some(ext) if ext == "gz" => Writer::Gzip(GzEncoder::new(file, Compression::default())),
            _                        => Writer::Plain(file),
        };
        Ok(Self::new(out))
    }

    pub fn close(self) -> io::Result<usize> {
        let count = self.count;
        match self.out {
            Writer::Plain(mut w) => w.flush()?,
            Writer::Gzip(w)      => w.finish()?.flush()?,
        }
        Ok(count)
    }
}

impl<W: Write> Series<W> {
    pub fn new(out: W) -> Self {
        Self { out, count: 0 }
    }

    pub fn append(&mut self, rec: &Output) -> io::Result<()> {
        writeln!(self.out, "{}", rec)?;
        self.count += 1;
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Write for Writer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Writer::Plain(w) => w.write(buf),
            Writer::Gzip(w)  => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Writer::Plain(w) => w.flush(),
            Writer::Gzip(w)  => w.flush(),
        }
    }
}
