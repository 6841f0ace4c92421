use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, PartialEq)]
pub enum Error {
    Config(String),
    Capture(PathBuf, String),
    Offset(String),
    Io(String),
}

impl Error {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    pub fn capture<E: fmt::Display>(path: &Path, err: E) -> Self {
        Error::Capture(path.to_path_buf(), err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Error::Config(msg)        => write!(f, "invalid configuration: {}", msg),
            Error::Capture(path, msg) => write!(f, "capture {}: {}", path.display(), msg),
            Error::Offset(host)       => write!(f, "no clock offset for {}", host),
            Error::Io(msg)            => write!(f, "io error: {}", msg),
        }
    }
}
