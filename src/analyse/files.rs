use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use log::{info, trace};
use regex::Regex;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Dump {
    pub path: PathBuf,
    pub host: String,
    pub ext:  String,
}

struct Pattern {
    capture: Regex,
    exclude: Regex,
}

impl Dump {
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

pub fn dumps(root: &Path, test: &str) -> io::Result<Vec<Dump>> {
    let pattern = Pattern {
        capture: Regex::new(&format!(r"^{}_(.+?)(\.dmp(?:\.gz)?)$", regex::escape(test))).map_err(invalid)?,
        exclude: Regex::new(r"(router|ctl)\.dmp(\.gz)?$").map_err(invalid)?,
    };

    let mut dumps = Vec::new();
    walk(root, &pattern, &mut dumps)?;
    dumps.sort_by(|a, b| a.path.cmp(&b.path));

    info!("found {} captures for {} under {}", dumps.len(), test, root.display());

    Ok(dumps)
}

pub fn path(dir: &Path, test: &str, host: &str, ext: &str) -> PathBuf {
    dir.join(format!("{}_{}{}", test, host, ext))
}

fn walk(dir: &Path, pattern: &Pattern, dumps: &mut Vec<Dump>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path  = entry.path();

        if entry.file_type()?.is_dir() {
            walk(&path, pattern, dumps)?;
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if pattern.exclude.is_match(&name) {
            trace!("capture {} excluded", path.display());
            continue;
        }

        if let Some(m) = pattern.capture.captures(&name) {
            dumps.push(Dump {
                path: path.clone(),
                host: m[1].to_owned(),
                ext:  m[2].to_owned(),
            });
        }
    }
    Ok(())
}

fn invalid(e: regex::Error) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, e)
}
