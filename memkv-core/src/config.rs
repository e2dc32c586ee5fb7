use crate::registry::MEM_DB_BACKEND;
use crate::Result;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Which backend to open, and with what name and directory.
///
/// ```json
/// { "backend": "memdb", "name": "state", "dir": "./data" }
/// ```
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_backend")]
    pub backend: String,
    pub name: String,
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
}

fn default_backend() -> String {
    MEM_DB_BACKEND.to_owned()
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Config {
    pub fn from_slice(buf: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(buf)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let f = File::open(path)?;
        Self::from_reader(f)
    }

    #[inline]
    pub fn backend(&self) -> &str {
        &self.backend
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
