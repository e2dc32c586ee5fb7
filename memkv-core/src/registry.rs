use crate::config::Config;
use crate::db::DB;
use crate::memdb::MemDB;
use crate::{Error, Result};
use log::{info, warn};
use std::collections::HashMap;
use std::path::Path;

/// Name the in-memory backend is registered under.
pub const MEM_DB_BACKEND: &str = "memdb";

/// Builds a backend from a database name and a directory.
pub type Creator = fn(name: &str, dir: &Path) -> Result<Box<dyn DB>>;

fn create_mem_db(_name: &str, _dir: &Path) -> Result<Box<dyn DB>> {
    Ok(Box::new(MemDB::new()))
}

/// Maps backend names to their constructors.
///
/// `Registry::default()` knows about every backend this crate ships;
/// `Registry::new()` starts empty.
pub struct Registry {
    creators: HashMap<String, Creator>,
}

impl Default for Registry {
    fn default() -> Self {
        let mut this = Self::new();
        this.creators
            .insert(MEM_DB_BACKEND.to_owned(), create_mem_db as Creator);
        this
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            creators: HashMap::new(),
        }
    }

    /// Register `creator` under `backend`. An existing entry is only replaced
    /// when `force` is set.
    pub fn register(&mut self, backend: &str, creator: Creator, force: bool) -> Result<()> {
        if self.creators.contains_key(backend) {
            if !force {
                return Err(Error::BackendExists(backend.to_owned()));
            }
            warn!("replace creator of backend {backend}");
        } else {
            info!("register backend {backend}");
        }
        self.creators.insert(backend.to_owned(), creator);
        Ok(())
    }

    pub fn open(&self, backend: &str, name: &str, dir: impl AsRef<Path>) -> Result<Box<dyn DB>> {
        let creator = self
            .creators
            .get(backend)
            .ok_or_else(|| Error::UnknownBackend(backend.to_owned()))?;
        info!("open {backend} database {name} in {:?}", dir.as_ref());
        creator(name, dir.as_ref())
    }

    pub fn open_with_config(&self, config: &Config) -> Result<Box<dyn DB>> {
        self.open(config.backend(), config.name(), config.dir())
    }

    /// registered backend names, sorted
    pub fn backends(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.creators.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn create_prefilled(name: &str, _dir: &Path) -> Result<Box<dyn DB>> {
        let db = MemDB::new();
        db.set(b"name", name.as_bytes())?;
        Ok(Box::new(db))
    }

    #[test]
    fn registry_default_has_memdb() {
        let registry = Registry::default();
        assert_eq!(registry.backends(), vec![MEM_DB_BACKEND]);

        let db = registry.open(MEM_DB_BACKEND, "test", ".").unwrap();
        assert_eq!(db.get(b"a"), None);
        assert_eq!(
            db.stats().get("database.type").map(String::as_str),
            Some("memDB")
        );
    }

    #[test]
    fn registry_opens_independent_stores() {
        let registry = Registry::default();
        let db1 = registry.open(MEM_DB_BACKEND, "one", ".").unwrap();
        let db2 = registry.open(MEM_DB_BACKEND, "two", ".").unwrap();
        db1.set(b"a", b"1").unwrap();
        assert_eq!(db2.get(b"a"), None);
    }

    #[test]
    fn registry_unknown_backend() {
        let registry = Registry::new();
        assert!(registry.backends().is_empty());
        assert!(matches!(
            registry.open(MEM_DB_BACKEND, "test", "."),
            Err(Error::UnknownBackend(name)) if name == MEM_DB_BACKEND
        ));
    }

    #[test]
    fn registry_register_force() {
        let mut registry = Registry::default();
        assert!(matches!(
            registry.register(MEM_DB_BACKEND, create_prefilled, false),
            Err(Error::BackendExists(_))
        ));
        // the original creator survives a refused registration
        let db = registry.open(MEM_DB_BACKEND, "test", ".").unwrap();
        assert_eq!(db.get(b"name"), None);

        registry
            .register(MEM_DB_BACKEND, create_prefilled, true)
            .unwrap();
        let db = registry.open(MEM_DB_BACKEND, "test", ".").unwrap();
        assert_eq!(db.get(b"name"), Some(b"test".to_vec()));

        registry.register("prefilled", create_prefilled, false).unwrap();
        assert_eq!(registry.backends(), vec![MEM_DB_BACKEND, "prefilled"]);
    }

    #[test]
    fn registry_open_with_config() {
        let registry = Registry::default();
        let config = Config::from_slice(br#"{"name": "state"}"#).unwrap();
        let db = registry.open_with_config(&config).unwrap();
        db.set(b"k", b"v").unwrap();
        assert_eq!(db.get(b"k"), Some(b"v".to_vec()));

        let config = Config::from_slice(br#"{"backend": "leveldb", "name": "state"}"#).unwrap();
        assert!(matches!(
            registry.open_with_config(&config),
            Err(Error::UnknownBackend(_))
        ));
    }
}
