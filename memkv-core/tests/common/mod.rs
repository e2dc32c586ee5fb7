#![allow(dead_code)]

use memkv_core::{Entries, Result, DB};

pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn put(db: &dyn DB, key: impl AsRef<str>, value: i32) -> Result<()> {
    db.set(key.as_ref().as_bytes(), &value.to_le_bytes())
}

pub fn get(db: &dyn DB, key: impl AsRef<str>) -> Option<i32> {
    db.get(key.as_ref().as_bytes())
        .map(|val| i32::from_le_bytes(val.try_into().unwrap()))
}

pub fn del(db: &dyn DB, key: impl AsRef<str>) -> Result<()> {
    db.delete(key.as_ref().as_bytes())
}

pub fn update<F>(db: &dyn DB, key: impl AsRef<str>, f: F) -> Result<()>
where
    F: FnOnce(i32) -> i32,
{
    match get(db, key.as_ref()) {
        Some(res) => put(db, key.as_ref(), f(res)),
        None => Ok(()),
    }
}

/// every key an iterator visits, as strings
pub fn keys(entries: Entries) -> Vec<String> {
    entries
        .map(|(key, _)| String::from_utf8(key).unwrap())
        .collect()
}
