use crate::batch::Batch;
use crate::db::{Stats, DB};
use crate::iterator::DBIterator;
use crate::Result;
use log::debug;
use std::collections::BTreeMap;
use std::io::Write;
use std::ops::Bound::{Included, Unbounded};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

mod batch;
mod iterator;

pub use batch::MemDBBatch;
pub use iterator::MemDBIterator;
use iterator::LiveReader;

pub(crate) type Table = BTreeMap<Vec<u8>, Vec<u8>>;

/// value reported under `database.type` by [`MemDB::stats`]
pub const MEM_DB_TYPE: &str = "memDB";

/// An ordered key-value store that lives only as long as the process.
///
/// Cloning a `MemDB` yields another handle to the same store. Every
/// operation, including building an iterator's key snapshot, runs under a
/// single mutex.
#[derive(Clone, Default)]
pub struct MemDB {
    inner: Arc<MemDBInner>,
}

#[derive(Default)]
pub(crate) struct MemDBInner {
    table: Mutex<Table>,
}

impl MemDBInner {
    /// No critical section can leave the table half-updated, so a poisoned
    /// lock is still safe to use.
    pub(crate) fn lock(&self) -> MutexGuard<'_, Table> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.lock().get(key).cloned()
    }
}

impl MemDB {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    fn put(&self, key: &[u8], value: &[u8]) {
        self.inner.lock().insert(key.to_vec(), value.to_vec());
    }

    fn remove(&self, key: &[u8]) {
        self.inner.lock().remove(key);
    }

    /// sorted keys sharing `prefix`
    fn keys_with_prefix(&self, prefix: &[u8]) -> Vec<Vec<u8>> {
        let table = self.inner.lock();
        table
            .range::<[u8], _>((Included(prefix), Unbounded))
            .map(|(key, _)| key)
            .take_while(|key| key.starts_with(prefix))
            .cloned()
            .collect()
    }

    /// sorted keys `>= start`, descending if `reverse`
    fn keys_from(&self, start: &[u8], reverse: bool) -> Vec<Vec<u8>> {
        let table = self.inner.lock();
        let mut keys: Vec<Vec<u8>> = table
            .range::<[u8], _>((Included(start), Unbounded))
            .map(|(key, _)| key.clone())
            .collect();
        if reverse {
            keys.reverse();
        }
        keys
    }

    fn reader(&self) -> LiveReader {
        LiveReader::new(Arc::clone(&self.inner))
    }
}

impl DB for MemDB {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.inner.get(key)
    }

    fn set(&self, key: &[u8], value: &[u8]) -> Result<()> {
        self.put(key, value);
        Ok(())
    }

    fn set_sync(&self, key: &[u8], value: &[u8]) -> Result<()> {
        // nothing to make durable
        self.put(key, value);
        Ok(())
    }

    fn delete(&self, key: &[u8]) -> Result<()> {
        self.remove(key);
        Ok(())
    }

    fn delete_sync(&self, key: &[u8]) -> Result<()> {
        self.remove(key);
        Ok(())
    }

    /// Does nothing: there is nowhere to flush the contents to, and dropping
    /// them here would lose data other handles still expect to see.
    fn close(&self) {
        debug!("close memdb with {} keys (no-op)", self.len());
    }

    /// One line per pair, `[KEY]:\t[VALUE]` in upper-case hex, ascending by key.
    fn print(&self, out: &mut dyn Write) -> Result<()> {
        let table = self.inner.lock();
        for (key, value) in table.iter() {
            writeln!(
                out,
                "[{}]:\t[{}]",
                hex::encode_upper(key),
                hex::encode_upper(value)
            )?;
        }
        Ok(())
    }

    fn stats(&self) -> Stats {
        let mut stats = Stats::new();
        stats.insert("database.type".to_owned(), MEM_DB_TYPE.to_owned());
        stats
    }

    fn new_batch(&self) -> Box<dyn Batch> {
        Box::new(MemDBBatch::new(Arc::clone(&self.inner)))
    }

    fn iterator(&self) -> Box<dyn DBIterator> {
        self.iterator_prefix(&[])
    }

    fn iterator_prefix(&self, prefix: &[u8]) -> Box<dyn DBIterator> {
        let keys = self.keys_with_prefix(prefix);
        Box::new(MemDBIterator::new(self.reader(), keys, false, &[]))
    }

    /// `prefix` does not narrow the key set; only `start` does.
    fn iterator_prefix_with_start(
        &self,
        _prefix: &[u8],
        start: &[u8],
        reverse: bool,
    ) -> Box<dyn DBIterator> {
        let keys = self.keys_from(start, reverse);
        Box::new(MemDBIterator::new(self.reader(), keys, reverse, start))
    }
}
