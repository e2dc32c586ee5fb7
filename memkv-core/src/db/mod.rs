use crate::batch::Batch;
use crate::iterator::DBIterator;
use crate::Result;
use std::collections::BTreeMap;
use std::io::Write;


/// Descriptive key/value pairs a backend reports about itself.
pub type Stats = BTreeMap<String, String>;

/// The contract every storage backend implements.
///
/// Keys are compared as raw bytes, so every backend agrees on iteration
/// order. Engines that distinguish durability levels honour the `*_sync`
/// variants; the others may treat them like their plain counterparts.
pub trait DB: Send + Sync {
    /// Returns the stored value, or `None` if the key is unset.
    fn get(&self, key: &[u8]) -> Option<Vec<u8>>;

    fn set(&self, key: &[u8], value: &[u8]) -> Result<()>;

    /// Like [`DB::set`], but durable before returning.
    fn set_sync(&self, key: &[u8], value: &[u8]) -> Result<()>;

    /// Removes `key`. Deleting a missing key is not an error.
    fn delete(&self, key: &[u8]) -> Result<()>;

    /// Like [`DB::delete`], but durable before returning.
    fn delete_sync(&self, key: &[u8]) -> Result<()>;

    fn close(&self);

    /// Writes every key/value pair to `out` in a human readable form.
    fn print(&self, out: &mut dyn Write) -> Result<()>;

    fn stats(&self) -> Stats;

    fn new_batch(&self) -> Box<dyn Batch>;

    /// Forward iterator over the whole key space.
    fn iterator(&self) -> Box<dyn DBIterator>;

    /// Forward iterator over the keys starting with `prefix`.
    fn iterator_prefix(&self, prefix: &[u8]) -> Box<dyn DBIterator>;

    /// Iterator over the keys `>= start`, descending when `reverse` is set.
    ///
    /// A non-empty `start` leaves the returned iterator already positioned
    /// on its first key.
    fn iterator_prefix_with_start(
        &self,
        prefix: &[u8],
        start: &[u8],
        reverse: bool,
    ) -> Box<dyn DBIterator>;
}
