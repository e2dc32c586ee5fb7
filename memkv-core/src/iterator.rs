use crate::Result;

/// A directional cursor over a point-in-time set of keys.
///
/// A fresh iterator sits before its first key unless it was built with a
/// start bound, in which case it is already positioned. `next` and `seek`
/// report failure by returning false; callers treat that as end of
/// iteration, not as an error.
pub trait DBIterator: Send {
    /// Advance by one key. Returns false, without moving, once the cursor
    /// is on the last key.
    fn next(&mut self) -> bool;

    /// Whether the cursor is on a key.
    fn valid(&self) -> bool;

    /// Key under the cursor.
    ///
    /// # Panics
    /// If the cursor is not positioned on a key.
    fn key(&self) -> &[u8];

    /// Value currently stored for the key under the cursor.
    fn value(&self) -> Option<Vec<u8>>;

    /// Move to the first key `>= target` in iteration order. On failure the
    /// cursor stays where it was.
    fn seek(&mut self, target: &[u8]) -> bool;

    /// Detach from the store and drop the captured keys. Calling it again is
    /// harmless.
    fn release(&mut self);

    fn error(&self) -> Result<()>;
}

/// Drives a [`DBIterator`] as a std iterator of `(key, value)` pairs.
///
/// The value is `None` when the key was removed after the iterator
/// captured it.
pub struct Entries {
    iter: Box<dyn DBIterator>,
    started: bool,
}

impl Entries {
    pub fn new(iter: Box<dyn DBIterator>) -> Self {
        Self {
            iter,
            started: false,
        }
    }

    pub fn into_inner(self) -> Box<dyn DBIterator> {
        self.iter
    }
}

impl From<Box<dyn DBIterator>> for Entries {
    fn from(iter: Box<dyn DBIterator>) -> Self {
        Self::new(iter)
    }
}

impl std::iter::Iterator for Entries {
    type Item = (Vec<u8>, Option<Vec<u8>>);

    fn next(&mut self) -> Option<Self::Item> {
        let positioned = if self.started {
            self.iter.next()
        } else {
            // an iterator built with a start bound is already on its first key
            self.started = true;
            self.iter.valid() || self.iter.next()
        };
        if !positioned {
            return None;
        }
        Some((self.iter.key().to_vec(), self.iter.value()))
    }
}
