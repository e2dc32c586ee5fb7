use super::MemDBInner;
use crate::iterator::DBIterator;
use crate::Result;
use log::trace;
use std::sync::Arc;

/// Read-only access to a store's current values.
pub(crate) struct LiveReader {
    inner: Arc<MemDBInner>,
}

impl LiveReader {
    pub(crate) fn new(inner: Arc<MemDBInner>) -> Self {
        Self { inner }
    }

    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.inner.get(key)
    }
}

/// Keys captured when the iterator was built, in iteration order, plus the
/// cursor into them. `cursor == None` means before the first key.
struct KeySnapshot {
    keys: Vec<Vec<u8>>,
    cursor: Option<usize>,
    reverse: bool,
}

impl KeySnapshot {
    fn next(&mut self) -> bool {
        let next = self.cursor.map_or(0, |idx| idx + 1);
        if next >= self.keys.len() {
            return false;
        }
        self.cursor = Some(next);
        true
    }

    fn current(&self) -> Option<&[u8]> {
        self.cursor
            .and_then(|idx| self.keys.get(idx))
            .map(Vec::as_slice)
    }

    /// index of the first key `>= target`, walking `keys` front to back
    fn find(&self, target: &[u8]) -> Option<usize> {
        if self.reverse {
            // descending: only the head can satisfy it, if anything does
            self.keys
                .iter()
                .position(|key| key.as_slice() >= target)
        } else {
            let idx = self.keys.partition_point(|key| key.as_slice() < target);
            (idx < self.keys.len()).then_some(idx)
        }
    }

    fn seek(&mut self, target: &[u8]) -> bool {
        match self.find(target) {
            Some(idx) => {
                self.cursor = Some(idx);
                true
            }
            None => false,
        }
    }

    fn clear(&mut self) {
        self.keys = Vec::new();
        self.cursor = None;
    }
}

/// Iterator over a [`super::MemDB`] key snapshot.
///
/// The key set is fixed at construction: keys inserted later never show up,
/// keys removed later are still visited. Values are looked up in the store
/// on every [`DBIterator::value`] call, so they reflect the latest writes.
pub struct MemDBIterator {
    snapshot: KeySnapshot,
    reader: Option<LiveReader>,
}

impl MemDBIterator {
    /// `keys` must already be in iteration order (descending if `reverse`).
    /// A non-empty `start` seeks to it straight away.
    pub(crate) fn new(
        reader: LiveReader,
        keys: Vec<Vec<u8>>,
        reverse: bool,
        start: &[u8],
    ) -> Self {
        trace!("new memdb iterator over {} keys, reverse: {reverse}", keys.len());
        let mut this = Self {
            snapshot: KeySnapshot {
                keys,
                cursor: None,
                reverse,
            },
            reader: Some(reader),
        };
        if !start.is_empty() {
            this.snapshot.seek(start);
        }
        this
    }
}

impl DBIterator for MemDBIterator {
    fn next(&mut self) -> bool {
        self.snapshot.next()
    }

    fn valid(&self) -> bool {
        self.snapshot.current().is_some()
    }

    fn key(&self) -> &[u8] {
        match self.snapshot.current() {
            Some(key) => key,
            None => panic!("memdb iterator is not positioned on a key"),
        }
    }

    fn value(&self) -> Option<Vec<u8>> {
        let key = self.snapshot.current()?;
        self.reader.as_ref()?.get(key)
    }

    fn seek(&mut self, target: &[u8]) -> bool {
        self.snapshot.seek(target)
    }

    fn release(&mut self) {
        if self.reader.take().is_some() {
            trace!("release memdb iterator");
        }
        self.snapshot.clear();
    }

    fn error(&self) -> Result<()> {
        Ok(())
    }
}
