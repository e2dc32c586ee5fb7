use crate::Result;

/// One pending mutation of a [`Batch`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Operation {
    Set { key: Vec<u8>, value: Vec<u8> },
    Delete { key: Vec<u8> },
}

impl Operation {
    pub fn key(&self) -> &[u8] {
        match self {
            Operation::Set { key, .. } | Operation::Delete { key } => key,
        }
    }
}

/// An ordered group of mutations applied as one unit.
///
/// Nothing reaches the store until [`Batch::write`], which applies the
/// operations in the order they were added. There is no way to abort a batch;
/// drop it instead.
pub trait Batch: Send {
    fn set(&mut self, key: &[u8], value: &[u8]);

    fn delete(&mut self, key: &[u8]);

    /// Apply every pending operation. Readers observe either none or all of
    /// them.
    fn write(&mut self) -> Result<()>;

    /// Number of pending operations.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
