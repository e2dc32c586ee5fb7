use super::{MemDBInner, Table};
use crate::batch::{Batch, Operation};
use crate::Result;
use log::debug;
use std::sync::Arc;

impl Operation {
    fn apply(&self, table: &mut Table) {
        match self {
            Operation::Set { key, value } => {
                table.insert(key.clone(), value.clone());
            }
            Operation::Delete { key } => {
                table.remove(key.as_slice());
            }
        }
    }
}

/// Pending operations for a [`super::MemDB`].
///
/// `write` takes the store lock once and holds it while every operation is
/// applied, so no other reader or writer can run in between.
pub struct MemDBBatch {
    inner: Arc<MemDBInner>,
    ops: Vec<Operation>,
}

impl MemDBBatch {
    pub(crate) fn new(inner: Arc<MemDBInner>) -> Self {
        Self { inner, ops: vec![] }
    }

    /// pending operations, in the order they will be applied
    pub fn operations(&self) -> &[Operation] {
        &self.ops
    }
}

impl Batch for MemDBBatch {
    fn set(&mut self, key: &[u8], value: &[u8]) {
        self.ops.push(Operation::Set {
            key: key.to_vec(),
            value: value.to_vec(),
        });
    }

    fn delete(&mut self, key: &[u8]) {
        self.ops.push(Operation::Delete { key: key.to_vec() });
    }

    fn write(&mut self) -> Result<()> {
        let mut table = self.inner.lock();
        for op in self.ops.iter() {
            op.apply(&mut table);
        }
        debug!("memdb batch applied {} operations", self.ops.len());
        Ok(())
    }

    fn len(&self) -> usize {
        self.ops.len()
    }
}
