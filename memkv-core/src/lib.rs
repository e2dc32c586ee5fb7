//! An in-memory, ordered key-value backend.
//!
//! [`MemDB`] implements the [`DB`] contract shared by every storage engine:
//! point reads and writes, prefix and range iteration over a key snapshot,
//! and batches applied atomically under the store's lock.

pub mod db;
mod errors;

pub mod batch;
pub mod iterator;
pub mod memdb;

mod config;
pub mod registry;

pub use batch::{Batch, Operation};
pub use config::Config;
pub use db::{Stats, DB};
pub use errors::{Error, Result};
pub use iterator::{DBIterator, Entries};
pub use memdb::MemDB;
pub use registry::{Creator, Registry, MEM_DB_BACKEND};
