//! Keyed JSON storage
//!
//! Durable client state lives in a string-keyed JSON store. `KeyValue` is
//! the seam, `FileStore` the on-disk implementation, `MemoryStore` the
//! throwaway one for tests and benchmarks.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde_json::Value;

use crate::error::Result;

/// A string-keyed JSON store.
pub trait KeyValue {
    /// Read the value stored under `key`, if any.
    fn get_value(&self, key: &str) -> Result<Option<Value>>;

    /// Store `value` under `key`, replacing any existing entry.
    fn put_value(&mut self, key: &str, value: Value) -> Result<()>;

    /// Remove the entry under `key` if present.
    fn remove(&mut self, key: &str) -> Result<()>;
}
