//! Storage Adapters
//!
//! Implementations of the RecordStore port.
//!
//! ## Available Adapters
//!
//! - **JsonFileRecordStore** - Stores datasets as JSON files with atomic writes
//! - **InMemoryRecordStore** - Stores datasets in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{JsonFileRecordStore, InMemoryRecordStore};
//!
//! // Production: file-based storage
//! let store = JsonFileRecordStore::new();
//!
//! // Testing: in-memory storage
//! let store = InMemoryRecordStore::new();
//! ```

mod in_memory_record_store;
mod json_record_store;

pub use in_memory_record_store::InMemoryRecordStore;
pub use json_record_store::JsonFileRecordStore;
