//! Typed host-domain contracts shared by the toolbox runtime and its host adapters.
//!
//! This crate is the boundary for platform services: the durable document port the stores
//! persist through, its in-memory adapter, and the deadline clock. Concrete platform
//! adapters (mobile key/value storage, browser storage) implement [`DocumentStore`] outside this
//! crate.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod storage;
pub mod time;

pub use storage::documents::{DocumentStore, DocumentStoreFuture, MemoryDocumentStore};
pub use time::monotonic_ms_now;
