//! Durable document storage contracts and adapters.
//!
//! Each document is a JSON string stored under a fixed namespace key. Stores hydrate from this
//! port once at start and write their full record back after every mutation.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`DocumentStore`] async methods.
pub type DocumentStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for durable JSON documents keyed by namespace.
pub trait DocumentStore {
    /// Loads the raw JSON document stored under `key`, if any.
    fn load_document<'a>(
        &'a self,
        key: &'a str,
    ) -> DocumentStoreFuture<'a, Result<Option<String>, String>>;

    /// Replaces the document stored under `key`.
    fn save_document<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> DocumentStoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Default)]
/// In-memory document store keyed by namespace.
///
/// Clones share the same backing map, so a test can keep one handle, hand another to the
/// runtime, and later "restart" by booting a fresh runtime over the same handle.
pub struct MemoryDocumentStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<RefCell<Vec<String>>>,
}

impl MemoryDocumentStore {
    /// Returns the raw document stored under `key` without going through the async port.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }

    /// Seeds a raw document, bypassing the write log.
    pub fn insert_raw(&self, key: impl Into<String>, raw_json: impl Into<String>) {
        self.inner.borrow_mut().insert(key.into(), raw_json.into());
    }

    /// Keys written through [`DocumentStore::save_document`], in completion order.
    pub fn write_log(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }

    /// Sorted list of keys currently holding a document.
    pub fn keys(&self) -> Vec<String> {
        let mut keys = self.inner.borrow().keys().cloned().collect::<Vec<_>>();
        keys.sort();
        keys
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn load_document<'a>(
        &'a self,
        key: &'a str,
    ) -> DocumentStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.inner.borrow().get(key).cloned()) })
    }

    fn save_document<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> DocumentStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .insert(key.to_string(), raw_json.to_string());
            self.writes.borrow_mut().push(key.to_string());
            Ok(())
        })
    }
}
