//! Write-through executor for reducer-emitted persistence effects.
//!
//! Records are serialized synchronously, at the moment of the mutation, and the save is spawned
//! onto a single-threaded local pool. The host loop drains the pool; saves complete in the order
//! they were enqueued.

use std::rc::Rc;

use futures::{executor::LocalSpawner, task::LocalSpawnExt};
use platform_host::DocumentStore;

use crate::{persistence::PersistedSlice, reducer::RuntimeEffect};

#[derive(Clone)]
/// Handle shared by the stores to enqueue durable writes.
pub struct EffectExecutor {
    host: Rc<dyn DocumentStore>,
    spawner: LocalSpawner,
}

impl EffectExecutor {
    pub fn new(host: Rc<dyn DocumentStore>, spawner: LocalSpawner) -> Self {
        Self { host, spawner }
    }

    /// Runs one effect against the slice state that produced it.
    pub fn run_effect<S: PersistedSlice>(&self, effect: RuntimeEffect, slice: &S) {
        let namespace = effect.namespace();
        if namespace != S::NAMESPACE {
            tracing::warn!(
                namespace,
                slice = S::NAMESPACE,
                "persistence effect emitted for a foreign slice"
            );
            return;
        }
        match slice.encode_record() {
            Ok(raw) => self.enqueue_save(namespace, raw),
            Err(err) => tracing::warn!(namespace, "persist skipped: {err}"),
        }
    }

    fn enqueue_save(&self, namespace: &'static str, raw: String) {
        let host = Rc::clone(&self.host);
        let spawned = self.spawner.spawn_local(async move {
            match host.save_document(namespace, &raw).await {
                Ok(()) => tracing::trace!(namespace, "record saved"),
                Err(err) => tracing::warn!(namespace, "persist failed: {err}"),
            }
        });
        if let Err(err) = spawned {
            tracing::warn!(namespace, "persist could not be scheduled: {err}");
        }
    }
}
