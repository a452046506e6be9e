//! The three application stores and their shared dispatch path.
//!
//! Store setters return whether the slice changed. `false` covers both rejected actions and
//! actions that leave the state as it was; neither enqueues a write.

use crate::{
    effect_executor::EffectExecutor,
    persistence::PersistedSlice,
    reducer::{ReducerError, RuntimeEffect},
};

mod app_state;
mod catalog;
mod preferences;

pub use app_state::AppStateStore;
pub use catalog::CatalogStore;
pub use preferences::PreferenceStore;

type Reducer<S, A> = fn(&mut S, A) -> Result<Vec<RuntimeEffect>, ReducerError>;

/// One store's slice plus the executor its writes go through.
struct StoreCell<S> {
    state: S,
    executor: EffectExecutor,
}

impl<S: PersistedSlice> StoreCell<S> {
    fn new(state: S, executor: EffectExecutor) -> Self {
        Self { state, executor }
    }

    /// Reduces `action` against a copy of the slice, enqueues the resulting writes from that
    /// copy, then commits it. A rejected action leaves the slice as it was; an action that
    /// changes nothing enqueues nothing. Returns whether the slice was replaced.
    fn dispatch<A>(&mut self, action: A, reduce: Reducer<S, A>) -> bool {
        let mut next = self.state.clone();
        match reduce(&mut next, action) {
            Ok(effects) => {
                if next == self.state {
                    return false;
                }
                for effect in effects {
                    self.executor.run_effect(effect, &next);
                }
                self.state = next;
                true
            }
            Err(err) => {
                tracing::warn!(namespace = S::NAMESPACE, "store action rejected: {err}");
                false
            }
        }
    }
}
