//! Client-side state and query layer for the toolbox launcher.
//!
//! Three stores ([`AppStateStore`], [`CatalogStore`], [`PreferenceStore`]) each own one slice of
//! state and write it through to a [`platform_host::DocumentStore`] on every mutation.
//! [`ToolboxRuntime`] hydrates them at boot and joins their views for the presentation layer.

pub mod catalog;
pub mod config;
pub mod effect_executor;
pub mod model;
pub mod persistence;
pub mod reducer;
pub mod runtime_context;
pub mod stores;
pub mod timing;

pub use catalog::{filter_tools, seed_tools};
pub use config::{ConfigError, RuntimeConfig, SearchScope};
pub use model::*;
pub use persistence::{PersistenceError, APP_NAMESPACE, TOOLS_NAMESPACE, USER_NAMESPACE};
pub use reducer::{ReducerError, RuntimeEffect};
pub use runtime_context::{HomeSummary, ToolboxRuntime};
pub use stores::{AppStateStore, CatalogStore, PreferenceStore};
pub use timing::{Debouncer, Throttle};
