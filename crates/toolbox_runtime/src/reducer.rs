//! Store actions, persistence intents, and transition logic for the toolbox runtime.
//!
//! Each store owns one reducer. A reducer mutates its slice in place and reports which durable
//! record needs rewriting; the store decides when that write is enqueued.

use thiserror::Error;

use crate::{
    model::{AppFlags, UnknownVariantError},
    persistence::{APP_NAMESPACE, TOOLS_NAMESPACE, USER_NAMESPACE},
};

mod catalog;
mod preferences;

pub use catalog::{reduce_catalog, CatalogAction};
pub use preferences::{reduce_preferences, PreferenceAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side-effect intents emitted by the reducers for the effect executor to run.
pub enum RuntimeEffect {
    /// Rewrite the `tools-storage` record.
    PersistTools,
    /// Rewrite the `user-storage` record.
    PersistPreferences,
    /// Rewrite the `app-storage` record.
    PersistAppFlags,
}

impl RuntimeEffect {
    /// Namespace key of the record this effect rewrites.
    pub fn namespace(self) -> &'static str {
        match self {
            Self::PersistTools => TOOLS_NAMESPACE,
            Self::PersistPreferences => USER_NAMESPACE,
            Self::PersistAppFlags => APP_NAMESPACE,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that cannot apply to the current state.
///
/// Stores log these and keep their prior state; they never reach the caller.
pub enum ReducerError {
    /// The action referenced a tool id absent from the catalog.
    #[error("tool `{0}` not found")]
    ToolNotFound(String),
    /// A theme or category name outside its closed set.
    #[error(transparent)]
    UnknownVariant(#[from] UnknownVariantError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Actions accepted by [`reduce_app_flags`].
pub enum AppStateAction {
    /// Set the global loading flag.
    SetIsLoading {
        /// New flag value.
        loading: bool,
    },
    /// Set the first-launch flag.
    SetIsFirstLaunch {
        /// New flag value.
        first_launch: bool,
    },
}

/// Applies an [`AppStateAction`] to the global flags.
///
/// # Errors
///
/// Never fails; the signature matches the other reducers.
pub fn reduce_app_flags(
    flags: &mut AppFlags,
    action: AppStateAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    match action {
        AppStateAction::SetIsLoading { loading } => flags.is_loading = loading,
        AppStateAction::SetIsFirstLaunch { first_launch } => flags.is_first_launch = first_launch,
    }
    Ok(vec![RuntimeEffect::PersistAppFlags])
}
