//! Store persistence: namespace keys, record layouts, and boot hydration.

use platform_host::DocumentStore;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::{
    catalog::seed_tools,
    model::{AppFlags, CatalogState, Tool, UserPreferences},
};

/// Namespace of the global flags record.
pub const APP_NAMESPACE: &str = "app-storage";
/// Namespace of the tool collection record.
pub const TOOLS_NAMESPACE: &str = "tools-storage";
/// Namespace of the user preferences record.
pub const USER_NAMESPACE: &str = "user-storage";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage for `{namespace}` failed: {message}")]
    Host {
        namespace: &'static str,
        message: String,
    },
    #[error("record `{namespace}` could not be decoded: {source}")]
    Decode {
        namespace: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("record `{namespace}` could not be encoded: {source}")]
    Encode {
        namespace: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Persisted layout of `tools-storage`. The session query is deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsRecord {
    pub tools: Vec<Tool>,
}

/// A store slice with a durable record under a fixed namespace.
pub trait PersistedSlice: Clone + PartialEq {
    /// Namespace key the record lives under.
    const NAMESPACE: &'static str;

    /// Serializes the durable part of the slice.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Encode`] when serialization fails.
    fn encode_record(&self) -> Result<String, PersistenceError>;
}

fn encode<T: Serialize>(namespace: &'static str, record: &T) -> Result<String, PersistenceError> {
    serde_json::to_string(record).map_err(|source| PersistenceError::Encode { namespace, source })
}

impl PersistedSlice for CatalogState {
    const NAMESPACE: &'static str = TOOLS_NAMESPACE;

    fn encode_record(&self) -> Result<String, PersistenceError> {
        #[derive(Serialize)]
        struct ToolsRecordRef<'a> {
            tools: &'a [Tool],
        }
        encode(Self::NAMESPACE, &ToolsRecordRef { tools: &self.tools })
    }
}

impl PersistedSlice for UserPreferences {
    const NAMESPACE: &'static str = USER_NAMESPACE;

    fn encode_record(&self) -> Result<String, PersistenceError> {
        encode(Self::NAMESPACE, self)
    }
}

impl PersistedSlice for AppFlags {
    const NAMESPACE: &'static str = APP_NAMESPACE;

    fn encode_record(&self) -> Result<String, PersistenceError> {
        encode(Self::NAMESPACE, self)
    }
}

/// Loads and decodes the record stored under `namespace`.
///
/// # Errors
///
/// Returns [`PersistenceError::Host`] when the store fails and [`PersistenceError::Decode`] when
/// the stored JSON does not match the record layout.
pub async fn load_record<T: DeserializeOwned>(
    host: &dyn DocumentStore,
    namespace: &'static str,
) -> Result<Option<T>, PersistenceError> {
    let raw = host
        .load_document(namespace)
        .await
        .map_err(|message| PersistenceError::Host { namespace, message })?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| PersistenceError::Decode { namespace, source })
}

async fn load_or_default<T: DeserializeOwned>(
    host: &dyn DocumentStore,
    namespace: &'static str,
) -> Option<T> {
    match load_record(host, namespace).await {
        Ok(Some(record)) => Some(record),
        Ok(None) => {
            tracing::debug!(namespace, "no stored record, using defaults");
            None
        }
        Err(err) => {
            tracing::warn!(namespace, "hydration failed, using defaults: {err}");
            None
        }
    }
}

/// Hydrates the catalog: stored tools when present, the seed catalog otherwise.
///
/// The session query always starts empty.
pub async fn hydrate_catalog(host: &dyn DocumentStore) -> CatalogState {
    let tools = load_or_default::<ToolsRecord>(host, TOOLS_NAMESPACE)
        .await
        .map(|record| record.tools)
        .unwrap_or_else(seed_tools);
    CatalogState::with_tools(tools)
}

/// Hydrates user preferences, normalizing duplicates and over-long history.
pub async fn hydrate_preferences(host: &dyn DocumentStore) -> UserPreferences {
    load_or_default::<UserPreferences>(host, USER_NAMESPACE)
        .await
        .map(UserPreferences::normalized)
        .unwrap_or_default()
}

/// Hydrates the global flags.
pub async fn hydrate_app_flags(host: &dyn DocumentStore) -> AppFlags {
    load_or_default::<AppFlags>(host, APP_NAMESPACE)
        .await
        .unwrap_or_default()
}
