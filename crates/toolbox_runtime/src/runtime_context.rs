//! Application context owning the three stores, the write queue, and debounced search.
//!
//! The presentation layer receives one [`ToolboxRuntime`] for the lifetime of the app. Views that
//! span stores (favorite tools, recent tools, the home summary) are joined here by tool id.

use std::rc::Rc;

use futures::executor::LocalPool;
use platform_host::{monotonic_ms_now, DocumentStore};

use crate::{
    config::RuntimeConfig,
    effect_executor::EffectExecutor,
    model::Tool,
    persistence::{hydrate_app_flags, hydrate_catalog, hydrate_preferences},
    stores::{AppStateStore, CatalogStore, PreferenceStore},
    timing::Debouncer,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Counts and previews shown on the home screen.
pub struct HomeSummary {
    /// Size of the catalog.
    pub total_tools: usize,
    /// Tools currently enabled.
    pub enabled_tools: usize,
    /// Favorite ids, including ones no longer in the catalog.
    pub favorite_count: usize,
    /// Most recent tools that still exist, most recent first.
    pub recent: Vec<Tool>,
}

/// Long-lived container for the app, catalog and preference stores.
pub struct ToolboxRuntime {
    config: RuntimeConfig,
    pool: LocalPool,
    app: AppStateStore,
    catalog: CatalogStore,
    preferences: PreferenceStore,
    search_debounce: Debouncer<String>,
}

impl ToolboxRuntime {
    /// Hydrates all three stores from `host` and wires them to a fresh write queue.
    ///
    /// Hydration never fails: missing or unreadable records fall back to defaults and are
    /// reported through `tracing`.
    pub async fn boot(host: Rc<dyn DocumentStore>, config: RuntimeConfig) -> Self {
        let (flags, catalog_state, preferences) = futures::join!(
            hydrate_app_flags(host.as_ref()),
            hydrate_catalog(host.as_ref()),
            hydrate_preferences(host.as_ref()),
        );

        let pool = LocalPool::new();
        let executor = EffectExecutor::new(host, pool.spawner());
        tracing::debug!(
            tools = catalog_state.tools.len(),
            favorites = preferences.favorite_tools.len(),
            first_launch = flags.is_first_launch,
            "toolbox runtime hydrated"
        );

        Self {
            app: AppStateStore::new(flags, executor.clone()),
            catalog: CatalogStore::new(catalog_state, executor.clone(), config.search_scope),
            preferences: PreferenceStore::new(preferences, executor),
            search_debounce: Debouncer::new(config.search_debounce_ms),
            pool,
            config,
        }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn app(&self) -> &AppStateStore {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut AppStateStore {
        &mut self.app
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut CatalogStore {
        &mut self.catalog
    }

    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    pub fn preferences_mut(&mut self) -> &mut PreferenceStore {
        &mut self.preferences
    }

    /// Runs queued saves until none can make progress. Dropping the runtime does the same.
    pub fn run_pending_writes(&mut self) {
        self.pool.run_until_stalled();
    }

    /// Favorite tools in catalog order. Favorites whose tool is gone are skipped.
    pub fn favorite_tools(&self) -> Vec<Tool> {
        self.catalog
            .tools()
            .iter()
            .filter(|tool| self.preferences.is_favorite(&tool.id))
            .cloned()
            .collect()
    }

    /// Recent tools, most recent first. Ids whose tool is gone are skipped.
    pub fn recent_tools(&self) -> Vec<Tool> {
        self.preferences
            .recent_tools()
            .iter()
            .filter_map(|id| self.catalog.tool_by_id(id))
            .cloned()
            .collect()
    }

    /// Resolves a tool for the detail view, selecting it and recording the visit.
    ///
    /// Returns `None` for an unknown id; the history is left untouched in that case.
    pub fn open_tool(&mut self, tool_id: &str) -> Option<Tool> {
        let tool = self.catalog.tool_by_id(tool_id)?.clone();
        self.preferences.add_recent_tool(tool_id);
        self.catalog.set_selected_tool(Some(tool_id));
        Some(tool)
    }

    /// Clears the detail-view selection.
    pub fn close_tool(&mut self) {
        self.catalog.set_selected_tool(None);
    }

    pub fn toggle_favorite(&mut self, tool_id: &str) -> bool {
        self.preferences.toggle_favorite_tool(tool_id)
    }

    /// Clears the first-launch marker once the first boot has shown its onboarding.
    pub fn complete_first_launch(&mut self) -> bool {
        self.app.complete_first_launch()
    }

    pub fn home_summary(&self) -> HomeSummary {
        let mut recent = self.recent_tools();
        recent.truncate(self.config.home_recent_preview);
        HomeSummary {
            total_tools: self.catalog.tools().len(),
            enabled_tools: self.catalog.enabled_count(),
            favorite_count: self.preferences.favorite_tools().len(),
            recent,
        }
    }

    /// Records a keystroke-level search update; it takes effect after the debounce window.
    pub fn queue_search_query(&mut self, query: impl Into<String>, now_ms: u64) {
        self.search_debounce.call(query.into(), now_ms);
    }

    /// [`Self::queue_search_query`] stamped with the host clock.
    pub fn queue_search_query_now(&mut self, query: impl Into<String>) {
        self.queue_search_query(query, monotonic_ms_now());
    }

    /// Applies a debounced search query whose window has elapsed. Returns whether one was applied.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self.search_debounce.poll(now_ms) {
            Some(query) => {
                self.catalog.set_search_query(query);
                true
            }
            None => false,
        }
    }

    /// [`Self::tick`] against the host clock.
    pub fn tick_now(&mut self) -> bool {
        self.tick(monotonic_ms_now())
    }

    /// Deadline of the pending search update, if any.
    pub fn next_search_deadline_ms(&self) -> Option<u64> {
        self.search_debounce.due_at_ms()
    }
}

impl Drop for ToolboxRuntime {
    /// Flushes saves still queued at shutdown so every committed mutation reaches the host.
    fn drop(&mut self) {
        self.pool.run_until_stalled();
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::MemoryDocumentStore;
    use pretty_assertions::assert_eq;

    use super::*;

    fn boot(host: &MemoryDocumentStore) -> ToolboxRuntime {
        block_on(ToolboxRuntime::boot(
            Rc::new(host.clone()),
            RuntimeConfig::default(),
        ))
    }

    fn ids(tools: &[Tool]) -> Vec<&str> {
        tools.iter().map(|tool| tool.id.as_str()).collect()
    }

    #[test]
    fn open_tool_records_visit_and_selection() {
        let host = MemoryDocumentStore::default();
        let mut runtime = boot(&host);

        let opened = runtime.open_tool("tool-2").expect("seed tool");
        assert_eq!(opened.name, "Unit Converter");
        assert_eq!(runtime.preferences().recent_tools(), ["tool-2".to_string()]);
        assert_eq!(runtime.catalog().selected_tool(), Some(&opened));

        runtime.close_tool();
        assert!(runtime.catalog().selected_tool().is_none());
    }

    #[test]
    fn open_unknown_tool_leaves_history_untouched() {
        let host = MemoryDocumentStore::default();
        let mut runtime = boot(&host);
        assert!(runtime.open_tool("tool-404").is_none());
        assert!(runtime.preferences().recent_tools().is_empty());
    }

    #[test]
    fn joined_views_skip_ids_missing_from_catalog() {
        let host = MemoryDocumentStore::default();
        let mut runtime = boot(&host);
        runtime.preferences_mut().add_favorite_tool("tool-3");
        runtime.preferences_mut().add_favorite_tool("gone");
        runtime.preferences_mut().add_favorite_tool("tool-1");
        runtime.preferences_mut().add_recent_tool("gone");
        runtime.preferences_mut().add_recent_tool("tool-4");

        assert_eq!(ids(&runtime.favorite_tools()), vec!["tool-1", "tool-3"]);
        assert_eq!(ids(&runtime.recent_tools()), vec!["tool-4"]);
    }

    #[test]
    fn home_summary_counts_and_limits_preview() {
        let host = MemoryDocumentStore::default();
        let mut runtime = boot(&host);
        for id in ["tool-1", "tool-2", "tool-3", "tool-4", "tool-2"] {
            runtime.open_tool(id);
        }
        runtime.toggle_favorite("tool-1");
        runtime.catalog_mut().toggle_tool_enabled("tool-3");

        let summary = runtime.home_summary();
        assert_eq!(summary.total_tools, 4);
        assert_eq!(summary.enabled_tools, 3);
        assert_eq!(summary.favorite_count, 1);
        assert_eq!(
            ids(&summary.recent),
            vec!["tool-2", "tool-4", "tool-3", "tool-1"]
        );
    }

    #[test]
    fn host_clock_drives_search_debounce() {
        let host = MemoryDocumentStore::default();
        let config = RuntimeConfig::from_toml_str("search_debounce_ms = 60_000").expect("config");
        let mut runtime = block_on(ToolboxRuntime::boot(Rc::new(host.clone()), config));

        runtime.queue_search_query_now("notes");
        assert!(!runtime.tick_now());
        assert_eq!(runtime.catalog().search_query(), "");

        let deadline = runtime.next_search_deadline_ms().expect("pending search");
        assert!(deadline >= monotonic_ms_now() + 59_000);
        assert!(runtime.tick(deadline));
        assert_eq!(ids(&runtime.catalog().filtered_tools()), vec!["tool-4"]);
    }

    #[test]
    fn zero_window_applies_on_the_next_host_tick() {
        let host = MemoryDocumentStore::default();
        let config = RuntimeConfig::from_toml_str("search_debounce_ms = 0").expect("config");
        let mut runtime = block_on(ToolboxRuntime::boot(Rc::new(host.clone()), config));

        runtime.queue_search_query_now("qr");
        assert!(runtime.tick_now());
        assert_eq!(runtime.catalog().search_query(), "qr");
    }

    #[test]
    fn debounced_search_applies_only_after_quiet_window() {
        let host = MemoryDocumentStore::default();
        let mut runtime = boot(&host);

        runtime.queue_search_query("q", 0);
        runtime.queue_search_query("qr", 100);
        assert!(!runtime.tick(399));
        assert_eq!(runtime.catalog().search_query(), "");
        assert_eq!(runtime.next_search_deadline_ms(), Some(400));

        assert!(runtime.tick(400));
        assert_eq!(runtime.catalog().search_query(), "qr");
        assert_eq!(ids(&runtime.catalog().filtered_tools()), vec!["tool-3"]);
        assert!(!runtime.tick(1_000));
    }
}
