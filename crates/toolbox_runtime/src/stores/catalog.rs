use crate::{
    catalog::filter_by_query,
    config::SearchScope,
    effect_executor::EffectExecutor,
    model::{CatalogState, CategoryFilter, Tool},
    reducer::{reduce_catalog, CatalogAction},
    stores::StoreCell,
};

/// Owns the tool collection and the session query over it.
///
/// Only the collection is written to `tools-storage`; query changes stay in memory.
pub struct CatalogStore {
    cell: StoreCell<CatalogState>,
    search_scope: SearchScope,
}

impl CatalogStore {
    pub fn new(state: CatalogState, executor: EffectExecutor, search_scope: SearchScope) -> Self {
        Self {
            cell: StoreCell::new(state, executor),
            search_scope,
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.cell.state
    }

    pub fn tools(&self) -> &[Tool] {
        &self.cell.state.tools
    }

    /// Looks a tool up by id. Absence is an ordinary outcome (a removed or renamed tool).
    pub fn tool_by_id(&self, tool_id: &str) -> Option<&Tool> {
        self.cell.state.tool_by_id(tool_id)
    }

    pub fn search_query(&self) -> &str {
        &self.cell.state.query.search_query
    }

    pub fn selected_category(&self) -> CategoryFilter {
        self.cell.state.query.selected_category
    }

    /// The tool the detail view is showing, if it still exists.
    pub fn selected_tool(&self) -> Option<&Tool> {
        let tool_id = self.cell.state.query.selected_tool.as_deref()?;
        self.tool_by_id(tool_id)
    }

    pub fn search_scope(&self) -> SearchScope {
        self.search_scope
    }

    pub fn enabled_count(&self) -> usize {
        self.tools().iter().filter(|tool| tool.is_enabled).count()
    }

    /// Tools matching the current query under the configured [`SearchScope`].
    ///
    /// Recomputed on every call.
    pub fn filtered_tools(&self) -> Vec<Tool> {
        self.filtered_tools_in(self.search_scope)
    }

    /// Tools matching the current query under an explicit [`SearchScope`].
    pub fn filtered_tools_in(&self, scope: SearchScope) -> Vec<Tool> {
        filter_by_query(&self.cell.state.tools, &self.cell.state.query, scope)
    }

    /// Replaces the whole collection. Callers guarantee id uniqueness.
    pub fn set_tools(&mut self, tools: Vec<Tool>) -> bool {
        self.cell
            .dispatch(CatalogAction::SetTools { tools }, reduce_catalog)
    }

    /// Flips `is_enabled` on the matching tool. Unknown ids are logged and ignored.
    pub fn toggle_tool_enabled(&mut self, tool_id: &str) -> bool {
        self.cell.dispatch(
            CatalogAction::ToggleToolEnabled {
                tool_id: tool_id.to_string(),
            },
            reduce_catalog,
        )
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) -> bool {
        self.cell.dispatch(
            CatalogAction::SetSearchQuery {
                query: query.into(),
            },
            reduce_catalog,
        )
    }

    pub fn set_selected_category(&mut self, category: impl Into<CategoryFilter>) -> bool {
        self.cell.dispatch(
            CatalogAction::SetSelectedCategory {
                category: category.into(),
            },
            reduce_catalog,
        )
    }

    /// Sets the filter from its wire name; unknown names keep the current filter.
    pub fn set_selected_category_named(&mut self, name: &str) -> bool {
        self.cell.dispatch(
            CatalogAction::SetSelectedCategoryNamed {
                name: name.to_string(),
            },
            reduce_catalog,
        )
    }

    pub fn set_selected_tool(&mut self, tool_id: Option<&str>) -> bool {
        self.cell.dispatch(
            CatalogAction::SetSelectedTool {
                tool_id: tool_id.map(str::to_string),
            },
            reduce_catalog,
        )
    }

    pub fn reset_query(&mut self) -> bool {
        self.cell.dispatch(CatalogAction::ResetQuery, reduce_catalog)
    }
}
