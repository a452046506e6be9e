//! Catalog reducer: tool collection and session query transitions.

use crate::{
    model::{CatalogQuery, CatalogState, CategoryFilter, Tool},
    reducer::{ReducerError, RuntimeEffect},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_catalog`].
pub enum CatalogAction {
    /// Replace the whole tool collection. Id uniqueness is the caller's responsibility.
    SetTools {
        /// New collection, in display order.
        tools: Vec<Tool>,
    },
    /// Flip `is_enabled` on one tool.
    ToggleToolEnabled {
        /// Tool to toggle.
        tool_id: String,
    },
    /// Replace the free-text search query.
    SetSearchQuery {
        /// Query text; matched case-insensitively.
        query: String,
    },
    /// Replace the category filter.
    SetSelectedCategory {
        /// New filter.
        category: CategoryFilter,
    },
    /// Replace the category filter from its wire name (`all` or a category).
    SetSelectedCategoryNamed {
        /// Category name as received from the presentation layer.
        name: String,
    },
    /// Remember (or clear) the tool the detail view is showing.
    SetSelectedTool {
        /// Selected tool id, if any.
        tool_id: Option<String>,
    },
    /// Return the query to `{"", all}` with no selection.
    ResetQuery,
}

/// Applies a [`CatalogAction`] to the catalog state.
///
/// Only changes to the tool collection emit [`RuntimeEffect::PersistTools`]; the query is
/// session state.
///
/// # Errors
///
/// Returns [`ReducerError::ToolNotFound`] when toggling an unknown id and
/// [`ReducerError::UnknownVariant`] for an unknown category name. The state is untouched in
/// both cases.
pub fn reduce_catalog(
    state: &mut CatalogState,
    action: CatalogAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        CatalogAction::SetTools { tools } => {
            state.tools = tools;
            effects.push(RuntimeEffect::PersistTools);
        }
        CatalogAction::ToggleToolEnabled { tool_id } => {
            let tool = state
                .tools
                .iter_mut()
                .find(|tool| tool.id == tool_id)
                .ok_or(ReducerError::ToolNotFound(tool_id))?;
            tool.is_enabled = !tool.is_enabled;
            effects.push(RuntimeEffect::PersistTools);
        }
        CatalogAction::SetSearchQuery { query } => {
            state.query.search_query = query;
        }
        CatalogAction::SetSelectedCategory { category } => {
            state.query.selected_category = category;
        }
        CatalogAction::SetSelectedCategoryNamed { name } => {
            state.query.selected_category = name.parse()?;
        }
        CatalogAction::SetSelectedTool { tool_id } => {
            state.query.selected_tool = tool_id;
        }
        CatalogAction::ResetQuery => {
            state.query = CatalogQuery::default();
        }
    }
    Ok(effects)
}
