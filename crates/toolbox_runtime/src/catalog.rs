//! Seed catalog and the derived query over the tool collection.

use crate::{
    config::SearchScope,
    model::{CatalogQuery, CategoryFilter, Tool},
};

mod generated {
    include!(concat!(env!("OUT_DIR"), "/seed_catalog_generated.rs"));
}

pub use generated::SEED_CATALOG_JSON;

/// Tools installed on first run, before any `tools-storage` record exists.
pub fn seed_tools() -> Vec<Tool> {
    match serde_json::from_str(SEED_CATALOG_JSON) {
        Ok(tools) => tools,
        Err(err) => {
            tracing::warn!("seed catalog decode failed: {err}");
            Vec::new()
        }
    }
}

/// Returns the tools matching `category` and `search_query`, in catalog order.
///
/// The search is a case-insensitive substring match; an empty query matches every tool.
pub fn filter_tools(
    tools: &[Tool],
    search_query: &str,
    category: CategoryFilter,
    scope: SearchScope,
) -> Vec<Tool> {
    let needle = search_query.to_lowercase();
    tools
        .iter()
        .filter(|tool| category.matches(tool.category) && matches_search(tool, &needle, scope))
        .cloned()
        .collect()
}

/// [`filter_tools`] driven by a [`CatalogQuery`].
pub fn filter_by_query(tools: &[Tool], query: &CatalogQuery, scope: SearchScope) -> Vec<Tool> {
    filter_tools(
        tools,
        &query.search_query,
        query.selected_category,
        scope,
    )
}

fn matches_search(tool: &Tool, needle: &str, scope: SearchScope) -> bool {
    if needle.is_empty() {
        return true;
    }
    let in_name = tool.name.to_lowercase().contains(needle);
    match scope {
        SearchScope::Name => in_name,
        SearchScope::NameOrDescription => {
            in_name || tool.description.to_lowercase().contains(needle)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::ToolCategory;

    fn ids(tools: &[Tool]) -> Vec<&str> {
        tools.iter().map(|tool| tool.id.as_str()).collect()
    }

    #[test]
    fn seed_catalog_has_four_enabled_tools_with_unique_ids() {
        let tools = seed_tools();
        assert_eq!(ids(&tools), vec!["tool-1", "tool-2", "tool-3", "tool-4"]);
        assert!(tools.iter().all(|tool| tool.is_enabled));
        assert_eq!(tools[0].name, "Calculator");
        assert_eq!(tools[0].category, ToolCategory::Utilities);
        assert_eq!(tools[3].category, ToolCategory::Productivity);
    }

    #[test]
    fn empty_query_and_all_category_return_everything_in_order() {
        let tools = seed_tools();
        let filtered = filter_tools(&tools, "", CategoryFilter::All, SearchScope::Name);
        assert_eq!(filtered, tools);
    }

    #[test]
    fn search_is_case_insensitive() {
        let tools = seed_tools();
        let filtered = filter_tools(&tools, "CALC", CategoryFilter::All, SearchScope::Name);
        assert_eq!(ids(&filtered), vec!["tool-1"]);
        assert!(filter_tools(&tools, "zzz", CategoryFilter::All, SearchScope::default()).is_empty());
    }

    #[test]
    fn description_matches_only_in_name_or_description_scope() {
        let tools = seed_tools();
        // "reminders" appears only in the Notes description.
        assert!(filter_tools(&tools, "Reminders", CategoryFilter::All, SearchScope::Name).is_empty());
        let filtered = filter_tools(
            &tools,
            "Reminders",
            CategoryFilter::All,
            SearchScope::NameOrDescription,
        );
        assert_eq!(ids(&filtered), vec!["tool-4"]);
    }

    #[test]
    fn category_and_search_combine_with_and() {
        let tools = seed_tools();
        let query = CatalogQuery {
            search_query: "convert".to_string(),
            selected_category: CategoryFilter::Only(ToolCategory::Utilities),
            selected_tool: None,
        };
        assert!(filter_by_query(&tools, &query, SearchScope::NameOrDescription).is_empty());

        let query = CatalogQuery {
            selected_category: CategoryFilter::Only(ToolCategory::Conversion),
            ..query
        };
        assert_eq!(
            ids(&filter_by_query(&tools, &query, SearchScope::NameOrDescription)),
            vec!["tool-2"]
        );
    }
}
