use std::{fmt, str::FromStr};

use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Upper bound on the recent-tools history.
pub const RECENT_TOOLS_LIMIT: usize = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {kind} `{value}`")]
/// A name outside one of the closed enumerations (category, theme).
pub struct UnknownVariantError {
    /// Which enumeration rejected the value.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    Productivity,
    Utilities,
    Conversion,
    Generator,
    Other,
}

impl ToolCategory {
    pub const ALL: [Self; 5] = [
        Self::Productivity,
        Self::Utilities,
        Self::Conversion,
        Self::Generator,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Productivity => "productivity",
            Self::Utilities => "utilities",
            Self::Conversion => "conversion",
            Self::Generator => "generator",
            Self::Other => "other",
        }
    }
}

impl FromStr for ToolCategory {
    type Err = UnknownVariantError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value.trim())
            .ok_or_else(|| UnknownVariantError {
                kind: "tool category",
                value: value.to_string(),
            })
    }
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category selection for the catalog view: a single category or the `all` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ToolCategory),
}

impl CategoryFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }

    pub fn matches(self, category: ToolCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownVariantError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim() == "all" {
            return Ok(Self::All);
        }
        value.parse().map(Self::Only)
    }
}

impl From<ToolCategory> for CategoryFilter {
    fn from(category: ToolCategory) -> Self {
        Self::Only(category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Opaque glyph name resolved by the presentation layer.
    pub icon: String,
    pub category: ToolCategory,
    pub is_enabled: bool,
}

/// Session-scoped catalog query. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogQuery {
    pub search_query: String,
    pub selected_category: CategoryFilter,
    pub selected_tool: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogState {
    pub tools: Vec<Tool>,
    pub query: CatalogQuery,
}

impl CatalogState {
    pub fn with_tools(tools: Vec<Tool>) -> Self {
        Self {
            tools,
            query: CatalogQuery::default(),
        }
    }

    pub fn tool_by_id(&self, tool_id: &str) -> Option<&Tool> {
        self.tools.iter().find(|tool| tool.id == tool_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Resolves the preference against the platform color scheme.
    pub fn resolve(self, system_is_dark: bool) -> ResolvedTheme {
        let dark = match self {
            Self::Light => false,
            Self::Dark => true,
            Self::System => system_is_dark,
        };
        if dark {
            ResolvedTheme::Dark
        } else {
            ResolvedTheme::Light
        }
    }
}

impl FromStr for ThemePreference {
    type Err = UnknownVariantError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str() == value.trim())
            .ok_or_else(|| UnknownVariantError {
                kind: "theme",
                value: value.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserPreferences {
    /// An out-of-range stored value decodes to the default rather than failing the record.
    #[serde(deserialize_with = "theme_or_default")]
    pub theme: ThemePreference,
    pub favorite_tools: Vec<String>,
    /// Most recent first, at most [`RECENT_TOOLS_LIMIT`] entries.
    pub recent_tools: Vec<String>,
}

impl UserPreferences {
    pub fn is_favorite(&self, tool_id: &str) -> bool {
        self.favorite_tools.iter().any(|id| id == tool_id)
    }

    /// Drops duplicate ids (keeping the first occurrence) and truncates recents to the limit.
    pub fn normalized(mut self) -> Self {
        dedup_in_order(&mut self.favorite_tools);
        dedup_in_order(&mut self.recent_tools);
        self.recent_tools.truncate(RECENT_TOOLS_LIMIT);
        self
    }
}

fn theme_or_default<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<ThemePreference, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StoredTheme {
        Known(ThemePreference),
        Unknown(IgnoredAny),
    }

    match StoredTheme::deserialize(deserializer)? {
        StoredTheme::Known(theme) => Ok(theme),
        StoredTheme::Unknown(_) => {
            tracing::warn!("stored theme out of range, using default");
            Ok(ThemePreference::default())
        }
    }
}

fn dedup_in_order(ids: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    ids.retain(|id| seen.insert(id.clone()));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppFlags {
    pub is_loading: bool,
    pub is_first_launch: bool,
}

impl Default for AppFlags {
    fn default() -> Self {
        Self {
            is_loading: false,
            is_first_launch: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn tool_serializes_with_camel_case_fields_and_lowercase_category() {
        let tool = Tool {
            id: "tool-1".to_string(),
            name: "Calculator".to_string(),
            description: "Math".to_string(),
            icon: "calculator".to_string(),
            category: ToolCategory::Utilities,
            is_enabled: true,
        };
        let value = serde_json::to_value(&tool).expect("serialize tool");
        assert_eq!(value["isEnabled"], json!(true));
        assert_eq!(value["category"], json!("utilities"));
        assert!(value.get("is_enabled").is_none());
    }

    #[test]
    fn unknown_category_is_rejected_by_serde_and_from_str() {
        let raw = json!({
            "id": "x",
            "name": "X",
            "description": "",
            "icon": "x",
            "category": "games",
            "isEnabled": true
        });
        assert!(serde_json::from_value::<Tool>(raw).is_err());
        let err = "games".parse::<ToolCategory>().expect_err("games is not a category");
        assert_eq!(err.to_string(), "unknown tool category `games`");
    }

    #[test]
    fn category_filter_parses_all_sentinel_and_categories() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "generator".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(ToolCategory::Generator))
        );
        assert!("everything".parse::<CategoryFilter>().is_err());
        assert!(CategoryFilter::All.matches(ToolCategory::Other));
        assert!(!CategoryFilter::Only(ToolCategory::Utilities).matches(ToolCategory::Other));
    }

    #[test]
    fn theme_preference_defaults_to_system_and_resolves_against_platform() {
        assert_eq!(ThemePreference::default(), ThemePreference::System);
        assert_eq!(ThemePreference::System.resolve(true), ResolvedTheme::Dark);
        assert_eq!(ThemePreference::System.resolve(false), ResolvedTheme::Light);
        assert_eq!(ThemePreference::Light.resolve(true), ResolvedTheme::Light);
        assert_eq!(ThemePreference::Dark.resolve(false), ResolvedTheme::Dark);
        assert!("sepia".parse::<ThemePreference>().is_err());
    }

    #[test]
    fn normalized_preferences_drop_duplicates_and_cap_recents() {
        let recent = (0..14).map(|n| format!("tool-{}", n % 12)).collect::<Vec<_>>();
        let prefs = UserPreferences {
            theme: ThemePreference::Dark,
            favorite_tools: vec!["a".into(), "b".into(), "a".into()],
            recent_tools: recent,
        }
        .normalized();

        assert_eq!(prefs.favorite_tools, vec!["a", "b"]);
        assert_eq!(prefs.recent_tools.len(), RECENT_TOOLS_LIMIT);
        assert_eq!(prefs.recent_tools[0], "tool-0");
        assert_eq!(prefs.recent_tools[9], "tool-9");
    }

    #[test]
    fn partial_records_fill_missing_fields_with_defaults() {
        let prefs: UserPreferences =
            serde_json::from_value(json!({"theme": "dark"})).expect("partial preferences");
        assert_eq!(prefs.theme, ThemePreference::Dark);
        assert!(prefs.recent_tools.is_empty());

        let flags: AppFlags =
            serde_json::from_value(json!({"isLoading": true})).expect("partial flags");
        assert!(flags.is_first_launch);
    }

    #[test]
    fn unknown_stored_theme_falls_back_without_dropping_lists() {
        let prefs: UserPreferences = serde_json::from_value(json!({
            "theme": "sepia",
            "favoriteTools": ["tool-1"],
            "recentTools": ["tool-2"]
        }))
        .expect("preferences with unknown theme");
        assert_eq!(prefs.theme, ThemePreference::System);
        assert_eq!(prefs.favorite_tools, vec!["tool-1"]);
        assert_eq!(prefs.recent_tools, vec!["tool-2"]);

        let prefs: UserPreferences =
            serde_json::from_value(json!({"theme": 3})).expect("non-string theme");
        assert_eq!(prefs.theme, ThemePreference::System);
    }

    #[test]
    fn app_flags_default_to_first_launch() {
        let flags = AppFlags::default();
        assert!(flags.is_first_launch);
        assert!(!flags.is_loading);
        assert_eq!(
            serde_json::to_value(flags).expect("serialize flags"),
            json!({"isLoading": false, "isFirstLaunch": true})
        );
    }
}
