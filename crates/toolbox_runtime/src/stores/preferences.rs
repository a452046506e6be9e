use crate::{
    effect_executor::EffectExecutor,
    model::{ResolvedTheme, ThemePreference, UserPreferences},
    reducer::{reduce_preferences, PreferenceAction},
    stores::StoreCell,
};

/// Owns the theme preference, favorite tools and the recent-tools history.
pub struct PreferenceStore {
    cell: StoreCell<UserPreferences>,
}

impl PreferenceStore {
    pub fn new(preferences: UserPreferences, executor: EffectExecutor) -> Self {
        Self {
            cell: StoreCell::new(preferences, executor),
        }
    }

    pub fn preferences(&self) -> &UserPreferences {
        &self.cell.state
    }

    pub fn theme(&self) -> ThemePreference {
        self.cell.state.theme
    }

    pub fn resolved_theme(&self, system_is_dark: bool) -> ResolvedTheme {
        self.cell.state.theme.resolve(system_is_dark)
    }

    pub fn favorite_tools(&self) -> &[String] {
        &self.cell.state.favorite_tools
    }

    /// Recent tool ids, most recent first.
    pub fn recent_tools(&self) -> &[String] {
        &self.cell.state.recent_tools
    }

    pub fn is_favorite(&self, tool_id: &str) -> bool {
        self.cell.state.is_favorite(tool_id)
    }

    pub fn set_theme(&mut self, theme: ThemePreference) -> bool {
        self.cell
            .dispatch(PreferenceAction::SetTheme { theme }, reduce_preferences)
    }

    /// Sets the theme from its wire name; names outside `light`/`dark`/`system` are ignored.
    pub fn set_theme_named(&mut self, name: &str) -> bool {
        self.cell.dispatch(
            PreferenceAction::SetThemeNamed {
                name: name.to_string(),
            },
            reduce_preferences,
        )
    }

    pub fn add_favorite_tool(&mut self, tool_id: &str) -> bool {
        self.cell.dispatch(
            PreferenceAction::AddFavoriteTool {
                tool_id: tool_id.to_string(),
            },
            reduce_preferences,
        )
    }

    pub fn remove_favorite_tool(&mut self, tool_id: &str) -> bool {
        self.cell.dispatch(
            PreferenceAction::RemoveFavoriteTool {
                tool_id: tool_id.to_string(),
            },
            reduce_preferences,
        )
    }

    /// Flips favorite membership and returns the new membership.
    pub fn toggle_favorite_tool(&mut self, tool_id: &str) -> bool {
        self.cell.dispatch(
            PreferenceAction::ToggleFavoriteTool {
                tool_id: tool_id.to_string(),
            },
            reduce_preferences,
        );
        self.is_favorite(tool_id)
    }

    /// Moves (or inserts) `tool_id` to the front of the history, keeping at most ten entries.
    pub fn add_recent_tool(&mut self, tool_id: &str) -> bool {
        self.cell.dispatch(
            PreferenceAction::AddRecentTool {
                tool_id: tool_id.to_string(),
            },
            reduce_preferences,
        )
    }

    pub fn clear_recent_tools(&mut self) -> bool {
        self.cell
            .dispatch(PreferenceAction::ClearRecentTools, reduce_preferences)
    }
}
