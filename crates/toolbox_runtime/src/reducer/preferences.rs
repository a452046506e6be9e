//! Preference reducer: theme, favorites, and the bounded recent-tools history.

use crate::{
    model::{ThemePreference, UserPreferences, RECENT_TOOLS_LIMIT},
    reducer::{ReducerError, RuntimeEffect},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_preferences`].
pub enum PreferenceAction {
    /// Replace the theme preference.
    SetTheme {
        /// New theme.
        theme: ThemePreference,
    },
    /// Replace the theme preference from its wire name.
    SetThemeNamed {
        /// `light`, `dark` or `system`.
        name: String,
    },
    /// Add a tool to favorites if absent.
    AddFavoriteTool {
        /// Tool to add.
        tool_id: String,
    },
    /// Remove a tool from favorites if present.
    RemoveFavoriteTool {
        /// Tool to remove.
        tool_id: String,
    },
    /// Add the tool if absent, remove it otherwise.
    ToggleFavoriteTool {
        /// Tool to toggle.
        tool_id: String,
    },
    /// Record a tool visit at the front of the recent history.
    AddRecentTool {
        /// Visited tool.
        tool_id: String,
    },
    /// Empty the recent history.
    ClearRecentTools,
}

/// Applies a [`PreferenceAction`] to the user preferences.
///
/// # Errors
///
/// Returns [`ReducerError::UnknownVariant`] for a theme name outside `light`/`dark`/`system`;
/// the stored theme is left as it was.
pub fn reduce_preferences(
    prefs: &mut UserPreferences,
    action: PreferenceAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    match action {
        PreferenceAction::SetTheme { theme } => prefs.theme = theme,
        PreferenceAction::SetThemeNamed { name } => prefs.theme = name.parse()?,
        PreferenceAction::AddFavoriteTool { tool_id } => {
            if !prefs.is_favorite(&tool_id) {
                prefs.favorite_tools.push(tool_id);
            }
        }
        PreferenceAction::RemoveFavoriteTool { tool_id } => {
            prefs.favorite_tools.retain(|id| *id != tool_id);
        }
        PreferenceAction::ToggleFavoriteTool { tool_id } => {
            if prefs.is_favorite(&tool_id) {
                prefs.favorite_tools.retain(|id| *id != tool_id);
            } else {
                prefs.favorite_tools.push(tool_id);
            }
        }
        PreferenceAction::AddRecentTool { tool_id } => push_recent(&mut prefs.recent_tools, tool_id),
        PreferenceAction::ClearRecentTools => prefs.recent_tools.clear(),
    }
    Ok(vec![RuntimeEffect::PersistPreferences])
}

fn push_recent(recent: &mut Vec<String>, tool_id: String) {
    recent.retain(|id| *id != tool_id);
    recent.insert(0, tool_id);
    recent.truncate(RECENT_TOOLS_LIMIT);
}
