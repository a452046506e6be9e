use crate::{
    effect_executor::EffectExecutor,
    model::AppFlags,
    reducer::{reduce_app_flags, AppStateAction},
    stores::StoreCell,
};

/// Global flags: loading indicator and first-launch marker.
pub struct AppStateStore {
    cell: StoreCell<AppFlags>,
}

impl AppStateStore {
    pub fn new(flags: AppFlags, executor: EffectExecutor) -> Self {
        Self {
            cell: StoreCell::new(flags, executor),
        }
    }

    pub fn flags(&self) -> AppFlags {
        self.cell.state
    }

    pub fn is_loading(&self) -> bool {
        self.cell.state.is_loading
    }

    pub fn is_first_launch(&self) -> bool {
        self.cell.state.is_first_launch
    }

    pub fn set_is_loading(&mut self, loading: bool) -> bool {
        self.cell
            .dispatch(AppStateAction::SetIsLoading { loading }, reduce_app_flags)
    }

    pub fn set_is_first_launch(&mut self, first_launch: bool) -> bool {
        self.cell.dispatch(
            AppStateAction::SetIsFirstLaunch { first_launch },
            reduce_app_flags,
        )
    }

    /// Clears the first-launch marker. Returns `true` only for the call that cleared it.
    pub fn complete_first_launch(&mut self) -> bool {
        self.set_is_first_launch(false)
    }
}
