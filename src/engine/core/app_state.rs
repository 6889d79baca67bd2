use crate::engine::loading::progress::LoadingProgress;
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

#[derive(Component)]
pub struct FpsText;

/// Leaves the loading state once the model has been framed, or once the load
/// has failed terminally. A failed load still reaches `Running`: the viewer
/// keeps serving the empty scene, with drift permanently inert.
pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.model_framed || loading_progress.load_failed {
        info!("→ Transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
