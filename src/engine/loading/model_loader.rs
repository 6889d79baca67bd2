use crate::engine::loading::progress::LoadingProgress;
use bevy::asset::LoadState;
use bevy::prelude::*;

/// Marker for the entity the GLB scene is spawned under. Scene framing moves
/// and scales this root, never the loaded nodes themselves.
#[derive(Component)]
pub struct ModelRoot;

#[derive(Resource, Default)]
pub struct ModelLoader {
    pub scene: Option<Handle<Scene>>,
}

/// Polls the GLB load until it either decodes or fails. A failure is logged
/// once and is terminal for this session; the frame loop keeps running with
/// an empty scene.
pub fn check_model_loading(
    mut loading_progress: ResMut<LoadingProgress>,
    model_loader: Res<ModelLoader>,
    asset_server: Res<AssetServer>,
) {
    if loading_progress.model_loaded || loading_progress.load_failed {
        return;
    }
    let Some(ref handle) = model_loader.scene else {
        return;
    };

    match asset_server.load_state(handle.id()) {
        LoadState::Loaded => {
            info!("✓ Model scene decoded");
            loading_progress.model_loaded = true;
        }
        LoadState::Failed(err) => {
            error!("GLB load error: {err}");
            loading_progress.load_failed = true;
        }
        _ => {}
    }
}
