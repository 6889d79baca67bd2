use crate::constants::{DEFAULT_DISPLAY_SCALE, RELATIVE_MANIFEST_PATH};
use crate::engine::loading::model_loader::{ModelLoader, ModelRoot};
use crate::engine::loading::progress::LoadingProgress;
use bevy::asset::LoadState;
use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Viewer manifest as a Bevy asset. Mirrors the JSON structure exactly.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
pub struct ViewerManifest {
    /// Model path relative to the asset root.
    pub model: String,
    #[serde(default = "default_display_scale")]
    pub display_scale: f32,
}

fn default_display_scale() -> f32 {
    DEFAULT_DISPLAY_SCALE
}

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<ViewerManifest>>,
}

/// Start the loading process
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    info!("Loading viewer manifest from: {}", RELATIVE_MANIFEST_PATH);
    manifest_loader.handle = Some(asset_server.load(RELATIVE_MANIFEST_PATH));
}

/// Once the manifest is decoded, request the GLB scene it names and spawn
/// the model root it will attach to.
pub fn load_manifest_system(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    mut model_loader: ResMut<ModelLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<ViewerManifest>>,
) {
    if loading_progress.manifest_loaded || loading_progress.load_failed {
        return;
    }
    let Some(ref handle) = manifest_loader.handle else {
        return;
    };

    if let LoadState::Failed(err) = asset_server.load_state(handle.id()) {
        error!("Viewer manifest load error: {err}");
        loading_progress.load_failed = true;
        return;
    }

    if let Some(manifest) = manifests.get(handle) {
        info!("✓ Manifest loaded, model: {}", manifest.model);
        loading_progress.manifest_loaded = true;

        let scene = asset_server.load(GltfAssetLabel::Scene(0).from_asset(manifest.model.clone()));
        model_loader.scene = Some(scene.clone());
        commands.spawn((SceneRoot(scene), ModelRoot));
        commands.insert_resource(manifest.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_parses_with_explicit_scale() {
        let manifest: ViewerManifest =
            serde_json::from_str(r#"{ "model": "bag.glb", "display_scale": 2.5 }"#).unwrap();
        assert_eq!(manifest.model, "bag.glb");
        assert_eq!(manifest.display_scale, 2.5);
    }

    #[test]
    fn manifest_scale_defaults_when_omitted() {
        let manifest: ViewerManifest = serde_json::from_str(r#"{ "model": "bag.glb" }"#).unwrap();
        assert_eq!(manifest.display_scale, DEFAULT_DISPLAY_SCALE);
    }
}
