// Standard library and external crates
use bevy::asset::AssetMetaCheck;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy::render::camera::ClearColorConfig;
use bevy_common_assets::json::JsonAssetPlugin;

// Crate engine modules
use crate::constants::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, INITIAL_CAMERA_POSITION};
use crate::engine::camera::{
    idle_drift::{IdleDrift, idle_drift_system},
    orbit_camera::{OrbitCamera, orbit_camera_controller},
};
use crate::engine::core::app_state::{AppState, FpsText, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::{
    manifest_loader::{ManifestLoader, ViewerManifest, load_manifest_system, start_loading},
    model_loader::{ModelLoader, check_model_loading},
    progress::LoadingProgress,
};
use crate::engine::scene::{framing::frame_loaded_model, lighting::spawn_lighting};

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::fps_text_update_system;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers ViewerManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<ViewerManifest>::new(&["json"]));

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<ModelLoader>()
        .init_resource::<IdleDrift>()
        .insert_resource(OrbitCamera::from_pose(INITIAL_CAMERA_POSITION, Vec3::ZERO));

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (
                // Loading phase systems
                load_manifest_system,
                check_model_loading,
                frame_loaded_model,
                transition_to_running,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        // Camera systems run in every state: the user can orbit an empty
        // scene, and drift only engages once a baseline exists.
        .add_systems(Update, (orbit_camera_controller, idle_drift_system).chain());

    // Add fps_text_update_system only for native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system);
    }

    app
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    spawn_lighting(&mut commands);
    spawn_viewer_camera(&mut commands);

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

fn spawn_viewer_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Camera {
            clear_color: ClearColorConfig::Custom(Color::NONE),
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Tonemapping::AcesFitted,
        Transform::from_translation(INITIAL_CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
