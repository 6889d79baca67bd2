//! One-time framing of the freshly loaded model.
//!
//! Merges the world-space bounds of every mesh under the model root, recenters
//! the root so the merged box sits on the world origin, and derives the
//! initial camera placement from the largest box dimension.

use crate::constants::{
    DEFAULT_DISPLAY_SCALE, FRAME_DISTANCE_FACTOR, FRAME_HEIGHT_FACTOR,
};
use crate::engine::camera::idle_drift::{CameraPose, IdleDrift};
use crate::engine::camera::orbit_camera::OrbitCamera;
use crate::engine::loading::manifest_loader::ViewerManifest;
use crate::engine::loading::model_loader::ModelRoot;
use crate::engine::loading::progress::LoadingProgress;
use bevy::prelude::*;
use bevy::render::primitives::Aabb;

/// Camera placement for a model whose merged bounds are `min..max`, after the
/// display scale has been applied: distance follows the largest dimension,
/// looking at the origin the model was just centered on.
pub fn initial_camera_pose(min: Vec3, max: Vec3, display_scale: f32) -> CameraPose {
    let size = (max - min) * display_scale;
    let max_dim = size.x.max(size.y).max(size.z);
    let dist = max_dim * FRAME_DISTANCE_FACTOR;

    CameraPose {
        position: Vec3::new(dist, dist * FRAME_HEIGHT_FACTOR, dist),
        target: Vec3::ZERO,
    }
}

fn world_aabb(transform: &GlobalTransform, aabb: &Aabb) -> (Vec3, Vec3) {
    let center = Vec3::from(aabb.center);
    let half_extents = Vec3::from(aabb.half_extents);
    let mut min = Vec3::splat(f32::INFINITY);
    let mut max = Vec3::splat(f32::NEG_INFINITY);

    for sx in [-1.0, 1.0] {
        for sy in [-1.0, 1.0] {
            for sz in [-1.0, 1.0] {
                let corner =
                    transform.transform_point(center + half_extents * Vec3::new(sx, sy, sz));
                min = min.min(corner);
                max = max.max(corner);
            }
        }
    }

    (min, max)
}

/// Runs once the GLB scene has decoded; waits until the spawned meshes are
/// queryable, then centers the model, seeds the orbit camera, and establishes
/// the drift baseline.
pub fn frame_loaded_model(
    mut loading_progress: ResMut<LoadingProgress>,
    mut orbit: ResMut<OrbitCamera>,
    mut drift: ResMut<IdleDrift>,
    manifest: Option<Res<ViewerManifest>>,
    mut roots: Query<(Entity, &mut Transform), With<ModelRoot>>,
    children: Query<&Children>,
    meshes: Query<(&GlobalTransform, &Aabb), With<Mesh3d>>,
    mut camera_query: Query<&mut Transform, (With<Camera3d>, Without<ModelRoot>)>,
) {
    if loading_progress.model_framed || loading_progress.load_failed || !loading_progress.model_loaded
    {
        return;
    }
    let Ok((root, mut root_transform)) = roots.single_mut() else {
        return;
    };

    let mut merged: Option<(Vec3, Vec3)> = None;
    for entity in children.iter_descendants(root) {
        if let Ok((global, aabb)) = meshes.get(entity) {
            let (min, max) = world_aabb(global, aabb);
            merged = Some(match merged {
                Some((m0, m1)) => (m0.min(min), m1.max(max)),
                None => (min, max),
            });
        }
    }
    // Scene entities spawn a frame or two after the asset reports loaded.
    let Some((min, max)) = merged else {
        return;
    };

    let display_scale = manifest
        .map(|m| m.display_scale)
        .unwrap_or(DEFAULT_DISPLAY_SCALE);
    let center = (min + max) * 0.5;
    root_transform.scale = Vec3::splat(display_scale);
    root_transform.translation = -center * display_scale;

    let pose = initial_camera_pose(min, max, display_scale);
    *orbit = OrbitCamera::from_pose(pose.position, pose.target);
    if let Ok(mut camera_transform) = camera_query.single_mut() {
        camera_transform.translation = pose.position;
        camera_transform.look_at(pose.target, Vec3::Y);
    }
    drift.on_asset_framed(pose.position, pose.target);

    loading_progress.model_framed = true;
    info!(
        "✓ Model framed: size {:?}, camera at {:?}",
        (max - min) * display_scale,
        pose.position
    );
}
