//! Orbit camera driven by mouse input.
//!
//! Left drag orbits around the focus point, right or middle drag pans in the
//! view plane, and the wheel dollies along the view direction. The controller
//! also detects interaction edges and hands the camera off to the idle drift
//! controller whenever the user lets go.

use crate::constants::{
    CAMERA_SMOOTHING, MAX_CAMERA_DISTANCE, MIN_CAMERA_DISTANCE, PAN_SENSITIVITY, PITCH_LIMIT,
    PITCH_SENSITIVITY, YAW_SENSITIVITY,
};
use crate::engine::camera::idle_drift::{CameraPose, IdleDrift};
use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

#[derive(Resource)]
pub struct OrbitCamera {
    pub focus_point: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub was_active: bool,
}

impl OrbitCamera {
    /// Derives orbit state from an explicit camera pose, keeping the camera
    /// exactly where the pose puts it.
    pub fn from_pose(position: Vec3, target: Vec3) -> Self {
        let offset = position - target;
        let distance = offset.length().clamp(MIN_CAMERA_DISTANCE, MAX_CAMERA_DISTANCE);
        let dir = offset / offset.length().max(f32::EPSILON);

        Self {
            focus_point: target,
            distance,
            yaw: dir.x.atan2(dir.z),
            pitch: (-dir.y).clamp(-1.0, 1.0).asin(),
            was_active: false,
        }
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// The pose this controller is currently driving the camera toward.
    pub fn pose(&self) -> CameraPose {
        let dir = self.rotation() * Vec3::Z;
        CameraPose {
            position: self.focus_point + dir * self.distance,
            target: self.focus_point,
        }
    }

    pub fn orbit(&mut self, delta: Vec2) {
        self.yaw -= delta.x * YAW_SENSITIVITY;
        self.pitch = (self.pitch - delta.y * PITCH_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn pan(&mut self, delta: Vec2) {
        let rot = self.rotation();
        let right = rot * Vec3::X;
        let up = rot * Vec3::Y;
        let pan_speed = self.distance * PAN_SENSITIVITY;
        self.focus_point += (-right * delta.x + up * delta.y) * pan_speed;
    }

    pub fn dolly(&mut self, amount: f32) {
        let dolly_speed = (self.distance * 0.2).max(0.05);
        self.distance =
            (self.distance - amount * dolly_speed).clamp(MIN_CAMERA_DISTANCE, MAX_CAMERA_DISTANCE);
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            focus_point: Vec3::ZERO,
            distance: 3.0,
            yaw: 0.0,
            pitch: -0.6,
            was_active: false,
        }
    }
}

pub fn orbit_camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mut drift: ResMut<IdleDrift>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    // Mouse wheel scroll accumulation (pixel and line scroll)
    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y * 1.0,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }

    let active = mouse_button.pressed(MouseButton::Left)
        || mouse_button.pressed(MouseButton::Right)
        || mouse_button.pressed(MouseButton::Middle)
        || scroll_accum.abs() > f32::EPSILON;

    if active && !orbit.was_active {
        // Take over from wherever the drift left the camera so the grab does
        // not snap back to the pre-drift pose.
        let forward = camera_transform.forward();
        orbit.focus_point = camera_transform.translation + forward * orbit.distance;
        drift.on_interaction_start();
    }

    if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
        orbit.orbit(mouse_delta);
    }

    if (mouse_button.pressed(MouseButton::Right) || mouse_button.pressed(MouseButton::Middle))
        && mouse_delta != Vec2::ZERO
    {
        orbit.pan(mouse_delta);
    }

    if scroll_accum.abs() > f32::EPSILON {
        orbit.dolly(scroll_accum);
    }

    if !active && orbit.was_active {
        // Rebase the drift around the live camera pose, not the smoothing
        // target, so the handoff is jump-free mid-lerp too.
        let forward = camera_transform.forward();
        let released_target = camera_transform.translation + forward * orbit.distance;
        drift.on_interaction_end(camera_transform.translation, released_target);
        orbit.focus_point = released_target;
    }
    orbit.was_active = active;

    // Single writer per frame: leave the transform to the drift controller
    // on frames where it applies.
    if !drift.applies() {
        let pose = orbit.pose();
        let lerp_speed = (CAMERA_SMOOTHING * time.delta_secs()).min(1.0);
        let target_rotation = Transform::from_translation(pose.position)
            .looking_at(pose.target, Vec3::Y)
            .rotation;

        camera_transform.translation = camera_transform.translation.lerp(pose.position, lerp_speed);
        camera_transform.rotation = camera_transform.rotation.slerp(target_rotation, lerp_speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pose_round_trips() {
        let position = Vec3::new(3.0, 2.4, 3.0);
        let target = Vec3::new(0.5, -0.1, 0.2);
        let orbit = OrbitCamera::from_pose(position, target);
        let pose = orbit.pose();

        assert!((pose.position - position).length() < 1e-4);
        assert!((pose.target - target).length() < 1e-4);
    }

    #[test]
    fn orbit_clamps_pitch() {
        let mut orbit = OrbitCamera::default();
        orbit.orbit(Vec2::new(0.0, -10_000.0));
        assert!(orbit.pitch <= PITCH_LIMIT);
        orbit.orbit(Vec2::new(0.0, 10_000.0));
        assert!(orbit.pitch >= -PITCH_LIMIT);
    }

    #[test]
    fn dolly_respects_distance_limits() {
        let mut orbit = OrbitCamera::default();
        for _ in 0..200 {
            orbit.dolly(10.0);
        }
        assert!(orbit.distance >= MIN_CAMERA_DISTANCE);
        for _ in 0..200 {
            orbit.dolly(-10.0);
        }
        assert!(orbit.distance <= MAX_CAMERA_DISTANCE);
    }

    #[test]
    fn pan_moves_focus_in_view_plane() {
        let mut orbit = OrbitCamera::from_pose(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        let before = orbit.pose();
        orbit.pan(Vec2::new(100.0, 0.0));
        let after = orbit.pose();

        // Distance to focus is preserved while the focus slides sideways.
        let d_before = (before.position - before.target).length();
        let d_after = (after.position - after.target).length();
        assert!((d_before - d_after).abs() < 1e-4);
        assert!((after.target - before.target).length() > 0.0);
    }
}
