//! Idle camera drift with seamless handoff to and from user interaction.
//!
//! While no input is driving the camera, the viewpoint slides back and forth
//! along a fixed axis around a baseline pose. The same offset is applied to
//! both the camera position and its look target, so the motion reads as a
//! lateral pan: viewing direction and distance never change. The baseline is
//! rebased to the live camera pose every time an interaction ends, so drift
//! always resumes from wherever the user released the camera.

use crate::constants::{DRIFT_AMPLITUDE, DRIFT_ANGULAR_SPEED, DRIFT_AXIS, DRIFT_ENABLED};
use bevy::prelude::*;

/// A camera position paired with the point it is looking at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

/// Per-frame decision state for the idle drift.
///
/// The phase is free-running: it keeps advancing while the user interacts,
/// even though no offset is applied then. Only the baseline is event-driven.
#[derive(Resource)]
pub struct IdleDrift {
    pub enabled: bool,
    pub interacting: bool,
    pub baseline: Option<CameraPose>,
    pub t0: f32,
    pub axis: Vec3,
    pub amplitude: f32,
    pub angular_speed: f32,
}

impl Default for IdleDrift {
    fn default() -> Self {
        Self {
            enabled: DRIFT_ENABLED,
            interacting: false,
            baseline: None,
            t0: 0.0,
            axis: DRIFT_AXIS,
            amplitude: DRIFT_AMPLITUDE,
            angular_speed: DRIFT_ANGULAR_SPEED,
        }
    }
}

impl IdleDrift {
    /// Marks the camera as user-driven. Idempotent while already interacting.
    pub fn on_interaction_start(&mut self) {
        self.interacting = true;
    }

    /// Returns the camera to drift control, rebasing the oscillation around
    /// the pose the user released the camera at.
    pub fn on_interaction_end(&mut self, position: Vec3, target: Vec3) {
        self.interacting = false;
        self.baseline = Some(CameraPose { position, target });
    }

    /// Establishes the initial baseline once the loaded model has been
    /// centered and the camera placed. Until then drift is a no-op.
    pub fn on_asset_framed(&mut self, position: Vec3, target: Vec3) {
        self.baseline = Some(CameraPose { position, target });
    }

    /// True when drift will drive the camera on this frame.
    pub fn applies(&self) -> bool {
        self.enabled && !self.interacting && self.baseline.is_some()
    }

    /// Computes the drifted pose for the given timestamp, or `None` when the
    /// orbit controller's pose should stand unmodified.
    pub fn update(&self, now: f32) -> Option<CameraPose> {
        if !self.enabled || self.interacting {
            return None;
        }
        let baseline = self.baseline?;

        let phase = (now - self.t0) * self.angular_speed;
        let offset = self.axis * phase.sin() * self.amplitude;

        Some(CameraPose {
            position: baseline.position + offset,
            target: baseline.target + offset,
        })
    }
}

/// Applies the drift pose to the camera when the controller is in charge.
/// Runs after the orbit controller, which skips its own transform write on
/// frames where `IdleDrift::applies` holds.
pub fn idle_drift_system(
    drift: Res<IdleDrift>,
    time: Res<Time>,
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    if let Some(pose) = drift.update(time.elapsed_secs()) {
        camera_transform.translation = pose.position;
        camera_transform.look_at(pose.target, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    fn drift_with_baseline() -> IdleDrift {
        let mut drift = IdleDrift {
            amplitude: 0.25,
            angular_speed: 0.6,
            axis: Vec3::X,
            ..Default::default()
        };
        drift.on_asset_framed(Vec3::new(1.0, 1.0, 1.0), Vec3::ZERO);
        drift
    }

    #[test]
    fn noop_before_baseline() {
        let drift = IdleDrift::default();
        for t in [0.0, 0.3, 17.5, 4000.0] {
            assert!(drift.update(t).is_none());
        }
    }

    #[test]
    fn noop_while_interacting() {
        let mut drift = drift_with_baseline();
        drift.on_interaction_start();
        // Idempotent re-entry must not disturb anything.
        drift.on_interaction_start();
        for t in [0.0, 1.0, 99.9] {
            assert!(drift.update(t).is_none());
        }
        assert!(drift.interacting);
    }

    #[test]
    fn noop_when_disabled() {
        let mut drift = drift_with_baseline();
        drift.enabled = false;
        assert!(drift.update(3.0).is_none());
        assert!(!drift.applies());
    }

    #[test]
    fn offset_stays_within_amplitude() {
        let drift = drift_with_baseline();
        let baseline = drift.baseline.unwrap();
        for i in 0..2000 {
            let t = i as f32 * 0.173;
            let pose = drift.update(t).unwrap();
            assert!((pose.position - baseline.position).length() <= drift.amplitude + 1e-5);
            assert!((pose.target - baseline.target).length() <= drift.amplitude + 1e-5);
        }
    }

    #[test]
    fn position_and_target_share_the_offset() {
        let drift = drift_with_baseline();
        let baseline = drift.baseline.unwrap();
        for i in 0..500 {
            let t = i as f32 * 0.41;
            let pose = drift.update(t).unwrap();
            // The same offset vector is applied to both, so viewing direction
            // and distance are invariant under the drift.
            let dp = pose.position - baseline.position;
            let dt = pose.target - baseline.target;
            assert!((dp - dt).length() < 1e-6);
        }
    }

    #[test]
    fn interaction_end_rebases_exactly() {
        let mut drift = drift_with_baseline();
        drift.on_interaction_start();

        // Simulated user movement while interacting.
        let released_position = Vec3::new(-3.2, 0.7, 5.1);
        let released_target = Vec3::new(0.4, -0.2, 0.9);
        drift.on_interaction_end(released_position, released_target);

        let baseline = drift.baseline.unwrap();
        assert_eq!(baseline.position, released_position);
        assert_eq!(baseline.target, released_target);
        assert!(!drift.interacting);

        // The next update oscillates around the released pose, not the
        // original framing.
        let pose = drift.update(7.3).unwrap();
        assert!((pose.position - released_position).length() <= drift.amplitude + 1e-5);
    }

    #[test]
    fn offset_is_periodic() {
        let drift = drift_with_baseline();
        let period = TAU / drift.angular_speed;
        let a = drift.update(1.7).unwrap();
        let b = drift.update(1.7 + period).unwrap();
        assert!((a.position - b.position).length() < 1e-4);
        assert!((a.target - b.target).length() < 1e-4);
    }

    #[test]
    fn quarter_period_scenario() {
        // amplitude 0.25, axis +X, speed 0.6 rad/s, baseline (1,1,1) -> (0,0,0).
        let drift = drift_with_baseline();
        let t = FRAC_PI_2 / 0.6;
        let pose = drift.update(t).unwrap();
        assert!((pose.position - Vec3::new(1.25, 1.0, 1.0)).length() < 1e-5);
        assert!((pose.target - Vec3::new(0.25, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn phase_runs_free_during_interaction() {
        let mut drift = drift_with_baseline();
        let pre = drift.update(FRAC_PI_2 / 0.6).unwrap();
        assert!((pre.position.x - 1.25).abs() < 1e-5);

        // Interact for half a period, releasing at the original baseline.
        drift.on_interaction_start();
        assert!(drift.update(PI / 0.6).is_none());
        let baseline = drift.baseline.unwrap();
        drift.on_interaction_end(baseline.position, baseline.target);

        // Phase kept advancing while interacting, so at 3/4 period the
        // offset is at the opposite extreme rather than where it left off.
        let post = drift.update((PI + FRAC_PI_2) / 0.6).unwrap();
        assert!((post.position.x - 0.75).abs() < 1e-5);
    }
}
