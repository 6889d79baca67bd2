use bevy::prelude::*;

/// Viewer manifest describing the model to display, relative to the asset root.
pub const RELATIVE_MANIFEST_PATH: &str = "viewer_manifest.json";

/// Fallback model scale when the manifest does not specify one.
pub const DEFAULT_DISPLAY_SCALE: f32 = 1.0;

// Idle drift tuning. The offset is a lateral pan along DRIFT_AXIS, bounded by
// the amplitude for any session length since sin() never leaves [-1, 1].
pub const DRIFT_ENABLED: bool = true;
pub const DRIFT_AMPLITUDE: f32 = 0.25;
pub const DRIFT_ANGULAR_SPEED: f32 = 0.6;
pub const DRIFT_AXIS: Vec3 = Vec3::X;

// Initial framing derived from the model bounding box: camera sits at
// max_dim * FRAME_DISTANCE_FACTOR on x/z, scaled by FRAME_HEIGHT_FACTOR on y.
pub const FRAME_DISTANCE_FACTOR: f32 = 1.5;
pub const FRAME_HEIGHT_FACTOR: f32 = 0.8;

/// Camera placement before any model has been framed.
pub const INITIAL_CAMERA_POSITION: Vec3 = Vec3::new(2.0, 2.0, 2.0);

pub const CAMERA_FOV_DEGREES: f32 = 50.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Orbit controller tuning.
pub const MIN_CAMERA_DISTANCE: f32 = 0.5;
pub const MAX_CAMERA_DISTANCE: f32 = 50.0;
pub const YAW_SENSITIVITY: f32 = 0.0035;
pub const PITCH_SENSITIVITY: f32 = 0.0030;
pub const PAN_SENSITIVITY: f32 = 0.0016;
pub const PITCH_LIMIT: f32 = 1.55;
pub const CAMERA_SMOOTHING: f32 = 12.0;
