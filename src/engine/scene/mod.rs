//! Scene content: one-time model framing and the light rig.

/// Centers and scales the loaded model and derives the initial camera pose.
pub mod framing;

/// Ambient, key, and fill lights.
pub mod lighting;
