//! Auxiliary runtime systems.

/// FPS overlay updates from the frame-time diagnostics.
pub mod fps_tracking;
