//! Camera control for the viewer.
//!
//! The orbit controller owns the camera while the user is dragging or
//! scrolling; the idle drift controller owns it otherwise. Exactly one of
//! the two writes the camera transform on any given frame.

/// Time-based camera oscillation applied while the user is idle.
pub mod idle_drift;

/// Orbit camera resource and controller system driven by mouse input.
pub mod orbit_camera;
