//! Viewer engine modules: application setup, camera control, asset loading,
//! and scene framing on top of the Bevy renderer.

/// Orbit input controller and the idle drift state machine.
pub mod camera;

/// Application lifecycle, state machine, and platform window configuration.
pub mod core;

/// Manifest and GLB scene loading with failure latching.
pub mod loading;

/// Scene framing and lighting.
pub mod scene;

/// Auxiliary runtime systems.
pub mod systems;
