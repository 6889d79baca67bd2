//! Two-stage asset loading: the JSON viewer manifest first, then the GLB
//! scene it names. Failures are logged once and latched; there is no retry.

/// Viewer manifest asset and the system that kicks off the model load.
pub mod manifest_loader;

/// GLB scene load polling and failure latching.
pub mod model_loader;

/// Loading progress flags shared between loading-phase systems.
pub mod progress;
