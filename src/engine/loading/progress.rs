use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub manifest_loaded: bool,
    pub model_loaded: bool,
    pub model_framed: bool,
    /// Terminal: once set, no further load or framing work happens and the
    /// drift baseline is never established.
    pub load_failed: bool,
}
