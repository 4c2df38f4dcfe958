use crate::scene::{NodeHandle, SceneId};

/// Recoverable errors reported by the scene API.
///
/// Internal consistency violations (a region tagged twice, a node tagged in
/// a scene that does not own it) are not represented here; they panic.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    #[error("node {node:?} does not belong to scene {scene:?}")]
    ForeignNode { node: NodeHandle, scene: SceneId },
    #[error("unknown body region `{0}`")]
    UnknownRegion(String),
    #[error("unknown robot variant `{0}`")]
    UnknownVariant(String),
    #[error("viewport must have a positive size, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
}
