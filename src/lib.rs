//! Procedural humanoid robot models and tap picking.
//!
//! [`assemble`] turns a [`RobotVariant`] into a [`RobotScene`]: a tree of
//! primitive solids grouped per body region, with one selectable node per
//! region recorded in the scene's [`PartRegistry`]. [`resolve_tap`] maps a
//! tap on the rendered robot back to a [`SelectionEvent`], and
//! [`RobotViewer`] keeps the current scene and selection consistent.

pub mod assemble;
pub mod camera;
pub mod catalog;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod model;
pub mod pick;
pub mod registry;
pub mod scene;
pub mod selection;

pub use assemble::{assemble, default_lights, region_anchor};
pub use camera::{screen_to_world_ray, world_to_screen, CameraParams, Ray, Viewport};
pub use catalog::shapes_for;
pub use error::SceneError;
pub use geometry::{Emission, MaterialSpec, PrimitiveShape, ShapeSpec, Transform};
pub use model::{BodyRegion, Color, Palette, RobotVariant};
pub use pick::{pick, resolve_ray, resolve_tap, resolve_tap_with, tap_point_for, Hit};
pub use registry::PartRegistry;
pub use scene::{Geometry, Light, NodeHandle, RobotScene, SceneBuilder, SceneId, SceneNode};
pub use selection::{RobotViewer, SelectionEvent, SelectionState};
