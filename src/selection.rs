//! Selection lifecycle driven by taps.
//!
//! `Idle -> PartSelected` on a tap that resolves to a region, and back to
//! `Idle` when the host dismisses the detail view. The selected event only
//! exists inside `PartSelected`, so a dismissed region cannot linger.

use glam::Vec2;

use crate::assemble::assemble;
use crate::camera::{CameraParams, Viewport};
use crate::model::{BodyRegion, RobotVariant};
use crate::pick::{resolve_tap, resolve_tap_with};
use crate::scene::RobotScene;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SelectionEvent {
    pub region: BodyRegion,
    pub variant: RobotVariant,
}

impl SelectionEvent {
    pub fn new(region: BodyRegion, variant: RobotVariant) -> Self {
        Self { region, variant }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    PartSelected(SelectionEvent),
}

impl SelectionState {
    /// Apply a tap result. A resolved tap selects (replacing any current
    /// selection); a tap that resolved to nothing leaves the state alone.
    /// Returns whether the state changed.
    pub fn on_tap(&mut self, event: Option<SelectionEvent>) -> bool {
        match event {
            Some(e) if *self != SelectionState::PartSelected(e) => {
                *self = SelectionState::PartSelected(e);
                true
            }
            _ => false,
        }
    }

    /// Return to `Idle`, handing back the event that was being shown.
    pub fn dismiss(&mut self) -> Option<SelectionEvent> {
        match std::mem::take(self) {
            SelectionState::PartSelected(e) => Some(e),
            SelectionState::Idle => None,
        }
    }

    pub fn selected(&self) -> Option<SelectionEvent> {
        match self {
            SelectionState::PartSelected(e) => Some(*e),
            SelectionState::Idle => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, SelectionState::Idle)
    }
}

/// The current robot scene together with its selection.
///
/// Taps always resolve against the scene built by the most recent variant
/// change; switching variants rebuilds the scene and clears the selection.
#[derive(Debug)]
pub struct RobotViewer {
    scene: RobotScene,
    state: SelectionState,
}

impl RobotViewer {
    pub fn new(variant: RobotVariant) -> Self {
        Self {
            scene: assemble(variant),
            state: SelectionState::Idle,
        }
    }

    pub fn variant(&self) -> RobotVariant {
        self.scene.variant()
    }

    pub fn scene(&self) -> &RobotScene {
        &self.scene
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn select_variant(&mut self, variant: RobotVariant) {
        log::info!(
            "[viewer] switch {} -> {}",
            self.scene.variant().key(),
            variant.key()
        );
        self.scene = assemble(variant);
        self.state = SelectionState::Idle;
    }

    /// Resolve a tap with the scene camera and update the selection.
    pub fn tap(&mut self, viewport: &Viewport, point: Vec2) -> Option<SelectionEvent> {
        let event = resolve_tap(&self.scene, viewport, point);
        self.apply(event)
    }

    /// Same as [`RobotViewer::tap`] for a camera moved by the render surface.
    pub fn tap_with_camera(
        &mut self,
        camera: &CameraParams,
        viewport: &Viewport,
        point: Vec2,
    ) -> Option<SelectionEvent> {
        let event = resolve_tap_with(&self.scene, camera, viewport, point);
        self.apply(event)
    }

    pub fn dismiss(&mut self) -> Option<SelectionEvent> {
        let dismissed = self.state.dismiss();
        if let Some(e) = dismissed {
            log::info!("[viewer] dismissed {}", e.region.key());
        }
        dismissed
    }

    fn apply(&mut self, event: Option<SelectionEvent>) -> Option<SelectionEvent> {
        if self.state.on_tap(event) {
            if let Some(e) = event {
                log::info!("[viewer] selected {} on {}", e.region.key(), e.variant.key());
            }
        }
        event
    }
}
