//! Select-tool phases, run once per frame in a fixed order.
//!
//! 1. [`resize_phase`] deforms the single selected object through a latched handle.
//! 2. [`move_phase`] drags every selected object once the drag is armed.
//! 3. [`delete_phase`] removes selected objects on a Delete press.
//! 4. [`shortcut_phase`] handles Escape and Ctrl/Cmd+A.
//! 5. [`click_phase`] updates selection on primary release.
//!
//! An active resize skips phases 2-5 and a handled shortcut skips phase 5.
//! [`run`] wires them together and reports what happened.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::camera::{Point, Viewport};
use crate::config::InteractionConfig;
use crate::hit::{handle_at, resized_rect};
use crate::input::{Button, InputSource, Key};
use crate::object::ResizeMask;
use crate::render::CursorShape;
use crate::scene::Scene;

/// Everything a phase reads besides the scene.
#[derive(Clone, Copy)]
pub struct FrameContext<'a> {
    pub viewport: &'a dyn Viewport,
    pub input: &'a dyn InputSource,
    pub config: &'a InteractionConfig,
}

impl FrameContext<'_> {
    /// Pointer position in world space.
    #[must_use]
    pub fn world_pointer(&self) -> Point {
        self.viewport.screen_to_world(self.input.pointer_position())
    }
}

/// Result of [`resize_phase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResizeStatus {
    /// A latched resize consumed this frame; later phases must not run.
    pub in_progress: bool,
    /// Cursor matching the hovered or dragged handle.
    pub cursor: CursorShape,
    /// The object's geometry changed.
    pub resized: bool,
}

/// What one select-tool frame did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectOutcome {
    pub cursor: CursorShape,
    pub resizing: bool,
    pub geometry_changed: bool,
    pub deleted: usize,
    pub selection_changed: bool,
}

/// Run phases 1-5 against `scene` for one frame.
pub fn run(scene: &mut Scene, ctx: &FrameContext<'_>) -> SelectOutcome {
    let resize = resize_phase(scene, ctx);
    let mut outcome = SelectOutcome {
        cursor: resize.cursor,
        resizing: resize.in_progress,
        geometry_changed: resize.resized,
        ..SelectOutcome::default()
    };
    if resize.in_progress {
        return outcome;
    }

    outcome.geometry_changed |= move_phase(scene, ctx);
    outcome.deleted = delete_phase(scene, ctx);
    if outcome.deleted > 0 {
        outcome.selection_changed = true;
    }

    if shortcut_phase(scene, ctx) {
        outcome.selection_changed = true;
        return outcome;
    }

    outcome.selection_changed |= click_phase(scene, ctx);
    outcome
}

/// Phase 1: handle-based resize of the single selected object.
///
/// A handle is armed while the pointer hovers it with the button up; the
/// next held frames deform the object. The release that ends a resize is
/// consumed here so it never reaches click selection. Masks are dropped
/// whenever the selection is not a single object.
pub fn resize_phase(scene: &mut Scene, ctx: &FrameContext<'_>) -> ResizeStatus {
    let Some(index) = scene.single_selected() else {
        scene.clear_resize_masks();
        return ResizeStatus::default();
    };
    let world = ctx.world_pointer();
    let held = ctx.input.is_button_down(Button::Primary);
    let object = &mut scene[index];
    let latched = object.state.resize;

    if !latched.is_empty() {
        if held {
            let bounds = object.bounding_box();
            let target = resized_rect(bounds, latched, world, ctx.input.shift());
            let min = ctx.config.min_resize_extent;
            let resized = if !object.accepts_resize(target, min) {
                tracing::trace!(width = target.width, height = target.height, "resize rejected");
                false
            } else {
                object.resize_to(target);
                true
            };
            return ResizeStatus { in_progress: true, cursor: CursorShape::for_mask(latched), resized };
        }

        object.state.resize = ResizeMask::NONE;
        if ctx.input.is_button_released(Button::Primary) {
            tracing::debug!(id = %object.id, "resize finished");
            return ResizeStatus { in_progress: true, cursor: CursorShape::for_mask(latched), resized: false };
        }
    }

    if held {
        return ResizeStatus::default();
    }
    let hovered = handle_at(world, object.bounding_box(), ctx.config.handle_radius, ctx.config.edge_thickness);
    object.state.resize = hovered;
    ResizeStatus { in_progress: false, cursor: CursorShape::for_mask(hovered), resized: false }
}

/// Phase 2: drag selected objects. Returns whether anything moved.
///
/// A selected object starts following the pointer the frame after the
/// pointer was first seen over any selected object.
pub fn move_phase(scene: &mut Scene, ctx: &FrameContext<'_>) -> bool {
    if !ctx.input.is_button_down(Button::Primary) {
        for object in scene.iter_mut() {
            object.state.is_moved = false;
        }
        return false;
    }

    let world = ctx.world_pointer();
    let over_selected = scene.iter().any(|o| o.is_selected() && o.is_under(world));
    let delta = ctx.input.pointer_delta() * (1.0 / ctx.viewport.zoom());
    let mut moved = false;

    for object in scene.iter_mut().filter(|o| o.is_selected()) {
        if object.state.is_moved {
            object.move_by(delta);
            moved = true;
        } else if over_selected {
            object.state.is_moved = true;
        }
    }
    moved
}

/// Phase 3: remove every selected object on a Delete press. Returns the count removed.
pub fn delete_phase(scene: &mut Scene, ctx: &FrameContext<'_>) -> usize {
    if !ctx.input.is_key_pressed(Key::Delete) {
        return 0;
    }
    let removed = scene.delete_selected();
    if removed > 0 {
        tracing::info!(count = removed, remaining = scene.len(), "objects deleted");
    }
    removed
}

/// Phase 4: Escape clears the selection, Ctrl/Cmd+A selects everything.
/// Returns whether a shortcut fired.
pub fn shortcut_phase(scene: &mut Scene, ctx: &FrameContext<'_>) -> bool {
    if ctx.input.is_key_pressed(Key::Escape) {
        scene.select_all(false);
        return true;
    }
    if ctx.input.command() && ctx.input.is_key_pressed(Key::A) {
        scene.select_all(true);
        return true;
    }
    false
}

/// Phase 5: click selection on primary release. Returns whether any flag flipped.
///
/// With Shift, hit objects toggle and the rest are untouched. Without it,
/// hit objects become selected and the rest are cleared.
pub fn click_phase(scene: &mut Scene, ctx: &FrameContext<'_>) -> bool {
    if !ctx.input.is_button_released(Button::Primary) {
        return false;
    }
    let world = ctx.world_pointer();
    let additive = ctx.input.shift();
    let mut changed = false;

    for object in scene.iter_mut() {
        let hit = object.is_under(world);
        let next = if additive { object.is_selected() != hit } else { hit };
        if next != object.is_selected() {
            object.set_selected(next);
            changed = true;
        }
    }
    changed
}
