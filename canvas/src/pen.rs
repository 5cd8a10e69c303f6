//! Two-phase "draw new" tool for curves and lines.
//!
//! `Up` waits for a primary press outside the reserved chrome and appends a
//! fresh object at the world-space press point. `Down` extends the most
//! recently appended object on every held frame and returns to `Up` once the
//! button is no longer held.

#[cfg(test)]
#[path = "pen_test.rs"]
mod pen_test;

use crate::camera::Rect;
use crate::input::{Button, Tool};
use crate::object::{ObjectId, ObjectKind, SceneObject, Shape, Stroke};
use crate::scene::Scene;
use crate::selection::FrameContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PenState {
    #[default]
    Up,
    Down,
}

/// What a pen frame did to the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PenEvent {
    /// A new object was appended.
    Started(ObjectId),
    /// The in-progress object grew.
    Extended,
    /// The stroke ended.
    Finished,
}

#[derive(Debug, Default)]
pub struct Pen {
    state: PenState,
}

impl Pen {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> PenState {
        self.state
    }

    /// Abandon any stroke in progress. The object drawn so far stays in the scene.
    pub fn reset(&mut self) {
        self.state = PenState::Up;
    }

    /// Advance one frame. `reserved` holds screen-space chrome rectangles.
    ///
    /// # Panics
    ///
    /// If `tool` is not a drawing tool, or if the pen is down and the last
    /// object in the scene is not the kind `tool` draws.
    pub fn update(
        &mut self,
        scene: &mut Scene,
        tool: Tool,
        stroke: Stroke,
        reserved: &[Rect],
        ctx: &FrameContext<'_>,
    ) -> Option<PenEvent> {
        assert!(tool.is_drawing(), "pen driven with non-drawing tool {tool:?}");

        match self.state {
            PenState::Up => {
                if !ctx.input.is_button_pressed(Button::Primary) {
                    return None;
                }
                let screen = ctx.input.pointer_position();
                if reserved.iter().any(|r| r.contains(screen)) {
                    tracing::trace!(x = screen.x, y = screen.y, "press over reserved region");
                    return None;
                }
                let at = ctx.world_pointer();
                let object = if tool == Tool::Line {
                    SceneObject::line(at, stroke)
                } else {
                    SceneObject::curve(at, stroke)
                };
                let id = object.id;
                scene.push(object);
                self.state = PenState::Down;
                Some(PenEvent::Started(id))
            }
            PenState::Down => {
                if !ctx.input.is_button_down(Button::Primary) {
                    self.state = PenState::Up;
                    return Some(PenEvent::Finished);
                }
                let drawing = if tool == Tool::Line { ObjectKind::Line } else { ObjectKind::Curve };
                let last_kind = scene.iter().next_back().map(SceneObject::kind);
                assert_eq!(last_kind, Some(drawing), "pen is down but the last object is not being drawn");

                let at = ctx.world_pointer();
                let grew = match scene.last_mut().map(|o| &mut o.shape) {
                    Some(Shape::Curve(curve)) => curve.push_point(at),
                    Some(Shape::Line(line)) => {
                        let changed = line.end != at;
                        line.end = at;
                        changed
                    }
                    Some(Shape::Picture(_)) | None => false,
                };
                grew.then_some(PenEvent::Extended)
            }
        }
    }
}
