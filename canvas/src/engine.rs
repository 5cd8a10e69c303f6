use image::DynamicImage;

use crate::camera::{Camera, Point, Rect};
use crate::config::InteractionConfig;
use crate::consts::DEFAULT_THICKNESS;
use crate::input::{Button, InputSource, Tool};
use crate::object::{Color, ObjectId, SceneObject, Stroke};
use crate::pen::{Pen, PenEvent, PenState};
use crate::render::CursorShape;
use crate::scene::Scene;
use crate::selection::{self, FrameContext};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from [`EngineCore::frame`] for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ObjectCreated(ObjectId),
    ObjectsDeleted(usize),
    SetCursor(CursorShape),
    RenderNeeded,
}

/// Core engine state: the scene plus everything that persists between frames.
pub struct EngineCore {
    pub scene: Scene,
    pub camera: Camera,
    tool: Tool,
    pen: Pen,
    stroke: Stroke,
    reserved: Vec<Rect>,
    config: InteractionConfig,
    cursor: CursorShape,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            scene: Scene::new(),
            camera: Camera::default(),
            tool: Tool::default(),
            pen: Pen::new(),
            stroke: Stroke::new(Color::WHITE, DEFAULT_THICKNESS),
            reserved: Vec::new(),
            config: InteractionConfig::default(),
            cursor: CursorShape::Default,
            viewport_width: 0.0,
            viewport_height: 0.0,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: InteractionConfig) -> Self {
        Self { config, ..Self::default() }
    }

    // --- Settings ---

    /// Switch tools. Entering a drawing tool clears the selection and any
    /// in-flight drag or resize; leaving one lifts the pen.
    pub fn set_tool(&mut self, tool: Tool) {
        if tool == self.tool {
            return;
        }
        tracing::debug!(from = ?self.tool, to = ?tool, "tool changed");
        self.tool = tool;
        self.pen.reset();
        if tool.is_drawing() {
            self.scene.select_all(false);
            self.scene.reset_interaction();
        }
    }

    /// Color and thickness for objects drawn from now on.
    pub fn set_stroke(&mut self, stroke: Stroke) {
        self.stroke = stroke;
    }

    /// Screen-space rectangles (toolbar, palette) where a press never starts a stroke.
    pub fn set_reserved_regions(&mut self, regions: Vec<Rect>) {
        self.reserved = regions;
    }

    /// Update viewport dimensions. Zoom is anchored at the viewport center.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    // --- Data inputs ---

    /// Place decoded pictures dropped at `screen_point`.
    ///
    /// Slot `i` lands at the world drop point offset by `i * drop_offset` on
    /// both axes. `None` slots are files that failed to decode; they are
    /// skipped but still consume their offset.
    pub fn add_pictures<I>(&mut self, images: I, screen_point: Point) -> Vec<ObjectId>
    where
        I: IntoIterator<Item = Option<DynamicImage>>,
    {
        let origin = self.camera.screen_to_world(screen_point);
        let step = self.config.drop_offset;
        let mut ids = Vec::new();
        let mut offset = 0.0;
        for image in images {
            if let Some(image) = image {
                let object = SceneObject::picture(image, origin + Point::new(offset, offset));
                ids.push(object.id);
                self.scene.push(object);
            }
            offset += step;
        }
        tracing::info!(count = ids.len(), "pictures placed");
        ids
    }

    // --- Frame ---

    /// Run one frame: camera control, then the active tool.
    pub fn frame(&mut self, input: &dyn InputSource) -> Vec<Action> {
        let mut actions = Vec::new();
        let mut render = self.update_camera(input);

        let ctx = FrameContext { viewport: &self.camera, input, config: &self.config };
        let cursor = if self.tool.is_drawing() {
            match self.pen.update(&mut self.scene, self.tool, self.stroke, &self.reserved, &ctx) {
                Some(PenEvent::Started(id)) => {
                    actions.push(Action::ObjectCreated(id));
                    render = true;
                }
                Some(PenEvent::Extended) => render = true,
                Some(PenEvent::Finished) | None => {}
            }
            CursorShape::Default
        } else {
            let outcome = selection::run(&mut self.scene, &ctx);
            if outcome.deleted > 0 {
                actions.push(Action::ObjectsDeleted(outcome.deleted));
            }
            render |= outcome.geometry_changed || outcome.selection_changed;
            outcome.cursor
        };

        if cursor != self.cursor {
            self.cursor = cursor;
            actions.push(Action::SetCursor(cursor));
        }
        if render {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    /// Wheel zoom and middle-button pan. Returns whether the camera changed.
    fn update_camera(&mut self, input: &dyn InputSource) -> bool {
        let mut changed = false;
        let wheel = input.wheel();
        if wheel != 0.0 {
            let factor = if wheel > 0.0 { self.config.zoom_step } else { 1.0 / self.config.zoom_step };
            let center = Point::new(self.viewport_width / 2.0, self.viewport_height / 2.0);
            self.camera.zoom_about(center, factor);
            changed = true;
        }
        if input.is_button_down(Button::Middle) {
            let delta = input.pointer_delta();
            if delta != Point::default() {
                self.camera.pan_by(delta);
                changed = true;
            }
        }
        changed
    }

    /// Dispose every object.
    pub fn clear(&mut self) {
        self.scene.clear();
        self.pen.reset();
    }

    // --- Queries ---

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    #[must_use]
    pub fn stroke(&self) -> Stroke {
        self.stroke
    }

    #[must_use]
    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    /// Cursor last requested through [`Action::SetCursor`].
    #[must_use]
    pub fn cursor(&self) -> CursorShape {
        self.cursor
    }

    #[must_use]
    pub fn pen_state(&self) -> PenState {
        self.pen.state()
    }

    /// Look up an object by ID.
    #[must_use]
    pub fn object(&self, id: &ObjectId) -> Option<&SceneObject> {
        self.scene.find(id)
    }

    /// IDs of the currently selected objects, in z-order.
    #[must_use]
    pub fn selection(&self) -> Vec<ObjectId> {
        self.scene.iter().filter(|o| o.is_selected()).map(|o| o.id).collect()
    }
}
