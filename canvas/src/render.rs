//! Rendering seam: the [`Painter`] a host implements, cursor shapes, and scene drawing.
//!
//! This module never touches pixels. It walks the scene in z-order (index 0
//! first) and turns each object plus its selection state into painter calls.
//! All coordinates handed to a painter are in world space; the painter owns
//! the camera transform.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use image::DynamicImage;

use crate::camera::{Point, Rect};
use crate::object::{ResizeMask, Stroke};
use crate::scene::Scene;

/// Pointer glyph the host should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    #[default]
    Default,
    /// Top or bottom edge.
    ResizeVertical,
    /// Left or right edge.
    ResizeHorizontal,
    /// Top-left or bottom-right corner.
    ResizeNwse,
    /// Top-right or bottom-left corner.
    ResizeNesw,
}

impl CursorShape {
    /// Cursor matching a handle mask.
    #[must_use]
    pub fn for_mask(mask: ResizeMask) -> Self {
        let top_left = ResizeMask::TOP | ResizeMask::LEFT;
        let bottom_right = ResizeMask::BOTTOM | ResizeMask::RIGHT;
        if mask == top_left || mask == bottom_right {
            Self::ResizeNwse
        } else if mask.is_corner() {
            Self::ResizeNesw
        } else if mask.intersects(ResizeMask::TOP | ResizeMask::BOTTOM) {
            Self::ResizeVertical
        } else if mask.intersects(ResizeMask::LEFT | ResizeMask::RIGHT) {
            Self::ResizeHorizontal
        } else {
            Self::Default
        }
    }
}

/// Drawing backend supplied by the host.
pub trait Painter {
    /// Connected segments through `points`. A single point is a dot of the stroke's thickness.
    fn draw_polyline(&mut self, points: &[Point], stroke: Stroke);

    fn draw_line(&mut self, start: Point, end: Point, stroke: Stroke);

    /// Draw `image` at its pixel size with its top-left corner at `top_left`.
    fn draw_image(&mut self, top_left: Point, image: &DynamicImage);

    /// Selection outline around `rect`.
    fn draw_outline(&mut self, rect: Rect);

    /// Circular resize handle marker.
    fn draw_handle(&mut self, center: Point, radius: f64);
}

/// Draw every object in z-order, with handles when exactly one object is selected.
pub fn draw_scene(painter: &mut dyn Painter, scene: &Scene, handle_radius: f64) {
    for object in scene.iter() {
        object.draw(painter);
    }

    if let Some(only) = scene.single_selected() {
        let r = scene[only].bounding_box();
        for corner in [r.top_left(), r.top_right(), r.bottom_left(), r.bottom_right()] {
            painter.draw_handle(corner, handle_radius);
        }
    }
}
