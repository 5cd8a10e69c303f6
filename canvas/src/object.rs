//! Scene objects: the closed set of drawable entities and their shared interaction state.
//!
//! A [`SceneObject`] pairs one active [`Shape`] variant with a [`Selectable`]
//! block that only the interaction controller mutates. All per-variant
//! behavior goes through the [`Geometry`] trait, and [`Shape`] dispatches to
//! it by exhaustive `match`, so adding a variant is a compile error until
//! every capability is covered.
//!
//! Geometry is in world coordinates throughout.

#[cfg(test)]
#[path = "object_test.rs"]
mod object_test;

use bitflags::bitflags;
use image::DynamicImage;
use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::array::DynArray;
use crate::camera::{Point, Rect};
use crate::consts::{CURVE_HIT_THICKNESS_FACTOR, FLAT_AXIS_TOLERANCE, LINE_HIT_SLOP};
use crate::render::Painter;

/// Unique identifier for a scene object.
pub type ObjectId = Uuid;

/// The kind of a scene object, as reported in summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    /// Freehand polyline.
    Curve,
    /// Straight segment between two endpoints.
    Line,
    /// Placed raster image.
    Picture,
}

bitflags! {
    /// Which edges of the bounding box an active resize drags.
    ///
    /// Corner drags set one vertical and one horizontal bit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ResizeMask: u8 {
        const TOP = 1;
        const BOTTOM = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl ResizeMask {
    /// No resize latched.
    pub const NONE: Self = Self::empty();

    /// Whether both a vertical and a horizontal edge are set.
    #[must_use]
    pub fn is_corner(self) -> bool {
        self.intersects(Self::TOP | Self::BOTTOM) && self.intersects(Self::LEFT | Self::RIGHT)
    }
}

/// Transient interaction flags carried by every object. Never serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selectable {
    pub is_selected: bool,
    /// Set once a drag has been armed; the object follows the pointer from the next frame.
    pub is_moved: bool,
    pub resize: ResizeMask,
}

/// RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`. Returns `None` for anything else.
    #[must_use]
    pub fn from_hex(raw: &str) -> Option<Self> {
        let hex = raw.strip_prefix('#')?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let Ok(value) = u32::from_str_radix(hex, 16) else {
            return None;
        };
        let [b0, b1, b2, b3] = value.to_be_bytes();
        match hex.len() {
            6 => Some(Self::rgb(b1, b2, b3)),
            8 => Some(Self { r: b0, g: b1, b: b2, a: b3 }),
            _ => None,
        }
    }

    /// Format as `#RRGGBB`, ignoring alpha.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Stroke color and thickness for curves and lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub thickness: f64,
}

impl Stroke {
    #[must_use]
    pub fn new(color: Color, thickness: f64) -> Self {
        Self { color, thickness }
    }
}

/// Per-variant capabilities. [`Shape`] forwards to these by variant tag.
pub trait Geometry {
    /// World-space box used for selection outlines, resize handles and coarse hit-testing.
    fn bounding_box(&self) -> Rect;

    /// Whether `point` (world space) touches the visible geometry.
    fn is_under(&self, point: Point) -> bool;

    /// Translate all owned geometry by `delta`.
    fn move_by(&mut self, delta: Point);

    /// Whether [`Self::resize_to`] can fit the geometry to `new_rect` with
    /// both sides longer than `min_extent`.
    fn accepts_resize(&self, new_rect: Rect, min_extent: f64) -> bool {
        new_rect.width > min_extent && new_rect.height > min_extent
    }

    /// Fit the geometry to `new_rect`, which is in the same frame as [`Self::bounding_box`].
    fn resize_to(&mut self, new_rect: Rect);

    /// Emit the variant's drawing calls.
    fn draw(&self, painter: &mut dyn Painter);
}

// =============================================================
// Curve
// =============================================================

/// Freehand curve: an append-only point list with an incrementally maintained extent.
#[derive(Debug, Clone)]
pub struct Curve {
    points: DynArray<Point>,
    pub stroke: Stroke,
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl Curve {
    /// Start a curve at `first`.
    #[must_use]
    pub fn new(first: Point, stroke: Stroke) -> Self {
        let mut points = DynArray::new();
        points.push_back(first);
        Self { points, stroke, min_x: first.x, max_x: first.x, min_y: first.y, max_y: first.y }
    }

    /// Append `p` unless it equals the last recorded point. Returns whether it was appended.
    pub fn push_point(&mut self, p: Point) -> bool {
        if self.points.last() == Some(&p) {
            return false;
        }
        self.points.push_back(p);
        self.min_x = self.min_x.min(p.x);
        self.max_x = self.max_x.max(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_y = self.max_y.max(p.y);
        true
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        self.points.as_slice()
    }

    /// Raw extent of the recorded points, without stroke inflation.
    #[must_use]
    pub fn extent(&self) -> Rect {
        Rect::new(self.min_x, self.min_y, self.max_x - self.min_x, self.max_y - self.min_y)
    }

    fn release(&mut self) {
        self.points.clear();
    }
}

impl Geometry for Curve {
    fn bounding_box(&self) -> Rect {
        self.extent().inflate(self.stroke.thickness)
    }

    fn is_under(&self, point: Point) -> bool {
        if !self.bounding_box().contains(point) {
            return false;
        }
        let reach = CURVE_HIT_THICKNESS_FACTOR * self.stroke.thickness;
        let reach_sq = reach * reach;
        self.points.iter().any(|v| v.distance_squared(point) < reach_sq)
    }

    fn move_by(&mut self, delta: Point) {
        for p in &mut self.points {
            *p += delta;
        }
        self.min_x += delta.x;
        self.max_x += delta.x;
        self.min_y += delta.y;
        self.max_y += delta.y;
    }

    /// The points live inside the stroke inflation, so the floor applies to
    /// `new_rect` minus twice the thickness. An axis with no extent can only
    /// keep its size.
    fn accepts_resize(&self, new_rect: Rect, min_extent: f64) -> bool {
        if new_rect.width <= min_extent || new_rect.height <= min_extent {
            return false;
        }
        let inset = 2.0 * self.stroke.thickness;
        let old = self.extent();
        let axis = |target: f64, current: f64| {
            if current > 0.0 { target > min_extent } else { (target - current).abs() <= FLAT_AXIS_TOLERANCE }
        };
        axis(new_rect.width - inset, old.width) && axis(new_rect.height - inset, old.height)
    }

    fn resize_to(&mut self, new_rect: Rect) {
        assert!(self.accepts_resize(new_rect, 0.0), "curve cannot be fitted to {new_rect:?}");
        let t = self.stroke.thickness;
        let target_w = new_rect.width - 2.0 * t;
        let target_h = new_rect.height - 2.0 * t;
        let old = self.extent();
        let sx = if old.width > 0.0 { target_w / old.width } else { 1.0 };
        let sy = if old.height > 0.0 { target_h / old.height } else { 1.0 };
        let origin = Point::new(new_rect.x + t, new_rect.y + t);

        for p in &mut self.points {
            p.x = origin.x + (p.x - old.x) * sx;
            p.y = origin.y + (p.y - old.y) * sy;
        }
        self.min_x = origin.x;
        self.min_y = origin.y;
        self.max_x = origin.x + old.width * sx;
        self.max_y = origin.y + old.height * sy;
    }

    fn draw(&self, painter: &mut dyn Painter) {
        painter.draw_polyline(self.points(), self.stroke);
    }
}

// =============================================================
// Line
// =============================================================

/// Straight segment. Owns no heap resources.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    pub stroke: Stroke,
}

impl Line {
    /// A zero-length line at `at`, as created on pen-down.
    #[must_use]
    pub fn new(at: Point, stroke: Stroke) -> Self {
        Self { start: at, end: at, stroke }
    }
}

impl Geometry for Line {
    fn bounding_box(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    fn is_under(&self, point: Point) -> bool {
        let slack = point.distance(self.start) + point.distance(self.end) - self.start.distance(self.end);
        slack < LINE_HIT_SLOP
    }

    fn move_by(&mut self, delta: Point) {
        self.start += delta;
        self.end += delta;
    }

    fn resize_to(&mut self, new_rect: Rect) {
        let (start_x, end_x) = if self.start.x <= self.end.x {
            (new_rect.x, new_rect.right())
        } else {
            (new_rect.right(), new_rect.x)
        };
        let (start_y, end_y) = if self.start.y <= self.end.y {
            (new_rect.y, new_rect.bottom())
        } else {
            (new_rect.bottom(), new_rect.y)
        };
        self.start = Point::new(start_x, start_y);
        self.end = Point::new(end_x, end_y);
    }

    fn draw(&self, painter: &mut dyn Painter) {
        painter.draw_line(self.start, self.end, self.stroke);
    }
}

// =============================================================
// Picture
// =============================================================

/// Placed image. Keeps the decoded source so every resize scales from full quality.
#[derive(Debug, Clone)]
pub struct Picture {
    source: DynamicImage,
    displayed: DynamicImage,
    pub top_left: Point,
}

impl Picture {
    #[must_use]
    pub fn new(image: DynamicImage, top_left: Point) -> Self {
        Self { displayed: image.clone(), source: image, top_left }
    }

    /// The image as currently displayed (possibly scaled).
    #[must_use]
    pub fn image(&self) -> &DynamicImage {
        &self.displayed
    }
}

/// Round a world-space extent to a pixel count of at least one.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn pixel_extent(extent: f64) -> u32 {
    extent.round().clamp(1.0, f64::from(u32::MAX)) as u32
}

impl Geometry for Picture {
    fn bounding_box(&self) -> Rect {
        Rect::new(
            self.top_left.x,
            self.top_left.y,
            f64::from(self.displayed.width()),
            f64::from(self.displayed.height()),
        )
    }

    fn is_under(&self, point: Point) -> bool {
        self.bounding_box().contains(point)
    }

    fn move_by(&mut self, delta: Point) {
        self.top_left += delta;
    }

    fn resize_to(&mut self, new_rect: Rect) {
        let width = pixel_extent(new_rect.width);
        let height = pixel_extent(new_rect.height);
        if width != self.displayed.width() || height != self.displayed.height() {
            self.displayed = self.source.resize_exact(width, height, FilterType::Triangle);
        }
        self.top_left = new_rect.top_left();
    }

    fn draw(&self, painter: &mut dyn Painter) {
        painter.draw_image(self.top_left, &self.displayed);
    }
}

// =============================================================
// Shape dispatch
// =============================================================

/// The active variant of a scene object.
#[derive(Debug, Clone)]
pub enum Shape {
    Curve(Curve),
    Line(Line),
    Picture(Picture),
}

impl Shape {
    #[must_use]
    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::Curve(_) => ObjectKind::Curve,
            Self::Line(_) => ObjectKind::Line,
            Self::Picture(_) => ObjectKind::Picture,
        }
    }

    fn geometry(&self) -> &dyn Geometry {
        match self {
            Self::Curve(c) => c,
            Self::Line(l) => l,
            Self::Picture(p) => p,
        }
    }

    fn geometry_mut(&mut self) -> &mut dyn Geometry {
        match self {
            Self::Curve(c) => c,
            Self::Line(l) => l,
            Self::Picture(p) => p,
        }
    }
}

impl Geometry for Shape {
    fn bounding_box(&self) -> Rect {
        self.geometry().bounding_box()
    }

    fn is_under(&self, point: Point) -> bool {
        self.geometry().is_under(point)
    }

    fn move_by(&mut self, delta: Point) {
        self.geometry_mut().move_by(delta);
    }

    fn accepts_resize(&self, new_rect: Rect, min_extent: f64) -> bool {
        self.geometry().accepts_resize(new_rect, min_extent)
    }

    fn resize_to(&mut self, new_rect: Rect) {
        self.geometry_mut().resize_to(new_rect);
    }

    fn draw(&self, painter: &mut dyn Painter) {
        self.geometry().draw(painter);
    }
}

// =============================================================
// SceneObject
// =============================================================

/// One drawable entity plus its interaction state.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub id: ObjectId,
    pub shape: Shape,
    pub state: Selectable,
}

impl SceneObject {
    /// Wrap a shape with a fresh id and cleared interaction state.
    #[must_use]
    pub fn new(shape: Shape) -> Self {
        Self { id: Uuid::new_v4(), shape, state: Selectable::default() }
    }

    #[must_use]
    pub fn curve(first: Point, stroke: Stroke) -> Self {
        Self::new(Shape::Curve(Curve::new(first, stroke)))
    }

    #[must_use]
    pub fn line(at: Point, stroke: Stroke) -> Self {
        Self::new(Shape::Line(Line::new(at, stroke)))
    }

    #[must_use]
    pub fn picture(image: DynamicImage, top_left: Point) -> Self {
        Self::new(Shape::Picture(Picture::new(image, top_left)))
    }

    #[must_use]
    pub fn kind(&self) -> ObjectKind {
        self.shape.kind()
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.state.is_selected
    }

    pub fn set_selected(&mut self, value: bool) {
        self.state.is_selected = value;
    }

    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        self.shape.bounding_box()
    }

    #[must_use]
    pub fn is_under(&self, point: Point) -> bool {
        self.shape.is_under(point)
    }

    pub fn move_by(&mut self, delta: Point) {
        self.shape.move_by(delta);
    }

    #[must_use]
    pub fn accepts_resize(&self, new_rect: Rect, min_extent: f64) -> bool {
        self.shape.accepts_resize(new_rect, min_extent)
    }

    pub fn resize_to(&mut self, new_rect: Rect) {
        self.shape.resize_to(new_rect);
    }

    /// Draw the geometry, then the bounding-box outline when selected.
    pub fn draw(&self, painter: &mut dyn Painter) {
        self.shape.draw(painter);
        if self.state.is_selected {
            painter.draw_outline(self.bounding_box());
        }
    }

    /// Release owned buffers and image handles.
    pub fn dispose(mut self) {
        tracing::trace!(id = %self.id, kind = ?self.kind(), "disposing object");
        match &mut self.shape {
            Shape::Curve(curve) => curve.release(),
            Shape::Picture(_) | Shape::Line(_) => {}
        }
    }
}
