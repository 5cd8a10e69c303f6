//! Shared numeric constants for the canvas crate.

// ── Hit-testing ─────────────────────────────────────────────────

/// Radius of the circular corner resize handles, in world units.
pub const HANDLE_RADIUS: f64 = 10.0;

/// Thickness of the edge resize handles, in world units.
pub const EDGE_THICKNESS: f64 = 10.0;

/// Triangle-inequality slack under which a point counts as on a line.
pub const LINE_HIT_SLOP: f64 = 10.0;

/// A curve vertex is hit within this many stroke thicknesses.
pub const CURVE_HIT_THICKNESS_FACTOR: f64 = 2.0;

// ── Resizing ────────────────────────────────────────────────────

/// Resizes producing a width or height at or below this are rejected.
pub const MIN_RESIZE_EXTENT: f64 = 1.0;

/// A curve axis with no extent accepts only targets within this of zero.
pub const FLAT_AXIS_TOLERANCE: f64 = 1e-9;

// ── Camera ──────────────────────────────────────────────────────

/// Multiplicative zoom change per wheel notch.
pub const ZOOM_STEP: f64 = 1.1;

// ── Pictures ────────────────────────────────────────────────────

/// Per-file diagonal offset for pictures dropped together, in world units.
pub const DROP_OFFSET: f64 = 30.0;

// ── Drawing defaults ────────────────────────────────────────────

/// Stroke thickness used by a fresh engine.
pub const DEFAULT_THICKNESS: f64 = 5.0;

/// Stroke width of selection outlines, in screen pixels.
pub const SELECTION_OUTLINE_PX: f64 = 1.0;
