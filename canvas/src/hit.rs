//! Resize handles: the eight hit regions around a bounding box and the
//! rectangle a handle drag produces.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::{Point, Rect};
use crate::object::ResizeMask;

/// Shape of a handle's hit area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Region {
    /// Corner handle.
    Circle { center: Point, radius: f64 },
    /// Edge handle, centered on the edge.
    Band(Rect),
}

impl Region {
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        match *self {
            Self::Circle { center, radius } => center.distance_squared(p) <= radius * radius,
            Self::Band(rect) => rect.contains(p),
        }
    }
}

/// One resize handle and the edges it drags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    pub mask: ResizeMask,
    pub region: Region,
}

/// The eight handles around `bounds`, in hit-test precedence order: corners, then edges.
#[must_use]
pub fn handles(bounds: Rect, radius: f64, thickness: f64) -> [Handle; 8] {
    let half = thickness / 2.0;
    let corner = |mask: ResizeMask, center: Point| Handle { mask, region: Region::Circle { center, radius } };
    let band = |mask: ResizeMask, rect: Rect| Handle { mask, region: Region::Band(rect) };
    [
        corner(ResizeMask::TOP | ResizeMask::LEFT, bounds.top_left()),
        corner(ResizeMask::TOP | ResizeMask::RIGHT, bounds.top_right()),
        corner(ResizeMask::BOTTOM | ResizeMask::LEFT, bounds.bottom_left()),
        corner(ResizeMask::BOTTOM | ResizeMask::RIGHT, bounds.bottom_right()),
        band(ResizeMask::TOP, Rect::new(bounds.x, bounds.y - half, bounds.width, thickness)),
        band(ResizeMask::BOTTOM, Rect::new(bounds.x, bounds.bottom() - half, bounds.width, thickness)),
        band(ResizeMask::LEFT, Rect::new(bounds.x - half, bounds.y, thickness, bounds.height)),
        band(ResizeMask::RIGHT, Rect::new(bounds.right() - half, bounds.y, thickness, bounds.height)),
    ]
}

/// The mask of the first handle containing `p`, or [`ResizeMask::NONE`].
#[must_use]
pub fn handle_at(p: Point, bounds: Rect, radius: f64, thickness: f64) -> ResizeMask {
    handles(bounds, radius, thickness)
        .iter()
        .find(|h| h.region.contains(p))
        .map_or(ResizeMask::NONE, |h| h.mask)
}

/// Rectangle produced by dragging the `mask` edges of `original` to `pointer`.
///
/// Edges not in the mask stay put. With `keep_aspect` and a corner mask, the
/// axis that changed more wins and the other is recomputed from the original
/// aspect ratio, anchored at the opposite corner. The result is not
/// validated; callers reject degenerate sizes.
#[must_use]
pub fn resized_rect(original: Rect, mask: ResizeMask, pointer: Point, keep_aspect: bool) -> Rect {
    let mut r = original;

    if mask.contains(ResizeMask::TOP) {
        r.y = pointer.y;
        r.height = original.bottom() - pointer.y;
    } else if mask.contains(ResizeMask::BOTTOM) {
        r.height = pointer.y - original.y;
    }

    if mask.contains(ResizeMask::LEFT) {
        r.x = pointer.x;
        r.width = original.right() - pointer.x;
    } else if mask.contains(ResizeMask::RIGHT) {
        r.width = pointer.x - original.x;
    }

    if keep_aspect && mask.is_corner() && original.width > 0.0 && original.height > 0.0 {
        let ratio = original.width / original.height;
        if (r.width - original.width).abs() >= (r.height - original.height).abs() {
            r.height = r.width / ratio;
        } else {
            r.width = r.height * ratio;
        }
        if mask.contains(ResizeMask::TOP) {
            r.y = original.bottom() - r.height;
        }
        if mask.contains(ResizeMask::LEFT) {
            r.x = original.right() - r.width;
        }
    }

    r
}
