//! Tunable interaction thresholds.
//!
//! Every field defaults to the matching constant in [`crate::consts`]. Hosts
//! that expose settings build one of these and hand it to
//! [`crate::engine::EngineCore::with_config`].

use serde::{Deserialize, Serialize};

use crate::consts::{DROP_OFFSET, EDGE_THICKNESS, HANDLE_RADIUS, MIN_RESIZE_EXTENT, ZOOM_STEP};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Radius of the corner resize handles.
    pub handle_radius: f64,
    /// Thickness of the edge resize handles.
    pub edge_thickness: f64,
    /// Rectangles with a side at or below this are rejected while resizing.
    pub min_resize_extent: f64,
    /// Zoom multiplier per wheel notch.
    pub zoom_step: f64,
    /// Offset between consecutive dropped pictures.
    pub drop_offset: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            handle_radius: HANDLE_RADIUS,
            edge_thickness: EDGE_THICKNESS,
            min_resize_extent: MIN_RESIZE_EXTENT,
            zoom_step: ZOOM_STEP,
            drop_offset: DROP_OFFSET,
        }
    }
}
