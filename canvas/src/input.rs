//! Input model: tools, buttons, keys and the polled [`InputSource`] seam.
//!
//! The controller reads input by polling once per frame. Edge-triggered
//! queries ("just pressed", "just released") and level-triggered ones
//! ("down") are distinct methods; click-selection relies on release edges
//! while dragging relies on the held level. [`FrameInput`] is a plain
//! snapshot implementing the trait, used by scripted replays and tests.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Select, move, resize and delete existing objects (default).
    #[default]
    Select,
    /// Draw a freehand curve.
    Curve,
    /// Draw a straight line.
    Line,
}

impl Tool {
    /// Whether this tool creates new objects.
    #[must_use]
    pub fn is_drawing(self) -> bool {
        matches!(self, Self::Curve | Self::Line)
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click); pans the camera.
    Middle,
}

/// Keys the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    Delete,
    Escape,
    A,
    Shift,
    Control,
    /// Command on macOS.
    Super,
}

/// Polled per-frame input.
pub trait InputSource {
    /// Level: the button is held this frame.
    fn is_button_down(&self, button: Button) -> bool;

    /// Edge: the button went down this frame.
    fn is_button_pressed(&self, button: Button) -> bool;

    /// Edge: the button went up this frame.
    fn is_button_released(&self, button: Button) -> bool;

    /// Level: the key is held this frame.
    fn is_key_down(&self, key: Key) -> bool;

    /// Edge: the key went down this frame (auto-repeat excluded).
    fn is_key_pressed(&self, key: Key) -> bool;

    /// Pointer position in screen space.
    fn pointer_position(&self) -> Point;

    /// Pointer movement since the previous frame, in screen space.
    fn pointer_delta(&self) -> Point;

    /// Wheel notches this frame; positive zooms in.
    fn wheel(&self) -> f64 {
        0.0
    }

    /// Shift is held.
    fn shift(&self) -> bool {
        self.is_key_down(Key::Shift)
    }

    /// Ctrl or Cmd is held.
    fn command(&self) -> bool {
        self.is_key_down(Key::Control) || self.is_key_down(Key::Super)
    }
}

/// A complete input snapshot for one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrameInput {
    /// Pointer position in screen space.
    pub pointer: Point,
    /// Pointer movement since the previous frame.
    pub delta: Point,
    /// Buttons held.
    pub down: Vec<Button>,
    /// Buttons that went down this frame.
    pub pressed: Vec<Button>,
    /// Buttons that went up this frame.
    pub released: Vec<Button>,
    /// Keys held.
    pub keys_down: Vec<Key>,
    /// Keys that went down this frame.
    pub keys_pressed: Vec<Key>,
    /// Wheel notches.
    pub wheel: f64,
}

impl FrameInput {
    /// A frame with the pointer at `pointer` and nothing else happening.
    #[must_use]
    pub fn at(pointer: Point) -> Self {
        Self { pointer, ..Self::default() }
    }

    /// Build the frame that follows `self` when the pointer moves to `pointer`
    /// and `button` is held (pressed if it was not held before).
    #[must_use]
    pub fn next_held(&self, pointer: Point, button: Button) -> Self {
        let mut next = Self {
            pointer,
            delta: pointer - self.pointer,
            down: self.down.clone(),
            keys_down: self.keys_down.clone(),
            ..Self::default()
        };
        if !next.down.contains(&button) {
            next.down.push(button);
            next.pressed.push(button);
        }
        next
    }

    /// Build the frame that follows `self` when `button` is let go at `pointer`.
    #[must_use]
    pub fn next_released(&self, pointer: Point, button: Button) -> Self {
        let mut next = Self {
            pointer,
            delta: pointer - self.pointer,
            down: self.down.iter().copied().filter(|b| *b != button).collect(),
            keys_down: self.keys_down.clone(),
            ..Self::default()
        };
        if self.down.contains(&button) {
            next.released.push(button);
        }
        next
    }

    /// Add a held key.
    #[must_use]
    pub fn holding(mut self, key: Key) -> Self {
        if !self.keys_down.contains(&key) {
            self.keys_down.push(key);
        }
        self
    }

    /// Add a key press edge (the key is also held).
    #[must_use]
    pub fn pressing(mut self, key: Key) -> Self {
        self.keys_pressed.push(key);
        self.holding(key)
    }
}

impl InputSource for FrameInput {
    fn is_button_down(&self, button: Button) -> bool {
        self.down.contains(&button)
    }

    fn is_button_pressed(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }

    fn is_button_released(&self, button: Button) -> bool {
        self.released.contains(&button)
    }

    fn is_key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    fn pointer_position(&self) -> Point {
        self.pointer
    }

    fn pointer_delta(&self) -> Point {
        self.delta
    }

    fn wheel(&self) -> f64 {
        self.wheel
    }
}
