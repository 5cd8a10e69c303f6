//! Scene model and interaction engine for the sketchboard drawing surface.
//!
//! The crate owns everything with real invariants: the growable storage the
//! scene lives in, the polymorphic scene objects (curves, lines, pictures),
//! and the per-frame state machine that turns polled pointer/keyboard state
//! into selection, drag-move, handle-based resize, and deletion. Windowing,
//! image decoding, and pixel output are left to the host, which drives
//! [`engine::EngineCore::frame`] once per frame and then draws the scene
//! through a [`render::Painter`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::EngineCore`] and the per-frame [`engine::Action`] list |
//! | [`scene`] | Ordered object store with swap-remove compaction |
//! | [`object`] | Scene objects: [`object::Curve`], [`object::Line`], [`object::Picture`] |
//! | [`array`] | [`array::DynArray`], the doubling growable buffer everything is stored in |
//! | [`camera`] | Geometry primitives, pan/zoom camera and the [`camera::Viewport`] seam |
//! | [`input`] | Tools, buttons, keys and the [`input::InputSource`] seam |
//! | [`hit`] | Resize handle regions and rectangle derivation |
//! | [`selection`] | Select-tool phases: resize, move, delete, shortcuts, click |
//! | [`pen`] | Two-phase "draw new" tool for curves and lines |
//! | [`render`] | [`render::Painter`] seam, cursor shapes and scene drawing |
//! | [`config`] | Tunable interaction thresholds |
//! | [`consts`] | Shared numeric defaults |

pub mod array;
pub mod camera;
pub mod config;
pub mod consts;
pub mod engine;
pub mod hit;
pub mod input;
pub mod object;
pub mod pen;
pub mod render;
pub mod scene;
pub mod selection;
