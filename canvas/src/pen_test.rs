#![allow(clippy::float_cmp)]

use super::*;
use crate::camera::{Camera, Point};
use crate::config::InteractionConfig;
use crate::input::FrameInput;
use crate::object::{Color, SceneObject};

// =============================================================
// Helpers
// =============================================================

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn stroke() -> Stroke {
    Stroke::new(Color::rgb(200, 10, 10), 3.0)
}

const TOOLBAR: Rect = Rect { x: 0.0, y: 0.0, width: 800.0, height: 30.0 };

/// Feed one frame through the pen with the default camera.
fn step(pen: &mut Pen, scene: &mut Scene, tool: Tool, input: &FrameInput) -> Option<PenEvent> {
    step_with(pen, scene, tool, input, &Camera::default())
}

fn step_with(pen: &mut Pen, scene: &mut Scene, tool: Tool, input: &FrameInput, camera: &Camera) -> Option<PenEvent> {
    let config = InteractionConfig::default();
    let ctx = FrameContext { viewport: camera, input, config: &config };
    pen.update(scene, tool, stroke(), &[TOOLBAR], &ctx)
}

/// Press at `points[0]`, drag through the rest, then release.
fn stroke_through(pen: &mut Pen, scene: &mut Scene, tool: Tool, points: &[Point]) {
    let mut frame = FrameInput::default();
    for &p in points {
        frame = frame.next_held(p, Button::Primary);
        step(pen, scene, tool, &frame);
    }
    let last = frame.pointer;
    frame = frame.next_released(last, Button::Primary);
    step(pen, scene, tool, &frame);
}

fn curve_points(scene: &Scene, index: usize) -> Vec<Point> {
    match &scene[index].shape {
        Shape::Curve(c) => c.points().to_vec(),
        other => panic!("expected a curve, got {:?}", other.kind()),
    }
}

fn line_of(scene: &Scene, index: usize) -> (Point, Point) {
    match &scene[index].shape {
        Shape::Line(l) => (l.start, l.end),
        other => panic!("expected a line, got {:?}", other.kind()),
    }
}

// =============================================================
// PenState transitions
// =============================================================

#[test]
fn new_pen_is_up() {
    assert_eq!(Pen::new().state(), PenState::Up);
}

#[test]
fn press_starts_a_curve() {
    let mut pen = Pen::new();
    let mut scene = Scene::new();
    let press = FrameInput::at(pt(100.0, 100.0)).next_held(pt(100.0, 100.0), Button::Primary);

    let event = step(&mut pen, &mut scene, Tool::Curve, &press);

    assert_eq!(pen.state(), PenState::Down);
    assert_eq!(scene.len(), 1);
    assert_eq!(event, Some(PenEvent::Started(scene[0].id)));
    assert_eq!(curve_points(&scene, 0), vec![pt(100.0, 100.0)]);
}

#[test]
fn press_starts_a_zero_length_line() {
    let mut pen = Pen::new();
    let mut scene = Scene::new();
    let press = FrameInput::default().next_held(pt(50.0, 60.0), Button::Primary);
    step(&mut pen, &mut scene, Tool::Line, &press);
    assert_eq!(line_of(&scene, 0), (pt(50.0, 60.0), pt(50.0, 60.0)));
}

#[test]
fn hover_without_press_does_nothing() {
    let mut pen = Pen::new();
    let mut scene = Scene::new();
    let event = step(&mut pen, &mut scene, Tool::Curve, &FrameInput::at(pt(100.0, 100.0)));
    assert_eq!(event, None);
    assert!(scene.is_empty());
}

#[test]
fn held_without_press_edge_does_not_start() {
    let mut pen = Pen::new();
    let mut scene = Scene::new();
    let held = FrameInput { pointer: pt(100.0, 100.0), down: vec![Button::Primary], ..FrameInput::default() };
    step(&mut pen, &mut scene, Tool::Curve, &held);
    assert_eq!(pen.state(), PenState::Up);
    assert!(scene.is_empty());
}

#[test]
fn press_over_reserved_region_is_ignored() {
    let mut pen = Pen::new();
    let mut scene = Scene::new();
    let press = FrameInput::default().next_held(pt(400.0, 10.0), Button::Primary);
    assert_eq!(step(&mut pen, &mut scene, Tool::Curve, &press), None);
    assert_eq!(pen.state(), PenState::Up);
    assert!(scene.is_empty());
}

#[test]
fn reserved_regions_are_screen_space() {
    // World (0,0) is screen (100,100): outside the toolbar even though the world point is inside it.
    let camera = Camera { pan_x: 100.0, pan_y: 100.0, zoom: 1.0 };
    let mut pen = Pen::new();
    let mut scene = Scene::new();
    let press = FrameInput::default().next_held(pt(100.0, 100.0), Button::Primary);
    step_with(&mut pen, &mut scene, Tool::Curve, &press, &camera);
    assert_eq!(curve_points(&scene, 0), vec![pt(0.0, 0.0)]);
}

#[test]
fn release_returns_to_up() {
    let mut pen = Pen::new();
    let mut scene = Scene::new();
    let press = FrameInput::default().next_held(pt(100.0, 100.0), Button::Primary);
    step(&mut pen, &mut scene, Tool::Curve, &press);
    let release = press.next_released(pt(100.0, 100.0), Button::Primary);
    assert_eq!(step(&mut pen, &mut scene, Tool::Curve, &release), Some(PenEvent::Finished));
    assert_eq!(pen.state(), PenState::Up);
}

#[test]
fn reset_abandons_stroke_but_keeps_object() {
    let mut pen = Pen::new();
    let mut scene = Scene::new();
    let press = FrameInput::default().next_held(pt(100.0, 100.0), Button::Primary);
    step(&mut pen, &mut scene, Tool::Curve, &press);
    pen.reset();
    assert_eq!(pen.state(), PenState::Up);
    assert_eq!(scene.len(), 1);
}

// =============================================================
// Extending
// =============================================================

#[test]
fn held_frames_append_curve_points() {
    let mut pen = Pen::new();
    let mut scene = Scene::new();
    stroke_through(&mut pen, &mut scene, Tool::Curve, &[pt(100.0, 100.0), pt(110.0, 105.0), pt(120.0, 90.0)]);
    assert_eq!(curve_points(&scene, 0), vec![pt(100.0, 100.0), pt(110.0, 105.0), pt(120.0, 90.0)]);
    assert_eq!(pen.state(), PenState::Up);
}

#[test]
fn duplicate_samples_are_skipped() {
    let mut pen = Pen::new();
    let mut scene = Scene::new();
    let press = FrameInput::default().next_held(pt(100.0, 100.0), Button::Primary);
    step(&mut pen, &mut scene, Tool::Curve, &press);
    let still = press.next_held(pt(100.0, 100.0), Button::Primary);
    assert_eq!(step(&mut pen, &mut scene, Tool::Curve, &still), None);
    let moved = still.next_held(pt(101.0, 100.0), Button::Primary);
    assert_eq!(step(&mut pen, &mut scene, Tool::Curve, &moved), Some(PenEvent::Extended));
    assert_eq!(curve_points(&scene, 0).len(), 2);
}

#[test]
fn curve_extent_tracks_points() {
    let mut pen = Pen::new();
    let mut scene = Scene::new();
    stroke_through(&mut pen, &mut scene, Tool::Curve, &[pt(100.0, 100.0), pt(140.0, 80.0), pt(90.0, 130.0)]);
    let Shape::Curve(curve) = &scene[0].shape else {
        panic!("expected a curve");
    };
    assert_eq!(curve.extent(), Rect::new(90.0, 80.0, 50.0, 50.0));
    assert_eq!(curve.stroke, stroke());
}

#[test]
fn held_frames_move_line_end() {
    let mut pen = Pen::new();
    let mut scene = Scene::new();
    stroke_through(&mut pen, &mut scene, Tool::Line, &[pt(50.0, 50.0), pt(80.0, 60.0), pt(200.0, 150.0)]);
    assert_eq!(line_of(&scene, 0), (pt(50.0, 50.0), pt(200.0, 150.0)));
}

#[test]
fn only_the_last_object_is_extended() {
    let mut pen = Pen::new();
    let mut scene = Scene::new();
    stroke_through(&mut pen, &mut scene, Tool::Line, &[pt(50.0, 50.0), pt(60.0, 60.0)]);
    stroke_through(&mut pen, &mut scene, Tool::Line, &[pt(300.0, 300.0), pt(400.0, 400.0)]);
    assert_eq!(scene.len(), 2);
    assert_eq!(line_of(&scene, 0), (pt(50.0, 50.0), pt(60.0, 60.0)));
    assert_eq!(line_of(&scene, 1), (pt(300.0, 300.0), pt(400.0, 400.0)));
}

#[test]
fn points_are_recorded_in_world_space() {
    let camera = Camera { pan_x: 0.0, pan_y: 0.0, zoom: 2.0 };
    let mut pen = Pen::new();
    let mut scene = Scene::new();
    let press = FrameInput::default().next_held(pt(200.0, 200.0), Button::Primary);
    step_with(&mut pen, &mut scene, Tool::Curve, &press, &camera);
    let drag = press.next_held(pt(300.0, 200.0), Button::Primary);
    step_with(&mut pen, &mut scene, Tool::Curve, &drag, &camera);
    assert_eq!(curve_points(&scene, 0), vec![pt(100.0, 100.0), pt(150.0, 100.0)]);
}

// =============================================================
// Invariants
// =============================================================

#[test]
#[should_panic(expected = "non-drawing tool")]
fn select_tool_is_rejected() {
    let mut pen = Pen::new();
    let mut scene = Scene::new();
    step(&mut pen, &mut scene, Tool::Select, &FrameInput::default());
}

#[test]
#[should_panic(expected = "last object is not being drawn")]
fn kind_mismatch_while_down_panics() {
    let mut pen = Pen::new();
    let mut scene = Scene::new();
    let press = FrameInput::default().next_held(pt(100.0, 100.0), Button::Primary);
    step(&mut pen, &mut scene, Tool::Curve, &press);
    scene.push(SceneObject::line(pt(0.0, 0.0), stroke()));
    let drag = press.next_held(pt(120.0, 100.0), Button::Primary);
    step(&mut pen, &mut scene, Tool::Curve, &drag);
}
