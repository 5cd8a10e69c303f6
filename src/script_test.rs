use super::*;
use canvas::camera::Point;
use canvas::input::{Button, Key};

// =============================================================
// parse_script
// =============================================================

#[test]
fn parse_empty_script() {
    assert!(parse_script("[]").unwrap().is_empty());
}

#[test]
fn parse_tool_switch() {
    let steps = parse_script(r#"[{ "tool": "curve" }]"#).unwrap();
    assert_eq!(steps, vec![Step::Tool(ToolSwitch { tool: Tool::Curve })]);
}

#[test]
fn parse_frame_with_defaults() {
    let steps = parse_script(r#"[{ "pointer": { "x": 4, "y": 5 }, "keys_pressed": ["delete"] }]"#).unwrap();
    let Step::Frame(frame) = &steps[0] else {
        panic!("expected a frame, got {:?}", steps[0]);
    };
    assert_eq!(frame.pointer, Point::new(4.0, 5.0));
    assert_eq!(frame.keys_pressed, vec![Key::Delete]);
    assert!(frame.down.is_empty());
}

#[test]
fn parse_empty_object_is_idle_frame() {
    let steps = parse_script("[{}]").unwrap();
    assert_eq!(steps, vec![Step::Frame(FrameInput::default())]);
}

#[test]
fn parse_mixed_steps_keep_order() {
    let raw = r#"[
        { "tool": "line" },
        { "pointer": { "x": 1, "y": 1 }, "pressed": ["primary"], "down": ["primary"] },
        { "tool": "select" }
    ]"#;
    let steps = parse_script(raw).unwrap();
    assert_eq!(steps.len(), 3);
    assert!(matches!(steps[0], Step::Tool(ToolSwitch { tool: Tool::Line })));
    assert!(matches!(&steps[1], Step::Frame(f) if f.pressed == vec![Button::Primary]));
    assert!(matches!(steps[2], Step::Tool(ToolSwitch { tool: Tool::Select })));
}

// =============================================================
// Errors
// =============================================================

#[test]
fn unknown_tool_is_rejected() {
    let err = parse_script(r#"[{ "tool": "rect" }]"#).unwrap_err();
    assert!(matches!(err, AppError::ScriptParse(_)));
}

#[test]
fn unknown_frame_field_is_rejected() {
    assert!(parse_script(r#"[{ "pointr": { "x": 1, "y": 1 } }]"#).is_err());
}

#[test]
fn non_array_is_rejected() {
    assert!(parse_script(r#"{ "tool": "line" }"#).is_err());
}

#[test]
fn missing_script_file_reports_path() {
    let err = load_script(Path::new("/nonexistent/sketchboard/script.json")).unwrap_err();
    assert!(matches!(err, AppError::ScriptRead { .. }));
    assert!(err.to_string().contains("script.json"));
}
