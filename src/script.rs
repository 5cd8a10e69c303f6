//! Replay scripts: a JSON array of frames and tool switches.
//!
//! ```json
//! [
//!   { "tool": "line" },
//!   { "pointer": { "x": 100, "y": 100 }, "pressed": ["primary"], "down": ["primary"] },
//!   { "pointer": { "x": 300, "y": 180 }, "down": ["primary"] },
//!   { "pointer": { "x": 300, "y": 180 }, "released": ["primary"] }
//! ]
//! ```

use std::path::Path;

use canvas::input::{FrameInput, Tool};
use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolSwitch {
    pub tool: Tool,
}

/// One script entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Tool(ToolSwitch),
    Frame(FrameInput),
}

pub fn parse_script(raw: &str) -> Result<Vec<Step>, AppError> {
    Ok(serde_json::from_str(raw)?)
}

pub fn load_script(path: &Path) -> Result<Vec<Step>, AppError> {
    let raw =
        std::fs::read_to_string(path).map_err(|source| AppError::ScriptRead { path: path.to_path_buf(), source })?;
    let steps = parse_script(&raw)?;
    tracing::info!(path = %path.display(), steps = steps.len(), "script loaded");
    Ok(steps)
}

#[cfg(test)]
#[path = "script_test.rs"]
mod tests;
