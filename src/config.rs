//! Driver configuration parsed from environment variables.

use canvas::camera::Rect;
use canvas::config::InteractionConfig;
use canvas::consts::{DEFAULT_THICKNESS, HANDLE_RADIUS};
use canvas::object::{Color, Stroke};

use crate::error::AppError;

pub const DEFAULT_TOOLBAR_HEIGHT: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    pub stroke_thickness: f64,
    pub stroke_color: Color,
    pub handle_radius: f64,
    pub toolbar_height: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            stroke_thickness: DEFAULT_THICKNESS,
            stroke_color: Color::WHITE,
            handle_radius: HANDLE_RADIUS,
            toolbar_height: DEFAULT_TOOLBAR_HEIGHT,
        }
    }
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `SKETCHBOARD_STROKE_THICKNESS`: default 5
    /// - `SKETCHBOARD_STROKE_COLOR`: `#RRGGBB`, default `#FFFFFF`
    /// - `SKETCHBOARD_HANDLE_RADIUS`: default 10
    /// - `SKETCHBOARD_TOOLBAR_HEIGHT`: default 30, `0` disables the reserved strip
    pub fn from_env() -> Result<Self, AppError> {
        let var = |key: &str| std::env::var(key).ok();
        let thickness = var("SKETCHBOARD_STROKE_THICKNESS");
        let color = var("SKETCHBOARD_STROKE_COLOR");
        let radius = var("SKETCHBOARD_HANDLE_RADIUS");
        let toolbar = var("SKETCHBOARD_TOOLBAR_HEIGHT");

        Ok(Self {
            stroke_thickness: parse_positive("SKETCHBOARD_STROKE_THICKNESS", thickness.as_deref(), DEFAULT_THICKNESS)?,
            stroke_color: parse_color(color.as_deref())?,
            handle_radius: parse_positive("SKETCHBOARD_HANDLE_RADIUS", radius.as_deref(), HANDLE_RADIUS)?,
            toolbar_height: parse_non_negative(
                "SKETCHBOARD_TOOLBAR_HEIGHT",
                toolbar.as_deref(),
                DEFAULT_TOOLBAR_HEIGHT,
            )?,
        })
    }

    #[must_use]
    pub fn stroke(&self) -> Stroke {
        Stroke::new(self.stroke_color, self.stroke_thickness)
    }

    #[must_use]
    pub fn interaction(&self) -> InteractionConfig {
        InteractionConfig { handle_radius: self.handle_radius, ..InteractionConfig::default() }
    }

    /// Screen-space strip along the top edge where presses never draw.
    #[must_use]
    pub fn toolbar(&self) -> Option<Rect> {
        (self.toolbar_height > 0.0).then(|| Rect::new(0.0, 0.0, f64::INFINITY, self.toolbar_height))
    }
}

fn parse_f64(key: &str, raw: Option<&str>, default: f64) -> Result<f64, AppError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(AppError::ConfigParse(format!("{key} must be a number, got '{raw}'"))),
    }
}

fn parse_positive(key: &str, raw: Option<&str>, default: f64) -> Result<f64, AppError> {
    let value = parse_f64(key, raw, default)?;
    if value <= 0.0 {
        return Err(AppError::ConfigParse(format!("{key} must be greater than zero, got {value}")));
    }
    Ok(value)
}

fn parse_non_negative(key: &str, raw: Option<&str>, default: f64) -> Result<f64, AppError> {
    let value = parse_f64(key, raw, default)?;
    if value < 0.0 {
        return Err(AppError::ConfigParse(format!("{key} must not be negative, got {value}")));
    }
    Ok(value)
}

fn parse_color(raw: Option<&str>) -> Result<Color, AppError> {
    let Some(raw) = raw else {
        return Ok(Color::WHITE);
    };
    Color::from_hex(raw.trim()).ok_or_else(|| {
        AppError::ConfigParse(format!("SKETCHBOARD_STROKE_COLOR must be #RRGGBB or #RRGGBBAA, got '{raw}'"))
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
