use std::path::PathBuf;

/// Errors surfaced by the replay driver.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    #[error("failed to read script {path}: {source}")]
    ScriptRead { path: PathBuf, source: std::io::Error },

    #[error("invalid script: {0}")]
    ScriptParse(#[from] serde_json::Error),

    #[error("failed to decode image {path}: {source}")]
    ImageDecode { path: PathBuf, source: image::ImageError },

    #[error("failed to write SVG {path}: {source}")]
    SvgWrite { path: PathBuf, source: std::io::Error },
}
