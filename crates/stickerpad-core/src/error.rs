use thiserror::Error;

/// Errors from loading the tool catalogue or pad configuration.
///
/// Drawing operations themselves never fail; this is the only fallible path.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("tool catalogue is empty")]
    EmptyCatalogue,
    #[error("duplicate tool label {0:?}")]
    DuplicateLabel(String),
    #[error("tool {label:?} has invalid pen width {width}")]
    InvalidPenWidth { label: String, width: f32 },
    #[error("stamp {label:?} has an empty symbol")]
    EmptySymbol { label: String },
    #[error("tool {label:?} is missing `{field}`")]
    MissingField { label: String, field: &'static str },
    #[error("canvas size {width}x{height} is not drawable")]
    InvalidCanvasSize { width: u32, height: u32 },
}
