use std::path::PathBuf;

/// Configuration problems found once at initialization.
///
/// These never cross a component boundary: the owning component logs the
/// error and settles into a sticky degraded state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("no color-adjustment sink bound; scene-wide grading disabled")]
    MissingSink,
    #[error("material selector on {object}: no render target bound")]
    MissingRenderTarget { object: String },
    #[error("material selector on {object}: no normal material and the target has none")]
    MissingNormalMaterial { object: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown CVD mode: {0:?}")]
    InvalidMode(String),
    #[error("invalid boolean for {var}: {value:?}")]
    InvalidFlag { var: &'static str, value: String },
}
