use thiserror::Error;

#[derive(Debug, Error)]
pub enum FreeDrawError {
    #[error("parameter '{param}' must be finite")]
    NonFinite { param: &'static str },
    #[error("option '{name}' {reason}")]
    InvalidOption { name: &'static str, reason: &'static str },
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("snapshot: {0}")]
    Snapshot(String),
}

impl FreeDrawError {
    /// Stable machine-readable code, mirrored by the wasm error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            FreeDrawError::NonFinite { .. } => "non_finite",
            FreeDrawError::InvalidOption { .. } => "invalid_option",
            FreeDrawError::Json(_) => "json_parse",
            FreeDrawError::Snapshot(_) => "invalid_snapshot",
        }
    }
}

pub type Result<T> = std::result::Result<T, FreeDrawError>;
