use thiserror::Error;

/// Construction-time failures. All per-tick operations are total over
/// validated state, so nothing past construction returns an error.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid geometry: {reason}")]
    InvalidGeometry { reason: String },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },
}

impl GameError {
    pub fn geometry(reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            reason: reason.into(),
        }
    }

    pub fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}
