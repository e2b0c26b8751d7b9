//! Tour domain error types.

use thiserror::Error;

/// A specialized Result type for TourAPI operations.
pub type TourResult<T> = std::result::Result<T, TourError>;

/// Errors raised while talking to TourAPI or resolving request intent.
///
/// The display strings are the user-facing tool error texts.
#[derive(Debug, Clone, Error)]
pub enum TourError {
    /// Any fault of an upstream call: transport failure, non-success
    /// status, an undecodable body or an error result code.
    #[error("TourAPI 호출 오류: {0}")]
    Upstream(String),

    /// The area-name lookup failed because its upstream call failed.
    #[error("지역코드 조회 오류: {0}")]
    Resolution(String),
}

impl TourError {
    /// Create a new upstream error.
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    /// Wrap a failed upstream call made on behalf of area resolution.
    pub fn resolution(source: &TourError) -> Self {
        Self::Resolution(source.to_string())
    }
}

impl From<reqwest::Error> for TourError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::upstream("request timed out")
        } else if e.is_connect() {
            Self::upstream(format!("connection failed: {e}"))
        } else {
            Self::upstream(e.to_string())
        }
    }
}
