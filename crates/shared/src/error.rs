use thiserror::Error;

/// Uniform failure for any transport or server error.
///
/// The repository does not retry and does not distinguish status classes to
/// its callers; the only caller-visible information is the optional
/// server-supplied message, surfaced verbatim in notifications.
#[derive(Debug, Clone, Default, Error)]
#[error("request failed: {}", .detail.as_deref().unwrap_or("no detail supplied by server"))]
pub struct RequestError {
    pub detail: Option<String>,
}

impl RequestError {
    pub fn with_detail(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
        }
    }

    /// A failure the server supplied no message for (e.g. transport errors).
    pub fn opaque() -> Self {
        Self { detail: None }
    }
}
