use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use clap::ValueEnum;
use common::{ErrorKind, MarketError};
use serde::Serialize;
use tracing::warn;

/// How error bodies map onto HTTP status codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ErrorStatusPolicy {
    /// Always 200, the error travels in the body only.
    #[default]
    Compatible,
    /// Status derived from the error kind.
    Strict,
}

impl ErrorStatusPolicy {
    pub fn status_for(&self, kind: ErrorKind) -> StatusCode {
        match self {
            Self::Compatible => StatusCode::OK,
            Self::Strict => match kind {
                ErrorKind::UnknownSymbol => StatusCode::NOT_FOUND,
                ErrorKind::InsufficientData => StatusCode::UNPROCESSABLE_ENTITY,
                ErrorKind::UpstreamUnavailable => StatusCode::SERVICE_UNAVAILABLE,
                ErrorKind::UpstreamRejected | ErrorKind::Decode => StatusCode::BAD_GATEWAY,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub kind: ErrorKind,
}

#[derive(Debug)]
pub struct ApiError(pub MarketError);

impl From<MarketError> for ApiError {
    fn from(value: MarketError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.0.kind();
        warn!("Request failed ({:?}): {}", kind, self.0);

        let mut response = (
            StatusCode::OK,
            Json(ErrorBody {
                error: self.0.to_string(),
                kind,
            }),
        )
            .into_response();
        response.extensions_mut().insert(kind);
        response
    }
}

/// Rewrites the status of error responses according to the configured policy.
pub async fn apply_error_status(
    State(policy): State<ErrorStatusPolicy>,
    mut response: Response,
) -> Response {
    if let Some(kind) = response.extensions().get::<ErrorKind>().copied() {
        *response.status_mut() = policy.status_for(kind);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compatible_policy_is_always_ok() {
        let policy = ErrorStatusPolicy::Compatible;
        assert_eq!(policy.status_for(ErrorKind::UnknownSymbol), StatusCode::OK);
        assert_eq!(policy.status_for(ErrorKind::UpstreamUnavailable), StatusCode::OK);
    }

    #[test]
    fn strict_policy_distinguishes_kinds() {
        let policy = ErrorStatusPolicy::Strict;
        assert_eq!(policy.status_for(ErrorKind::UnknownSymbol), StatusCode::NOT_FOUND);
        assert_eq!(
            policy.status_for(ErrorKind::InsufficientData),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            policy.status_for(ErrorKind::UpstreamUnavailable),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(policy.status_for(ErrorKind::Decode), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn status_rewrite_only_touches_error_responses() {
        let error = ApiError(MarketError::UnknownSymbol("FOO".into())).into_response();
        let rewritten = apply_error_status(State(ErrorStatusPolicy::Strict), error).await;
        assert_eq!(rewritten.status(), StatusCode::NOT_FOUND);

        let ok = Json(serde_json::json!({"message": "fine"})).into_response();
        let untouched = apply_error_status(State(ErrorStatusPolicy::Strict), ok).await;
        assert_eq!(untouched.status(), StatusCode::OK);
    }
}
