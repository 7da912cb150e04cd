use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tamagochi_core::error::CoreError;
use tamagochi_pipeline::PipelineError;
use tamagochi_replicate::GenerationError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`PipelineError`] for
/// generation failures, and adds HTTP-specific variants. Implements
/// [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `tamagochi_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A child-generation pipeline failure.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Pipeline errors ---
            AppError::Pipeline(err) => classify_pipeline_error(err),

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a pipeline error into an HTTP status, error code, and message.
///
/// All caller-correctable failures (missing configuration, unmet
/// preconditions, upstream rejections, download failures) map to 4xx with
/// the original message; infrastructure failures map to a sanitized 500.
fn classify_pipeline_error(err: &PipelineError) -> (StatusCode, &'static str, String) {
    match err {
        PipelineError::NotConfigured => {
            (StatusCode::BAD_REQUEST, "NOT_CONFIGURED", err.to_string())
        }
        PipelineError::Precondition(msg) => (
            StatusCode::BAD_REQUEST,
            "PRECONDITION_FAILED",
            msg.clone(),
        ),
        PipelineError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        PipelineError::Generation(gen) => match gen {
            GenerationError::NotConfigured => {
                (StatusCode::BAD_REQUEST, "NOT_CONFIGURED", gen.to_string())
            }
            GenerationError::Upstream(_) | GenerationError::Protocol(_) => {
                (StatusCode::BAD_REQUEST, "UPSTREAM_ERROR", gen.to_string())
            }
        },
        PipelineError::Download { .. } => {
            (StatusCode::BAD_REQUEST, "DOWNLOAD_FAILED", err.to_string())
        }
        PipelineError::Transfer(e) => {
            tracing::error!(error = %e, "Artifact transfer error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        PipelineError::Storage(e) => {
            tracing::error!(error = %e, "Artifact storage error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        PipelineError::Database(e) => classify_sqlx_error(e),
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    // -- classify_pipeline_error ---------------------------------------------

    #[test]
    fn not_configured_is_bad_request() {
        assert_eq!(
            status_of(AppError::Pipeline(PipelineError::NotConfigured)),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn precondition_is_bad_request() {
        let err = AppError::Pipeline(PipelineError::Precondition("no photos".into()));
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn pipeline_not_found_is_404() {
        let err = AppError::Pipeline(PipelineError::NotFound {
            entity: "User",
            id: uuid::Uuid::new_v4(),
        });
        assert_eq!(status_of(err), StatusCode::NOT_FOUND);
    }

    #[test]
    fn upstream_and_download_failures_are_bad_request() {
        let upstream = AppError::Pipeline(PipelineError::Generation(GenerationError::Upstream(
            "model exploded".into(),
        )));
        assert_eq!(status_of(upstream), StatusCode::BAD_REQUEST);

        let protocol = AppError::Pipeline(PipelineError::Generation(GenerationError::Protocol(
            "42".into(),
        )));
        assert_eq!(status_of(protocol), StatusCode::BAD_REQUEST);

        let download = AppError::Pipeline(PipelineError::Download {
            status: 403,
            status_text: "Forbidden".into(),
        });
        assert_eq!(status_of(download), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn storage_failure_is_internal() {
        let err = AppError::Pipeline(PipelineError::Storage(std::io::Error::other("disk full")));
        assert_eq!(status_of(err), StatusCode::INTERNAL_SERVER_ERROR);
    }

    // -- classify_sqlx_error -------------------------------------------------

    #[test]
    fn row_not_found_is_404() {
        assert_eq!(
            status_of(AppError::Database(sqlx::Error::RowNotFound)),
            StatusCode::NOT_FOUND
        );
    }
}
