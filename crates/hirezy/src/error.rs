use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::export::{ExportError, UnknownExportFormat};
use crate::workflows::market::MarketServiceError;
use crate::workflows::recruiter::applications::{
    ApplicationServiceError, FilterParamError, RepositoryError, UnknownStatus,
};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Repository(RepositoryError),
    Export(ExportError),
    Application(ApplicationServiceError),
    /// Caller-supplied value that failed to parse.
    InvalidInput(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Repository(err) => write!(f, "repository error: {}", err),
            AppError::Export(err) => write!(f, "export error: {}", err),
            AppError::Application(err) => write!(f, "application error: {}", err),
            AppError::InvalidInput(message) => write!(f, "invalid input: {}", message),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Repository(err) => Some(err),
            AppError::Export(err) => Some(err),
            AppError::Application(err) => Some(err),
            AppError::InvalidInput(_) => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Application(
                ApplicationServiceError::InsufficientSelection { .. }
                | ApplicationServiceError::UnknownCandidates(_),
            ) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Repository(_)
            | AppError::Export(_)
            | AppError::Application(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<RepositoryError> for AppError {
    fn from(value: RepositoryError) -> Self {
        Self::Repository(value)
    }
}

impl From<ExportError> for AppError {
    fn from(value: ExportError) -> Self {
        Self::Export(value)
    }
}

impl From<ApplicationServiceError> for AppError {
    fn from(value: ApplicationServiceError) -> Self {
        Self::Application(value)
    }
}

impl From<MarketServiceError> for AppError {
    fn from(value: MarketServiceError) -> Self {
        match value {
            MarketServiceError::Export(err) => Self::Export(err),
        }
    }
}

impl From<UnknownStatus> for AppError {
    fn from(value: UnknownStatus) -> Self {
        Self::InvalidInput(value.to_string())
    }
}

impl From<FilterParamError> for AppError {
    fn from(value: FilterParamError) -> Self {
        Self::InvalidInput(value.to_string())
    }
}

impl From<UnknownExportFormat> for AppError {
    fn from(value: UnknownExportFormat) -> Self {
        Self::InvalidInput(value.to_string())
    }
}
