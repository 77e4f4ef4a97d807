use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ditto_core::DittoError;
use tracing::{debug, error};

/// Everything a handler can fail with. Each variant knows its status code
/// and the text the client sees.
#[derive(Debug)]
pub enum ApiError {
    Ditto(DittoError),
    MissingAsset(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Ditto(DittoError::UnknownApp(_) | DittoError::AppNotInstalled(_)) => {
                StatusCode::NOT_FOUND
            }
            ApiError::Ditto(DittoError::NoReverseMatch(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MissingAsset(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::Ditto(err) => err.to_string(),
            ApiError::MissingAsset(path) => format!("No static asset at {path}"),
        }
    }
}

impl From<DittoError> for ApiError {
    fn from(err: DittoError) -> Self {
        Self::Ditto(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        if status.is_server_error() {
            error!("{message}");
        } else {
            debug!("{status}: {message}");
        }

        (status, message).into_response()
    }
}
