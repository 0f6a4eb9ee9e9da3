use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;
use std::fmt::{self, Debug};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Code {
    InvalidData,
    NotFound,
    NoRouteFound,
    NoRidesFound,
    DriverNotFound,
    InvalidDistance,
    ServerError,
}

impl Code {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidData => "INVALID_DATA",
            Self::NotFound => "NOT_FOUND",
            Self::NoRouteFound => "NO_ROUTE_FOUND",
            Self::NoRidesFound => "NO_RIDES_FOUND",
            Self::DriverNotFound => "DRIVER_NOT_FOUND",
            Self::InvalidDistance => "INVALID_DISTANCE",
            Self::ServerError => "SERVER_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidData | Self::NoRouteFound => StatusCode::BAD_REQUEST,
            Self::NotFound | Self::NoRidesFound | Self::DriverNotFound => StatusCode::NOT_FOUND,
            Self::InvalidDistance => StatusCode::NOT_ACCEPTABLE,
            Self::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Error {
    pub code: Code,
    pub message: String,
}

impl Error {
    pub fn is_not_found_error(&self) -> bool {
        self.code == Code::NotFound
    }

    pub fn is_server_error(&self) -> bool {
        self.code == Code::ServerError
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for Error {}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        database_error(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        upstream_error(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        upstream_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error_code": self.code,
            "error_description": self.message,
        }));

        (self.code.status(), body).into_response()
    }
}

pub fn invalid_data_error(message: impl Into<String>) -> Error {
    Error {
        code: Code::InvalidData,
        message: message.into(),
    }
}

pub fn not_found_error(message: impl Into<String>) -> Error {
    Error {
        code: Code::NotFound,
        message: message.into(),
    }
}

pub fn no_route_found_error() -> Error {
    Error {
        code: Code::NoRouteFound,
        message: "no route found between the given addresses".into(),
    }
}

pub fn no_rides_found_error() -> Error {
    Error {
        code: Code::NoRidesFound,
        message: "no rides found for the customer".into(),
    }
}

pub fn driver_not_found_error() -> Error {
    Error {
        code: Code::DriverNotFound,
        message: "driver not found".into(),
    }
}

pub fn invalid_distance_error() -> Error {
    Error {
        code: Code::InvalidDistance,
        message: "distance is not accepted by the driver".into(),
    }
}

/// The only error the caller sees for collaborator failures. Causes are
/// logged where they are converted, never carried in the message.
pub fn server_error() -> Error {
    Error {
        code: Code::ServerError,
        message: "an unexpected error occurred while processing the request".into(),
    }
}

pub fn database_error<T: Debug>(err: T) -> Error {
    tracing::error!(error = ?err, "database error");
    server_error()
}

pub fn upstream_error<T: Debug>(err: T) -> Error {
    tracing::error!(error = ?err, "upstream error");
    server_error()
}
