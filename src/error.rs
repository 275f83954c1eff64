/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Error types for the Tourist Hub client

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;

/// Structured error body returned by the Tourist Hub API
///
/// The server wraps failures as `{ "error": { "code", "message", "details"? } }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorEnvelope {
    /// The error payload
    pub error: ErrorBody,
}

/// Inner part of an [`ErrorEnvelope`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ErrorBody {
    /// Machine readable error code
    #[serde(default)]
    pub code: Option<String>,
    /// Human readable error message
    #[serde(default)]
    pub message: Option<String>,
    /// Optional extra information (validation failures, etc.)
    #[serde(default)]
    pub details: Option<Value>,
}

/// A failed (non-2xx) response from the API
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// HTTP status of the response
    pub status: StatusCode,
    /// Error code from the envelope, when it could be decoded
    pub code: Option<String>,
    /// Error message from the envelope, when it could be decoded
    pub message: Option<String>,
    /// Error details from the envelope, when present
    pub details: Option<Value>,
    /// Raw response body
    pub body: String,
}

impl ApiError {
    /// Builds an `ApiError` from a status and the raw response body
    ///
    /// The body is decoded as an [`ErrorEnvelope`] when possible; otherwise only
    /// the raw text is kept.
    pub fn from_body(status: StatusCode, body: String) -> Self {
        let envelope = serde_json::from_str::<ErrorEnvelope>(&body).ok();
        let ErrorBody {
            code,
            message,
            details,
        } = envelope.map(|e| e.error).unwrap_or_default();
        Self {
            status,
            code,
            message,
            details,
            body,
        }
    }

    /// Returns true when the envelope could be decoded
    #[must_use]
    pub fn has_envelope(&self) -> bool {
        self.code.is_some() || self.message.is_some()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status)?;
        if let Some(code) = &self.code {
            write!(f, " [{code}]")?;
        }
        match &self.message {
            Some(message) => write!(f, ": {message}"),
            None if !self.body.is_empty() => write!(f, ": {}", self.body),
            None => Ok(()),
        }
    }
}

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Transport failure (connection refused, timeout, DNS)
    Network(reqwest::Error),
    /// The API answered with a non-2xx status other than an unrecoverable 401
    Api(ApiError),
    /// The API answered 401 and the session could not be recovered
    Unauthorized(ApiError),
    /// A token refresh was requested but no refresh token is held
    MissingRefreshToken,
    /// An operation needs a logged-in user but there is none
    NotAuthenticated,
    /// A request was rejected locally before reaching the API
    InvalidInput(String),
    /// A local file to upload does not exist
    FileNotFound(PathBuf),
    /// JSON (de)serialization failure
    Json(serde_json::Error),
    /// Local I/O failure
    Io(std::io::Error),
}

impl AppError {
    /// Returns the HTTP status carried by the error, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Api(e) | AppError::Unauthorized(e) => Some(e.status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Api(e) => write!(f, "api error: {e}"),
            AppError::Unauthorized(e) => write!(f, "unauthorized: {e}"),
            AppError::MissingRefreshToken => write!(f, "no refresh token available"),
            AppError::NotAuthenticated => write!(f, "not authenticated"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::FileNotFound(path) => write!(f, "file not found: {}", path.display()),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}
