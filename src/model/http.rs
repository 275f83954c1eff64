/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Request descriptors and response decoding shared by every API call

use crate::constants::{JSON_MEDIA_TYPE, UPLOAD_FILE_FIELD};
use crate::error::{ApiError, AppError};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::error;

/// A file prepared for a multipart upload
///
/// The bytes are kept so the form can be rebuilt if the request has to be
/// sent a second time.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    /// Name reported to the server
    pub file_name: String,
    /// File content
    pub bytes: Vec<u8>,
    /// Text fields sent next to the file
    pub fields: Vec<(String, String)>,
}

impl UploadFile {
    /// Builds a fresh multipart form for one attempt
    #[must_use]
    pub fn to_form(&self) -> Form {
        let part = Part::bytes(self.bytes.clone()).file_name(self.file_name.clone());
        self.fields
            .iter()
            .fold(Form::new(), |form, (name, value)| {
                form.text(name.clone(), value.clone())
            })
            .part(UPLOAD_FILE_FIELD, part)
    }
}

/// Body of an API request
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Payload {
    /// No body
    #[default]
    Empty,
    /// JSON body
    Json(Value),
    /// multipart/form-data body
    Multipart(UploadFile),
}

/// Everything needed to send (and re-send) one API call
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Path relative to the base address, or an absolute URL
    pub path: String,
    /// Query string parameters
    pub query: Vec<(String, String)>,
    /// Request body
    pub payload: Payload,
    /// Caller supplied headers, applied over the defaults
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    /// Creates a request without query, body or extra headers
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            payload: Payload::Empty,
            headers: Vec::new(),
        }
    }

    /// Adds query parameters from any serializable map-like value
    pub fn with_query<Q: Serialize + ?Sized>(mut self, query: &Q) -> Result<Self, AppError> {
        self.query.extend(to_string_pairs(query)?);
        Ok(self)
    }

    /// Sets a JSON body
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, AppError> {
        self.payload = Payload::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Sets a multipart body
    #[must_use]
    pub fn with_upload(mut self, upload: UploadFile) -> Self {
        self.payload = Payload::Multipart(upload);
        self
    }

    /// Adds a header, overriding the default of the same name
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// True when the body is multipart
    #[must_use]
    pub fn is_multipart(&self) -> bool {
        matches!(self.payload, Payload::Multipart(_))
    }

    /// Resolves the full URL against `base_url`
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        if self.path.starts_with("http") {
            self.path.clone()
        } else {
            let path = self.path.trim_start_matches('/');
            format!("{base_url}/{path}")
        }
    }

    /// Headers for one attempt
    ///
    /// JSON `Accept`/`Content-Type` defaults, caller headers on top, and the
    /// bearer token last. Multipart requests get no `Content-Type` so the
    /// transport can add the boundary itself.
    pub fn headers(&self, access_token: Option<&str>) -> Result<HeaderMap, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_MEDIA_TYPE));
        if !self.is_multipart() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_MEDIA_TYPE));
        }

        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| AppError::InvalidInput(format!("header name {name:?}: {e}")))?;
            if self.is_multipart() && name == CONTENT_TYPE {
                continue;
            }
            let value = HeaderValue::from_str(value)
                .map_err(|e| AppError::InvalidInput(format!("header value for {name}: {e}")))?;
            headers.insert(name, value);
        }

        if let Some(token) = access_token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| AppError::InvalidInput(format!("access token: {e}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }

    /// Builds a reqwest request for one attempt
    pub fn build(
        &self,
        client: &Client,
        base_url: &str,
        access_token: Option<&str>,
    ) -> Result<RequestBuilder, AppError> {
        let mut request = client
            .request(self.method.clone(), self.url(base_url))
            .headers(self.headers(access_token)?);

        if !self.query.is_empty() {
            request = request.query(&self.query);
        }

        request = match &self.payload {
            Payload::Empty => request,
            Payload::Json(body) => request.json(body),
            Payload::Multipart(upload) => request.multipart(upload.to_form()),
        };

        Ok(request)
    }
}

/// Flattens a serializable object into string key/value pairs
///
/// `null` (and `()`) yields no pairs, null members are skipped, strings are
/// taken verbatim and any other value is rendered as JSON.
pub fn to_string_pairs<T: Serialize + ?Sized>(value: &T) -> Result<Vec<(String, String)>, AppError> {
    match serde_json::to_value(value)? {
        Value::Null => Ok(Vec::new()),
        Value::Object(map) => Ok(map
            .into_iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| match v {
                Value::String(s) => (k, s),
                other => (k, other.to_string()),
            })
            .collect()),
        other => Err(AppError::InvalidInput(format!(
            "expected an object of fields, got {other}"
        ))),
    }
}

/// Decodes a response body, treating an empty body as `{}`
pub fn decode_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_value(Value::Object(Map::new()))?);
    }
    Ok(serde_json::from_slice(bytes)?)
}

/// Reads a successful response and decodes it
pub async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let bytes = response.bytes().await?;
    decode_json(&bytes)
}

/// Logs the fields of a decoded error envelope
pub fn log_api_error(api_error: &ApiError) {
    if api_error.has_envelope() {
        error!("API Error {}: {}", api_error.status.as_u16(), api_error.body);
        if let Some(code) = &api_error.code {
            error!("Error Code: {}", code);
        }
        if let Some(message) = &api_error.message {
            error!("Message: {}", message);
        }
        if let Some(details) = &api_error.details {
            error!("Details: {}", details);
        }
    } else {
        error!("HTTP Error {}: {}", api_error.status.as_u16(), api_error.body);
    }
}

/// Turns a non-2xx response into an error, logging the envelope on the way
///
/// 401 maps to [`AppError::Unauthorized`], everything else to [`AppError::Api`].
pub async fn into_app_error(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let api_error = ApiError::from_body(status, body);
    log_api_error(&api_error);

    if status == StatusCode::UNAUTHORIZED {
        AppError::Unauthorized(api_error)
    } else {
        AppError::Api(api_error)
    }
}
