/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Authenticated client for the Tourist Hub API
//!
//! This module provides a client that handles:
//! - Login, token refresh and logout
//! - Transparent recovery from an expired access token (one refresh, one retry)
//! - JSON verbs, multipart uploads and streamed downloads
//!
//! # Example
//! ```ignore
//! use tourist_hub_client::prelude::*;
//!
//! let client = TouristHubClient::new(Config::new())?;
//! client.login("user@example.com", "password123").await?;
//!
//! let users: Vec<User> = client.get("/api/users").await?;
//! client.logout().await;
//! ```

use crate::application::auth::{SessionCredentials, SessionStore};
use crate::application::config::Config;
use crate::constants::{LOGIN_PATH, LOGOUT_PATH, REFRESH_PATH, USER_AGENT};
use crate::error::AppError;
use crate::model::auth::{LoginRequest, LoginResponse, RefreshResponse, RefreshTokenRequest};
use crate::model::http::{
    ApiRequest, UploadFile, decode_response, into_app_error, to_string_pairs,
};
use crate::presentation::user::User;
use reqwest::{Client as HttpInternalClient, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error, info, warn};

/// Client for the Tourist Hub API with automatic token management
///
/// Holds one session (access token, refresh token, current user). Every verb
/// goes through the same routine: a 401 while a refresh token is held triggers
/// one refresh and one retry; anything else is returned as is.
pub struct TouristHubClient {
    http_client: HttpInternalClient,
    config: Arc<Config>,
    base_url: String,
    session: SessionStore,
}

impl TouristHubClient {
    /// Creates an unauthenticated client
    ///
    /// # Arguments
    /// * `config` - Configuration containing the API address and timeout
    ///
    /// # Returns
    /// * `Ok(TouristHubClient)` - Client ready for `login`
    /// * `Err(AppError)` - If the HTTP transport cannot be created
    pub fn new(config: Config) -> Result<Self, AppError> {
        let mut builder = HttpInternalClient::builder().user_agent(USER_AGENT);
        if config.rest_api.timeout > 0 {
            builder = builder.timeout(Duration::from_secs(config.rest_api.timeout));
        }
        let http_client = builder.build()?;
        let base_url = config.rest_api.base_url.trim_end_matches('/').to_string();

        Ok(Self {
            http_client,
            config: Arc::new(config),
            base_url,
            session: SessionStore::new(),
        })
    }

    /// Creates an unauthenticated client for `base_url` with default settings
    pub fn with_base_url(base_url: &str) -> Result<Self, AppError> {
        Self::new(Config::with_base_url(base_url))
    }

    /// Base address requests are sent to, without trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Configuration the client was built with
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Checks if an access token is currently held. No I/O.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// User returned by the last successful login
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.session.current_user()
    }

    /// Current access token
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.session.access_token()
    }

    /// Current refresh token
    #[must_use]
    pub fn refresh_token(&self) -> Option<String> {
        self.session.refresh_token()
    }

    /// Copy of the whole session
    #[must_use]
    pub fn session(&self) -> SessionCredentials {
        self.session.snapshot()
    }

    /// Authenticates and stores the returned tokens and user
    ///
    /// On failure the session is left untouched.
    pub async fn login(&self, email_address: &str, password: &str) -> Result<LoginResponse, AppError> {
        info!("Logging in user: {}", email_address);

        let request = ApiRequest::new(Method::POST, LOGIN_PATH).with_json(&LoginRequest {
            email_address,
            password,
        })?;

        let response: LoginResponse = self
            .fetch_checked(&request)
            .await
            .inspect_err(|e| error!("Login failed: {}", e))?;

        self.session.establish(
            response.access_token.clone(),
            response.refresh_token.clone(),
            response.user.clone(),
        );

        info!(
            "Logged in as {} ({})",
            response.user.full_name(),
            response.user.user_type_or_unknown()
        );
        Ok(response)
    }

    /// Exchanges the refresh token for a new token pair
    ///
    /// # Returns
    /// * `Ok(RefreshResponse)` - The new pair, already stored
    /// * `Err(AppError::MissingRefreshToken)` - No refresh token held; nothing was sent
    /// * `Err(AppError)` - The refresh endpoint rejected the token or was unreachable
    pub async fn refresh_access_token(&self) -> Result<RefreshResponse, AppError> {
        let Some(refresh_token) = self.session.refresh_token() else {
            return Err(AppError::MissingRefreshToken);
        };

        let request = ApiRequest::new(Method::POST, REFRESH_PATH).with_json(&RefreshTokenRequest {
            refresh_token: &refresh_token,
        })?;

        let response: RefreshResponse = self
            .fetch_checked(&request)
            .await
            .inspect_err(|e| error!("Token refresh failed: {}", e))?;

        self.session.rotate(
            response.access_token.clone(),
            response.refresh_token.clone(),
        );

        info!("Access token refreshed successfully");
        Ok(response)
    }

    /// Logs out and clears the session
    ///
    /// The server is notified when a refresh token is held. A failed
    /// notification is logged and otherwise ignored; the session is cleared in
    /// every case.
    pub async fn logout(&self) {
        {
            let _clear = self.session.clear_on_drop();
            if let Err(e) = self.notify_logout().await {
                error!("Logout error: {}", e);
            }
        }
        info!("Logged out successfully");
    }

    async fn notify_logout(&self) -> Result<(), AppError> {
        let Some(refresh_token) = self.session.refresh_token() else {
            return Ok(());
        };

        let request = ApiRequest::new(Method::POST, LOGOUT_PATH).with_json(&RefreshTokenRequest {
            refresh_token: &refresh_token,
        })?;
        self.send_checked(&request).await?;
        Ok(())
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(ApiRequest::new(Method::GET, path)).await
    }

    /// Makes a GET request with query parameters
    pub async fn get_with_query<Q: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, AppError> {
        self.request(ApiRequest::new(Method::GET, path).with_query(query)?)
            .await
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(ApiRequest::new(Method::POST, path).with_json(body)?)
            .await
    }

    /// Makes a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(ApiRequest::new(Method::POST, path)).await
    }

    /// Makes a PUT request with a JSON body
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(ApiRequest::new(Method::PUT, path).with_json(body)?)
            .await
    }

    /// Makes a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(ApiRequest::new(Method::DELETE, path)).await
    }

    /// Uploads a local file as multipart/form-data
    ///
    /// # Arguments
    /// * `path` - API endpoint path
    /// * `file_path` - Local file, sent in the `file` field
    /// * `extra_fields` - Object whose members are sent as text fields (`&()` for none)
    pub async fn upload_file<F: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        file_path: impl AsRef<Path>,
        extra_fields: &F,
    ) -> Result<T, AppError> {
        self.upload_local_file(path, file_path.as_ref(), extra_fields)
            .await
            .inspect_err(|e| error!("File upload failed: {}", e))
    }

    async fn upload_local_file<F: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        file_path: &Path,
        extra_fields: &F,
    ) -> Result<T, AppError> {
        if !file_path.exists() {
            return Err(AppError::FileNotFound(file_path.to_path_buf()));
        }

        let bytes = tokio::fs::read(file_path).await?;
        let file_name = file_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        debug!("Uploading {} ({} bytes)", file_name, bytes.len());

        let upload = UploadFile {
            file_name,
            bytes,
            fields: to_string_pairs(extra_fields)?,
        };
        self.request(ApiRequest::new(Method::POST, path).with_upload(upload))
            .await
    }

    /// Downloads a binary resource, streaming it into `save_path`
    ///
    /// A partially written file is removed when the transfer fails.
    ///
    /// # Returns
    /// * `Ok(PathBuf)` - Where the file was written
    /// * `Err(AppError)` - If the request or a local write fails
    pub async fn download_file(
        &self,
        path: &str,
        save_path: impl AsRef<Path>,
    ) -> Result<PathBuf, AppError> {
        let save_path = save_path.as_ref().to_path_buf();
        let request = ApiRequest::new(Method::GET, path).with_header("Accept", "*/*");
        let response = self.execute(&request).await?;

        match stream_to_file(response, &save_path).await {
            Ok(written) => {
                debug!("Wrote {} bytes to {}", written, save_path.display());
                Ok(save_path)
            }
            Err(e) => {
                warn!("Download to {} failed: {}", save_path.display(), e);
                if let Err(remove_error) = tokio::fs::remove_file(&save_path).await {
                    debug!("Could not remove partial download: {}", remove_error);
                }
                Err(e)
            }
        }
    }

    /// Sends a prepared request and decodes the JSON answer
    pub async fn request<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, AppError> {
        let response = self.execute(&request).await?;
        decode_response(response).await
    }

    /// The authenticated-request routine
    ///
    /// At most two attempts: the second one only after a 401 and a successful
    /// refresh. A failed refresh logs the client out and its error is returned
    /// instead of the first 401.
    async fn execute(&self, request: &ApiRequest) -> Result<Response, AppError> {
        let response = self.send(request).await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }
        if status != StatusCode::UNAUTHORIZED || self.session.refresh_token().is_none() {
            return Err(into_app_error(response).await);
        }

        info!("Access token expired, attempting refresh...");
        if let Err(refresh_error) = self.refresh_access_token().await {
            self.logout().await;
            return Err(refresh_error);
        }

        let retried = self.send(request).await?;
        if retried.status().is_success() {
            Ok(retried)
        } else {
            Err(into_app_error(retried).await)
        }
    }

    /// One attempt with no recovery, decoded
    async fn fetch_checked<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<T, AppError> {
        let response = self.send_checked(request).await?;
        decode_response(response).await
    }

    /// One attempt with no recovery; non-2xx becomes an error
    async fn send_checked(&self, request: &ApiRequest) -> Result<Response, AppError> {
        let response = self.send(request).await?;
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(into_app_error(response).await)
        }
    }

    /// One attempt with the current access token
    async fn send(&self, request: &ApiRequest) -> Result<Response, AppError> {
        let access_token = self.session.access_token();
        let builder = request.build(&self.http_client, &self.base_url, access_token.as_deref())?;

        debug!("{} {}", request.method, request.url(&self.base_url));

        let response = builder.send().await.inspect_err(|e| {
            error!("Request failed: {}", e);
        })?;

        debug!("Response status: {}", response.status());
        Ok(response)
    }
}

/// Writes the response body to `save_path` chunk by chunk
async fn stream_to_file(mut response: Response, save_path: &Path) -> Result<u64, AppError> {
    let mut file = tokio::fs::File::create(save_path).await?;
    let mut written: u64 = 0;
    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;
    Ok(written)
}
