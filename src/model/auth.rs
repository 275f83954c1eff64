/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::TOURIST_USER_TYPE;
use crate::presentation::user::User;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Body of `POST /api/auth/login`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest<'a> {
    /// Login e-mail address
    pub email_address: &'a str,
    /// Account password
    pub password: &'a str,
}

/// Response of a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Short lived bearer token
    pub access_token: String,
    /// Long lived token used to obtain a new access token
    pub refresh_token: String,
    /// The authenticated user
    pub user: User,
}

/// Body of `POST /api/auth/refresh` and `POST /api/auth/logout`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest<'a> {
    /// The refresh token currently held
    pub refresh_token: &'a str,
}

/// Response of a successful token refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    /// New bearer token
    pub access_token: String,
    /// New refresh token, replacing the one sent
    pub refresh_token: String,
}

/// Sign-up data for a new tourist account
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TouristRegistration {
    /// Login e-mail address
    pub email_address: String,
    /// Account password
    pub password: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Contact phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Passport number, set on the profile after login
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport_number: Option<String>,
    /// Date of birth (YYYY-MM-DD), set on the profile after login
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    /// Gender, set on the profile after login
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Additional sign-up fields
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Body of `POST /api/auth/register`: the sign-up data tagged with a user type
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest<'a> {
    /// Sign-up data
    #[serde(flatten)]
    pub registration: &'a TouristRegistration,
    /// Role of the new account
    pub user_type: &'a str,
}

impl<'a> RegisterRequest<'a> {
    /// Registration request for a tourist account
    #[must_use]
    pub fn tourist(registration: &'a TouristRegistration) -> Self {
        Self {
            registration,
            user_type: TOURIST_USER_TYPE,
        }
    }
}
