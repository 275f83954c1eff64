/// Default address of the Tourist Hub API
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// User agent string used in HTTP requests to identify this client to the Tourist Hub API
pub const USER_AGENT: &str = concat!("tourist-hub-client/", env!("CARGO_PKG_VERSION"));
/// Media type sent in `Content-Type` and `Accept` headers
pub const JSON_MEDIA_TYPE: &str = "application/json";
/// Name of the multipart field carrying an uploaded file
pub const UPLOAD_FILE_FIELD: &str = "file";

/// Login endpoint
pub const LOGIN_PATH: &str = "/api/auth/login";
/// Token refresh endpoint
pub const REFRESH_PATH: &str = "/api/auth/refresh";
/// Logout endpoint
pub const LOGOUT_PATH: &str = "/api/auth/logout";
/// Account registration endpoint
pub const REGISTER_PATH: &str = "/api/auth/register";
/// Tour template collection
pub const TOUR_TEMPLATES_PATH: &str = "/api/tour-templates";
/// Tour event collection
pub const TOUR_EVENTS_PATH: &str = "/api/tour-events";
/// User collection
pub const USERS_PATH: &str = "/api/users";
/// Provider collection
pub const PROVIDERS_PATH: &str = "/api/providers";
/// Document collection of the current user
pub const DOCUMENTS_PATH: &str = "/api/documents";
/// Blank tour forms download
pub const BLANK_FORMS_PATH: &str = "/api/documents/forms/blank";

/// Tour event status value that accepts registrations
pub const ACTIVE_TOUR_STATUS: &str = "Active";
/// User type sent when a tourist registers
pub const TOURIST_USER_TYPE: &str = "Tourist";
/// Default file name for downloaded blank forms
pub const DEFAULT_FORMS_FILE: &str = "tour-forms.pdf";
