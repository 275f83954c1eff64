/// Schedule activity models
pub mod activity;
/// Document models
pub mod document;
/// Tour registration models
pub mod registration;
/// Tour template and tour event models
pub mod tour;
/// User and provider models
pub mod user;

pub use activity::Activity;
pub use document::Document;
pub use registration::{Registration, RegistrationStatus};
pub use tour::{TourEvent, TourTemplate};
pub use user::{Provider, User};
