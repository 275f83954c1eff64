/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Authentication request and response models
pub mod auth;
/// Request descriptors and response decoding
pub mod http;
/// Request bodies used by the workflows
pub mod requests;
