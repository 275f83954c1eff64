/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::warn;

/// Reads an environment variable, trimmed, treating blank values as unset
fn read_env(env_var: &str) -> Option<String> {
    env::var(env_var)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// Blank values count as missing. A value that fails to parse is logged and
/// replaced by `default`.
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The value used when the variable is missing or invalid
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match read_env(env_var) {
        Some(val) => val.parse::<T>().unwrap_or_else(|e| {
            warn!("Failed to parse {env_var}={val:?} ({e:?}), using default");
            default
        }),
        None => default,
    }
}

/// Gets an environment variable and parses it, returning None if not found, blank or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    read_env(env_var).and_then(|val| val.parse::<T>().ok())
}
