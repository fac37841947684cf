/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/25
******************************************************************************/

use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Gets an environment variable, falling back to a default when it is
/// missing or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The value to use when the variable is missing or invalid
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    let Ok(raw) = env::var(env_var) else {
        return default;
    };
    raw.parse::<T>().unwrap_or_else(|_| {
        error!("Failed to parse {}: {}, using default", env_var, raw);
        default
    })
}

/// Gets an environment variable and parses it, returning None when it is
/// missing or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    env::var(env_var).ok().and_then(|raw| raw.parse::<T>().ok())
}
