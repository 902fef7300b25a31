use std::env::VarError;

use error_stack::Report;
use kernel::KernelError;

use crate::error::ConvertError;

pub mod clock;
pub mod config;
pub mod database;
pub mod error;
pub mod source;

pub(crate) fn env(key: &str) -> error_stack::Result<String, KernelError> {
    dotenvy::var(key)
        .convert_error()
        .map_err(|report| report.attach_printable(format!("Failed to read `{key}`")))
}

/// Like [`env`], but an unset variable yields `default`.
pub(crate) fn env_or(key: &str, default: &str) -> error_stack::Result<String, KernelError> {
    match dotenvy::var(key) {
        Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => Ok(default.to_string()),
        other => other
            .convert_error()
            .map_err(|report| report.attach_printable(format!("Failed to read `{key}`"))),
    }
}

pub(crate) fn parse_env<T>(key: &str, default: T) -> error_stack::Result<T, KernelError>
where
    T: std::str::FromStr + ToString,
    T::Err: std::error::Error + Sync + Send + 'static,
{
    env_or(key, &default.to_string())?.trim().parse().map_err(|error| {
        Report::new(error)
            .change_context(KernelError::Internal)
            .attach_printable(format!("`{key}` is not a valid value"))
    })
}
