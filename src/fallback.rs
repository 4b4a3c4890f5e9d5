//! The one fallback-chain shape shared by the color source precedence, the
//! CSS encoding fallback and the script-build fallback: try the preferred
//! producer, degrade to the secondary on failure, and surface the outcome as
//! value-or-absent plus a diagnostic. Nothing here fabricates a result.

use crate::{Error, Result};

/// Attempt `primary`; on failure attempt `secondary`.
///
/// Returns the produced value (if either succeeded) together with the first
/// error encountered, so the caller can log the degradation without treating
/// it as a pipeline failure.
pub fn attempt<T>(
    primary: impl FnOnce() -> Result<T>,
    secondary: impl FnOnce() -> Result<T>,
) -> (Option<T>, Option<Error>) {
    match primary() {
        Ok(value) => (Some(value), None),
        Err(primary_err) => match secondary() {
            Ok(value) => (Some(value), Some(primary_err)),
            Err(_) => (None, Some(primary_err)),
        },
    }
}

/// First candidate that is present and non-empty after trimming.
pub fn first_non_empty<'a>(
    candidates: impl IntoIterator<Item = Option<&'a str>>,
) -> Option<&'a str> {
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
}
