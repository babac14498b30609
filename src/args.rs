//! Presence checks for optional caller input.
//!
//! Values coming from the command line or from configuration may be absent.
//! Tasks call [`require`] before doing any work so an absent argument is
//! reported as [`BuildTasksError::MissingArgument`] naming the argument.

use crate::error::{BuildTasksError, Result};

/// Unwrap an optional argument or fail with a missing-argument error
pub fn require<T>(name: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| BuildTasksError::missing(name))
}
