//! Shared validation helpers used by all section validators.

use std::fmt::Display;

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range<T>(errors: &mut Vec<String>, name: &str, value: T, min: T, max: T)
where
    T: PartialOrd + Display,
{
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if a required string is empty.
///
/// `env` is the environment variable that can supply the value, named in
/// the message so the fix is obvious.
pub(crate) fn require(errors: &mut Vec<String>, name: &str, env: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{name} is required (set it in the config file or {env})"));
    }
}
