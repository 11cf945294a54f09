//! Scalar validators shared by the filter parser and the operation builders.

use crate::error::{Result, ValidationError};
use crate::types::{CurrencyId, GlobalId};
use chrono::{DateTime, NaiveDateTime, Utc};

/// Direction a date-time value must lie in relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Window {
    Future,
    Past,
}

/// Accepts exactly `"true"` or `"false"`.
pub(crate) fn check_boolean(value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ValidationError::InvalidBoolean(value.to_owned())),
    }
}

/// Parses a base-10 integer and enforces a floor.
pub(crate) fn check_min_integer(value: &str, minimum: i64) -> Result<i64> {
    match value.parse::<i64>() {
        Ok(n) if n >= minimum => Ok(n),
        _ => Err(ValidationError::InvalidInteger {
            value: value.to_owned(),
            minimum,
        }),
    }
}

/// Two uppercase ASCII letters.
pub(crate) fn check_country_code(value: &str) -> Result<()> {
    if value.len() == 2 && value.bytes().all(|b| b.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCountryCode(value.to_owned()))
    }
}

pub(crate) fn check_global_id(value: &str) -> Result<GlobalId> {
    GlobalId::from_wire(value).ok_or_else(|| ValidationError::InvalidGlobalId(value.to_owned()))
}

pub(crate) fn check_currency(value: &str) -> Result<CurrencyId> {
    CurrencyId::from_wire(value).ok_or_else(|| ValidationError::InvalidCurrencyId(value.to_owned()))
}

/// Layout of accepted timestamps: `T` separator, optional fraction, `Z` designator.
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// RFC 3339 timestamp in UTC, strictly on the `window` side of `now`.
pub(crate) fn check_date_time(value: &str, now: DateTime<Utc>, window: Window) -> Result<()> {
    let invalid = || ValidationError::InvalidDateTime(value.to_owned());
    if value.as_bytes().get(10) != Some(&b'T') || !value.ends_with('Z') {
        return Err(invalid());
    }
    let at = NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT)
        .map_err(|_| invalid())?
        .and_utc();
    let in_window = match window {
        Window::Future => at > now,
        Window::Past => at < now,
    };
    if in_window {
        Ok(())
    } else {
        Err(invalid())
    }
}
