//! Filter parser: aspect filters and item filters.
//!
//! Both filter kinds share the name/value completeness rule: a filter opened
//! by a name needs at least one value. Values may be written bare
//! (`itemFilter.value`) or numbered (`itemFilter.value(0)`, ...), never both.

pub mod aspect;
pub mod item;

pub use aspect::{parse_aspect_filters, AspectFilter};
pub use item::{parse_item_filters, FilterParam, ItemFilter};

use crate::error::{Result, ValidationError};
use crate::raw::RawParams;
use chrono::{DateTime, Utc};

/// Inputs to validation that do not come from the raw parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    now: DateTime<Utc>,
}

impl ValidationContext {
    /// Context pinned to the current wall-clock time.
    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    /// Context pinned to a fixed instant. Date-time filters are judged
    /// against `now`, so a fixed instant makes validation reproducible.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// The instant date-time filters are compared against.
    pub fn instant(&self) -> DateTime<Utc> {
        self.now
    }
}

/// Collects the values of one filter attribute (`<attr>(0..)`, then `<attr>`).
fn filter_values(raw: &RawParams, attribute: &str) -> Result<Vec<String>> {
    let mut values: Vec<String> = raw
        .scan_indexed(attribute, "")
        .map(|(_, v)| v.to_owned())
        .collect();
    if let Some(v) = raw.get(attribute) {
        values.push(v.to_owned());
    }
    if values.is_empty() {
        return Err(ValidationError::IncompleteFilter {
            attribute: attribute.to_owned(),
        });
    }
    raw.syntax(attribute, "")?;
    Ok(values)
}
