//! Raw request parameters: the untyped ingress form.
//!
//! Callers hand over a flat `name -> value` mapping. It is only read during
//! validation; nothing downstream of [`crate::params::FindParams`] sees it.
//!
//! Repeated constructs use one of two syntaxes:
//!
//! - bare: `categoryId`, `itemFilter.name`
//! - numbered: `categoryId(0)`, `categoryId(1)`, `itemFilter(0).name`, ...
//!
//! Numbered keys are probed from index 0 upwards and the scan stops at the
//! first missing index. A gap hides everything after it, and a construct
//! whose index 0 is missing is treated as absent even when `(1)` exists.

use crate::error::ValidationError;
use std::collections::{BTreeMap, HashMap};

/// An immutable `name -> value` mapping supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParams {
    inner: HashMap<String, String>,
}

/// How a repeated construct was written in the raw parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Syntax {
    Absent,
    Bare,
    Numbered,
}

impl RawParams {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    /// Returns true when `key` is present (even with an empty value).
    pub fn contains(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true when no parameters were supplied.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Resolves whether `base` + `suffix` is written bare, numbered, or not at all.
    ///
    /// Fails when the bare key coexists with any numbered sibling
    /// `base(n)suffix`, regardless of `n`.
    pub(crate) fn syntax(&self, base: &str, suffix: &str) -> Result<Syntax, ValidationError> {
        let bare = format!("{base}{suffix}");
        let bare_present = self.contains(&bare);
        let numbered_present = self
            .inner
            .keys()
            .any(|key| index_of(key, base, suffix).is_some());

        match (bare_present, numbered_present) {
            (true, true) => Err(ValidationError::IndexSyntax { key: bare }),
            (true, false) => Ok(Syntax::Bare),
            (false, true) if self.contains(&indexed_key(base, 0, suffix)) => Ok(Syntax::Numbered),
            // Numbered siblings without index 0 are ignored.
            _ => Ok(Syntax::Absent),
        }
    }

    /// Scans `base(0)suffix`, `base(1)suffix`, ... until the first gap.
    ///
    /// The scan cannot run past `len()` indices, since each hit consumes a
    /// distinct key.
    pub(crate) fn scan_indexed<'a>(
        &'a self,
        base: &'a str,
        suffix: &'a str,
    ) -> impl Iterator<Item = (usize, &'a str)> + 'a {
        (0..self.len())
            .map_while(move |i| self.get(&indexed_key(base, i, suffix)).map(|v| (i, v)))
    }
}

/// Renders `base(index)suffix`.
pub(crate) fn indexed_key(base: &str, index: usize, suffix: &str) -> String {
    format!("{base}({index}){suffix}")
}

/// Extracts `n` from a key shaped exactly like `base(n)suffix`.
fn index_of(key: &str, base: &str, suffix: &str) -> Option<usize> {
    let digits = key
        .strip_prefix(base)?
        .strip_prefix('(')?
        .strip_suffix(suffix)?
        .strip_suffix(')')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

impl From<HashMap<String, String>> for RawParams {
    fn from(inner: HashMap<String, String>) -> Self {
        Self { inner }
    }
}

impl From<BTreeMap<String, String>> for RawParams {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self {
            inner: map.into_iter().collect(),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for RawParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for RawParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
