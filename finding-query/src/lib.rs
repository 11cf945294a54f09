//! # finding-query
//!
//! Parameter validation and query construction for Finding-style search API
//! calls.
//!
//! Callers supply a flat `name -> value` mapping ([`RawParams`]). This crate
//! decides whether the mapping is a legal request for one of the five search
//! operations, and either rejects it with a precise [`ValidationError`] or
//! produces an immutable [`FindParams`] that serializes to the canonical,
//! positionally indexed query string the remote service expects.
//!
//! ## Design
//!
//! - The untyped mapping is confined to [`raw`]; everything after
//!   validation is typed
//! - One shared toolkit handles all operations; [`Operation`] supplies the
//!   per-operation differences
//! - Validation stops at the first violated rule, in a fixed field order
//! - Date-time filters are judged against a [`ValidationContext`], so a
//!   pinned instant gives reproducible results
//! - No I/O: the HTTP call and response decoding live in the `finding` crate
//!
//! ## Example
//!
//! ```
//! use finding_query::{build_query, Operation, RawParams};
//!
//! let raw = RawParams::from([
//!     ("keywords", "rust programming"),
//!     ("itemFilter.name", "MaxPrice"),
//!     ("itemFilter.value", "30"),
//! ]);
//! let query = build_query(Operation::ByKeywords, "my-app-id", &raw)?;
//! assert_eq!(query.get("itemFilter(0).value(0)"), Some("30"));
//! # Ok::<(), finding_query::ValidationError>(())
//! ```

pub mod error;
pub mod filter;
pub mod params;
pub mod query;
pub mod raw;
pub mod types;
mod validate;

pub use error::{ErrorKind, Result, ValidationError};
pub use filter::{AspectFilter, FilterParam, ItemFilter, ValidationContext};
pub use params::{Affiliate, AffiliateNetwork, FindParams, Operation, Pagination, ProductId};
pub use query::{build_query, build_query_at, QueryParams};
pub use raw::RawParams;
pub use types::{
    CurrencyId, ExpeditedShippingType, GlobalId, ItemFilterType, ListingType, OutputSelector,
    ProductIdType, SellerBusinessType, SortOrder, UnknownValue,
};
