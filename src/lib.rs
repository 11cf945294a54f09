//! Finding: validated client for Finding-style marketplace search calls.
//!
//! Calls flow through three stages:
//! raw parameters → validation and query building (`finding-query`) →
//! HTTP GET → typed response
//!
//! # Architecture
//!
//! - **Validation**: [`finding_query`] turns a flat parameter mapping into a
//!   canonical query, or rejects it before any network traffic
//! - **Client**: [`FindingClient`] sends the query and checks the status
//! - **Responses**: [`response`] models the array-wrapped JSON body
//! - **Config**: [`FindingConfig`] is loaded from TOML

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod response;

pub use client::FindingClient;
pub use config::FindingConfig;
pub use error::{FindingError, Result};
pub use response::{
    FindItemsAdvancedResponse, FindItemsByCategoryResponse, FindItemsByKeywordsResponse,
    FindItemsByProductResponse, FindItemsInStoresResponse, FindItemsResponse, ResultProvider,
    SearchItem,
};

pub use finding_query::{
    FindParams, Operation, QueryParams, RawParams, ValidationContext, ValidationError,
};
