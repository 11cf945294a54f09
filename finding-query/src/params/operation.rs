//! The five search operations and what distinguishes them.

use crate::types::UnknownValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Finding API search operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// `findItemsByCategory`: requires category IDs.
    ByCategory,
    /// `findItemsByKeywords`: requires keywords.
    ByKeywords,
    /// `findItemsAdvanced`: requires category IDs or keywords.
    Advanced,
    /// `findItemsByProduct`: requires a product identifier. No aspect filters.
    ByProduct,
    /// `findItemsIneBayStores`: requires category IDs, keywords, or a store name.
    InStores,
}

impl Operation {
    /// All operations, in documentation order.
    pub fn all() -> &'static [Operation] {
        &[
            Self::ByCategory,
            Self::ByKeywords,
            Self::Advanced,
            Self::ByProduct,
            Self::InStores,
        ]
    }

    /// Wire name sent as `OPERATION-NAME`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ByCategory => "findItemsByCategory",
            Self::ByKeywords => "findItemsByKeywords",
            Self::Advanced => "findItemsAdvanced",
            Self::ByProduct => "findItemsByProduct",
            Self::InStores => "findItemsIneBayStores",
        }
    }

    /// Top-level key of the JSON response body.
    pub fn response_key(&self) -> &'static str {
        match self {
            Self::ByCategory => "findItemsByCategoryResponse",
            Self::ByKeywords => "findItemsByKeywordsResponse",
            Self::Advanced => "findItemsAdvancedResponse",
            Self::ByProduct => "findItemsByProductResponse",
            Self::InStores => "findItemsIneBayStoresResponse",
        }
    }

    pub fn accepts_aspect_filters(&self) -> bool {
        !matches!(self, Self::ByProduct)
    }

    /// `descriptionSearch` is only part of the advanced operation.
    pub fn accepts_description_search(&self) -> bool {
        matches!(self, Self::Advanced)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|op| op.name() == s)
            .ok_or_else(|| UnknownValue {
                set: "Operation",
                value: s.to_owned(),
            })
    }
}
