//! Validators for the top-level request fields shared by the operations.

use crate::error::{Result, ValidationError};
use crate::filter::{item::has_auction_listing, ItemFilter};
use crate::raw::{RawParams, Syntax};
use crate::types::{OutputSelector, SortOrder};
use serde::Serialize;

const MAX_CATEGORY_IDS: usize = 3;
const MAX_CATEGORY_ID_LEN: usize = 10;
const MIN_KEYWORDS_LEN: usize = 2;
const MAX_KEYWORDS_LEN: usize = 350;
const MAX_KEYWORD_LEN: usize = 98;
/// Characters that act as search operators and separate keywords.
const KEYWORD_SEPARATORS: &[char] = &[' ', ',', '(', ')', '"', '-', '*', '@', '+'];
const MIN_POSTAL_CODE_LEN: usize = 3;
const PAGINATION_RANGE: std::ops::RangeInclusive<i64> = 1..=100;

/// Result paging requested with `paginationInput.*`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub entries_per_page: Option<u8>,
    pub page_number: Option<u8>,
}

impl Pagination {
    pub fn is_empty(&self) -> bool {
        self.entries_per_page.is_none() && self.page_number.is_none()
    }
}

/// True when either category ID syntax opens the construct.
pub(crate) fn has_category_ids(raw: &RawParams) -> bool {
    raw.contains("categoryId") || raw.contains("categoryId(0)")
}

pub(crate) fn parse_category_ids(raw: &RawParams) -> Result<Vec<String>> {
    let ids: Vec<&str> = match raw.syntax("categoryId", "")? {
        Syntax::Absent => Vec::new(),
        Syntax::Bare => raw.get("categoryId").into_iter().collect(),
        Syntax::Numbered => raw.scan_indexed("categoryId", "").map(|(_, v)| v).collect(),
    };

    let mut validated = Vec::with_capacity(ids.len());
    for id in ids {
        check_category_id(id)?;
        validated.push(id.to_owned());
        if validated.len() > MAX_CATEGORY_IDS {
            return Err(ValidationError::TooManyCategoryIds(MAX_CATEGORY_IDS));
        }
    }
    Ok(validated)
}

fn check_category_id(id: &str) -> Result<()> {
    if id.is_empty() || id.len() > MAX_CATEGORY_ID_LEN {
        return Err(ValidationError::InvalidCategoryIdLength(id.to_owned()));
    }
    id.parse::<i64>()
        .map(drop)
        .map_err(|_| ValidationError::InvalidCategoryId(id.to_owned()))
}

/// Validates `keywords`: total length in characters, then each keyword.
pub(crate) fn parse_keywords(raw: &RawParams) -> Result<String> {
    let keywords = raw.get("keywords").ok_or(ValidationError::KeywordsMissing)?;
    let len = keywords.chars().count();
    if !(MIN_KEYWORDS_LEN..=MAX_KEYWORDS_LEN).contains(&len) {
        return Err(ValidationError::InvalidKeywordsLength);
    }
    if split_keywords(keywords).any(|k| k.chars().count() > MAX_KEYWORD_LEN) {
        return Err(ValidationError::InvalidKeywordLength);
    }
    Ok(keywords.to_owned())
}

fn split_keywords(keywords: &str) -> impl Iterator<Item = &str> {
    keywords
        .split(KEYWORD_SEPARATORS)
        .filter(|k| !k.is_empty())
}

/// A store name must be non-empty, and `&` may only appear escaped.
pub(crate) fn check_store_name(name: &str) -> Result<String> {
    if name.is_empty() {
        return Err(ValidationError::InvalidStoreNameLength);
    }
    if name.contains('&') && !name.contains("&amp;") {
        return Err(ValidationError::InvalidStoreNameAmpersand);
    }
    Ok(name.to_owned())
}

pub(crate) fn parse_output_selectors(raw: &RawParams) -> Result<Vec<OutputSelector>> {
    let selectors: Vec<&str> = match raw.syntax("outputSelector", "")? {
        Syntax::Absent => Vec::new(),
        Syntax::Bare => raw.get("outputSelector").into_iter().collect(),
        Syntax::Numbered => raw
            .scan_indexed("outputSelector", "")
            .map(|(_, v)| v)
            .collect(),
    };
    selectors
        .into_iter()
        .map(|s| {
            OutputSelector::from_wire(s)
                .ok_or_else(|| ValidationError::InvalidOutputSelector(s.to_owned()))
        })
        .collect()
}

pub(crate) fn check_postal_code(code: &str) -> Result<String> {
    if code.chars().count() < MIN_POSTAL_CODE_LEN {
        return Err(ValidationError::InvalidPostalCode(code.to_owned()));
    }
    Ok(code.to_owned())
}

pub(crate) fn parse_pagination(raw: &RawParams) -> Result<Pagination> {
    let entries_per_page = raw
        .get("paginationInput.entriesPerPage")
        .map(|v| {
            page_value(
                v,
                ValidationError::InvalidEntriesPerPage,
                ValidationError::EntriesPerPageRange,
            )
        })
        .transpose()?;
    let page_number = raw
        .get("paginationInput.pageNumber")
        .map(|v| {
            page_value(
                v,
                ValidationError::InvalidPageNumber,
                ValidationError::PageNumberRange,
            )
        })
        .transpose()?;
    Ok(Pagination {
        entries_per_page,
        page_number,
    })
}

fn page_value(
    value: &str,
    invalid: fn(String) -> ValidationError,
    out_of_range: ValidationError,
) -> Result<u8> {
    let n = value
        .parse::<i64>()
        .map_err(|_| invalid(value.to_owned()))?;
    if !PAGINATION_RANGE.contains(&n) {
        return Err(out_of_range);
    }
    u8::try_from(n).map_err(|_| invalid(value.to_owned()))
}

/// Checks `sortOrder` membership and its preconditions on already
/// validated fields.
pub(crate) fn check_sort_order(
    value: &str,
    item_filters: &[ItemFilter],
    has_postal_code: bool,
) -> Result<SortOrder> {
    let order = SortOrder::from_wire(value)
        .ok_or_else(|| ValidationError::UnsupportedSortOrder(value.to_owned()))?;
    match order {
        SortOrder::BidCountFewest | SortOrder::BidCountMost
            if !has_auction_listing(item_filters) =>
        {
            Err(ValidationError::AuctionListingMissing)
        }
        SortOrder::DistanceNearest if !has_postal_code => {
            Err(ValidationError::BuyerPostalCodeMissing)
        }
        _ => Ok(order),
    }
}
