//! Validation errors for Finding API parameters.
//!
//! Every variant carries a stable display string. The offending value or
//! field name is kept as data so callers can inspect it without parsing the
//! message. [`ValidationError::kind`] groups variants into the coarse
//! categories callers usually branch on.

use crate::types::ItemFilterType;
use std::fmt;

/// Coarse classification of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The operation's required identifier(s) are absent.
    MissingField,
    /// Bare and indexed syntax were mixed for the same construct.
    IndexSyntax,
    /// One half of a required pair is present without its partner.
    IncompletePair,
    /// A value is not a member of its fixed value set.
    UnsupportedValue,
    /// A numeric value failed to parse or is outside its bounds.
    InvalidNumber,
    /// A cross-field or cross-filter rule is violated, or a value breaks a
    /// format rule such as length or count limits.
    Constraint,
    /// A product identifier failed its structural or checksum rule.
    Checksum,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MissingField => "missing field",
            Self::IndexSyntax => "index syntax",
            Self::IncompletePair => "incomplete pair",
            Self::UnsupportedValue => "unsupported value",
            Self::InvalidNumber => "invalid number",
            Self::Constraint => "constraint",
            Self::Checksum => "checksum",
        };
        f.write_str(s)
    }
}

/// A single violated validation rule. Validation stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("category ID parameter is missing")]
    CategoryIdMissing,

    #[error("keywords parameter is missing")]
    KeywordsMissing,

    #[error("both category ID and keywords parameters are missing")]
    CategoryIdKeywordsMissing,

    #[error("product ID parameter or product ID type are missing")]
    ProductIdMissing,

    #[error("category ID, keywords, and store name parameters are missing")]
    CategoryIdKeywordsStoreNameMissing,

    /// Both `key` and `key(n)` forms were supplied.
    #[error("invalid filter syntax: both index and non-index syntax are present for {key:?}")]
    IndexSyntax { key: String },

    /// A filter name was supplied without any value under `attribute`.
    #[error("incomplete filter: missing {attribute:?}")]
    IncompleteFilter { attribute: String },

    #[error("incomplete item filter: both paramName and paramValue must be specified together")]
    IncompleteItemFilterParam,

    #[error("incomplete affiliate: both network and tracking IDs must be specified together")]
    IncompleteAffiliate,

    #[error("unsupported item filter type: {0:?}")]
    UnsupportedItemFilterType(String),

    #[error("invalid boolean value, allowed values are true and false: {0:?}")]
    InvalidBoolean(String),

    #[error("invalid country code: {0:?}")]
    InvalidCountryCode(String),

    #[error("invalid condition: {0:?}")]
    InvalidCondition(String),

    #[error("invalid currency ID: {0:?}")]
    InvalidCurrencyId(String),

    #[error("invalid date time value: {0:?}")]
    InvalidDateTime(String),

    /// A multi-valued filter exceeded its value count limit.
    #[error("maximum values for {filter} item filter is {max}")]
    TooManyFilterValues { filter: ItemFilterType, max: usize },

    /// `filter` was combined with another member of the seller group.
    #[error("{filter:?} item filter cannot be used together with {other:?} item filter")]
    SellerFilterConflict {
        filter: ItemFilterType,
        other: ItemFilterType,
    },

    #[error("invalid integer: {value:?} (minimum value: {minimum})")]
    InvalidInteger { value: String, minimum: i64 },

    /// A max/min filter pair is inverted.
    #[error("invalid numeric item filter: {max} must be greater than or equal to {min}")]
    NumericFilterRange {
        max: ItemFilterType,
        min: ItemFilterType,
    },

    #[error("invalid expedited shipping type: {0:?}")]
    InvalidExpeditedShippingType(String),

    #[error("'All' listing type cannot be combined with other listing types")]
    AllListingTypeCombined,

    #[error("invalid listing type: {0:?}")]
    InvalidListingType(String),

    #[error("duplicate listing type: {0:?}")]
    DuplicateListingType(String),

    #[error("'Auction' and 'AuctionWithBIN' listing types cannot be combined")]
    AuctionListingTypesCombined,

    #[error("MaxDistance item filter is missing when using LocalSearchOnly item filter")]
    MaxDistanceMissing,

    #[error("buyerPostalCode is missing")]
    BuyerPostalCodeMissing,

    #[error("invalid price: {0:?}")]
    InvalidPrice(String),

    #[error("invalid price parameter name, must be \"Currency\": {0:?}")]
    InvalidPriceParamName(String),

    #[error("maximum price must be greater than or equal to minimum price")]
    PriceRange,

    /// MaxPrice and MinPrice carry different currency qualifiers.
    #[error("price currencies must match: {max:?} and {min:?}")]
    PriceCurrencyMismatch { max: String, min: String },

    #[error("multiple seller business types found")]
    MultipleSellerBusinessTypes,

    #[error("invalid seller business type: {0:?}")]
    InvalidSellerBusinessType(String),

    #[error("invalid value box inventory: {0:?}")]
    InvalidValueBoxInventory(String),

    #[error("invalid global ID: {0:?}")]
    InvalidGlobalId(String),

    #[error("maximum category IDs to specify is {0}")]
    TooManyCategoryIds(usize),

    #[error("invalid category ID length: must be between 1 and 10 characters: {0:?}")]
    InvalidCategoryIdLength(String),

    #[error("invalid category ID: {0:?}")]
    InvalidCategoryId(String),

    #[error("invalid keywords length: must be between 2 and 350 characters")]
    InvalidKeywordsLength,

    #[error("invalid keyword length: must be no more than 98 characters")]
    InvalidKeywordLength,

    #[error("invalid product ID length")]
    InvalidProductIdLength,

    #[error("invalid ISBN length: must be either 10 or 13 characters")]
    InvalidIsbnLength,

    #[error("invalid ISBN")]
    InvalidIsbn,

    #[error("invalid UPC length: must be 12 digits")]
    InvalidUpcLength,

    #[error("invalid UPC")]
    InvalidUpc,

    #[error("invalid EAN length: must be either 8 or 13 characters")]
    InvalidEanLength,

    #[error("invalid EAN")]
    InvalidEan,

    #[error("unsupported product ID type: {0:?}")]
    UnsupportedProductIdType(String),

    #[error("invalid store name length")]
    InvalidStoreNameLength,

    #[error("storeName contains unescaped '&' characters")]
    InvalidStoreNameAmpersand,

    #[error("invalid output selector: {0:?}")]
    InvalidOutputSelector(String),

    #[error("invalid affiliate custom ID length: must be no more than 256 characters")]
    InvalidCustomIdLength,

    #[error("invalid affiliate network ID: {0:?}")]
    InvalidNetworkId(String),

    #[error("invalid affiliate network ID: must be between 2 and 9")]
    NetworkIdRange,

    #[error("invalid affiliate tracking ID: {0:?}")]
    InvalidTrackingId(String),

    #[error("invalid affiliate Campaign ID length: must be a 10-digit number")]
    InvalidCampaignId,

    #[error("invalid postal code: {0:?}")]
    InvalidPostalCode(String),

    #[error("invalid pagination entries per page: {0:?}")]
    InvalidEntriesPerPage(String),

    #[error("invalid pagination entries per page, must be between 1 and 100")]
    EntriesPerPageRange,

    #[error("invalid pagination page number: {0:?}")]
    InvalidPageNumber(String),

    #[error("invalid pagination page number, must be between 1 and 100")]
    PageNumberRange,

    #[error("'Auction' listing type required for sorting by bid count")]
    AuctionListingMissing,

    #[error("invalid sort order type: {0:?}")]
    UnsupportedSortOrder(String),
}

impl ValidationError {
    /// Returns the coarse category of this error.
    pub fn kind(&self) -> ErrorKind {
        use ValidationError::*;
        match self {
            CategoryIdMissing
            | KeywordsMissing
            | CategoryIdKeywordsMissing
            | ProductIdMissing
            | CategoryIdKeywordsStoreNameMissing => ErrorKind::MissingField,

            IndexSyntax { .. } => ErrorKind::IndexSyntax,

            IncompleteFilter { .. } | IncompleteItemFilterParam | IncompleteAffiliate => {
                ErrorKind::IncompletePair
            }

            UnsupportedItemFilterType(_)
            | InvalidBoolean(_)
            | InvalidCountryCode(_)
            | InvalidCondition(_)
            | InvalidCurrencyId(_)
            | InvalidExpeditedShippingType(_)
            | InvalidListingType(_)
            | InvalidPriceParamName(_)
            | InvalidSellerBusinessType(_)
            | InvalidValueBoxInventory(_)
            | InvalidGlobalId(_)
            | UnsupportedProductIdType(_)
            | InvalidOutputSelector(_)
            | UnsupportedSortOrder(_) => ErrorKind::UnsupportedValue,

            InvalidInteger { .. }
            | InvalidPrice(_)
            | InvalidCategoryId(_)
            | InvalidNetworkId(_)
            | NetworkIdRange
            | InvalidTrackingId(_)
            | InvalidEntriesPerPage(_)
            | EntriesPerPageRange
            | InvalidPageNumber(_)
            | PageNumberRange => ErrorKind::InvalidNumber,

            InvalidIsbnLength | InvalidIsbn | InvalidUpcLength | InvalidUpc
            | InvalidEanLength | InvalidEan => ErrorKind::Checksum,

            InvalidDateTime(_)
            | TooManyFilterValues { .. }
            | SellerFilterConflict { .. }
            | NumericFilterRange { .. }
            | AllListingTypeCombined
            | DuplicateListingType(_)
            | AuctionListingTypesCombined
            | MaxDistanceMissing
            | BuyerPostalCodeMissing
            | PriceRange
            | PriceCurrencyMismatch { .. }
            | MultipleSellerBusinessTypes
            | TooManyCategoryIds(_)
            | InvalidCategoryIdLength(_)
            | InvalidKeywordsLength
            | InvalidKeywordLength
            | InvalidProductIdLength
            | InvalidStoreNameLength
            | InvalidStoreNameAmpersand
            | InvalidCustomIdLength
            | InvalidCampaignId
            | InvalidPostalCode(_)
            | AuctionListingMissing => ErrorKind::Constraint,
        }
    }
}

/// Convenience type alias for validation results.
pub type Result<T> = std::result::Result<T, ValidationError>;
