//! Fixed value sets of the Finding API, with their exact wire spellings.
//!
//! Each set is a closed enum generated by [`value_set!`]. Every enum offers
//! `all()`, `as_str()`, `from_wire()`, [`fmt::Display`] and [`FromStr`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Returned by [`FromStr`] on a value set when the input is not a member.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {set} value: {value:?}")]
pub struct UnknownValue {
    /// Name of the value set that rejected the input.
    pub set: &'static str,
    /// The rejected input.
    pub value: String,
}

// ---------------------------------------------------------------------------
// Macro to generate closed string enums with exact wire spellings.
// ---------------------------------------------------------------------------

macro_rules! value_set {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $wire:tt),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[allow(missing_docs)]
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Returns every member, in wire-documentation order.
            pub fn all() -> &'static [$name] {
                &[$($name::$variant),+]
            }

            /// Returns the exact wire spelling.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }

            /// Looks up a member by exact (case-sensitive) wire spelling.
            pub fn from_wire(value: &str) -> Option<Self> {
                Self::all().iter().copied().find(|v| v.as_str() == value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_wire(s).ok_or_else(|| UnknownValue {
                    set: stringify!($name),
                    value: s.to_owned(),
                })
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Value sets
// ---------------------------------------------------------------------------

value_set!(
    /// Regional storefront selector (`Global-ID`, `ListedIn`).
    GlobalId {
        EbayAt => "EBAY-AT",
        EbayAu => "EBAY-AU",
        EbayCh => "EBAY-CH",
        EbayDe => "EBAY-DE",
        EbayEnca => "EBAY-ENCA",
        EbayEs => "EBAY-ES",
        EbayFr => "EBAY-FR",
        EbayFrbe => "EBAY-FRBE",
        EbayFrca => "EBAY-FRCA",
        EbayGb => "EBAY-GB",
        EbayHk => "EBAY-HK",
        EbayIe => "EBAY-IE",
        EbayIn => "EBAY-IN",
        EbayIt => "EBAY-IT",
        EbayMotor => "EBAY-MOTOR",
        EbayMy => "EBAY-MY",
        EbayNl => "EBAY-NL",
        EbayNlbe => "EBAY-NLBE",
        EbayPh => "EBAY-PH",
        EbayPl => "EBAY-PL",
        EbaySg => "EBAY-SG",
        EbayUs => "EBAY-US",
    }
);

value_set!(
    /// Optional response data requested with `outputSelector`.
    OutputSelector {
        AspectHistogram => "AspectHistogram",
        CategoryHistogram => "CategoryHistogram",
        ConditionHistogram => "ConditionHistogram",
        GalleryInfo => "GalleryInfo",
        PictureUrlLarge => "PictureURLLarge",
        PictureUrlSuperSize => "PictureURLSuperSize",
        SellerInfo => "SellerInfo",
        StoreInfo => "StoreInfo",
        UnitPriceInfo => "UnitPriceInfo",
    }
);

value_set!(
    /// Result ordering requested with `sortOrder`.
    SortOrder {
        BestMatch => "BestMatch",
        BidCountFewest => "BidCountFewest",
        BidCountMost => "BidCountMost",
        CountryAscending => "CountryAscending",
        CountryDescending => "CountryDescending",
        CurrentPriceHighest => "CurrentPriceHighest",
        DistanceNearest => "DistanceNearest",
        EndTimeSoonest => "EndTimeSoonest",
        PricePlusShippingHighest => "PricePlusShippingHighest",
        PricePlusShippingLowest => "PricePlusShippingLowest",
        StartTimeNewest => "StartTimeNewest",
        WatchCountDecreaseSort => "WatchCountDecreaseSort",
    }
);

value_set!(
    /// Recognised item filter names.
    ItemFilterType {
        AuthorizedSellerOnly => "AuthorizedSellerOnly",
        AvailableTo => "AvailableTo",
        BestOfferOnly => "BestOfferOnly",
        CharityOnly => "CharityOnly",
        Condition => "Condition",
        Currency => "Currency",
        EndTimeFrom => "EndTimeFrom",
        EndTimeTo => "EndTimeTo",
        ExcludeAutoPay => "ExcludeAutoPay",
        ExcludeCategory => "ExcludeCategory",
        ExcludeSeller => "ExcludeSeller",
        ExpeditedShippingType => "ExpeditedShippingType",
        FeedbackScoreMax => "FeedbackScoreMax",
        FeedbackScoreMin => "FeedbackScoreMin",
        FreeShippingOnly => "FreeShippingOnly",
        HideDuplicateItems => "HideDuplicateItems",
        ListedIn => "ListedIn",
        ListingType => "ListingType",
        LocalPickupOnly => "LocalPickupOnly",
        LocalSearchOnly => "LocalSearchOnly",
        LocatedIn => "LocatedIn",
        LotsOnly => "LotsOnly",
        MaxBids => "MaxBids",
        MaxDistance => "MaxDistance",
        MaxHandlingTime => "MaxHandlingTime",
        MaxPrice => "MaxPrice",
        MaxQuantity => "MaxQuantity",
        MinBids => "MinBids",
        MinPrice => "MinPrice",
        MinQuantity => "MinQuantity",
        ModTimeFrom => "ModTimeFrom",
        ReturnsAcceptedOnly => "ReturnsAcceptedOnly",
        Seller => "Seller",
        SellerBusinessType => "SellerBusinessType",
        SoldItemsOnly => "SoldItemsOnly",
        StartTimeFrom => "StartTimeFrom",
        StartTimeTo => "StartTimeTo",
        TopRatedSellerOnly => "TopRatedSellerOnly",
        ValueBoxInventory => "ValueBoxInventory",
    }
);

value_set!(
    /// Values accepted by the `ListingType` item filter.
    ListingType {
        Auction => "Auction",
        AuctionWithBin => "AuctionWithBIN",
        Classified => "Classified",
        FixedPrice => "FixedPrice",
        StoreInventory => "StoreInventory",
        All => "All",
    }
);

value_set!(
    /// Currency codes accepted by `Currency` and price qualifiers.
    CurrencyId {
        Aud => "AUD",
        Cad => "CAD",
        Chf => "CHF",
        Cny => "CNY",
        Eur => "EUR",
        Gbp => "GBP",
        Hkd => "HKD",
        Inr => "INR",
        Myr => "MYR",
        Php => "PHP",
        Pln => "PLN",
        Sek => "SEK",
        Sgd => "SGD",
        Twd => "TWD",
        Usd => "USD",
    }
);

value_set!(
    /// Kinds of product identifier accepted by `productId.@type`.
    ProductIdType {
        ReferenceId => "ReferenceID",
        Isbn => "ISBN",
        Upc => "UPC",
        Ean => "EAN",
    }
);

value_set!(
    /// Values accepted by the `ExpeditedShippingType` item filter.
    ExpeditedShippingType {
        Expedited => "Expedited",
        OneDayShipping => "OneDayShipping",
    }
);

value_set!(
    /// Values accepted by the `SellerBusinessType` item filter.
    SellerBusinessType {
        Business => "Business",
        Private => "Private",
    }
);

/// Known numeric item condition IDs.
pub const CONDITION_IDS: [i64; 14] = [
    1000, 1500, 1750, 2000, 2010, 2020, 2030, 2500, 2750, 3000, 4000, 5000, 6000, 7000,
];
