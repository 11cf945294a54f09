//! Item filters: named result constraints with type-specific value rules.
//!
//! Parsing runs in two passes. The first collects every filter in input
//! order and enforces completeness (`name` needs a value, `paramName` needs
//! `paramValue`). The second validates each filter against its type rules,
//! with the whole list available for sibling rules such as min/max ordering
//! and seller-filter exclusivity.

use super::{filter_values, ValidationContext};
use crate::error::{Result, ValidationError};
use crate::raw::{indexed_key, RawParams, Syntax};
use crate::types::{self, ItemFilterType, CONDITION_IDS};
use crate::validate::{
    check_boolean, check_country_code, check_currency, check_date_time, check_global_id,
    check_min_integer, Window,
};
use serde::Serialize;
use std::collections::HashSet;

const MAX_EXCLUDE_CATEGORIES: usize = 25;
const MAX_LOCATED_IN: usize = 25;
const MAX_SELLERS: usize = 100;
const SMALLEST_MAX_DISTANCE: i64 = 5;
const CURRENCY_PARAM: &str = "Currency";

/// Qualifier attached to an item filter (`paramName` / `paramValue`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterParam {
    pub name: String,
    pub value: String,
}

/// A validated item filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemFilter {
    pub name: ItemFilterType,
    /// Never empty.
    pub values: Vec<String>,
    pub param: Option<FilterParam>,
}

impl ItemFilter {
    /// First value, used by single-valued filters and pair comparisons.
    pub fn value(&self) -> &str {
        self.values.first().map(String::as_str).unwrap_or_default()
    }
}

/// A collected filter whose name and values have not been type-checked yet.
#[derive(Debug)]
struct Pending<'a> {
    name: &'a str,
    kind: Option<ItemFilterType>,
    values: Vec<String>,
    param: Option<FilterParam>,
}

impl Pending<'_> {
    fn first(&self) -> &str {
        self.values.first().map(String::as_str).unwrap_or_default()
    }
}

/// Extracts and validates item filters from `itemFilter.*` /
/// `itemFilter(n).*` keys.
pub fn parse_item_filters(raw: &RawParams, ctx: &ValidationContext) -> Result<Vec<ItemFilter>> {
    let pending = collect(raw)?;

    let mut filters = Vec::with_capacity(pending.len());
    for filter in &pending {
        let kind = filter
            .kind
            .ok_or_else(|| ValidationError::UnsupportedItemFilterType(filter.name.to_owned()))?;
        check_filter(kind, filter, &pending, raw, ctx)?;
        filters.push(ItemFilter {
            name: kind,
            values: filter.values.clone(),
            param: filter.param.clone(),
        });
    }

    share_price_currency(&mut filters);
    Ok(filters)
}

/// Returns true when a `ListingType` filter includes `Auction`.
pub fn has_auction_listing(filters: &[ItemFilter]) -> bool {
    filters.iter().any(|f| {
        f.name == ItemFilterType::ListingType
            && f.values.iter().any(|v| v == types::ListingType::Auction.as_str())
    })
}

fn collect(raw: &RawParams) -> Result<Vec<Pending<'_>>> {
    match raw.syntax("itemFilter", ".name")? {
        Syntax::Absent => Ok(Vec::new()),
        Syntax::Bare => {
            let name = raw.get("itemFilter.name").unwrap_or_default();
            Ok(vec![collect_one(raw, "itemFilter", name)?])
        }
        Syntax::Numbered => raw
            .scan_indexed("itemFilter", ".name")
            .map(|(i, name)| collect_one(raw, &indexed_key("itemFilter", i, ""), name))
            .collect(),
    }
}

fn collect_one<'a>(raw: &RawParams, prefix: &str, name: &'a str) -> Result<Pending<'a>> {
    let values = filter_values(raw, &format!("{prefix}.value"))?;
    let param = match (
        raw.get(&format!("{prefix}.paramName")),
        raw.get(&format!("{prefix}.paramValue")),
    ) {
        (Some(name), Some(value)) => Some(FilterParam {
            name: name.to_owned(),
            value: value.to_owned(),
        }),
        (None, None) => None,
        _ => return Err(ValidationError::IncompleteItemFilterParam),
    };
    Ok(Pending {
        name,
        kind: ItemFilterType::from_wire(name),
        values,
        param,
    })
}

fn check_filter(
    kind: ItemFilterType,
    filter: &Pending<'_>,
    siblings: &[Pending<'_>],
    raw: &RawParams,
    ctx: &ValidationContext,
) -> Result<()> {
    use ItemFilterType::*;
    let values = filter.values.as_slice();

    match kind {
        AuthorizedSellerOnly | BestOfferOnly | CharityOnly | ExcludeAutoPay | FreeShippingOnly
        | HideDuplicateItems | LocalPickupOnly | LotsOnly | ReturnsAcceptedOnly | SoldItemsOnly => {
            each(values, |v| check_boolean(v).map(drop))
        }
        AvailableTo => each(values, check_country_code),
        LocatedIn => {
            check_count(kind, values, MAX_LOCATED_IN)?;
            each(values, check_country_code)
        }
        Condition => each(values, check_condition),
        Currency => each(values, |v| check_currency(v).map(drop)),
        EndTimeFrom | EndTimeTo | StartTimeFrom | StartTimeTo => {
            each(values, |v| check_date_time(v, ctx.instant(), Window::Future))
        }
        ModTimeFrom => each(values, |v| check_date_time(v, ctx.instant(), Window::Past)),
        ExcludeCategory => {
            check_count(kind, values, MAX_EXCLUDE_CATEGORIES)?;
            each(values, |v| check_min_integer(v, 0).map(drop))
        }
        ExcludeSeller | Seller => {
            check_count(kind, values, MAX_SELLERS)?;
            check_seller_group(kind, siblings)
        }
        TopRatedSellerOnly => {
            each(values, |v| check_boolean(v).map(drop))?;
            check_seller_group(kind, siblings)
        }
        ExpeditedShippingType => each(values, |v| {
            types::ExpeditedShippingType::from_wire(v)
                .map(drop)
                .ok_or_else(|| ValidationError::InvalidExpeditedShippingType(v.to_owned()))
        }),
        FeedbackScoreMax | FeedbackScoreMin => {
            check_numeric_pair(filter, siblings, 0, FeedbackScoreMax, FeedbackScoreMin)
        }
        MaxBids | MinBids => check_numeric_pair(filter, siblings, 0, MaxBids, MinBids),
        MaxQuantity | MinQuantity => {
            check_numeric_pair(filter, siblings, 1, MaxQuantity, MinQuantity)
        }
        ListingType => check_listing_types(values),
        LocalSearchOnly => {
            require_postal_code(raw)?;
            if !siblings.iter().any(|f| f.kind == Some(MaxDistance)) {
                return Err(ValidationError::MaxDistanceMissing);
            }
            each(values, |v| check_boolean(v).map(drop))
        }
        MaxDistance => {
            require_postal_code(raw)?;
            each(values, |v| check_min_integer(v, SMALLEST_MAX_DISTANCE).map(drop))
        }
        MaxHandlingTime => each(values, |v| check_min_integer(v, 1).map(drop)),
        MaxPrice | MinPrice => check_price_range(kind, filter, siblings),
        SellerBusinessType => {
            if values.len() > 1 {
                return Err(ValidationError::MultipleSellerBusinessTypes);
            }
            each(values, |v| {
                types::SellerBusinessType::from_wire(v)
                    .map(drop)
                    .ok_or_else(|| ValidationError::InvalidSellerBusinessType(v.to_owned()))
            })
        }
        ValueBoxInventory => each(values, |v| match v {
            "0" | "1" => Ok(()),
            _ => Err(ValidationError::InvalidValueBoxInventory(v.to_owned())),
        }),
        ListedIn => each(values, |v| check_global_id(v).map(drop)),
    }
}

fn each(values: &[String], check: impl Fn(&str) -> Result<()>) -> Result<()> {
    values.iter().try_for_each(|v| check(v))
}

fn check_count(filter: ItemFilterType, values: &[String], max: usize) -> Result<()> {
    if values.len() > max {
        return Err(ValidationError::TooManyFilterValues { filter, max });
    }
    Ok(())
}

fn require_postal_code(raw: &RawParams) -> Result<()> {
    if raw.contains("buyerPostalCode") {
        Ok(())
    } else {
        Err(ValidationError::BuyerPostalCodeMissing)
    }
}

/// A known numeric condition ID, or any non-numeric condition name.
fn check_condition(value: &str) -> Result<()> {
    match value.parse::<i64>() {
        Ok(id) if CONDITION_IDS.contains(&id) => Ok(()),
        Ok(_) => Err(ValidationError::InvalidCondition(value.to_owned())),
        Err(_) => Ok(()),
    }
}

/// `Seller`, `ExcludeSeller` and `TopRatedSellerOnly` are mutually exclusive.
fn check_seller_group(filter: ItemFilterType, siblings: &[Pending<'_>]) -> Result<()> {
    const GROUP: [ItemFilterType; 3] = [
        ItemFilterType::Seller,
        ItemFilterType::ExcludeSeller,
        ItemFilterType::TopRatedSellerOnly,
    ];
    let conflict = siblings
        .iter()
        .filter_map(|f| f.kind)
        .find(|other| *other != filter && GROUP.contains(other));
    match conflict {
        Some(other) => Err(ValidationError::SellerFilterConflict { filter, other }),
        None => Ok(()),
    }
}

fn check_numeric_pair(
    filter: &Pending<'_>,
    siblings: &[Pending<'_>],
    minimum: i64,
    max: ItemFilterType,
    min: ItemFilterType,
) -> Result<()> {
    for v in &filter.values {
        check_min_integer(v, minimum)?;
    }

    let first_of = |kind: ItemFilterType| -> Result<Option<i64>> {
        siblings
            .iter()
            .find(|f| f.kind == Some(kind))
            .map(|f| check_min_integer(f.first(), minimum))
            .transpose()
    };
    if let (Some(upper), Some(lower)) = (first_of(max)?, first_of(min)?) {
        if lower > upper {
            return Err(ValidationError::NumericFilterRange { max, min });
        }
    }
    Ok(())
}

fn check_listing_types(values: &[String]) -> Result<()> {
    use types::ListingType;
    let mut seen = HashSet::new();
    for v in values {
        let listing = ListingType::from_wire(v)
            .ok_or_else(|| ValidationError::InvalidListingType(v.clone()))?;
        if listing == ListingType::All && values.len() > 1 {
            return Err(ValidationError::AllListingTypeCombined);
        }
        if !seen.insert(listing) {
            return Err(ValidationError::DuplicateListingType(v.clone()));
        }
        if seen.contains(&ListingType::Auction) && seen.contains(&ListingType::AuctionWithBin) {
            return Err(ValidationError::AuctionListingTypesCombined);
        }
    }
    Ok(())
}

/// Parses a price value and its optional currency qualifier.
fn parse_price(filter: &Pending<'_>) -> Result<f64> {
    let prices = filter
        .values
        .iter()
        .map(|v| {
            v.parse::<f64>()
                .ok()
                .filter(|p| p.is_finite() && *p >= 0.0)
                .ok_or_else(|| ValidationError::InvalidPrice(v.clone()))
        })
        .collect::<Result<Vec<_>>>()?;
    if let Some(param) = &filter.param {
        if param.name != CURRENCY_PARAM {
            return Err(ValidationError::InvalidPriceParamName(param.name.clone()));
        }
        check_currency(&param.value)?;
    }
    Ok(prices.first().copied().unwrap_or_default())
}

fn check_price_range(
    kind: ItemFilterType,
    filter: &Pending<'_>,
    siblings: &[Pending<'_>],
) -> Result<()> {
    let price = parse_price(filter)?;
    let partner = match kind {
        ItemFilterType::MaxPrice => ItemFilterType::MinPrice,
        _ => ItemFilterType::MaxPrice,
    };
    let Some(other) = siblings.iter().find(|f| f.kind == Some(partner)) else {
        return Ok(());
    };
    let other_price = parse_price(other)?;
    let (max, min) = if kind == ItemFilterType::MaxPrice {
        (price, other_price)
    } else {
        (other_price, price)
    };
    if max < min {
        return Err(ValidationError::PriceRange);
    }

    if let (Some(a), Some(b)) = (&filter.param, &other.param) {
        if a.value != b.value {
            let (max, min) = if kind == ItemFilterType::MaxPrice {
                (&a.value, &b.value)
            } else {
                (&b.value, &a.value)
            };
            return Err(ValidationError::PriceCurrencyMismatch {
                max: max.clone(),
                min: min.clone(),
            });
        }
    }
    Ok(())
}

/// Copies a currency qualifier given on one side of the price pair to the
/// other side.
fn share_price_currency(filters: &mut [ItemFilter]) {
    let currency = filters
        .iter()
        .filter(|f| is_price(f.name))
        .find_map(|f| f.param.clone());
    let Some(currency) = currency else {
        return;
    };
    for f in filters
        .iter_mut()
        .filter(|f| is_price(f.name))
    {
        f.param.get_or_insert_with(|| currency.clone());
    }
}

fn is_price(name: ItemFilterType) -> bool {
    matches!(name, ItemFilterType::MaxPrice | ItemFilterType::MinPrice)
}
