//! Operation parameter builder.
//!
//! [`FindParams::validate`] turns [`RawParams`] into an immutable, typed
//! parameter set for one [`Operation`]. Fields are processed in a fixed
//! order and the first violated rule is returned:
//!
//! 1. the operation's required fields (category IDs, keywords, product ID,
//!    store name, depending on the operation)
//! 2. `Global-ID`
//! 3. aspect filters (all operations except by-product)
//! 4. `descriptionSearch` (advanced only)
//! 5. item filters
//! 6. output selectors
//! 7. affiliate
//! 8. `buyerPostalCode`
//! 9. pagination
//! 10. `sortOrder`

pub mod affiliate;
pub mod fields;
pub mod operation;
pub mod product;

pub use affiliate::{Affiliate, AffiliateNetwork};
pub use fields::Pagination;
pub use operation::Operation;
pub use product::ProductId;

use crate::error::{Result, ValidationError};
use crate::filter::{parse_aspect_filters, parse_item_filters, AspectFilter, ItemFilter, ValidationContext};
use crate::raw::RawParams;
use crate::types::{GlobalId, OutputSelector, SortOrder};
use crate::validate::{check_boolean, check_global_id};
use fields::{
    check_postal_code, check_sort_order, check_store_name, has_category_ids, parse_category_ids,
    parse_keywords, parse_output_selectors, parse_pagination,
};
use serde::Serialize;
use tracing::{debug, trace};

/// Validated parameters for one search request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FindParams {
    operation: Operation,
    global_id: Option<GlobalId>,
    aspect_filters: Vec<AspectFilter>,
    category_ids: Vec<String>,
    description_search: Option<bool>,
    item_filters: Vec<ItemFilter>,
    keywords: Option<String>,
    output_selectors: Vec<OutputSelector>,
    product_id: Option<ProductId>,
    store_name: Option<String>,
    affiliate: Option<Affiliate>,
    buyer_postal_code: Option<String>,
    pagination: Pagination,
    sort_order: Option<SortOrder>,
}

impl FindParams {
    /// Validates `raw` for `operation`, judging date-time filters against
    /// the current time.
    pub fn validate(operation: Operation, raw: &RawParams) -> Result<Self> {
        Self::validate_at(operation, raw, &ValidationContext::now())
    }

    /// Validates `raw` for `operation` under an explicit context.
    pub fn validate_at(
        operation: Operation,
        raw: &RawParams,
        ctx: &ValidationContext,
    ) -> Result<Self> {
        match Self::build(operation, raw, ctx) {
            Ok(params) => {
                trace!(
                    operation = %operation,
                    category_ids = params.category_ids.len(),
                    aspect_filters = params.aspect_filters.len(),
                    item_filters = params.item_filters.len(),
                    "parameters validated"
                );
                Ok(params)
            }
            Err(e) => {
                debug!(operation = %operation, kind = %e.kind(), "parameter validation failed");
                trace!(operation = %operation, error = %e, "validation error detail");
                Err(e)
            }
        }
    }

    fn build(operation: Operation, raw: &RawParams, ctx: &ValidationContext) -> Result<Self> {
        let mut params = Self::empty(operation);
        params.required_fields(raw)?;

        params.global_id = raw.get("Global-ID").map(check_global_id).transpose()?;
        if operation.accepts_aspect_filters() {
            params.aspect_filters = parse_aspect_filters(raw)?;
        }
        if operation.accepts_description_search() {
            params.description_search = raw.get("descriptionSearch").map(check_boolean).transpose()?;
        }
        params.item_filters = parse_item_filters(raw, ctx)?;
        params.output_selectors = parse_output_selectors(raw)?;
        params.affiliate = affiliate::parse_affiliate(raw)?;
        params.buyer_postal_code = raw.get("buyerPostalCode").map(check_postal_code).transpose()?;
        params.pagination = parse_pagination(raw)?;
        params.sort_order = raw
            .get("sortOrder")
            .map(|v| check_sort_order(v, &params.item_filters, params.buyer_postal_code.is_some()))
            .transpose()?;
        Ok(params)
    }

    fn empty(operation: Operation) -> Self {
        Self {
            operation,
            global_id: None,
            aspect_filters: Vec::new(),
            category_ids: Vec::new(),
            description_search: None,
            item_filters: Vec::new(),
            keywords: None,
            output_selectors: Vec::new(),
            product_id: None,
            store_name: None,
            affiliate: None,
            buyer_postal_code: None,
            pagination: Pagination::default(),
            sort_order: None,
        }
    }

    /// Enforces the operation's required-field disjunction and validates
    /// whichever of those fields are present.
    fn required_fields(&mut self, raw: &RawParams) -> Result<()> {
        let has_categories = has_category_ids(raw);
        let has_keywords = raw.contains("keywords");

        match self.operation {
            Operation::ByCategory => {
                if !has_categories {
                    return Err(ValidationError::CategoryIdMissing);
                }
                self.category_ids = parse_category_ids(raw)?;
            }
            Operation::ByKeywords => {
                self.keywords = Some(parse_keywords(raw)?);
            }
            Operation::Advanced => {
                if !has_categories && !has_keywords {
                    return Err(ValidationError::CategoryIdKeywordsMissing);
                }
                self.optional_categories_and_keywords(raw, has_categories, has_keywords)?;
            }
            Operation::ByProduct => {
                self.product_id = Some(product::parse_product_id(raw)?);
            }
            Operation::InStores => {
                let store_name = raw.get("storeName");
                if !has_categories && !has_keywords && store_name.is_none() {
                    return Err(ValidationError::CategoryIdKeywordsStoreNameMissing);
                }
                self.optional_categories_and_keywords(raw, has_categories, has_keywords)?;
                self.store_name = store_name.map(check_store_name).transpose()?;
            }
        }
        Ok(())
    }

    fn optional_categories_and_keywords(
        &mut self,
        raw: &RawParams,
        has_categories: bool,
        has_keywords: bool,
    ) -> Result<()> {
        if has_categories {
            self.category_ids = parse_category_ids(raw)?;
        }
        if has_keywords {
            self.keywords = Some(parse_keywords(raw)?);
        }
        Ok(())
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn global_id(&self) -> Option<GlobalId> {
        self.global_id
    }

    pub fn aspect_filters(&self) -> &[AspectFilter] {
        &self.aspect_filters
    }

    pub fn category_ids(&self) -> &[String] {
        &self.category_ids
    }

    pub fn description_search(&self) -> Option<bool> {
        self.description_search
    }

    pub fn item_filters(&self) -> &[ItemFilter] {
        &self.item_filters
    }

    pub fn keywords(&self) -> Option<&str> {
        self.keywords.as_deref()
    }

    pub fn output_selectors(&self) -> &[OutputSelector] {
        &self.output_selectors
    }

    pub fn product_id(&self) -> Option<&ProductId> {
        self.product_id.as_ref()
    }

    pub fn store_name(&self) -> Option<&str> {
        self.store_name.as_deref()
    }

    pub fn affiliate(&self) -> Option<&Affiliate> {
        self.affiliate.as_ref()
    }

    pub fn buyer_postal_code(&self) -> Option<&str> {
        self.buyer_postal_code.as_deref()
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn sort_order(&self) -> Option<SortOrder> {
        self.sort_order
    }
}
