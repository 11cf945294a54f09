//! Serialization of validated parameters into the wire query.
//!
//! Filters are always emitted in numbered form, whatever syntax the caller
//! used, and fields are emitted in a fixed order.

use crate::error::Result;
use crate::filter::ValidationContext;
use crate::params::{FindParams, Operation};
use crate::raw::{indexed_key, RawParams};

/// `SERVICE-VERSION` sent with every request.
pub const SERVICE_VERSION: &str = "1.0.0";
/// `RESPONSE-DATA-FORMAT` sent with every request.
pub const RESPONSE_DATA_FORMAT: &str = "JSON";

/// An ordered list of query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter. Order of insertion is the order on the wire.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Value of the first parameter called `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == name).map(|(_, v)| v)
    }

    /// Renders `application/x-www-form-urlencoded`, preserving order.
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

impl FindParams {
    /// Serializes these parameters for the application `app_id`.
    pub fn to_query(&self, app_id: &str) -> QueryParams {
        let mut q = QueryParams::new();

        if let Some(global_id) = self.global_id() {
            q.push("Global-ID", global_id.as_str());
        }
        q.push("OPERATION-NAME", self.operation().name());
        q.push("SERVICE-VERSION", SERVICE_VERSION);
        q.push("SECURITY-APPNAME", app_id);
        q.push("RESPONSE-DATA-FORMAT", RESPONSE_DATA_FORMAT);

        for (i, filter) in self.aspect_filters().iter().enumerate() {
            let prefix = indexed_key("aspectFilter", i, "");
            q.push(format!("{prefix}.aspectName"), filter.aspect_name.as_str());
            for (j, value) in filter.aspect_value_names.iter().enumerate() {
                q.push(
                    indexed_key(&format!("{prefix}.aspectValueName"), j, ""),
                    value.as_str(),
                );
            }
        }
        for (i, id) in self.category_ids().iter().enumerate() {
            q.push(indexed_key("categoryId", i, ""), id.as_str());
        }
        if let Some(search) = self.description_search() {
            q.push("descriptionSearch", search.to_string());
        }
        for (i, filter) in self.item_filters().iter().enumerate() {
            let prefix = indexed_key("itemFilter", i, "");
            q.push(format!("{prefix}.name"), filter.name.as_str());
            for (j, value) in filter.values.iter().enumerate() {
                q.push(indexed_key(&format!("{prefix}.value"), j, ""), value.as_str());
            }
            if let Some(param) = &filter.param {
                q.push(format!("{prefix}.paramName"), param.name.as_str());
                q.push(format!("{prefix}.paramValue"), param.value.as_str());
            }
        }
        if let Some(keywords) = self.keywords() {
            q.push("keywords", keywords);
        }
        for (i, selector) in self.output_selectors().iter().enumerate() {
            q.push(indexed_key("outputSelector", i, ""), selector.as_str());
        }
        if let Some(product) = self.product_id() {
            q.push("productId.@type", product.id_type.as_str());
            q.push("productId", product.value.as_str());
        }
        if let Some(store_name) = self.store_name() {
            q.push("storeName", store_name);
        }
        if let Some(affiliate) = self.affiliate() {
            if let Some(custom_id) = &affiliate.custom_id {
                q.push("affiliate.customId", custom_id.as_str());
            }
            if let Some(geo) = affiliate.geo_targeting {
                q.push("affiliate.geoTargeting", geo.to_string());
            }
            if let Some(network) = &affiliate.network {
                q.push("affiliate.networkId", network.network_id.to_string());
                q.push("affiliate.trackingId", network.tracking_id.as_str());
            }
        }
        if let Some(code) = self.buyer_postal_code() {
            q.push("buyerPostalCode", code);
        }
        let pagination = self.pagination();
        if let Some(entries) = pagination.entries_per_page {
            q.push("paginationInput.entriesPerPage", entries.to_string());
        }
        if let Some(page) = pagination.page_number {
            q.push("paginationInput.pageNumber", page.to_string());
        }
        if let Some(order) = self.sort_order() {
            q.push("sortOrder", order.as_str());
        }
        q
    }
}

/// Validates `raw` for `operation` and serializes it in one step.
pub fn build_query(operation: Operation, app_id: &str, raw: &RawParams) -> Result<QueryParams> {
    build_query_at(operation, app_id, raw, &ValidationContext::now())
}

/// [`build_query`] under an explicit validation context.
pub fn build_query_at(
    operation: Operation,
    app_id: &str,
    raw: &RawParams,
    ctx: &ValidationContext,
) -> Result<QueryParams> {
    Ok(FindParams::validate_at(operation, raw, ctx)?.to_query(app_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn ctx() -> ValidationContext {
        ValidationContext::at(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap())
    }

    fn names(q: &QueryParams) -> Vec<&str> {
        q.iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn query_params_basics() {
        let mut q = QueryParams::new();
        assert!(q.is_empty());
        q.push("a", "1");
        q.push("b", "x y&z");
        q.push("a", "2");
        assert_eq!(q.len(), 3);
        assert_eq!(q.get("a"), Some("1"));
        assert_eq!(q.encode(), "a=1&b=x+y%26z&a=2");
    }

    #[test]
    fn header_fields_lead() {
        let raw = RawParams::from([("keywords", "rust"), ("Global-ID", "EBAY-GB")]);
        let q = build_query_at(Operation::ByKeywords, "app-1", &raw, &ctx()).expect("valid");
        assert_eq!(
            names(&q),
            vec![
                "Global-ID",
                "OPERATION-NAME",
                "SERVICE-VERSION",
                "SECURITY-APPNAME",
                "RESPONSE-DATA-FORMAT",
                "keywords",
            ]
        );
        assert_eq!(q.get("OPERATION-NAME"), Some("findItemsByKeywords"));
        assert_eq!(q.get("SERVICE-VERSION"), Some("1.0.0"));
        assert_eq!(q.get("SECURITY-APPNAME"), Some("app-1"));
        assert_eq!(q.get("RESPONSE-DATA-FORMAT"), Some("JSON"));
    }

    #[test]
    fn bare_filters_are_emitted_numbered() {
        let raw = RawParams::from([
            ("categoryId", "9355"),
            ("aspectFilter.aspectName", "Size"),
            ("aspectFilter.aspectValueName", "10"),
            ("itemFilter.name", "MaxPrice"),
            ("itemFilter.value", "25.5"),
            ("itemFilter.paramName", "Currency"),
            ("itemFilter.paramValue", "USD"),
            ("outputSelector", "SellerInfo"),
        ]);
        let q = build_query_at(Operation::ByCategory, "app", &raw, &ctx()).expect("valid");
        let tail: Vec<_> = q.iter().skip(4).collect();
        assert_eq!(
            tail,
            vec![
                ("aspectFilter(0).aspectName", "Size"),
                ("aspectFilter(0).aspectValueName(0)", "10"),
                ("categoryId(0)", "9355"),
                ("itemFilter(0).name", "MaxPrice"),
                ("itemFilter(0).value(0)", "25.5"),
                ("itemFilter(0).paramName", "Currency"),
                ("itemFilter(0).paramValue", "USD"),
                ("outputSelector(0)", "SellerInfo"),
            ]
        );
    }

    #[test]
    fn trailing_fields_in_order() {
        let raw = RawParams::from([
            ("productId.@type", "UPC"),
            ("productId", "036000291452"),
            ("affiliate.customId", "c"),
            ("affiliate.geoTargeting", "false"),
            ("affiliate.networkId", "9"),
            ("affiliate.trackingId", "1234567890"),
            ("buyerPostalCode", "10001"),
            ("paginationInput.entriesPerPage", "+50"),
            ("paginationInput.pageNumber", "2"),
            ("sortOrder", "DistanceNearest"),
        ]);
        let q = build_query_at(Operation::ByProduct, "app", &raw, &ctx()).expect("valid");
        let tail: Vec<_> = q.iter().skip(4).collect();
        assert_eq!(
            tail,
            vec![
                ("productId.@type", "UPC"),
                ("productId", "036000291452"),
                ("affiliate.customId", "c"),
                ("affiliate.geoTargeting", "false"),
                ("affiliate.networkId", "9"),
                ("affiliate.trackingId", "1234567890"),
                ("buyerPostalCode", "10001"),
                ("paginationInput.entriesPerPage", "50"),
                ("paginationInput.pageNumber", "2"),
                ("sortOrder", "DistanceNearest"),
            ]
        );
    }

    #[test]
    fn store_fields_follow_keywords() {
        let raw = RawParams::from([
            ("storeName", "Books"),
            ("keywords", "rust"),
            ("advancedSearch", "ignored"),
        ]);
        let q = build_query_at(Operation::InStores, "app", &raw, &ctx()).expect("valid");
        let tail: Vec<_> = q.iter().skip(4).collect();
        assert_eq!(tail, vec![("keywords", "rust"), ("storeName", "Books")]);
    }
}
