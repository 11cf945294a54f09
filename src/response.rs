//! Response data model.
//!
//! Mirrors the JSON body of the Finding service, where nearly every field is
//! wrapped in a single-element array. All fields default when absent, so
//! partial or sparse responses decode without error.

use chrono::{DateTime, Utc};
use finding_query::Operation;
use serde::{Deserialize, Serialize};

/// A decoded response exposing its result pages.
pub trait ResultProvider {
    /// The operation whose response this is.
    const OPERATION: Operation;

    fn results(&self) -> &[FindItemsResponse];
}

macro_rules! operation_response {
    ($(#[$meta:meta])* $name:ident, $op:ident, $key:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            #[serde(rename = $key, default)]
            pub items_response: Vec<FindItemsResponse>,
        }

        impl ResultProvider for $name {
            const OPERATION: Operation = Operation::$op;

            fn results(&self) -> &[FindItemsResponse] {
                &self.items_response
            }
        }
    };
}

operation_response!(
    /// Body of a `findItemsByCategory` response.
    FindItemsByCategoryResponse,
    ByCategory,
    "findItemsByCategoryResponse"
);
operation_response!(
    /// Body of a `findItemsByKeywords` response.
    FindItemsByKeywordsResponse,
    ByKeywords,
    "findItemsByKeywordsResponse"
);
operation_response!(
    /// Body of a `findItemsAdvanced` response.
    FindItemsAdvancedResponse,
    Advanced,
    "findItemsAdvancedResponse"
);
operation_response!(
    /// Body of a `findItemsByProduct` response.
    FindItemsByProductResponse,
    ByProduct,
    "findItemsByProductResponse"
);
operation_response!(
    /// Body of a `findItemsIneBayStores` response.
    FindItemsInStoresResponse,
    InStores,
    "findItemsIneBayStoresResponse"
);

/// One page of search results with its status and paging metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FindItemsResponse {
    pub ack: Vec<String>,
    pub error_message: Vec<ErrorMessage>,
    #[serde(rename = "itemSearchURL")]
    pub item_search_url: Vec<String>,
    pub pagination_output: Vec<PaginationOutput>,
    pub search_result: Vec<SearchResult>,
    pub timestamp: Vec<DateTime<Utc>>,
    pub version: Vec<String>,
}

impl FindItemsResponse {
    /// Items across every search result block.
    pub fn items(&self) -> impl Iterator<Item = &SearchItem> {
        self.search_result.iter().flat_map(|r| r.item.iter())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorMessage {
    pub error: Vec<ErrorData>,
}

/// A service-reported error or warning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ErrorData {
    pub category: Vec<String>,
    pub domain: Vec<String>,
    pub error_id: Vec<String>,
    pub exception_id: Vec<String>,
    pub message: Vec<String>,
    pub parameter: Vec<String>,
    pub severity: Vec<String>,
    pub subdomain: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaginationOutput {
    pub entries_per_page: Vec<String>,
    pub page_number: Vec<String>,
    pub total_entries: Vec<String>,
    pub total_pages: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    #[serde(rename = "@count")]
    pub count: String,
    pub item: Vec<SearchItem>,
}

/// One listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchItem {
    pub auto_pay: Vec<String>,
    pub charity_id: Vec<String>,
    pub compatibility: Vec<String>,
    pub condition: Vec<Condition>,
    pub country: Vec<String>,
    pub discount_price_info: Vec<DiscountPriceInfo>,
    pub distance: Vec<Distance>,
    #[serde(rename = "eBayPlusEnabled")]
    pub ebay_plus_enabled: Vec<String>,
    pub eek_status: Vec<String>,
    pub gallery_info_container: Vec<GalleryInfoContainer>,
    #[serde(rename = "galleryPlusPictureURL")]
    pub gallery_plus_picture_url: Vec<String>,
    #[serde(rename = "galleryURL")]
    pub gallery_url: Vec<String>,
    pub global_id: Vec<String>,
    pub is_multi_variation_listing: Vec<String>,
    pub item_id: Vec<String>,
    pub listing_info: Vec<ListingInfo>,
    pub location: Vec<String>,
    pub payment_method: Vec<String>,
    #[serde(rename = "pictureURLLarge")]
    pub picture_url_large: Vec<String>,
    #[serde(rename = "pictureURLSuperSize")]
    pub picture_url_super_size: Vec<String>,
    pub postal_code: Vec<String>,
    pub primary_category: Vec<Category>,
    pub product_id: Vec<ProductId>,
    pub returns_accepted: Vec<String>,
    pub secondary_category: Vec<Category>,
    pub seller_info: Vec<SellerInfo>,
    pub selling_status: Vec<SellingStatus>,
    pub shipping_info: Vec<ShippingInfo>,
    pub store_info: Vec<Storefront>,
    pub subtitle: Vec<String>,
    pub title: Vec<String>,
    pub top_rated_listing: Vec<String>,
    pub unit_price: Vec<UnitPriceInfo>,
    #[serde(rename = "viewItemURL")]
    pub view_item_url: Vec<String>,
}

impl SearchItem {
    pub fn title(&self) -> Option<&str> {
        self.title.first().map(String::as_str)
    }

    pub fn current_price(&self) -> Option<&Price> {
        self.selling_status
            .first()
            .and_then(|s| s.current_price.first())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Condition {
    pub condition_display_name: Vec<String>,
    pub condition_id: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiscountPriceInfo {
    pub minimum_advertised_price_exposure: Vec<String>,
    pub original_retail_price: Vec<Price>,
    pub pricing_treatment: Vec<String>,
    pub sold_off_ebay: Vec<String>,
    pub sold_on_ebay: Vec<String>,
}

/// An amount with its currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Price {
    #[serde(rename = "@currencyId")]
    pub currency_id: String,
    #[serde(rename = "__value__")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Distance {
    #[serde(rename = "@unit")]
    pub unit: String,
    #[serde(rename = "__value__")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryInfoContainer {
    #[serde(rename = "galleryURL")]
    pub gallery_url: Vec<GalleryUrl>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryUrl {
    #[serde(rename = "@gallerySize")]
    pub gallery_size: String,
    #[serde(rename = "__value__")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListingInfo {
    pub best_offer_enabled: Vec<String>,
    pub buy_it_now_available: Vec<String>,
    pub buy_it_now_price: Vec<Price>,
    pub converted_buy_it_now_price: Vec<Price>,
    pub end_time: Vec<DateTime<Utc>>,
    pub gift: Vec<String>,
    pub listing_type: Vec<String>,
    pub start_time: Vec<DateTime<Utc>>,
    pub watch_count: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Category {
    pub category_id: Vec<String>,
    pub category_name: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductId {
    #[serde(rename = "@type")]
    pub id_type: String,
    #[serde(rename = "__value__")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SellerInfo {
    pub feedback_rating_star: Vec<String>,
    pub feedback_score: Vec<String>,
    pub positive_feedback_percent: Vec<String>,
    pub seller_user_name: Vec<String>,
    pub top_rated_seller: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SellingStatus {
    pub bid_count: Vec<String>,
    pub converted_current_price: Vec<Price>,
    pub current_price: Vec<Price>,
    pub selling_state: Vec<String>,
    pub time_left: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShippingInfo {
    pub expedited_shipping: Vec<String>,
    pub handling_time: Vec<String>,
    pub intermediated_shipping: Vec<String>,
    pub one_day_shipping_available: Vec<String>,
    pub shipping_service_cost: Vec<Price>,
    pub shipping_type: Vec<String>,
    pub ship_to_locations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Storefront {
    pub store_name: Vec<String>,
    #[serde(rename = "storeURL")]
    pub store_url: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UnitPriceInfo {
    pub quantity: Vec<String>,
    #[serde(rename = "type")]
    pub unit_type: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_array_wrapped_page() {
        let body = json!({
            "findItemsByKeywordsResponse": [{
                "ack": ["Success"],
                "version": ["1.13.0"],
                "timestamp": ["2024-06-01T12:00:00.000Z"],
                "itemSearchURL": ["https://example.com/search"],
                "paginationOutput": [{
                    "pageNumber": ["1"],
                    "entriesPerPage": ["2"],
                    "totalPages": ["10"],
                    "totalEntries": ["20"]
                }],
                "searchResult": [{
                    "@count": "1",
                    "item": [{
                        "itemId": ["1234"],
                        "title": ["Rust in Action"],
                        "viewItemURL": ["https://example.com/item/1234"],
                        "galleryInfoContainer": [{
                            "galleryURL": [{"@gallerySize": "Large", "__value__": "https://example.com/l.jpg"}]
                        }],
                        "sellingStatus": [{
                            "currentPrice": [{"@currencyId": "USD", "__value__": "39.99"}],
                            "sellingState": ["Active"]
                        }],
                        "listingInfo": [{
                            "endTime": ["2024-07-01T00:00:00.000Z"],
                            "listingType": ["FixedPrice"]
                        }]
                    }]
                }]
            }]
        });
        let resp: FindItemsByKeywordsResponse =
            serde_json::from_value(body).expect("decodes");
        let page = &resp.results()[0];
        assert_eq!(page.ack, vec!["Success"]);
        assert_eq!(page.item_search_url, vec!["https://example.com/search"]);
        assert_eq!(page.pagination_output[0].total_entries, vec!["20"]);

        let item = page.items().next().expect("one item");
        assert_eq!(item.title(), Some("Rust in Action"));
        assert_eq!(item.view_item_url, vec!["https://example.com/item/1234"]);
        let price = item.current_price().expect("price");
        assert_eq!(price.currency_id, "USD");
        assert_eq!(price.value, "39.99");
        assert_eq!(
            item.gallery_info_container[0].gallery_url[0].gallery_size,
            "Large"
        );
        assert_eq!(item.listing_info[0].listing_type, vec!["FixedPrice"]);
    }

    #[test]
    fn decodes_service_error() {
        let body = json!({
            "findItemsByCategoryResponse": [{
                "ack": ["Failure"],
                "errorMessage": [{
                    "error": [{
                        "errorId": ["3"],
                        "domain": ["Security"],
                        "severity": ["Error"],
                        "message": ["Authentication failed : Invalid Application: x"]
                    }]
                }]
            }]
        });
        let resp: FindItemsByCategoryResponse = serde_json::from_value(body).expect("decodes");
        let error = &resp.results()[0].error_message[0].error[0];
        assert_eq!(error.error_id, vec!["3"]);
        assert_eq!(error.severity, vec!["Error"]);
    }

    #[test]
    fn missing_operation_key_yields_no_results() {
        let resp: FindItemsAdvancedResponse =
            serde_json::from_value(json!({"somethingElse": []})).expect("decodes");
        assert!(resp.results().is_empty());
    }

    #[test]
    fn store_wrapper_uses_service_key() {
        let resp: FindItemsInStoresResponse =
            serde_json::from_value(json!({"findItemsIneBayStoresResponse": [{"ack": ["Success"]}]}))
                .expect("decodes");
        assert_eq!(resp.results().len(), 1);
        assert_eq!(
            FindItemsInStoresResponse::OPERATION.response_key(),
            "findItemsIneBayStoresResponse"
        );
    }

    fn serialized_key<R: ResultProvider + Default + Serialize>() -> String {
        let value = serde_json::to_value(R::default()).expect("serializes");
        value
            .as_object()
            .and_then(|o| o.keys().next().cloned())
            .expect("one key")
    }

    #[test]
    fn wrapper_field_is_operation_response_key() {
        assert_eq!(
            serialized_key::<FindItemsByCategoryResponse>(),
            Operation::ByCategory.response_key()
        );
        assert_eq!(
            serialized_key::<FindItemsByKeywordsResponse>(),
            Operation::ByKeywords.response_key()
        );
        assert_eq!(
            serialized_key::<FindItemsAdvancedResponse>(),
            Operation::Advanced.response_key()
        );
        assert_eq!(
            serialized_key::<FindItemsByProductResponse>(),
            Operation::ByProduct.response_key()
        );
        assert_eq!(
            serialized_key::<FindItemsInStoresResponse>(),
            Operation::InStores.response_key()
        );
    }

    #[test]
    fn wrapper_keys_match_operations() {
        assert_eq!(
            FindItemsByCategoryResponse::OPERATION.response_key(),
            "findItemsByCategoryResponse"
        );
        assert_eq!(
            FindItemsByProductResponse::OPERATION.response_key(),
            "findItemsByProductResponse"
        );
        let body = json!({"findItemsByProductResponse": [{}]});
        let resp: FindItemsByProductResponse = serde_json::from_value(body).expect("decodes");
        assert_eq!(resp.results()[0], FindItemsResponse::default());
    }
}
