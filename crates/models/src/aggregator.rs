//! Wire shapes for the third-party review aggregator. Upstream semantics are
//! opaque; parameters and response fields pass through verbatim, so names
//! stay camelCase on the wire.

use serde::{Deserialize, Serialize};

/// Query parameters for the aggregator's filtered-reviews endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FetchReviewsParams {
    pub traveler_types: String,
    pub months: String,
    pub tag_cluster_name: String,
    pub search_text: String,
    pub review_sources: String,
    pub sort_type: String,
    pub include_review_link: bool,
    pub review_type: String,
    pub object_id: String,
    pub include_object_id: bool,
    pub start_index: u32,
    pub amount: u32,
}

impl Default for FetchReviewsParams {
    fn default() -> Self {
        Self {
            traveler_types: String::new(),
            months: String::new(),
            tag_cluster_name: String::new(),
            search_text: String::new(),
            review_sources: "KAYAK".to_string(),
            sort_type: "recent".to_string(),
            include_review_link: true,
            review_type: "hotel".to_string(),
            object_id: "12222".to_string(),
            include_object_id: false,
            start_index: 0,
            amount: 10,
        }
    }
}

impl FetchReviewsParams {
    /// Serialize every parameter, including empty strings, in the fixed
    /// order the upstream endpoint has always been called with.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("travelerTypes", self.traveler_types.clone()),
            ("months", self.months.clone()),
            ("tagClusterName", self.tag_cluster_name.clone()),
            ("searchText", self.search_text.clone()),
            ("reviewSources", self.review_sources.clone()),
            ("sortType", self.sort_type.clone()),
            ("includeReviewLink", self.include_review_link.to_string()),
            ("reviewType", self.review_type.clone()),
            ("objectId", self.object_id.clone()),
            ("includeObjectId", self.include_object_id.to_string()),
            ("startIndex", self.start_index.to_string()),
            ("amount", self.amount.to_string()),
        ]
    }
}

/// Raw query-string form where every field is optional. Callers send
/// whatever subset they have; [`RawFetchReviewsParams::normalize`] fills
/// the rest.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawFetchReviewsParams {
    pub traveler_types: Option<String>,
    pub months: Option<String>,
    pub tag_cluster_name: Option<String>,
    pub search_text: Option<String>,
    pub review_sources: Option<String>,
    pub sort_type: Option<String>,
    pub include_review_link: Option<String>,
    pub review_type: Option<String>,
    pub object_id: Option<String>,
    pub include_object_id: Option<String>,
    pub start_index: Option<String>,
    pub amount: Option<String>,
}

fn or_default(value: Option<String>, default: String) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default,
    }
}

fn flag_or_default(value: Option<&str>, default: bool) -> bool {
    value == Some("true") || default
}

fn count_or_default(value: Option<&str>, default: u32) -> u32 {
    value
        .and_then(|v| v.parse::<u32>().ok())
        .filter(|v| *v != 0)
        .unwrap_or(default)
}

impl RawFetchReviewsParams {
    /// Coerce into a complete parameter set. The coercion is deliberately
    /// lenient: empty, missing, unparsable, or zero values all fall back to
    /// the defaults the dashboard has always sent.
    pub fn normalize(self) -> FetchReviewsParams {
        let d = FetchReviewsParams::default();
        FetchReviewsParams {
            traveler_types: or_default(self.traveler_types, d.traveler_types),
            months: or_default(self.months, d.months),
            tag_cluster_name: or_default(self.tag_cluster_name, d.tag_cluster_name),
            search_text: or_default(self.search_text, d.search_text),
            review_sources: or_default(self.review_sources, d.review_sources),
            sort_type: or_default(self.sort_type, d.sort_type),
            include_review_link: flag_or_default(
                self.include_review_link.as_deref(),
                d.include_review_link,
            ),
            review_type: or_default(self.review_type, d.review_type),
            object_id: or_default(self.object_id, d.object_id),
            include_object_id: flag_or_default(
                self.include_object_id.as_deref(),
                d.include_object_id,
            ),
            start_index: count_or_default(self.start_index.as_deref(), d.start_index),
            amount: count_or_default(self.amount.as_deref(), d.amount),
        }
    }
}

/// A single review as returned by the aggregator. `score` is on the
/// upstream 0..=100 scale.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AggregatorReview {
    pub id: String,
    pub score: f64,
    pub author: String,
    pub localized_month_year: String,
    pub site_name: String,
    pub localized_rating_category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positive_comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_link: Option<String>,
}

/// Response envelope. Missing fields default and unknown fields are
/// ignored; the upstream schema is not ours to enforce.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AggregatorReviewsResponse {
    pub reviews: Vec<AggregatorReview>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
}
