use serde::{Deserialize, Serialize};

/// Portfolio-level analytics shown on the dashboard overview. All `*_change`
/// fields are period-over-period deltas in percent (rating change is an
/// absolute delta on the 5-point scale).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_revenue: f64,
    pub revenue_change: f64,
    pub total_properties: u32,
    pub properties_change: f64,
    pub total_reviews: u32,
    pub reviews_change: f64,
    pub average_rating: f64,
    pub rating_change: f64,
    pub occupancy_rate: u8,
    pub occupancy_change: f64,
    pub response_rate: u8,
    pub response_change: f64,
    pub pending_reviews: u32,
    pub approved_reviews: u32,
    pub rejected_reviews: u32,
}

/// Moderation counts over the hosted review set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewStats {
    pub total: u32,
    pub approved: u32,
    pub pending: u32,
    pub published: u32,
}
