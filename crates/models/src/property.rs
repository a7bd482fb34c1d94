use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyKind {
    Apartment,
    Studio,
    House,
}

impl PropertyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKind::Apartment => "Apartment",
            PropertyKind::Studio => "Studio",
            PropertyKind::House => "House",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyStatus {
    Active,
    Maintenance,
    Vacant,
}

/// A managed listing as shown on the dashboard. `occupancy_rate` is a
/// percentage in 0..=100; `revenue_change` is the period-over-period delta
/// in percent and may be negative.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub name: String,
    pub location: String,
    pub city: String,
    pub kind: PropertyKind,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub rating: f64,
    pub total_reviews: u32,
    pub occupancy_rate: u8,
    pub revenue: f64,
    pub revenue_change: f64,
    pub last_updated: NaiveDate,
    pub status: PropertyStatus,
    pub image: String,
}
