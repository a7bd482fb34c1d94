//! Static fixtures: the analytics data the dashboard renders, the seed for
//! the hosted review store, and the payload served when the aggregator
//! fetch fails.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::aggregator::{AggregatorReview, AggregatorReviewsResponse};
use crate::property::{Property, PropertyKind, PropertyStatus};
use crate::review::{Review, ReviewCategory, ReviewChannel};
use crate::stats::DashboardStats;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture date")
}

fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).single().expect("fixture timestamp")
}

pub fn mock_properties() -> Vec<Property> {
    vec![
        Property {
            id: "prop-1".into(),
            name: "2B N1 A - 29 Shoreditch Heights".into(),
            location: "Shoreditch, London".into(),
            city: "London".into(),
            kind: PropertyKind::Apartment,
            bedrooms: 2,
            bathrooms: 2,
            rating: 4.8,
            total_reviews: 24,
            occupancy_rate: 92,
            revenue: 15420.0,
            revenue_change: 12.5,
            last_updated: date(2024, 1, 15),
            status: PropertyStatus::Active,
            image: "/modern-london-apartment-exterior.jpg".into(),
        },
        Property {
            id: "prop-2".into(),
            name: "1B E1 B - 15 Canary Wharf Tower".into(),
            location: "Canary Wharf, London".into(),
            city: "London".into(),
            kind: PropertyKind::Apartment,
            bedrooms: 1,
            bathrooms: 1,
            rating: 4.9,
            total_reviews: 18,
            occupancy_rate: 88,
            revenue: 12850.0,
            revenue_change: 8.3,
            last_updated: date(2024, 1, 14),
            status: PropertyStatus::Active,
            image: "/luxury-canary-wharf-apartment.jpg".into(),
        },
        Property {
            id: "prop-3".into(),
            name: "Studio W1 C - 42 Fitzrovia Square".into(),
            location: "Fitzrovia, London".into(),
            city: "London".into(),
            kind: PropertyKind::Studio,
            bedrooms: 0,
            bathrooms: 1,
            rating: 4.7,
            total_reviews: 31,
            occupancy_rate: 85,
            revenue: 9650.0,
            revenue_change: -2.1,
            last_updated: date(2024, 1, 13),
            status: PropertyStatus::Active,
            image: "/stylish-fitzrovia-studio-apartment.jpg".into(),
        },
        Property {
            id: "prop-4".into(),
            name: "3B Champs-Élysées - 15 Avenue".into(),
            location: "Champs-Élysées, Paris".into(),
            city: "Paris".into(),
            kind: PropertyKind::Apartment,
            bedrooms: 3,
            bathrooms: 2,
            rating: 4.6,
            total_reviews: 12,
            occupancy_rate: 78,
            revenue: 18750.0,
            revenue_change: 15.2,
            last_updated: date(2024, 1, 12),
            status: PropertyStatus::Active,
            image: "/modern-furnished-apartment-living-room.jpg".into(),
        },
        Property {
            id: "prop-5".into(),
            name: "2B Algiers Center - 8 Rue Didouche".into(),
            location: "Algiers Center, Algiers".into(),
            city: "Algiers".into(),
            kind: PropertyKind::Apartment,
            bedrooms: 2,
            bathrooms: 1,
            rating: 4.4,
            total_reviews: 8,
            occupancy_rate: 65,
            revenue: 4200.0,
            revenue_change: 22.8,
            last_updated: date(2024, 1, 11),
            status: PropertyStatus::Active,
            image: "/modern-apartment-bedroom-with-natural-light.jpg".into(),
        },
        Property {
            id: "prop-6".into(),
            name: "1B Marais - 22 Rue des Archives".into(),
            location: "Le Marais, Paris".into(),
            city: "Paris".into(),
            kind: PropertyKind::Apartment,
            bedrooms: 1,
            bathrooms: 1,
            rating: 4.5,
            total_reviews: 15,
            occupancy_rate: 82,
            revenue: 11200.0,
            revenue_change: 5.7,
            last_updated: date(2024, 1, 10),
            status: PropertyStatus::Maintenance,
            image: "/stylish-bedroom-with-yellow-accents-and-artwork.jpg".into(),
        },
    ]
}

pub fn mock_reviews() -> Vec<Review> {
    vec![
        Review {
            id: "rev-1".into(),
            property_id: "prop-1".into(),
            property_name: "2B N1 A - 29 Shoreditch Heights".into(),
            guest_name: "Sarah Johnson".into(),
            rating: 5,
            comment: "Absolutely perfect stay! The apartment was spotless and the location was ideal for exploring London.".into(),
            channel: ReviewChannel::BookingCom,
            category: ReviewCategory::Cleanliness,
            submitted_at: ts(2024, 1, 15, 10, 30),
            is_approved: true,
            is_public: true,
            manager_notes: None,
        },
        Review {
            id: "rev-2".into(),
            property_id: "prop-1".into(),
            property_name: "2B N1 A - 29 Shoreditch Heights".into(),
            guest_name: "Michael Chen".into(),
            rating: 4,
            comment: "Great location and well-equipped apartment. Only minor issue was the WiFi speed.".into(),
            channel: ReviewChannel::Airbnb,
            category: ReviewCategory::Location,
            submitted_at: ts(2024, 1, 14, 15, 45),
            is_approved: true,
            is_public: true,
            manager_notes: None,
        },
        Review {
            id: "rev-3".into(),
            property_id: "prop-2".into(),
            property_name: "1B E1 B - 15 Canary Wharf Tower".into(),
            guest_name: "Emma Wilson".into(),
            rating: 5,
            comment: "Luxury apartment with amazing views. Everything was perfect!".into(),
            channel: ReviewChannel::Direct,
            category: ReviewCategory::Value,
            submitted_at: ts(2024, 1, 13, 9, 20),
            is_approved: true,
            is_public: true,
            manager_notes: None,
        },
        Review {
            id: "rev-4".into(),
            property_id: "prop-3".into(),
            property_name: "Studio W1 C - 42 Fitzrovia Square".into(),
            guest_name: "David Brown".into(),
            rating: 3,
            comment: "The studio was smaller than expected and quite noisy at night.".into(),
            channel: ReviewChannel::Google,
            category: ReviewCategory::Communication,
            submitted_at: ts(2024, 1, 12, 14, 15),
            is_approved: false,
            is_public: false,
            manager_notes: Some("Need to address noise issues and update listing description".into()),
        },
        Review {
            id: "rev-5".into(),
            property_id: "prop-4".into(),
            property_name: "3B Champs-Élysées - 15 Avenue".into(),
            guest_name: "Sophie Martin".into(),
            rating: 4,
            comment: "Beautiful apartment in perfect location. Check-in process was smooth.".into(),
            channel: ReviewChannel::BookingCom,
            category: ReviewCategory::CheckIn,
            submitted_at: ts(2024, 1, 11, 11, 30),
            is_approved: true,
            is_public: true,
            manager_notes: None,
        },
        Review {
            id: "rev-6".into(),
            property_id: "prop-5".into(),
            property_name: "2B Algiers Center - 8 Rue Didouche".into(),
            guest_name: "Ahmed Benali".into(),
            rating: 4,
            comment: "Good value for money. Clean and comfortable apartment.".into(),
            channel: ReviewChannel::Direct,
            category: ReviewCategory::Value,
            submitted_at: ts(2024, 1, 10, 16, 45),
            is_approved: true,
            is_public: true,
            manager_notes: None,
        },
    ]
}

pub fn mock_dashboard_stats() -> DashboardStats {
    DashboardStats {
        total_revenue: 72370.0,
        revenue_change: 8.7,
        total_properties: 6,
        properties_change: 0.0,
        total_reviews: 108,
        reviews_change: 15.2,
        average_rating: 4.6,
        rating_change: 0.3,
        occupancy_rate: 82,
        occupancy_change: 5.2,
        response_rate: 94,
        response_change: 2.1,
        pending_reviews: 3,
        approved_reviews: 95,
        rejected_reviews: 10,
    }
}

/// Fallback payload for the aggregator proxy, served when the live fetch
/// fails and for initial render.
pub fn mock_aggregator_reviews() -> AggregatorReviewsResponse {
    AggregatorReviewsResponse {
        reviews: vec![
            AggregatorReview {
                id: "agg-1".into(),
                score: 92.0,
                author: "Laura".into(),
                localized_month_year: "January 2024".into(),
                site_name: "KAYAK".into(),
                localized_rating_category: "Excellent".into(),
                positive_comment: Some("Spotless rooms and a very helpful front desk.".into()),
                negative_comment: None,
                site_link: Some("https://www.kayak.com/hotels/12222/reviews/agg-1".into()),
            },
            AggregatorReview {
                id: "agg-2".into(),
                score: 78.0,
                author: "Tomás".into(),
                localized_month_year: "December 2023".into(),
                site_name: "Booking.com".into(),
                localized_rating_category: "Good".into(),
                positive_comment: Some("Great location close to the station.".into()),
                negative_comment: Some("Breakfast selection was limited.".into()),
                site_link: None,
            },
            AggregatorReview {
                id: "agg-3".into(),
                score: 64.0,
                author: "Priya".into(),
                localized_month_year: "December 2023".into(),
                site_name: "Agoda".into(),
                localized_rating_category: "Okay".into(),
                positive_comment: None,
                negative_comment: Some("Street noise was noticeable at night.".into()),
                site_link: None,
            },
        ],
        total_count: Some(3),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_are_consistent() {
        let properties = mock_properties();
        let reviews = mock_reviews();
        assert_eq!(properties.len(), 6);
        assert_eq!(reviews.len(), 6);
        // every review points at a fixture property
        for r in &reviews {
            assert!(properties.iter().any(|p| p.id == r.property_id), "{}", r.id);
        }
        // the one pending review carries manager notes
        let pending: Vec<_> = reviews.iter().filter(|r| !r.is_approved).collect();
        assert_eq!(pending.len(), 1);
        assert!(pending[0].manager_notes.is_some());
    }

    #[test]
    fn fallback_payload_is_nonempty() {
        let fallback = mock_aggregator_reviews();
        assert!(!fallback.reviews.is_empty());
        assert_eq!(fallback.total_count, Some(fallback.reviews.len() as u64));
    }
}
