use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewChannel {
    #[serde(rename = "Booking.com")]
    BookingCom,
    Airbnb,
    Direct,
    Google,
}

impl ReviewChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewChannel::BookingCom => "Booking.com",
            ReviewChannel::Airbnb => "Airbnb",
            ReviewChannel::Direct => "Direct",
            ReviewChannel::Google => "Google",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewCategory {
    Cleanliness,
    Location,
    Value,
    Communication,
    #[serde(rename = "Check-in")]
    CheckIn,
}

impl ReviewCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewCategory::Cleanliness => "Cleanliness",
            ReviewCategory::Location => "Location",
            ReviewCategory::Value => "Value",
            ReviewCategory::Communication => "Communication",
            ReviewCategory::CheckIn => "Check-in",
        }
    }
}

/// A hosted guest review together with its moderation state.
/// `is_approved` and `is_public` are replaced in place on operator actions;
/// only reviews that are both approved and public appear on the site.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub property_id: String,
    pub property_name: String,
    pub guest_name: String,
    pub rating: u8,
    pub comment: String,
    pub channel: ReviewChannel,
    pub category: ReviewCategory,
    pub submitted_at: DateTime<Utc>,
    pub is_approved: bool,
    pub is_public: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_notes: Option<String>,
}

pub fn validate_rating(rating: u8) -> Result<(), ModelError> {
    if !(1..=5).contains(&rating) {
        return Err(ModelError::Validation("rating must be in 1..=5".into()));
    }
    Ok(())
}

pub fn validate_manager_notes(notes: &str) -> Result<(), ModelError> {
    if notes.chars().count() > 2000 {
        return Err(ModelError::Validation("manager notes limited to 2000 characters".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds() {
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
    }

    #[test]
    fn channel_serializes_with_site_names() {
        let json = serde_json::to_string(&ReviewChannel::BookingCom).expect("serialize");
        assert_eq!(json, "\"Booking.com\"");
        let back: ReviewChannel = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, ReviewChannel::BookingCom);
    }

    #[test]
    fn notes_length_capped() {
        let long = "x".repeat(2001);
        assert!(validate_manager_notes(&long).is_err());
        assert!(validate_manager_notes("noise complaint followed up").is_ok());
    }
}
