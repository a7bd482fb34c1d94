use csv::Writer;

use models::review::Review;

use crate::errors::ServiceError;

/// Render reviews as CSV for the dashboard's export action. One row per
/// review, moderation state included.
pub fn reviews_to_csv(reviews: &[Review]) -> Result<String, ServiceError> {
    let mut wtr = Writer::from_writer(Vec::new());
    wtr.write_record([
        "id",
        "property_id",
        "property_name",
        "guest_name",
        "rating",
        "comment",
        "channel",
        "category",
        "submitted_at",
        "approved",
        "public",
        "manager_notes",
    ])
    .map_err(|e| ServiceError::Export(e.to_string()))?;

    for r in reviews {
        wtr.write_record([
            r.id.as_str(),
            r.property_id.as_str(),
            r.property_name.as_str(),
            r.guest_name.as_str(),
            &r.rating.to_string(),
            r.comment.as_str(),
            r.channel.as_str(),
            r.category.as_str(),
            &r.submitted_at.to_rfc3339(),
            &r.is_approved.to_string(),
            &r.is_public.to_string(),
            r.manager_notes.as_deref().unwrap_or(""),
        ])
        .map_err(|e| ServiceError::Export(e.to_string()))?;
    }

    let bytes = wtr.into_inner().map_err(|e| ServiceError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ServiceError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::mock::mock_reviews;

    #[test]
    fn csv_has_header_and_one_row_per_review() {
        let csv = reviews_to_csv(&mock_reviews()).expect("csv");
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("id,property_id,property_name"));
        assert!(csv.contains("Sarah Johnson"));
        assert!(csv.contains("Booking.com"));
    }

    #[test]
    fn commas_in_comments_are_quoted() {
        let mut reviews = mock_reviews();
        reviews[0].comment = "Spacious, bright, and quiet.".into();
        let csv = reviews_to_csv(&reviews).expect("csv");
        assert!(csv.contains("\"Spacious, bright, and quiet.\""));
        assert_eq!(csv.lines().count(), 7);
    }
}
