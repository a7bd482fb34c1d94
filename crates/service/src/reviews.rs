//! Filter/sort engine over the hosted review set: predicate composition
//! for filtering, a single comparator switch for sorting.

use serde::Deserialize;

use models::review::Review;
use models::stats::ReviewStats;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Approved,
    Pending,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewSortKey {
    #[default]
    Date,
    Rating,
    Property,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Filter and sort selection as it arrives from the dashboard. Defaults
/// reproduce the initial page state: everything visible to the public,
/// newest first.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReviewQuery {
    pub search: Option<String>,
    pub property: Option<String>,
    pub status: StatusFilter,
    pub only_public: bool,
    pub show_all: bool,
    pub sort_by: ReviewSortKey,
    pub sort_order: SortOrder,
}

fn matches(review: &Review, q: &ReviewQuery) -> bool {
    let matches_search = match q.search.as_deref() {
        Some(s) if !s.is_empty() => {
            let needle = s.to_lowercase();
            review.property_name.to_lowercase().contains(&needle)
                || review.guest_name.to_lowercase().contains(&needle)
                || review.comment.to_lowercase().contains(&needle)
        }
        _ => true,
    };
    let matches_property = match q.property.as_deref() {
        Some(p) if !p.is_empty() && p != "all" => review.property_name == p,
        _ => true,
    };
    let matches_status = match q.status {
        StatusFilter::All => true,
        StatusFilter::Approved => review.is_approved,
        StatusFilter::Pending => !review.is_approved,
    };
    let matches_public = !q.only_public || review.is_public;
    // unless show_all is set, expose only what the public site would show
    let matches_display = q.show_all || (review.is_approved && review.is_public);

    matches_search && matches_property && matches_status && matches_public && matches_display
}

pub fn filter_and_sort(reviews: &[Review], q: &ReviewQuery) -> Vec<Review> {
    let mut out: Vec<Review> = reviews.iter().filter(|r| matches(r, q)).cloned().collect();
    out.sort_by(|a, b| {
        let ord = match q.sort_by {
            ReviewSortKey::Date => a.submitted_at.cmp(&b.submitted_at),
            ReviewSortKey::Rating => a.rating.cmp(&b.rating),
            ReviewSortKey::Property => a.property_name.cmp(&b.property_name),
        };
        match q.sort_order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
    out
}

/// Moderation counts over the full (unfiltered) set.
pub fn review_stats(reviews: &[Review]) -> ReviewStats {
    ReviewStats {
        total: reviews.len() as u32,
        approved: reviews.iter().filter(|r| r.is_approved).count() as u32,
        pending: reviews.iter().filter(|r| !r.is_approved).count() as u32,
        published: reviews.iter().filter(|r| r.is_public).count() as u32,
    }
}
