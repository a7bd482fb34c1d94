//! Dashboard property engine: same shape as the review engine, different
//! predicates and comparator keys.

use serde::Deserialize;

use models::property::Property;

use crate::reviews::SortOrder;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertySortKey {
    #[default]
    Rating,
    Revenue,
    Occupancy,
    Reviews,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PropertyQuery {
    pub search: Option<String>,
    pub city: Option<String>,
    pub kind: Option<String>,
    pub sort_by: PropertySortKey,
    pub sort_order: SortOrder,
}

fn matches(property: &Property, q: &PropertyQuery) -> bool {
    let matches_search = match q.search.as_deref() {
        Some(s) if !s.is_empty() => {
            let needle = s.to_lowercase();
            property.name.to_lowercase().contains(&needle)
                || property.location.to_lowercase().contains(&needle)
        }
        _ => true,
    };
    let matches_city = match q.city.as_deref() {
        Some(c) if !c.is_empty() && c != "all" => property.city.eq_ignore_ascii_case(c),
        _ => true,
    };
    let matches_kind = match q.kind.as_deref() {
        Some(k) if !k.is_empty() && k != "all" => property.kind.as_str().eq_ignore_ascii_case(k),
        _ => true,
    };
    matches_search && matches_city && matches_kind
}

pub fn filter_and_sort(properties: &[Property], q: &PropertyQuery) -> Vec<Property> {
    let mut out: Vec<Property> = properties.iter().filter(|p| matches(p, q)).cloned().collect();
    out.sort_by(|a, b| {
        let ord = match q.sort_by {
            PropertySortKey::Rating => a.rating.total_cmp(&b.rating),
            PropertySortKey::Revenue => a.revenue.total_cmp(&b.revenue),
            PropertySortKey::Occupancy => a.occupancy_rate.cmp(&b.occupancy_rate),
            PropertySortKey::Reviews => a.total_reviews.cmp(&b.total_reviews),
        };
        match q.sort_order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::mock::mock_properties;

    #[test]
    fn default_query_sorts_by_rating_descending() {
        let out = filter_and_sort(&mock_properties(), &PropertyQuery::default());
        assert_eq!(out.len(), 6);
        for pair in out.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }
        assert_eq!(out[0].id, "prop-2");
    }

    #[test]
    fn city_filter_is_exact_and_all_disables() {
        let props = mock_properties();
        let q = PropertyQuery { city: Some("Paris".into()), ..Default::default() };
        let out = filter_and_sort(&props, &q);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|p| p.city == "Paris"));

        let q = PropertyQuery { city: Some("all".into()), ..Default::default() };
        assert_eq!(filter_and_sort(&props, &q).len(), 6);
    }

    #[test]
    fn kind_filter_matches_case_insensitively() {
        let q = PropertyQuery { kind: Some("studio".into()), ..Default::default() };
        let out = filter_and_sort(&mock_properties(), &q);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "prop-3");
    }

    #[test]
    fn search_covers_name_and_location() {
        let q = PropertyQuery { search: Some("canary".into()), ..Default::default() };
        let out = filter_and_sort(&mock_properties(), &q);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "prop-2");
    }

    #[test]
    fn revenue_sort_ascending_puts_algiers_first() {
        let q = PropertyQuery {
            sort_by: PropertySortKey::Revenue,
            sort_order: SortOrder::Asc,
            ..Default::default()
        };
        let out = filter_and_sort(&mock_properties(), &q);
        assert_eq!(out[0].id, "prop-5");
    }
}
