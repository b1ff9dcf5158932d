use crate::{dtos::listingdtos::SearchFiltersDto, models::listingmodel::Listing};

/// Pure filter evaluator: keeps the listings satisfying every present
/// constraint, then orders the result newest-first. Sorting for display
/// (price, area) is the consumer's concern, not this function's.
pub fn search(mut listings: Vec<Listing>, filters: &SearchFiltersDto) -> Vec<Listing> {
    listings.retain(|listing| matches(listing, filters));
    listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    listings
}

fn matches(listing: &Listing, filters: &SearchFiltersDto) -> bool {
    if let Some(property_type) = filters.property_type {
        if listing.property_type != property_type {
            return false;
        }
    }

    if let Some(ref province) = filters.province {
        if &listing.province != province {
            return false;
        }
    }

    if let Some(ref city) = filters.city {
        if &listing.city != city {
            return false;
        }
    }

    if let Some(min_price) = filters.min_price {
        if listing.price < min_price {
            return false;
        }
    }

    if let Some(max_price) = filters.max_price {
        if listing.price > max_price {
            return false;
        }
    }

    if let Some(min_area) = filters.min_area {
        if listing.area < min_area {
            return false;
        }
    }

    if let Some(max_area) = filters.max_area {
        if listing.area > max_area {
            return false;
        }
    }

    // Exact match on bedroom count; a listing without bedrooms never
    // matches a bedrooms constraint.
    if let Some(bedrooms) = filters.bedrooms {
        if listing.bedrooms != Some(bedrooms) {
            return false;
        }
    }

    // featured: Some(false) is "no constraint", matching only-keep-featured
    // semantics of the wire contract.
    if filters.featured == Some(true) && !listing.featured {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::listingmodel::PropertyType;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    fn listing(
        title: &str,
        property_type: PropertyType,
        price: i64,
        featured: bool,
        age_hours: i64,
    ) -> Listing {
        Listing {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: String::new(),
            property_type,
            sub_type: None,
            province: "مازندران".to_string(),
            city: "نوشهر".to_string(),
            address: "چلک، نوشهر".to_string(),
            price,
            area: 350,
            bedrooms: Some(3),
            bathrooms: Some(2),
            parking: true,
            images: vec!["https://example.com/cover.jpg".to_string()],
            featured,
            contact_phone: "09961488645".to_string(),
            contact_name: "مهندس عبدالله صالحی".to_string(),
            created_at: Utc::now() - Duration::hours(age_hours),
        }
    }

    // The scenario set: A newest, then C, then B.
    fn sample() -> Vec<Listing> {
        vec![
            listing("A", PropertyType::Villa, 8_500_000_000, true, 0),
            listing("B", PropertyType::Land, 3_200_000_000, true, 2),
            listing("C", PropertyType::Apartment, 4_200_000_000, false, 1),
        ]
    }

    fn titles(listings: &[Listing]) -> Vec<&str> {
        listings.iter().map(|l| l.title.as_str()).collect()
    }

    #[test]
    fn empty_filter_returns_everything_newest_first() {
        let results = search(sample(), &SearchFiltersDto::default());
        assert_eq!(titles(&results), vec!["A", "C", "B"]);
    }

    #[test]
    fn type_filter_returns_only_matching_listings() {
        let filters = SearchFiltersDto {
            property_type: Some(PropertyType::Villa),
            ..Default::default()
        };
        let results = search(sample(), &filters);
        assert_eq!(titles(&results), vec!["A"]);
    }

    #[test]
    fn price_bounds_are_inclusive_and_ordered_newest_first() {
        let filters = SearchFiltersDto {
            min_price: Some(4_000_000_000),
            max_price: Some(9_000_000_000),
            ..Default::default()
        };
        let results = search(sample(), &filters);
        assert_eq!(titles(&results), vec!["A", "C"]);

        // Boundary value stays in
        let exact = SearchFiltersDto {
            min_price: Some(8_500_000_000),
            max_price: Some(8_500_000_000),
            ..Default::default()
        };
        assert_eq!(titles(&search(sample(), &exact)), vec!["A"]);
    }

    #[test]
    fn area_bounds_are_inclusive() {
        let mut listings = sample();
        listings[1].area = 500;

        let filters = SearchFiltersDto {
            min_area: Some(400),
            ..Default::default()
        };
        assert_eq!(titles(&search(listings, &filters)), vec!["B"]);
    }

    #[test]
    fn province_and_city_use_exact_string_match() {
        let mut listings = sample();
        listings[2].province = "اصفهان".to_string();
        listings[2].city = "اصفهان".to_string();

        let filters = SearchFiltersDto {
            province: Some("اصفهان".to_string()),
            ..Default::default()
        };
        assert_eq!(titles(&search(listings.clone(), &filters)), vec!["C"]);

        let no_match = SearchFiltersDto {
            city: Some("تهران".to_string()),
            ..Default::default()
        };
        assert!(search(listings, &no_match).is_empty());
    }

    #[test]
    fn bedrooms_filter_is_exact_match() {
        let mut listings = sample();
        listings[1].bedrooms = None;
        listings[2].bedrooms = Some(2);

        let filters = SearchFiltersDto {
            bedrooms: Some(3),
            ..Default::default()
        };
        // B (no bedrooms) and C (2 bedrooms) both drop out.
        assert_eq!(titles(&search(listings, &filters)), vec!["A"]);
    }

    #[test]
    fn featured_true_keeps_only_featured() {
        let filters = SearchFiltersDto {
            featured: Some(true),
            ..Default::default()
        };
        assert_eq!(titles(&search(sample(), &filters)), vec!["A", "B"]);
    }

    #[test]
    fn featured_false_is_no_constraint() {
        let filters = SearchFiltersDto {
            featured: Some(false),
            ..Default::default()
        };
        assert_eq!(search(sample(), &filters).len(), 3);
    }

    #[test]
    fn constraints_apply_conjunctively() {
        let filters = SearchFiltersDto {
            property_type: Some(PropertyType::Land),
            featured: Some(true),
            max_price: Some(3_000_000_000),
            ..Default::default()
        };
        // B is featured land but priced above the cap.
        assert!(search(sample(), &filters).is_empty());
    }

    #[test]
    fn result_is_a_subset_of_the_input() {
        let listings = sample();
        let ids: Vec<_> = listings.iter().map(|l| l.id).collect();

        let filters = SearchFiltersDto {
            min_price: Some(1),
            ..Default::default()
        };
        for found in search(listings, &filters) {
            assert!(ids.contains(&found.id));
        }
    }

    #[test]
    fn search_is_idempotent() {
        let filters = SearchFiltersDto {
            min_price: Some(4_000_000_000),
            featured: Some(true),
            ..Default::default()
        };
        let once = search(sample(), &filters);
        let twice = search(once.clone(), &filters);

        let once_ids: Vec<_> = once.iter().map(|l| l.id).collect();
        let twice_ids: Vec<_> = twice.iter().map(|l| l.id).collect();
        assert_eq!(once_ids, twice_ids);
    }

    #[test]
    fn search_of_empty_set_is_empty() {
        assert!(search(Vec::new(), &SearchFiltersDto::default()).is_empty());
    }
}
