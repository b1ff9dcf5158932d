use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use crate::{
    db::seed,
    dtos::listingdtos::{CreateListingDto, SearchFiltersDto},
    models::listingmodel::{Listing, PropertyType},
    service::search,
};

/// Homepage payload cap for featured listings.
pub const FEATURED_CAP: usize = 6;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("listing store lock poisoned")]
    LockPoisoned,
}

/// In-memory listing store. Owns the authoritative listing set for the
/// process lifetime; constructed in `main` and passed to handlers through
/// `AppState`. Data does not survive a restart.
#[derive(Debug, Default)]
pub struct ListingStore {
    listings: RwLock<HashMap<Uuid, Listing>>,
}

#[async_trait]
pub trait ListingExt {
    async fn get_listing_by_id(&self, listing_id: Uuid) -> Result<Option<Listing>, StoreError>;

    async fn get_all_listings(&self) -> Result<Vec<Listing>, StoreError>;

    async fn get_featured_listings(
        &self,
        property_type: Option<PropertyType>,
    ) -> Result<Vec<Listing>, StoreError>;

    async fn search_listings(&self, filters: SearchFiltersDto)
        -> Result<Vec<Listing>, StoreError>;

    async fn create_listing(&self, data: CreateListingDto) -> Result<Listing, StoreError>;
}

impl ListingStore {
    pub fn new() -> Self {
        ListingStore {
            listings: RwLock::new(HashMap::new()),
        }
    }

    /// A store pre-populated with the fixed sample set.
    pub fn seeded() -> Result<Self, StoreError> {
        let store = ListingStore::new();
        for data in seed::seed_listings() {
            store.insert(data)?;
        }
        Ok(store)
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        let map = self.listings.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(map.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    fn insert(&self, data: CreateListingDto) -> Result<Listing, StoreError> {
        let listing = Listing {
            id: Uuid::new_v4(),
            title: data.title,
            description: data.description,
            property_type: data.property_type,
            sub_type: data.sub_type,
            province: data.province,
            city: data.city,
            address: data.address,
            price: data.price,
            area: data.area,
            bedrooms: data.bedrooms,
            bathrooms: data.bathrooms,
            parking: data.parking,
            images: data.images,
            featured: data.featured,
            contact_phone: data.contact_phone,
            contact_name: data.contact_name,
            created_at: Utc::now(),
        };

        let mut map = self.listings.write().map_err(|_| StoreError::LockPoisoned)?;
        map.insert(listing.id, listing.clone());
        Ok(listing)
    }

    /// Unordered snapshot copy, safe to sort and filter without touching
    /// the store.
    fn snapshot(&self) -> Result<Vec<Listing>, StoreError> {
        let map = self.listings.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(map.values().cloned().collect())
    }
}

#[async_trait]
impl ListingExt for ListingStore {
    async fn get_listing_by_id(&self, listing_id: Uuid) -> Result<Option<Listing>, StoreError> {
        let map = self.listings.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(map.get(&listing_id).cloned())
    }

    async fn get_all_listings(&self) -> Result<Vec<Listing>, StoreError> {
        let mut listings = self.snapshot()?;
        listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listings)
    }

    async fn get_featured_listings(
        &self,
        property_type: Option<PropertyType>,
    ) -> Result<Vec<Listing>, StoreError> {
        let mut listings = self.snapshot()?;
        listings.retain(|listing| {
            listing.featured
                && property_type
                    .map(|t| listing.property_type == t)
                    .unwrap_or(true)
        });
        listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        listings.truncate(FEATURED_CAP);
        Ok(listings)
    }

    async fn search_listings(
        &self,
        filters: SearchFiltersDto,
    ) -> Result<Vec<Listing>, StoreError> {
        Ok(search::search(self.snapshot()?, &filters))
    }

    async fn create_listing(&self, data: CreateListingDto) -> Result<Listing, StoreError> {
        self.insert(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dto(title: &str, property_type: PropertyType, featured: bool) -> CreateListingDto {
        CreateListingDto {
            title: title.to_string(),
            description: "توضیحات نمونه".to_string(),
            property_type,
            sub_type: None,
            province: "تهران".to_string(),
            city: "تهران".to_string(),
            address: "ولنجک، تهران".to_string(),
            price: 1_000_000_000,
            area: 100,
            bedrooms: Some(2),
            bathrooms: Some(1),
            parking: false,
            images: vec!["https://example.com/cover.jpg".to_string()],
            featured,
            contact_phone: "09961488645".to_string(),
            contact_name: "مهندس عبدالله صالحی".to_string(),
        }
    }

    #[tokio::test]
    async fn create_assigns_fresh_id_and_timestamp() {
        let store = ListingStore::new();
        let first = store
            .create_listing(sample_dto("اول", PropertyType::Villa, false))
            .await
            .unwrap();
        let second = store
            .create_listing(sample_dto("دوم", PropertyType::Villa, false))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert!(second.created_at >= first.created_at);
        assert_eq!(store.len().unwrap(), 2);
    }

    #[tokio::test]
    async fn get_by_id_returns_none_for_unknown_id() {
        let store = ListingStore::new();
        let found = store.get_listing_by_id(Uuid::new_v4()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn get_by_id_returns_the_stored_record() {
        let store = ListingStore::new();
        let created = store
            .create_listing(sample_dto("ویلا", PropertyType::Villa, true))
            .await
            .unwrap();

        let found = store.get_listing_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.title, "ویلا");
    }

    #[tokio::test]
    async fn get_all_is_sorted_newest_first() {
        let store = ListingStore::new();
        for i in 0..4 {
            store
                .create_listing(sample_dto(&format!("آگهی {i}"), PropertyType::Land, false))
                .await
                .unwrap();
        }

        let listings = store.get_all_listings().await.unwrap();
        assert_eq!(listings.len(), 4);
        for pair in listings.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[tokio::test]
    async fn featured_is_capped_and_only_featured() {
        let store = ListingStore::new();
        for i in 0..8 {
            store
                .create_listing(sample_dto(&format!("ویژه {i}"), PropertyType::Villa, true))
                .await
                .unwrap();
        }
        store
            .create_listing(sample_dto("عادی", PropertyType::Villa, false))
            .await
            .unwrap();

        let featured = store.get_featured_listings(None).await.unwrap();
        assert_eq!(featured.len(), FEATURED_CAP);
        assert!(featured.iter().all(|l| l.featured));
    }

    #[tokio::test]
    async fn featured_type_restriction_applies() {
        let store = ListingStore::new();
        store
            .create_listing(sample_dto("ویلا", PropertyType::Villa, true))
            .await
            .unwrap();
        store
            .create_listing(sample_dto("زمین", PropertyType::Land, true))
            .await
            .unwrap();

        let villas = store
            .get_featured_listings(Some(PropertyType::Villa))
            .await
            .unwrap();
        assert_eq!(villas.len(), 1);
        assert_eq!(villas[0].property_type, PropertyType::Villa);
    }

    #[test]
    fn len_surfaces_a_poisoned_lock() {
        let store = std::sync::Arc::new(ListingStore::new());

        let poisoner = std::sync::Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.listings.write().unwrap();
            panic!("poison the listing lock");
        })
        .join();

        assert!(matches!(store.len(), Err(StoreError::LockPoisoned)));
        assert!(matches!(store.is_empty(), Err(StoreError::LockPoisoned)));
    }

    #[tokio::test]
    async fn seeded_store_holds_the_sample_set() {
        let store = ListingStore::seeded().unwrap();
        assert!(!store.is_empty().unwrap());

        // Every seed entry carries at least one image.
        let listings = store.get_all_listings().await.unwrap();
        assert!(listings.iter().all(|l| !l.images.is_empty()));

        let featured = store.get_featured_listings(None).await.unwrap();
        assert!(featured.len() <= FEATURED_CAP);
    }
}
