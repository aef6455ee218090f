use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::models::Listing;

const SAMPLE_LISTINGS: &str = include_str!("../../data/sample_listings.toml");

/// Errors that can occur while fetching listings
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("Failed to parse listings: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Listing provider unavailable: {0}")]
    Unavailable(String),
}

/// Where candidate listings come from
#[async_trait]
pub trait ListingProvider: Send + Sync {
    async fn search(&self) -> Result<Vec<Listing>, ListingError>;
}

#[derive(Debug, Deserialize)]
struct ListingFile {
    #[serde(default)]
    listings: Vec<Listing>,
}

/// Fixed listing set loaded from TOML
#[derive(Debug, Clone)]
pub struct StaticListings {
    listings: Vec<Listing>,
}

impl StaticListings {
    /// The bundled sample data
    pub fn sample() -> Result<Self, ListingError> {
        Self::from_toml_str(SAMPLE_LISTINGS)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ListingError> {
        let file: ListingFile = toml::from_str(s)?;
        Ok(Self {
            listings: file.listings,
        })
    }

    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[async_trait]
impl ListingProvider for StaticListings {
    async fn search(&self) -> Result<Vec<Listing>, ListingError> {
        Ok(self.listings.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyType;

    #[test]
    fn test_sample_listings_load() {
        let source = StaticListings::sample().unwrap();
        assert_eq!(source.len(), 3);
        assert!(!source.is_empty());
        assert!(StaticListings::new(vec![]).is_empty());
    }

    #[tokio::test]
    async fn test_sample_listing_fields() {
        let listings = StaticListings::sample().unwrap().search().await.unwrap();

        let unit = listings.iter().find(|l| l.id == "MOCK-2").unwrap();
        assert_eq!(unit.property_type, PropertyType::Unit);
        assert_eq!(unit.body_corp_per_year, Some(3400.0));
        assert_eq!(unit.land_size, None);
        assert!(unit.coordinates().is_some());
        assert!(unit.travel_mins.is_none());
    }

    #[test]
    fn test_bad_toml_rejected() {
        let result = StaticListings::from_toml_str("[[listings]]\nid = 3");
        assert!(matches!(result, Err(ListingError::ParseError(_))));
    }
}
