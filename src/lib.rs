//! HotLot Engine - listing scoring and ranking for buyer strategies
//!
//! Ranks real-estate listings against a buyer's budget, bedroom, suburb and
//! investment preferences. Listings are first enriched with a commute
//! estimate and a traffic/parking risk score, then gated on must-haves and
//! scored across five weighted dimensions.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Ranker, Coordinates, TravelMode, distance::haversine_distance};
pub use models::{BuyerProfile, Listing, ScoredListing, Weights, RankListingsRequest, RankListingsResponse};
