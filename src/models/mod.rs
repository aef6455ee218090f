// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{BuyerProfile, Purpose, PropertyType, ListingSource, Weights, MustHaves, Listing, ScoredListing};
pub use requests::{TravelTimeQuery, RiskQuery, RankListingsRequest};
pub use responses::{TravelTimeResponse, RiskResponse, RankListingsResponse, HealthResponse, ErrorResponse};
