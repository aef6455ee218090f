// Service exports
pub mod enrichment;
pub mod estimator;
pub mod listings;

pub use enrichment::{Enricher, DEFAULT_TRAVEL_MINS, DEFAULT_RISK};
pub use estimator::{TravelTimeProvider, RiskProvider, LocalEstimator, RemoteEstimator, EstimatorError};
pub use listings::{ListingProvider, StaticListings, ListingError};
