// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod growth;
pub mod ranker;
pub mod reasons;
pub mod risk;
pub mod scoring;
pub mod travel;

pub use distance::{haversine_distance, Coordinates, GeoError, REFERENCE_ORIGIN};
pub use filters::{passes_gate, evaluate_gate, GateOutcome};
pub use growth::projected_cagr;
pub use ranker::Ranker;
pub use risk::{assess_risk, estimate_risk, RiskAssessment, CorridorSignals, AmenitySignals};
pub use scoring::{composite_score, ScoreBreakdown};
pub use travel::{estimate_travel_time, TravelEstimate, TravelMode};
