use futures::stream::{self, StreamExt};
use std::sync::Arc;

use crate::core::{distance::Coordinates, travel::TravelMode};
use crate::models::Listing;
use crate::services::estimator::{RiskProvider, TravelTimeProvider};

/// Commute minutes assumed when the travel provider fails and nothing is cached
pub const DEFAULT_TRAVEL_MINS: u32 = 25;

/// Risk assumed when the risk provider fails and nothing is cached
pub const DEFAULT_RISK: f64 = 0.35;

pub const DEFAULT_RISK_NOTE: &str = "Heuristic default";

/// Listings enriched at once unless configured otherwise
pub const DEFAULT_CONCURRENCY: usize = 16;

/// First stage of a ranking pass: attach travel time and risk to listings
///
/// Up to `concurrency` listings are enriched at once. A provider failure never aborts the
/// pass; the listing keeps its previous value or takes the neutral default.
/// Listings without coordinates pass through unchanged.
#[derive(Clone)]
pub struct Enricher {
    travel: Arc<dyn TravelTimeProvider>,
    risk: Arc<dyn RiskProvider>,
    origin: Coordinates,
    mode: TravelMode,
    concurrency: usize,
}

impl Enricher {
    pub fn new(
        travel: Arc<dyn TravelTimeProvider>,
        risk: Arc<dyn RiskProvider>,
        origin: Coordinates,
        mode: TravelMode,
    ) -> Self {
        Self {
            travel,
            risk,
            origin,
            mode,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Cap on listings enriched at once; zero is treated as one
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Same providers, different commute origin and mode
    pub fn with_commute(&self, origin: Coordinates, mode: TravelMode) -> Self {
        Self {
            origin,
            mode,
            ..self.clone()
        }
    }

    /// Enrich every listing, preserving input order
    pub async fn enrich(&self, listings: Vec<Listing>) -> Vec<Listing> {
        let count = listings.len();
        let enriched: Vec<Listing> = stream::iter(listings)
            .map(|l| self.enrich_one(l))
            .buffered(self.concurrency)
            .collect()
            .await;

        tracing::debug!(
            "Enriched {} listings from origin {} by {}",
            count,
            self.origin,
            self.mode
        );

        enriched
    }

    /// Attach travel minutes, then risk, to a single listing
    pub async fn enrich_one(&self, mut listing: Listing) -> Listing {
        let Some(at) = listing.coordinates() else {
            tracing::debug!("Listing {} has no coordinates, skipping enrichment", listing.id);
            return listing;
        };

        match self.travel.travel_time(&self.origin, &at, self.mode).await {
            Ok(estimate) => listing.travel_mins = Some(estimate.minutes),
            Err(e) => {
                tracing::warn!("Travel estimate failed for {}, using fallback: {}", listing.id, e);
                listing.travel_mins = Some(listing.travel_mins.unwrap_or(DEFAULT_TRAVEL_MINS));
            }
        }

        match self.risk.risk(&at, &listing.suburb).await {
            Ok(assessment) => {
                listing.traffic_parking_risk = Some(assessment.risk);
                listing.risk_notes = Some(assessment.notes);
            }
            Err(e) => {
                tracing::warn!("Risk estimate failed for {}, using fallback: {}", listing.id, e);
                listing.traffic_parking_risk = Some(listing.traffic_parking_risk.unwrap_or(DEFAULT_RISK));
                if listing.risk_notes.is_none() {
                    listing.risk_notes = Some(vec![DEFAULT_RISK_NOTE.to_string()]);
                }
            }
        }

        listing
    }
}
