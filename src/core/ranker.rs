use crate::models::{BuyerProfile, Listing, ScoredListing, Weights};
use crate::core::{
    filters::evaluate_gate,
    reasons::{generate_reasons, FAILED_MUST_HAVES},
    scoring::{composite_score, ScoreBreakdown},
};

/// Scores listings against a buyer profile and orders them
///
/// # Pipeline Stages
/// 1. Must-have gate (suppresses when near-misses are disabled)
/// 2. Sub-scores
/// 3. Weighted composite and reasons
/// 4. Sort by score, descending
///
/// Listings must already be enriched with travel time and risk; the
/// ranker itself is pure. Profiles without weights are scored with the
/// ranker's default weights.
#[derive(Debug, Clone)]
pub struct Ranker {
    show_near_misses: bool,
    default_weights: Weights,
}

impl Ranker {
    pub fn new(show_near_misses: bool) -> Self {
        Self {
            show_near_misses,
            default_weights: Weights::default(),
        }
    }

    pub fn with_default_weights(mut self, weights: Weights) -> Self {
        self.default_weights = weights;
        self
    }

    /// Score a single listing
    pub fn score_listing(&self, profile: &BuyerProfile, listing: &Listing) -> ScoredListing {
        if evaluate_gate(profile, listing, self.show_near_misses).is_suppressed() {
            return ScoredListing {
                listing: listing.clone(),
                score: 0,
                reasons: vec![FAILED_MUST_HAVES.to_string()],
            };
        }

        let breakdown = ScoreBreakdown::compute(profile, listing);
        let score = composite_score(&breakdown, &profile.weights_or(self.default_weights));
        let reasons = generate_reasons(profile, listing, &breakdown);

        tracing::trace!(
            "Scored {}: {} (fin {:.2}, life {:.2}, attr {:.2}, growth {:.2}, quiet {:.2})",
            listing.id,
            score,
            breakdown.financial,
            breakdown.lifestyle,
            breakdown.attributes,
            breakdown.growth,
            breakdown.quiet
        );

        ScoredListing {
            listing: listing.clone(),
            score,
            reasons,
        }
    }

    /// Score every listing and sort by descending score
    ///
    /// Order among equal scores is unspecified.
    pub fn rank(&self, profile: &BuyerProfile, listings: &[Listing]) -> Vec<ScoredListing> {
        let mut scored: Vec<ScoredListing> = listings
            .iter()
            .map(|listing| self.score_listing(profile, listing))
            .collect();

        scored.sort_unstable_by(|a, b| b.score.cmp(&a.score));

        tracing::debug!(
            "Ranked {} listings (near-misses {})",
            scored.len(),
            if self.show_near_misses { "shown" } else { "hidden" }
        );

        scored
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(true)
    }
}
