use crate::models::{BuyerProfile, Listing, Purpose};
use crate::core::scoring::ScoreBreakdown;

/// Single reason given to a suppressed listing
pub const FAILED_MUST_HAVES: &str = "Failed must-haves";

/// A threshold callout on a computed sub-score
struct Callout {
    applies: fn(&BuyerProfile, &ScoreBreakdown) -> bool,
    message: &'static str,
}

/// Callouts in display order
const CALLOUTS: &[Callout] = &[
    Callout {
        applies: |_, s| s.budget_headroom >= 0.95,
        message: "Strong budget fit",
    },
    Callout {
        applies: |p, s| p.purpose == Purpose::Invest && s.yield_score >= 0.95,
        message: "Meets target yield",
    },
    Callout {
        applies: |_, s| s.lifestyle >= 0.95,
        message: "Great travel time to POI",
    },
    Callout {
        applies: |_, s| s.attributes >= 0.8,
        message: "Spacious relative to target",
    },
    Callout {
        applies: |_, s| s.growth >= 0.95,
        message: "Meets growth target",
    },
    Callout {
        applies: |_, s| s.quiet >= 0.9,
        message: "Quiet street profile",
    },
];

/// How the listing sits against budget, bedrooms and car spaces
pub fn fit_reasons(profile: &BuyerProfile, listing: &Listing) -> Vec<String> {
    let mut reasons = Vec::with_capacity(3);

    if listing.price <= profile.budget_max {
        reasons.push("Within budget".to_string());
    } else {
        reasons.push("Over budget (near-miss allowed)".to_string());
    }

    if listing.beds >= profile.min_beds {
        reasons.push(format!("≥ {} beds", profile.min_beds));
    } else {
        reasons.push("Bed count near-miss".to_string());
    }

    if listing.cars >= profile.must_haves.car_space_min {
        reasons.push(format!("≥ {} car space(s)", profile.must_haves.car_space_min));
    }

    reasons
}

/// Callouts whose thresholds are met, in fixed order
pub fn callouts(profile: &BuyerProfile, breakdown: &ScoreBreakdown) -> Vec<String> {
    CALLOUTS
        .iter()
        .filter(|c| (c.applies)(profile, breakdown))
        .map(|c| c.message.to_string())
        .collect()
}

/// Full reason list for a scored listing
pub fn generate_reasons(profile: &BuyerProfile, listing: &Listing, breakdown: &ScoreBreakdown) -> Vec<String> {
    let mut reasons = fit_reasons(profile, listing);
    reasons.extend(callouts(profile, breakdown));
    reasons
}
