use crate::models::{BuyerProfile, Listing, Purpose, Weights};
use crate::core::growth::{projected_cagr, DEFAULT_CAGR};

/// Commute time that earns a full lifestyle score
pub const COMMUTE_TARGET_MINS: f64 = 30.0;

/// Neutral score for an unknown input
const NEUTRAL: f64 = 0.5;

/// Outgoings score when strata costs are unknown
const UNKNOWN_OUTGOINGS: f64 = 0.8;

/// Annual strata cost at which the outgoings score reaches zero
const OUTGOINGS_CEILING: f64 = 5000.0;

/// Shortfall in yield or growth rate at which the score reaches zero
const RATE_GAP_TOLERANCE: f64 = 0.02;

#[inline]
pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Every sub-score computed for a listing, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub budget_headroom: f64,
    pub yield_score: f64,
    pub outgoings: f64,
    pub financial: f64,
    pub lifestyle: f64,
    pub attributes: f64,
    pub growth: f64,
    pub quiet: f64,
}

impl ScoreBreakdown {
    /// Compute all sub-scores for `listing` under `profile`
    pub fn compute(profile: &BuyerProfile, listing: &Listing) -> Self {
        let budget_headroom = budget_headroom(listing.price, profile.budget_max);
        let yield_score = match profile.purpose {
            Purpose::Invest => yield_score(listing.rent_per_week, listing.price, profile.target_yield),
            Purpose::OwnOccupy => NEUTRAL,
        };
        let outgoings = outgoings_score(listing.body_corp_per_year);
        let financial = clamp01(0.5 * budget_headroom + 0.35 * yield_score + 0.15 * outgoings);

        let cagr = projected_cagr(&listing.suburb, listing.property_type);
        let target_growth = profile.target_growth.unwrap_or(DEFAULT_CAGR);

        Self {
            budget_headroom,
            yield_score,
            outgoings,
            financial,
            lifestyle: travel_score(listing.travel_mins.map(f64::from), COMMUTE_TARGET_MINS),
            attributes: attributes_score(listing.internal_area, listing.land_size),
            growth: growth_score(cagr, target_growth),
            quiet: quiet_score(listing.traffic_parking_risk),
        }
    }

    /// Weighted sum of the five headline sub-scores, clamped to [0, 1]
    pub fn weighted(&self, weights: &Weights) -> f64 {
        clamp01(
            weights.financial * self.financial
                + weights.lifestyle * self.lifestyle
                + weights.attributes * self.attributes
                + weights.growth * self.growth
                + weights.quiet * self.quiet,
        )
    }
}

/// Composite 0-100 score
pub fn composite_score(breakdown: &ScoreBreakdown, weights: &Weights) -> u8 {
    (breakdown.weighted(weights) * 100.0).round() as u8
}

/// 1 within budget, falling to 0 at 25% over
#[inline]
pub fn budget_headroom(price: f64, budget_max: f64) -> f64 {
    if price <= budget_max {
        return 1.0;
    }
    let over = price / budget_max - 1.0;
    clamp01(1.0 - over * 4.0)
}

/// Gross yield against target, falling to 0 two points short
///
/// Neutral when rent or target is missing or zero.
#[inline]
pub fn yield_score(rent_per_week: Option<f64>, price: f64, target_yield: Option<f64>) -> f64 {
    let (rent, target) = match (rent_per_week, target_yield) {
        (Some(rent), Some(target)) if rent > 0.0 && target > 0.0 => (rent, target),
        _ => return NEUTRAL,
    };

    let gross = rent * 52.0 / price;
    rate_gap_score(gross, target)
}

/// Annual strata cost, cheaper is better. Zero or unknown cost scores 0.8.
#[inline]
pub fn outgoings_score(body_corp_per_year: Option<f64>) -> f64 {
    match body_corp_per_year {
        Some(cost) if cost > 0.0 => clamp01(1.0 - cost / OUTGOINGS_CEILING),
        _ => UNKNOWN_OUTGOINGS,
    }
}

/// 1 at or under target, falling to 0 at double the target
#[inline]
pub fn travel_score(actual_mins: Option<f64>, target_mins: f64) -> f64 {
    match actual_mins {
        None => NEUTRAL,
        Some(actual) if actual <= target_mins => 1.0,
        Some(actual) => clamp01(1.0 - (actual - target_mins) / target_mins),
    }
}

/// Best of the internal-area and land-size ramps
#[inline]
pub fn attributes_score(internal_area: Option<f64>, land_size: Option<f64>) -> f64 {
    let ramp = |value: Option<f64>, lo: f64, hi: f64| match value {
        Some(v) if v > 0.0 => clamp01((v - lo) / (hi - lo)),
        _ => NEUTRAL,
    };

    let internal = ramp(internal_area, 90.0, 150.0);
    let land = ramp(land_size, 300.0, 500.0);
    internal.max(land)
}

/// Projected growth against target, falling to 0 two points short
#[inline]
pub fn growth_score(projected: f64, target: f64) -> f64 {
    rate_gap_score(projected, target)
}

#[inline]
pub fn quiet_score(risk: Option<f64>) -> f64 {
    match risk {
        Some(r) => clamp01(1.0 - r),
        None => NEUTRAL,
    }
}

#[inline]
fn rate_gap_score(actual: f64, target: f64) -> f64 {
    if actual >= target {
        return 1.0;
    }
    clamp01(1.0 - (target - actual) / RATE_GAP_TOLERANCE)
}
