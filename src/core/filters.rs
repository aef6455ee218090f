use crate::models::{BuyerProfile, Listing};

/// Outcome of the must-have gate for one listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// Satisfies every must-have (with near-miss relaxation when enabled)
    Pass,
    /// Failed the gate, but near-misses are enabled so it is still scored
    NearMiss,
    /// Failed the gate with near-misses disabled; scored 0 and not sub-scored
    Suppressed,
}

impl GateOutcome {
    pub fn is_suppressed(&self) -> bool {
        matches!(self, GateOutcome::Suppressed)
    }
}

/// Check a listing against the buyer's hard constraints
///
/// With `show_near_misses`, the budget check is waived entirely and a listing
/// one bedroom short of the minimum is accepted.
#[inline]
pub fn passes_gate(profile: &BuyerProfile, listing: &Listing, show_near_misses: bool) -> bool {
    // Budget
    if !(listing.price <= profile.budget_max || show_near_misses) {
        return false;
    }

    // Bedrooms
    let one_short = profile.min_beds > 0 && listing.beds == profile.min_beds - 1;
    if !(listing.beds >= profile.min_beds || (show_near_misses && one_short)) {
        return false;
    }

    // Property type
    if !profile.must_haves.property_types.contains(&listing.property_type) {
        return false;
    }

    // Car spaces
    if listing.cars < profile.must_haves.car_space_min {
        return false;
    }

    profile.accepts_suburb(&listing.suburb)
}

/// Decide how the ranker treats a listing
///
/// Only a failed gate with near-misses disabled suppresses a listing. When
/// near-misses are enabled, listings are scored whatever the gate says.
pub fn evaluate_gate(profile: &BuyerProfile, listing: &Listing, show_near_misses: bool) -> GateOutcome {
    if passes_gate(profile, listing, show_near_misses) {
        GateOutcome::Pass
    } else if show_near_misses {
        GateOutcome::NearMiss
    } else {
        GateOutcome::Suppressed
    }
}
