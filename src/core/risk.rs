//! Traffic and parking risk heuristic.
//!
//! The score starts at a baseline and accumulates additive bumps from road
//! corridor signals and, for high-turnover bayside suburbs, local amenity
//! signals. The result is clamped to `[0, 1]`; every bump that fires leaves
//! a note, in evaluation order.

use serde::{Deserialize, Serialize};

const BASELINE_RISK: f64 = 0.4;

/// Suburbs where beach, station and school traffic drive parking churn
pub const BAYSIDE_SUBURBS: [&str; 9] = [
    "Sandringham",
    "Hampton",
    "Hampton East",
    "Brighton",
    "Brighton East",
    "Beaumaris",
    "Black Rock",
    "Highett",
    "Cheltenham",
];

/// Road-corridor proximity inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorridorSignals {
    /// Metres to the nearest arterial road
    pub arterial_dist_m: f64,
    /// Annual average daily traffic on that arterial
    pub aadt: u32,
    /// Metres to the nearest signalised intersection
    pub intersection_dist_m: f64,
    /// Public transport vehicles per hour on the corridor
    pub pt_vehicles_per_hour: u32,
}

impl CorridorSignals {
    /// Stand-in values until a spatial lookup is wired up
    pub const PLACEHOLDER: CorridorSignals = CorridorSignals {
        arterial_dist_m: 90.0,
        aadt: 32_000,
        intersection_dist_m: 70.0,
        pt_vehicles_per_hour: 10,
    };

    /// Signals that trigger no corridor bump
    pub const QUIET: CorridorSignals = CorridorSignals {
        arterial_dist_m: f64::INFINITY,
        aadt: 0,
        intersection_dist_m: f64::INFINITY,
        pt_vehicles_per_hour: 0,
    };
}

/// Local amenity inputs, only consulted for bayside suburbs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmenitySignals {
    pub beach_dist_m: f64,
    pub station_dist_m: f64,
    pub near_retail_strip: bool,
    pub school_dist_m: f64,
    pub in_permit_zone: bool,
}

impl AmenitySignals {
    /// Stand-in values until a spatial lookup is wired up
    pub const PLACEHOLDER: AmenitySignals = AmenitySignals {
        beach_dist_m: 300.0,
        station_dist_m: 250.0,
        near_retail_strip: true,
        school_dist_m: 180.0,
        in_permit_zone: true,
    };

    pub const NONE: AmenitySignals = AmenitySignals {
        beach_dist_m: f64::INFINITY,
        station_dist_m: f64::INFINITY,
        near_retail_strip: false,
        school_dist_m: f64::INFINITY,
        in_permit_zone: false,
    };
}

/// Risk score with its explanation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk: f64,
    pub notes: Vec<String>,
}

/// Exact match against [`BAYSIDE_SUBURBS`] after trimming
pub fn is_bayside(suburb: &str) -> bool {
    let suburb = suburb.trim();
    BAYSIDE_SUBURBS.contains(&suburb)
}

/// Score traffic/parking risk from the given signals
pub fn assess_risk(corridor: &CorridorSignals, amenity: &AmenitySignals, suburb: &str) -> RiskAssessment {
    let mut risk = BASELINE_RISK;
    let mut notes = Vec::new();
    let mut bump = |amount: f64, note: &str| {
        risk += amount;
        notes.push(note.to_string());
    };

    if corridor.arterial_dist_m <= 50.0 {
        bump(0.35, "Fronts or near arterial (≤50m)");
    } else if corridor.arterial_dist_m <= 120.0 {
        bump(0.20, "Close to arterial (≤120m)");
    } else if corridor.arterial_dist_m <= 200.0 {
        bump(0.08, "Within 200m of arterial");
    }

    if corridor.aadt >= 40_000 {
        bump(0.20, "High traffic volume (AADT ≥40k)");
    } else if corridor.aadt >= 20_000 {
        bump(0.10, "Moderate traffic (20k–40k)");
    }

    if corridor.intersection_dist_m <= 50.0 {
        bump(0.10, "Near signalised intersection (≤50m)");
    }

    if corridor.pt_vehicles_per_hour >= 20 {
        bump(0.08, "High-frequency PT corridor");
    } else if corridor.pt_vehicles_per_hour >= 12 {
        bump(0.04, "Moderate PT corridor");
    }

    let bayside = is_bayside(suburb);
    if bayside {
        if amenity.beach_dist_m <= 400.0 {
            bump(0.10, "Near foreshore (parking churn)");
        }
        if amenity.station_dist_m <= 300.0 {
            bump(0.10, "Near railway station (commuter parking)");
        }
        if amenity.near_retail_strip {
            bump(0.06, "Adjacent to retail strip (short-stay turnover)");
        }
        if amenity.school_dist_m <= 250.0 {
            bump(0.12, "Near school (pickup/dropoff peaks)");
        }
        if amenity.in_permit_zone {
            bump(0.06, "Resident permit area nearby");
        }
    }

    notes.insert(0, format!("Bayside rules applied: {}", bayside));

    RiskAssessment {
        risk: risk.clamp(0.0, 1.0),
        notes,
    }
}

/// Risk using the placeholder spatial signals
pub fn estimate_risk(suburb: &str) -> RiskAssessment {
    assess_risk(&CorridorSignals::PLACEHOLDER, &AmenitySignals::PLACEHOLDER, suburb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arterial_and_traffic_tiers() {
        let corridor = CorridorSignals {
            arterial_dist_m: 90.0,
            aadt: 32_000,
            ..CorridorSignals::QUIET
        };
        let result = assess_risk(&corridor, &AmenitySignals::NONE, "Carlton");

        assert!((result.risk - 0.70).abs() < 1e-9);
        assert_eq!(
            result.notes,
            vec![
                "Bayside rules applied: false",
                "Close to arterial (≤120m)",
                "Moderate traffic (20k–40k)",
            ]
        );
    }

    #[test]
    fn test_quiet_street_is_baseline() {
        let result = assess_risk(&CorridorSignals::QUIET, &AmenitySignals::PLACEHOLDER, "Carlton");
        assert!((result.risk - 0.4).abs() < 1e-9);
        assert_eq!(result.notes.len(), 1);
    }

    #[test]
    fn test_placeholder_non_bayside() {
        let result = estimate_risk("Richmond");
        assert!((result.risk - 0.70).abs() < 1e-9);
        assert_eq!(result.notes[0], "Bayside rules applied: false");
    }

    #[test]
    fn test_placeholder_bayside_clamps() {
        // 0.7 + 0.44 of amenity bumps
        let result = estimate_risk("Sandringham");
        assert_eq!(result.risk, 1.0);
        assert_eq!(result.notes[0], "Bayside rules applied: true");
        assert_eq!(result.notes.len(), 8);
        assert_eq!(result.notes[7], "Resident permit area nearby");
    }

    #[test]
    fn test_every_trigger_stays_in_range() {
        let corridor = CorridorSignals {
            arterial_dist_m: 10.0,
            aadt: 60_000,
            intersection_dist_m: 10.0,
            pt_vehicles_per_hour: 30,
        };
        let amenity = AmenitySignals {
            beach_dist_m: 10.0,
            station_dist_m: 10.0,
            near_retail_strip: true,
            school_dist_m: 10.0,
            in_permit_zone: true,
        };
        let result = assess_risk(&corridor, &amenity, "Brighton");
        assert!((0.0..=1.0).contains(&result.risk));
        assert_eq!(result.notes.len(), 10);
    }

    #[test]
    fn test_bayside_match_is_exact() {
        assert!(is_bayside(" Black Rock "));
        assert!(!is_bayside("black rock"));
        assert!(!is_bayside(""));
    }

    #[test]
    fn test_tier_boundaries() {
        let at = |arterial_dist_m: f64, pt: u32| {
            let corridor = CorridorSignals {
                arterial_dist_m,
                pt_vehicles_per_hour: pt,
                ..CorridorSignals::QUIET
            };
            assess_risk(&corridor, &AmenitySignals::NONE, "").risk
        };
        assert!((at(50.0, 0) - 0.75).abs() < 1e-9);
        assert!((at(200.0, 0) - 0.48).abs() < 1e-9);
        assert!((at(201.0, 0) - 0.40).abs() < 1e-9);
        assert!((at(500.0, 12) - 0.44).abs() < 1e-9);
        assert!((at(500.0, 20) - 0.48).abs() < 1e-9);
    }
}
