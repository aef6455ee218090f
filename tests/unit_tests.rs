// Unit tests for HotLot Engine

use hotlot_engine::core::{
    distance::{haversine_distance, Coordinates, REFERENCE_ORIGIN},
    filters::{evaluate_gate, passes_gate, GateOutcome},
    growth::projected_cagr,
    risk::{assess_risk, AmenitySignals, CorridorSignals},
    scoring::{composite_score, ScoreBreakdown},
    travel::{estimate_minutes, estimate_travel_time, TravelMode},
    Ranker,
};
use hotlot_engine::models::{BuyerProfile, Listing, ListingSource, PropertyType, Purpose, Weights};

fn create_test_listing(price: f64, beds: u8, cars: u8, suburb: &str) -> Listing {
    Listing {
        id: "test".to_string(),
        source: ListingSource::Mock,
        url: "https://example.com/listing/test".to_string(),
        address: "1 Test St".to_string(),
        suburb: suburb.to_string(),
        price,
        beds,
        baths: 1,
        cars,
        property_type: PropertyType::House,
        land_size: None,
        internal_area: None,
        lat: None,
        lon: None,
        travel_mins: None,
        body_corp_per_year: None,
        rent_per_week: None,
        traffic_parking_risk: None,
        risk_notes: None,
    }
}

#[test]
fn test_haversine_symmetric_and_zero() {
    let points = [
        (-37.8183, 144.9671),
        (-37.9529, 145.0157),
        (51.5074, -0.1278),
        (40.7128, -74.0060),
    ];

    for &(lat1, lon1) in &points {
        assert_eq!(haversine_distance(lat1, lon1, lat1, lon1), 0.0);
        for &(lat2, lon2) in &points {
            let ab = haversine_distance(lat1, lon1, lat2, lon2);
            let ba = haversine_distance(lat2, lon2, lat1, lon1);
            assert!((ab - ba).abs() < 1e-9);
        }
    }
}

#[test]
fn test_travel_minutes_always_clamped() {
    for mode in [TravelMode::Driving, TravelMode::Walking, TravelMode::Transit] {
        for km in [0.0, 0.05, 1.0, 7.5, 14.99, 15.0, 80.0, 400.0, 20_000.0] {
            let minutes = estimate_minutes(km, mode);
            assert!((2..=180).contains(&minutes), "{}km by {} gave {}", km, mode, minutes);
        }
    }
}

#[test]
fn test_travel_estimate_shape() {
    let dest = Coordinates::new(-37.9339, 145.0055);
    let estimate = estimate_travel_time(&REFERENCE_ORIGIN, &dest, TravelMode::Transit);

    // 13.3km at 16km/h plus 4 minutes waiting
    assert_eq!(estimate.minutes, 54);
    assert_eq!(estimate.km, 13.3);
    assert_eq!(estimate.method, "local-estimator");
}

#[test]
fn test_risk_example_arterial_and_traffic() {
    let corridor = CorridorSignals {
        arterial_dist_m: 90.0,
        aadt: 32_000,
        ..CorridorSignals::QUIET
    };
    let result = assess_risk(&corridor, &AmenitySignals::NONE, "Footscray");
    assert!((result.risk - 0.70).abs() < 1e-9);
}

#[test]
fn test_risk_always_in_unit_range() {
    let arterials = [10.0, 100.0, 150.0, 1000.0];
    let volumes = [0, 25_000, 50_000];
    let suburbs = ["Brighton", "Carlton"];

    for &arterial_dist_m in &arterials {
        for &aadt in &volumes {
            for suburb in suburbs {
                let corridor = CorridorSignals {
                    arterial_dist_m,
                    aadt,
                    intersection_dist_m: 20.0,
                    pt_vehicles_per_hour: 25,
                };
                let result = assess_risk(&corridor, &AmenitySignals::PLACEHOLDER, suburb);
                assert!((0.0..=1.0).contains(&result.risk));
                assert!(result.notes[0].starts_with("Bayside rules applied:"));
            }
        }
    }
}

#[test]
fn test_growth_lookup_never_undefined() {
    for suburb in ["Hampton", "sandringham", "Nowhere", ""] {
        for ty in [PropertyType::House, PropertyType::Unit, PropertyType::Townhouse] {
            let rate = projected_cagr(suburb, ty);
            assert!(rate.is_finite() && rate >= 0.0);
        }
    }
}

#[test]
fn test_exact_budget_passes_regardless_of_near_miss() {
    let profile = BuyerProfile {
        budget_max: 1_200_000.0,
        min_beds: 3,
        suburbs: vec!["Hampton".to_string()],
        ..BuyerProfile::default()
    };
    let listing = create_test_listing(1_200_000.0, 3, 1, "Hampton");

    assert!(passes_gate(&profile, &listing, true));
    assert!(passes_gate(&profile, &listing, false));
    assert_eq!(evaluate_gate(&profile, &listing, false), GateOutcome::Pass);
}

#[test]
fn test_over_budget_with_near_misses_disabled() {
    let profile = BuyerProfile::default();
    let listing = create_test_listing(2_000_000.0, 4, 2, "Hampton");

    let result = Ranker::new(false).score_listing(&profile, &listing);
    assert_eq!(result.score, 0);
    assert_eq!(result.reasons, vec!["Failed must-haves".to_string()]);
}

#[test]
fn test_composite_bounds() {
    let listing = create_test_listing(900_000.0, 3, 1, "Hampton");
    let profiles = [
        BuyerProfile::default(),
        BuyerProfile {
            purpose: Purpose::Invest,
            weights: Some(Weights {
                financial: 3.0,
                lifestyle: 3.0,
                attributes: 3.0,
                growth: 3.0,
                quiet: 3.0,
            }),
            ..BuyerProfile::default()
        },
        BuyerProfile {
            weights: Some(Weights {
                financial: 0.0,
                lifestyle: 0.0,
                attributes: 0.0,
                growth: 0.0,
                quiet: 0.0,
            }),
            ..BuyerProfile::default()
        },
    ];

    for profile in &profiles {
        let breakdown = ScoreBreakdown::compute(profile, &listing);
        let score = composite_score(&breakdown, &profile.weights_or(Weights::default()));
        assert!(score <= 100);
    }
}

#[test]
fn test_sub_scores_in_unit_range() {
    let mut listing = create_test_listing(3_000_000.0, 1, 0, "Nowhere");
    listing.travel_mins = Some(500);
    listing.body_corp_per_year = Some(20_000.0);
    listing.rent_per_week = Some(50.0);
    listing.internal_area = Some(10.0);
    listing.land_size = Some(5000.0);
    listing.traffic_parking_risk = Some(1.0);

    let profile = BuyerProfile {
        purpose: Purpose::Invest,
        target_yield: Some(0.09),
        target_growth: Some(0.08),
        ..BuyerProfile::default()
    };

    let s = ScoreBreakdown::compute(&profile, &listing);
    for value in [
        s.budget_headroom,
        s.yield_score,
        s.outgoings,
        s.financial,
        s.lifestyle,
        s.attributes,
        s.growth,
        s.quiet,
    ] {
        assert!((0.0..=1.0).contains(&value));
    }
    assert_eq!(s.budget_headroom, 0.0);
    assert_eq!(s.attributes, 1.0);
}
