use serde::{Deserialize, Serialize};

/// Why the buyer is purchasing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Purpose {
    #[default]
    OwnOccupy,
    Invest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    House,
    Unit,
    Townhouse,
}

impl PropertyType {
    pub const ALL: [PropertyType; 3] = [PropertyType::House, PropertyType::Unit, PropertyType::Townhouse];
}

/// Where a listing came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListingSource {
    Domain,
    Rea,
    #[default]
    Mock,
}

/// Relative importance of each sub-score.
///
/// Expected to sum to roughly 1.0, but this is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    #[serde(alias = "fin")]
    pub financial: f64,
    #[serde(alias = "life")]
    pub lifestyle: f64,
    #[serde(alias = "attr")]
    pub attributes: f64,
    pub growth: f64,
    pub quiet: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            financial: 0.33,
            lifestyle: 0.27,
            attributes: 0.22,
            growth: 0.10,
            quiet: 0.08,
        }
    }
}

/// Hard constraints a listing must satisfy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MustHaves {
    #[serde(rename = "propertyTypes")]
    pub property_types: Vec<PropertyType>,
    #[serde(rename = "carSpaceMin", default)]
    pub car_space_min: u8,
}

impl Default for MustHaves {
    fn default() -> Self {
        Self {
            property_types: PropertyType::ALL.to_vec(),
            car_space_min: 1,
        }
    }
}

/// A buyer's declared strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyerProfile {
    #[serde(default)]
    pub purpose: Purpose,
    #[serde(rename = "budgetMax")]
    pub budget_max: f64,
    #[serde(rename = "minBeds")]
    pub min_beds: u8,
    /// Preferred suburbs, matched case-insensitively. Empty means anywhere.
    #[serde(default)]
    pub suburbs: Vec<String>,
    #[serde(rename = "targetYield", default)]
    pub target_yield: Option<f64>,
    #[serde(rename = "targetGrowth", default)]
    pub target_growth: Option<f64>,
    /// Falls back to the configured scoring weights when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<Weights>,
    #[serde(rename = "mustHaves", default)]
    pub must_haves: MustHaves,
}

impl BuyerProfile {
    /// The buyer's own weights, or `fallback` if none were given
    pub fn weights_or(&self, fallback: Weights) -> Weights {
        self.weights.unwrap_or(fallback)
    }

    /// Whether `suburb` satisfies the preferred-suburb restriction
    pub fn accepts_suburb(&self, suburb: &str) -> bool {
        if self.suburbs.is_empty() {
            return true;
        }
        let wanted = suburb.trim().to_lowercase();
        self.suburbs
            .iter()
            .any(|s| s.trim().to_lowercase() == wanted)
    }
}

impl Default for BuyerProfile {
    fn default() -> Self {
        Self {
            purpose: Purpose::OwnOccupy,
            budget_max: 1_600_000.0,
            min_beds: 3,
            suburbs: vec!["Sandringham".to_string(), "Hampton".to_string()],
            target_yield: Some(0.045),
            target_growth: Some(0.035),
            weights: None,
            must_haves: MustHaves::default(),
        }
    }
}

/// A candidate property.
///
/// `travel_mins`, `traffic_parking_risk` and `risk_notes` are attached by the
/// enrichment stage before scoring; the ranker never writes to a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    #[serde(rename = "portal", default)]
    pub source: ListingSource,
    #[serde(default)]
    pub url: String,
    pub address: String,
    pub suburb: String,
    pub price: f64,
    pub beds: u8,
    #[serde(default)]
    pub baths: u8,
    #[serde(default)]
    pub cars: u8,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    #[serde(rename = "landSize", default)]
    pub land_size: Option<f64>,
    #[serde(rename = "internalArea", default)]
    pub internal_area: Option<f64>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(rename = "travelMinsToPOI", default)]
    pub travel_mins: Option<u32>,
    #[serde(rename = "bodyCorpPerYear", default)]
    pub body_corp_per_year: Option<f64>,
    #[serde(rename = "rentEstimatePerWeek", default)]
    pub rent_per_week: Option<f64>,
    #[serde(rename = "trafficParkingRisk", default)]
    pub traffic_parking_risk: Option<f64>,
    #[serde(rename = "riskNotes", default)]
    pub risk_notes: Option<Vec<String>>,
}

impl Listing {
    /// Coordinates, when both halves are present and finite
    pub fn coordinates(&self) -> Option<crate::core::distance::Coordinates> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => {
                Some(crate::core::distance::Coordinates::new(lat, lon))
            }
            _ => None,
        }
    }
}

/// A listing paired with its composite score and explanation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredListing {
    pub listing: Listing,
    /// Composite score, 0-100
    pub score: u8,
    pub reasons: Vec<String>,
}
