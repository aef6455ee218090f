use crate::models::PropertyType;

/// Growth rate used for suburbs missing from the table
pub const DEFAULT_CAGR: f64 = 0.03;

/// Projected annual growth per suburb: (suburb, house, unit)
const SUBURB_GROWTH_TABLE: &[(&str, f64, f64)] = &[
    ("sandringham", 0.038, 0.032),
    ("hampton", 0.040, 0.033),
];

/// Projected compound annual growth for a suburb and property type
///
/// Townhouses track the house rate. Never fails; unknown suburbs get
/// [`DEFAULT_CAGR`].
pub fn projected_cagr(suburb: &str, property_type: PropertyType) -> f64 {
    let key = suburb.trim().to_lowercase();

    SUBURB_GROWTH_TABLE
        .iter()
        .find(|(name, _, _)| *name == key)
        .map(|&(_, house, unit)| match property_type {
            PropertyType::Unit => unit,
            PropertyType::House | PropertyType::Townhouse => house,
        })
        .unwrap_or(DEFAULT_CAGR)
}
