//! Shared record fixtures for unit and property tests.

use crate::record::FacilityRecord;

/// One record with no notes.
pub fn record(
    name: &str,
    sector: &str,
    hub: &str,
    city: &str,
    county: &str,
    mw: f64,
) -> FacilityRecord {
    FacilityRecord {
        name: name.to_string(),
        sector: sector.to_string(),
        hub: hub.to_string(),
        city: city.to_string(),
        county: county.to_string(),
        mw,
        notes: None,
    }
}

/// The two-row fixture from the engine contract scenarios.
pub fn alpha_beta() -> Vec<FacilityRecord> {
    vec![
        record("Alpha", "Crypto", "North", "Waco", "McLennan", 300.0),
        record("Beta", "Steel", "South", "Houston", "Harris", 150.0),
    ]
}

/// A small mixed fleet: duplicate mw values, a hub outside the fixed display
/// list, and one noted record.
pub fn sample_fleet() -> Vec<FacilityRecord> {
    let mut fleet = vec![
        record("Alpha", "Crypto", "North", "Waco", "McLennan", 300.0),
        record("Beta", "Steel", "South", "Houston", "Harris", 150.0),
        record("Gamma", "Data Center", "North", "Dallas", "Dallas", 150.0),
        record("Delta", "Retail", "West", "Odessa", "Ector", 25.0),
        record("Epsilon", "LNG", "Houston", "Freeport", "Brazoria", 420.0),
        record("Zeta", "Hospital", "Panhandle", "Amarillo", "Potter", 60.0),
        record("Eta", "Steel", "South", "Laredo", "Webb", 150.0),
    ];
    fleet[3].notes = Some("behind-the-meter solar".to_string());

    fleet
}
