//! Module: record
//! Responsibility: facility record schema and per-record derived load metrics.
//! Does not own: collection storage, filtering, ordering, or aggregation.
//! Boundary: serde DTO decoded from the external JSON record source.

use serde::{Deserialize, Serialize};

/// Hours in the annualization window for estimated-energy derivations.
const HOURS_PER_YEAR: f64 = 8760.0;

/// Sector tags carrying a high-utilization industrial duty cycle.
const INDUSTRIAL_TAGS: [&str; 6] = ["steel", "manufact", "refin", "chem", "lng", "industrial"];

/// Sector tags for always-on institutional loads.
const INSTITUTIONAL_TAGS: [&str; 3] = ["health", "hosp", "prison"];

///
/// FacilityRecord
///
/// One physical facility row. Immutable once loaded; the engine only derives
/// sequences of references over records and never mutates them.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FacilityRecord {
    /// Display identity; not guaranteed unique.
    pub name: String,
    /// Industry sector label, free-form. Spelled `type` at the JSON boundary.
    #[serde(rename = "type")]
    pub sector: String,
    /// Grid hub label, free-form; data may carry values outside the fixed
    /// display list in [`crate::ERCOT_HUBS`].
    pub hub: String,
    pub city: String,
    pub county: String,
    /// Peak load magnitude in MW. Non-negative expected, not validated.
    pub mw: f64,
    /// Optional free text. Absence is modeled, never conflated with `""`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl FacilityRecord {
    /// Duty-cycle load factor inferred from the sector label.
    ///
    /// Matching is a case-insensitive substring check so free-form labels
    /// like "Data Center" or "Chemical Plant" land in the right bucket.
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        let sector = self.sector.to_lowercase();

        if sector.contains("crypto") || sector.contains("data") {
            return 0.90;
        }
        if INDUSTRIAL_TAGS.iter().any(|tag| sector.contains(tag)) {
            return 0.80;
        }
        if INSTITUTIONAL_TAGS.iter().any(|tag| sector.contains(tag)) {
            return 0.65;
        }

        // Retail, education, and enterprise loads are peaky but
        // low-utilization.
        0.40
    }

    /// Estimated annual energy in MWh: peak MW annualized by the load factor.
    #[must_use]
    pub fn est_annual_mwh(&self) -> f64 {
        self.mw * HOURS_PER_YEAR * self.load_factor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::record;

    #[test]
    fn load_factor_buckets_by_sector_tag() {
        let cases = [
            ("Crypto Mining", 0.90),
            ("Data Center", 0.90),
            ("Steel Mill", 0.80),
            ("Chemical Plant", 0.80),
            ("LNG Terminal", 0.80),
            ("Hospital Campus", 0.65),
            ("State Prison", 0.65),
            ("Retail", 0.40),
            ("Enterprise", 0.40),
        ];

        for (sector, expected) in cases {
            let row = record("X", sector, "North", "Waco", "McLennan", 100.0);

            assert!(
                (row.load_factor() - expected).abs() < f64::EPSILON,
                "sector {sector:?} expected load factor {expected}"
            );
        }
    }

    #[test]
    fn est_annual_mwh_annualizes_peak_load() {
        let row = record("X", "Crypto", "North", "Waco", "McLennan", 100.0);

        // 100 MW * 8760 h * 0.90
        assert!((row.est_annual_mwh() - 788_400.0).abs() < 1e-6);
    }

    #[test]
    fn decode_renames_type_and_models_absent_notes() {
        let json = r#"{
            "name": "Alpha",
            "type": "Crypto",
            "hub": "North",
            "city": "Waco",
            "county": "McLennan",
            "mw": 300
        }"#;

        let row: FacilityRecord = serde_json::from_str(json).unwrap();

        assert_eq!(row.sector, "Crypto");
        assert_eq!(row.notes, None);
        assert!((row.mw - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn encode_skips_absent_notes_and_restores_type_spelling() {
        let row = record("Alpha", "Crypto", "North", "Waco", "McLennan", 300.0);
        let json = serde_json::to_value(&row).unwrap();

        assert_eq!(json["type"], "Crypto");
        assert!(json.get("sector").is_none());
        assert!(json.get("notes").is_none());
    }
}
