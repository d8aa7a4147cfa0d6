//! Fixed-schema records produced from Space-Track query results.
//!
//! Field names serialize to the provider's upper-case keys so the same names
//! serve as JSON keys and CSV column headers. Every value is a string; a field
//! the provider omitted is an empty string, never `null`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One item as returned by the provider: an open-ended key/value map.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// Provenance tag written to every record's `_source` field.
pub const SOURCE_TAG: &str = "space_track";

/// Column order of [`ElementSetRecord`].
pub const ELEMENT_SET_FIELDS: &[&str] = &[
    "NORAD_CAT_ID",
    "OBJECT_NAME",
    "EPOCH",
    "MEAN_MOTION",
    "ECCENTRICITY",
    "INCLINATION",
    "RA_OF_ASC_NODE",
    "ARG_OF_PERICENTER",
    "MEAN_ANOMALY",
    "BSTAR",
    "_source",
    "_type",
];

/// Column order of [`ConjunctionRecord`].
pub const CONJUNCTION_FIELDS: &[&str] = &[
    "CDM_ID",
    "TCA",
    "PC",
    "PC_UNCERTAINTY",
    "MISS_DISTANCE",
    "MISS_DISTANCE_UNCERTAINTY",
    "OBJECT1_ID",
    "OBJECT1_NAME",
    "OBJECT2_ID",
    "OBJECT2_NAME",
    "RELATIVE_VELOCITY",
    "RELATIVE_VELOCITY_UNCERTAINTY",
    "_source",
    "_type",
];

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// The three datasets pulled on every extraction run.
///
/// Serializes as the `_type` tag carried by each record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Category {
    /// Latest element set of every object with an epoch in the last 7 days.
    #[serde(rename = "active_tle")]
    ActiveObjects,
    /// Latest element set of debris objects with an epoch in the last 30 days.
    #[serde(rename = "debris_tle")]
    Debris,
    /// Public conjunction data messages above the probability floor.
    #[serde(rename = "critical_cdm")]
    Conjunctions,
}

impl Category {
    /// Fetch order used by the pipeline.
    pub const ALL: [Self; 3] = [Self::ActiveObjects, Self::Debris, Self::Conjunctions];

    /// The `_type` tag value.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::ActiveObjects => "active_tle",
            Self::Debris => "debris_tle",
            Self::Conjunctions => "critical_cdm",
        }
    }

    /// Short human-readable name used in logs and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ActiveObjects => "active",
            Self::Debris => "debris",
            Self::Conjunctions => "conjunctions",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Orbital element set (two-line element data in field form).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ElementSetRecord {
    #[serde(rename = "NORAD_CAT_ID")]
    pub norad_cat_id: String,
    #[serde(rename = "OBJECT_NAME")]
    pub object_name: String,
    #[serde(rename = "EPOCH")]
    pub epoch: String,
    #[serde(rename = "MEAN_MOTION")]
    pub mean_motion: String,
    #[serde(rename = "ECCENTRICITY")]
    pub eccentricity: String,
    #[serde(rename = "INCLINATION")]
    pub inclination: String,
    #[serde(rename = "RA_OF_ASC_NODE")]
    pub ra_of_asc_node: String,
    #[serde(rename = "ARG_OF_PERICENTER")]
    pub arg_of_pericenter: String,
    #[serde(rename = "MEAN_ANOMALY")]
    pub mean_anomaly: String,
    #[serde(rename = "BSTAR")]
    pub bstar: String,
    #[serde(rename = "_source")]
    pub source: String,
    #[serde(rename = "_type")]
    pub category: Category,
}

/// Element set of an object from the active-objects query.
pub type ActiveObjectRecord = ElementSetRecord;

/// Element set of an object from the debris query.
pub type DebrisRecord = ElementSetRecord;

/// Conjunction data message: a predicted close approach between two objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConjunctionRecord {
    #[serde(rename = "CDM_ID")]
    pub cdm_id: String,
    /// Time of closest approach.
    #[serde(rename = "TCA")]
    pub tca: String,
    /// Probability of collision.
    #[serde(rename = "PC")]
    pub pc: String,
    #[serde(rename = "PC_UNCERTAINTY")]
    pub pc_uncertainty: String,
    #[serde(rename = "MISS_DISTANCE")]
    pub miss_distance: String,
    #[serde(rename = "MISS_DISTANCE_UNCERTAINTY")]
    pub miss_distance_uncertainty: String,
    #[serde(rename = "OBJECT1_ID")]
    pub object1_id: String,
    #[serde(rename = "OBJECT1_NAME")]
    pub object1_name: String,
    #[serde(rename = "OBJECT2_ID")]
    pub object2_id: String,
    #[serde(rename = "OBJECT2_NAME")]
    pub object2_name: String,
    #[serde(rename = "RELATIVE_VELOCITY")]
    pub relative_velocity: String,
    #[serde(rename = "RELATIVE_VELOCITY_UNCERTAINTY")]
    pub relative_velocity_uncertainty: String,
    #[serde(rename = "_source")]
    pub source: String,
    #[serde(rename = "_type")]
    pub category: Category,
}

impl ConjunctionRecord {
    /// Collision probability as a number. Blank or unparsable values are `0.0`.
    #[must_use]
    pub fn probability(&self) -> f64 {
        self.pc.trim().parse::<f64>().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn keys_of(value: &serde_json::Value) -> Vec<String> {
        value
            .as_object()
            .expect("record serializes to an object")
            .keys()
            .cloned()
            .collect()
    }

    #[test]
    fn category_serializes_as_type_tag() {
        for category in Category::ALL {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, serde_json::Value::String(category.tag().to_string()));
        }
    }

    #[test]
    fn category_display_is_short_name() {
        assert_eq!(Category::Debris.to_string(), "debris");
        assert_eq!(Category::ActiveObjects.to_string(), "active");
        assert_eq!(Category::Conjunctions.to_string(), "conjunctions");
    }

    #[test]
    fn element_set_keys_match_column_list() {
        let record = crate::filter::active_object(&RawRecord::new());
        let mut keys = keys_of(&serde_json::to_value(&record).unwrap());
        let mut expected: Vec<String> = ELEMENT_SET_FIELDS.iter().map(ToString::to_string).collect();
        keys.sort();
        expected.sort();
        assert_eq!(keys, expected);
    }

    #[test]
    fn conjunction_keys_match_column_list() {
        let record = crate::filter::conjunction(&RawRecord::new());
        let mut keys = keys_of(&serde_json::to_value(&record).unwrap());
        let mut expected: Vec<String> = CONJUNCTION_FIELDS.iter().map(ToString::to_string).collect();
        keys.sort();
        expected.sort();
        assert_eq!(keys, expected);
    }

    #[test]
    fn probability_parses_or_defaults_to_zero() {
        let mut record = crate::filter::conjunction(&RawRecord::new());
        assert!(record.probability().abs() < f64::EPSILON);

        record.pc = " 0.0125 ".into();
        assert!((record.probability() - 0.0125).abs() < f64::EPSILON);

        record.pc = "n/a".into();
        assert!(record.probability().abs() < f64::EPSILON);
    }
}
