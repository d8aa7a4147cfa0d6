//! Field filter: raw provider records to fixed-schema records.
//!
//! Only the essential fields are kept. A field the provider left out (or sent
//! as `null`) becomes an empty string, so every output record has every
//! column. Non-string scalars keep their JSON text (`0.5`, `true`).

use serde_json::Value;

use crate::records::{
    ActiveObjectRecord, Category, ConjunctionRecord, DebrisRecord, ElementSetRecord, RawRecord,
    SOURCE_TAG,
};

/// Filter a record from the active-objects query.
#[must_use]
pub fn active_object(raw: &RawRecord) -> ActiveObjectRecord {
    element_set(raw, Category::ActiveObjects)
}

/// Filter a record from the debris query.
#[must_use]
pub fn debris(raw: &RawRecord) -> DebrisRecord {
    element_set(raw, Category::Debris)
}

/// Filter a record from the conjunction-event query.
#[must_use]
pub fn conjunction(raw: &RawRecord) -> ConjunctionRecord {
    ConjunctionRecord {
        cdm_id: field(raw, "CDM_ID"),
        tca: field(raw, "TCA"),
        pc: field(raw, "PC"),
        pc_uncertainty: field(raw, "PC_UNCERTAINTY"),
        miss_distance: field(raw, "MISS_DISTANCE"),
        miss_distance_uncertainty: field(raw, "MISS_DISTANCE_UNCERTAINTY"),
        object1_id: field(raw, "OBJECT1_ID"),
        object1_name: field(raw, "OBJECT1_NAME"),
        object2_id: field(raw, "OBJECT2_ID"),
        object2_name: field(raw, "OBJECT2_NAME"),
        relative_velocity: field(raw, "RELATIVE_VELOCITY"),
        relative_velocity_uncertainty: field(raw, "RELATIVE_VELOCITY_UNCERTAINTY"),
        source: SOURCE_TAG.to_string(),
        category: Category::Conjunctions,
    }
}

fn element_set(raw: &RawRecord, category: Category) -> ElementSetRecord {
    ElementSetRecord {
        norad_cat_id: field(raw, "NORAD_CAT_ID"),
        object_name: field(raw, "OBJECT_NAME"),
        epoch: field(raw, "EPOCH"),
        mean_motion: field(raw, "MEAN_MOTION"),
        eccentricity: field(raw, "ECCENTRICITY"),
        inclination: field(raw, "INCLINATION"),
        ra_of_asc_node: field(raw, "RA_OF_ASC_NODE"),
        arg_of_pericenter: field(raw, "ARG_OF_PERICENTER"),
        mean_anomaly: field(raw, "MEAN_ANOMALY"),
        bstar: field(raw, "BSTAR"),
        source: SOURCE_TAG.to_string(),
        category,
    }
}

fn field(raw: &RawRecord, key: &str) -> String {
    match raw.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
