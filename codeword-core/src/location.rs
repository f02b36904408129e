use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One weighted entry in a container's spawn list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDistribution {
    pub tpl: String,
    #[serde(rename = "relativeProbability", with = "weight")]
    pub relative_probability: f64,
}

impl ItemDistribution {
    pub fn new(tpl: impl Into<String>, relative_probability: f64) -> Self {
        Self {
            tpl: tpl.into(),
            relative_probability,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCountDistribution {
    pub count: u32,
    #[serde(rename = "relativeProbability", with = "weight")]
    pub relative_probability: f64,
}

/// Loot details for one container type on one map.
///
/// Keys the host writes that we do not interpret are kept in `extra` so a
/// rewritten `staticLoot.json` carries them through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticLootDetails {
    #[serde(rename = "itemcountDistribution", default)]
    pub item_count_distribution: Vec<ItemCountDistribution>,
    #[serde(rename = "itemDistribution", default)]
    pub item_distribution: Vec<ItemDistribution>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationBase {
    #[serde(rename = "Id", default)]
    pub id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub type StaticLoot = BTreeMap<String, StaticLootDetails>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Location {
    pub base: LocationBase,
    pub static_loot: StaticLoot,
}

impl Location {
    pub fn new(display_id: impl Into<String>) -> Self {
        Self {
            base: LocationBase {
                id: display_id.into(),
                extra: Map::new(),
            },
            static_loot: StaticLoot::new(),
        }
    }
}

/// Map key (e.g. `bigmap`) to location record.
pub type LocationTable = BTreeMap<String, Location>;

/// The slice of the host database the injector is handed after load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatabaseTables {
    pub locations: LocationTable,
}

// Weights are plain JSON numbers on disk; whole values go back out as
// integers so an untouched file does not grow `.0` suffixes.
mod weight {
    use serde::{Deserialize, Deserializer, Serializer};

    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT {
            serializer.serialize_i64(*value as i64)
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        f64::deserialize(deserializer)
    }
}
