//! Data model for extracted SEA topology
//!
//! One `HostConfig` per input report, owning everything parsed out of it.
//! The serialized shape is the contract consumed by the diagram renderer
//! and any downstream tooling:
//!
//! ```text
//! {
//!   "hostname": "vios1a",
//!   "sea_sections": [
//!     {
//!       "sea_name": "ent5",
//!       "properties": { "Control Channel": "ent6" },
//!       "etherchannel": { "adapters": ["ent3"] },
//!       "real_adapters": [ { "adapter_name": "ent0", "hardware_path": "U78CB..." } ],
//!       "virtual_adapters": []
//!     }
//!   ]
//! }
//! ```
//!
//! A missing hostname serializes as `null`, a missing etherchannel as `null`,
//! and empty adapter lists as `[]`, never `null`.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Complete configuration extracted from one report file.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HostConfig {
    /// Host identifier from the `VIOS hostname:` marker, if present.
    pub hostname: Option<String>,
    /// SEA blocks in order of appearance in the source file.
    pub sea_sections: Vec<SeaRecord>,
}

/// One parsed `SEA :` block.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SeaRecord {
    pub sea_name: String,
    /// `key: value` lines from the block header, in source order.
    pub properties: PropertyMap,
    pub etherchannel: Option<EtherchannelGroup>,
    pub real_adapters: Vec<AdapterRef>,
    pub virtual_adapters: Vec<AdapterRef>,
}

/// Link-aggregation group backing a SEA.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EtherchannelGroup {
    /// Participating adapter names, in listing order.
    pub adapters: Vec<String>,
}

/// Reference to a real or virtual adapter.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AdapterRef {
    pub adapter_name: String,
    pub hardware_path: String,
}

/// String-to-string map that preserves insertion order.
///
/// Property lines in a SEA block carry no ordering key other than their
/// position in the report, so a hash map would scramble them on output.
/// Duplicate keys keep their original position and take the latest value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyMap {
    entries: Vec<(String, String)>,
}

impl PropertyMap {
    pub fn new() -> Self {
        PropertyMap {
            entries: Vec::new(),
        }
    }

    /// Insert a key/value pair. An existing key is updated in place so the
    /// map keeps the position of the first insertion.
    pub fn insert(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut map = PropertyMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

// The persisted shape is a plain JSON object, so the map serializes through
// serde's map machinery rather than exposing its backing vector.

impl Serialize for PropertyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PropertyMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PropertyMapVisitor;

        impl<'de> Visitor<'de> for PropertyMapVisitor {
            type Value = PropertyMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of string properties")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = PropertyMap::new();
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    map.insert(&key, &value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(PropertyMapVisitor)
    }
}
