use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Structured RDATA decoded from a zone-file line.
///
/// Serializes to a flat field map per record type, e.g. MX becomes
/// `{"preference": 10, "exchange": "mail.example.com"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RecordData {
    /// A, AAAA, CNAME, NS, PTR, ALIAS, TXT and anything undecoded.
    Content { content: String },

    Mx {
        preference: u16,
        exchange: String,
    },

    /// The last field is keyed `ttl`, not `minimum`.
    Soa {
        mname: String,
        rname: String,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        ttl: u32,
    },

    Srv {
        priority: u16,
        weight: u16,
        port: u16,
        target: String,
    },

    Caa {
        flag: u8,
        tag: String,
        value: String,
    },

    Tlsa {
        usage: u8,
        selector: u8,
        #[serde(rename = "matchingType")]
        matching_type: u8,
        #[serde(rename = "certData")]
        cert_data: String,
    },

    /// HTTPS and SVCB share one shape.
    Svcb {
        priority: u16,
        target: String,
        params: SvcParams,
    },
}

impl RecordData {
    pub fn content(value: impl Into<String>) -> Self {
        RecordData::Content {
            content: value.into(),
        }
    }
}

/// SvcParams of an HTTPS/SVCB record, in the order they first appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SvcParams {
    entries: Vec<(String, String)>,
}

impl SvcParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repeated key keeps its original position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for SvcParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
