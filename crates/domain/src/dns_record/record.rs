use super::{RecordData, SupportedType};
use serde::Serialize;

/// One record produced by the zone-file importer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedDnsRecord {
    /// `@` for the apex, otherwise the owner without its trailing dot.
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,

    #[serde(rename = "type")]
    pub record_type: SupportedType,

    /// Human-readable rendering, built independently of `data`.
    pub value: String,

    pub data: RecordData,
}

impl ParsedDnsRecord {
    pub fn new(
        name: String,
        ttl: Option<u32>,
        record_type: SupportedType,
        value: String,
        data: RecordData,
    ) -> Self {
        Self {
            name,
            ttl,
            record_type,
            value,
            data,
        }
    }

    pub fn is_apex(&self) -> bool {
        self.name == "@"
    }
}
