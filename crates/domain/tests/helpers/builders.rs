#![allow(dead_code)]
use bindzone_domain::{ParsedDnsRecord, RecordData, SupportedType};

pub struct ParsedDnsRecordBuilder {
    name: String,
    ttl: Option<u32>,
    record_type: SupportedType,
    value: String,
    data: RecordData,
}

impl ParsedDnsRecordBuilder {
    pub fn new() -> Self {
        Self {
            name: "@".to_string(),
            ttl: None,
            record_type: SupportedType::A,
            value: "192.0.2.1".to_string(),
            data: RecordData::content("192.0.2.1"),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn record_type(mut self, record_type: SupportedType) -> Self {
        self.record_type = record_type;
        self
    }

    pub fn value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn data(mut self, data: RecordData) -> Self {
        self.data = data;
        self
    }

    pub fn build(self) -> ParsedDnsRecord {
        ParsedDnsRecord::new(self.name, self.ttl, self.record_type, self.value, self.data)
    }
}

impl Default for ParsedDnsRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}
