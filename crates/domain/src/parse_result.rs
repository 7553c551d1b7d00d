use crate::dns_record::{ParsedDnsRecord, SupportedType};
use serde::Serialize;

pub const NO_RECORDS_ERROR: &str = "No valid DNS records found in the file";

/// Outcome of importing a zone file. Always produced, never an `Err`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BindParseResult {
    pub records: Vec<ParsedDnsRecord>,

    /// Fatal: the import produced nothing usable.
    pub errors: Vec<String>,

    /// Non-fatal: record types that were recognized and left out.
    pub warnings: Vec<String>,
}

impl BindParseResult {
    pub fn empty_input() -> Self {
        Self::failure(NO_RECORDS_ERROR)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            errors: vec![message.into()],
            warnings: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record counts per type, in canonical type order, zero counts omitted.
    pub fn count_by_type(&self) -> Vec<(SupportedType, usize)> {
        SupportedType::ALL
            .iter()
            .filter_map(|t| {
                let count = self.records.iter().filter(|r| r.record_type == *t).count();
                (count > 0).then_some((*t, count))
            })
            .collect()
    }
}

/// Logical lines and directives extracted from raw zone-file text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreprocessResult {
    pub lines: Vec<String>,

    /// Last `$ORIGIN` seen, trailing dot stripped.
    pub origin: Option<String>,

    /// Last `$TTL` seen.
    pub default_ttl: Option<u32>,
}
