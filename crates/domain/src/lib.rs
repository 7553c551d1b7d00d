//! Domain types for the BIND zone-file importer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod parse_result;

pub use config::{CliOverrides, Config, ConfigError, ImportConfig, LogFormat, LoggingConfig};
pub use dns_record::{ParsedDnsRecord, RecordData, SupportedType, SvcParams, WarnedType};
pub use errors::DomainError;
pub use parse_result::{BindParseResult, PreprocessResult, NO_RECORDS_ERROR};
