mod record;
mod record_data;
mod record_type;

pub use record::ParsedDnsRecord;
pub use record_data::{RecordData, SvcParams};
pub use record_type::{SupportedType, WarnedType};
