mod builders;

pub use builders::ParsedDnsRecordBuilder;
