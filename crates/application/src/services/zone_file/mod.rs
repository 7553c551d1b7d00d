//! BIND master-file importer.
//!
//! `parse_bind_zone_file` runs the whole pipeline: preprocessing, per-line
//! tokenizing with owner-name inheritance, type classification, RDATA
//! decoding and display formatting. It is a pure function of its input and
//! never fails; problems are reported through the result's `errors` and
//! `warnings`.

pub mod display;
pub mod preprocessor;
pub mod rdata;
pub mod text;
pub mod tokenizer;

use bindzone_domain::{
    BindParseResult, DomainError, ParsedDnsRecord, SupportedType, WarnedType, NO_RECORDS_ERROR,
};
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

pub use display::format_value;
pub use preprocessor::preprocess;
pub use rdata::decode_rdata;
pub use tokenizer::{tokenize, Token};

pub fn parse_bind_zone_file(content: &str) -> BindParseResult {
    match panic::catch_unwind(AssertUnwindSafe(|| try_parse(content))) {
        Ok(Ok(result)) => result,
        Ok(Err(e)) => {
            warn!(error = %e, "Zone file import aborted");
            BindParseResult::failure(format!("Failed to parse zone file: {}", e))
        }
        Err(payload) => {
            let detail = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unexpected internal error".to_string());
            warn!(error = %detail, "Zone file import panicked");
            BindParseResult::failure(format!("Failed to parse zone file: {}", detail))
        }
    }
}

/// `@` for the apex or an empty owner, otherwise the owner minus one
/// trailing dot.
pub fn normalize_name(name: &str) -> String {
    match name.trim() {
        "" | "@" => "@".to_string(),
        other => other.strip_suffix('.').unwrap_or(other).to_string(),
    }
}

fn try_parse(content: &str) -> Result<BindParseResult, DomainError> {
    let preprocessed = preprocess(content)?;
    if preprocessed.lines.is_empty() {
        return Ok(BindParseResult::empty_input());
    }

    // $ORIGIN is applied file-wide: the last one seen seeds the owner name.
    let mut previous_name = preprocessed
        .origin
        .clone()
        .unwrap_or_else(|| "@".to_string());
    let mut records = Vec::new();
    let mut warned: Vec<WarnedType> = Vec::new();

    for line in &preprocessed.lines {
        let Some(token) = tokenize(line) else {
            debug!(line = %line, "Skipping unparseable line");
            continue;
        };
        if let Some(name) = &token.name {
            previous_name = name.clone();
        }

        if let Ok(warned_type) = token.record_type.parse::<WarnedType>() {
            if !warned.contains(&warned_type) {
                warned.push(warned_type);
            }
            continue;
        }

        let Ok(record_type) = token.record_type.parse::<SupportedType>() else {
            debug!(record_type = %token.record_type, "Dropping unsupported record type");
            continue;
        };

        let data = decode_rdata(record_type.as_str(), &token.rdata)?;
        let value = format_value(record_type, &token.rdata)?;
        records.push(ParsedDnsRecord::new(
            normalize_name(&previous_name),
            token.ttl.or(preprocessed.default_ttl),
            record_type,
            value,
            data,
        ));
    }

    let warnings = warned.iter().map(WarnedType::warning_message).collect();
    let errors = if records.is_empty() {
        vec![NO_RECORDS_ERROR.to_string()]
    } else {
        Vec::new()
    };

    Ok(BindParseResult {
        records,
        errors,
        warnings,
    })
}
