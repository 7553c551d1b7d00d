//! Human-readable `value` strings for imported records.
//!
//! Works from the raw RDATA rather than the decoded fields, so the display
//! form can differ from `data` (SOA keeps the RFC name `minimum` here).

use bindzone_domain::{DomainError, SupportedType, SvcParams};
use fancy_regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use super::text::{
    compiled, parse_int, regex_error, split_fields_quoted, split_param, strip_trailing_dot,
    txt_content, Pattern,
};

static CAA_VALUE: Pattern = LazyLock::new(|| {
    Regex::new(r#"^(\d+)\s+(\S+)\s+(?:"([^"]*)"|(\S+))$"#).map_err(|e| e.to_string())
});

#[derive(Serialize)]
struct SoaTimers {
    serial: u32,
    refresh: u32,
    retry: u32,
    expire: u32,
    minimum: u32,
}

pub fn format_value(record_type: SupportedType, rdata: &str) -> Result<String, DomainError> {
    let value = match record_type {
        SupportedType::A | SupportedType::AAAA => rdata.trim().to_string(),
        t if t.is_name_target() => strip_trailing_dot(rdata),
        SupportedType::MX => format_mx(rdata),
        SupportedType::TXT => txt_content(rdata)?,
        SupportedType::SOA => format_soa(rdata)?,
        SupportedType::SRV => format_srv(rdata),
        SupportedType::CAA => format_caa(rdata)?,
        SupportedType::TLSA => format_tlsa(rdata),
        SupportedType::HTTPS | SupportedType::SVCB => format_svcb(rdata),
        _ => rdata.trim().to_string(),
    };
    Ok(value)
}

fn field(parts: &[&str], idx: usize) -> String {
    parts.get(idx).map(|p| p.to_string()).unwrap_or_default()
}

fn number(parts: &[&str], idx: usize) -> u32 {
    parts.get(idx).map(|p| parse_int(p)).unwrap_or_default()
}

fn format_mx(rdata: &str) -> String {
    let parts: Vec<&str> = rdata.split_whitespace().collect();
    let preference: u16 = parts.first().map(|p| parse_int(p)).unwrap_or_default();
    let exchange = parts
        .get(1)
        .map(|p| strip_trailing_dot(p))
        .unwrap_or_default();
    format!("{}|{}", preference, exchange)
}

fn format_soa(rdata: &str) -> Result<String, DomainError> {
    let parts: Vec<&str> = rdata.split_whitespace().collect();
    let timers = SoaTimers {
        serial: number(&parts, 2),
        refresh: number(&parts, 3),
        retry: number(&parts, 4),
        expire: number(&parts, 5),
        minimum: number(&parts, 6),
    };
    serde_json::to_string(&timers).map_err(|e| DomainError::ZoneParse(e.to_string()))
}

fn format_srv(rdata: &str) -> String {
    let parts: Vec<&str> = rdata.split_whitespace().collect();
    format!(
        "{} {} {} {}",
        number(&parts, 0),
        number(&parts, 1),
        number(&parts, 2),
        parts
            .get(3)
            .map(|p| strip_trailing_dot(p))
            .unwrap_or_default()
    )
}

fn format_caa(rdata: &str) -> Result<String, DomainError> {
    let rdata = rdata.trim();
    if let Some(caps) = compiled(&CAA_VALUE)?
        .captures(rdata)
        .map_err(regex_error)?
    {
        let group = |idx: usize| caps.get(idx).map(|m| m.as_str()).unwrap_or_default();
        let value = caps.get(3).or(caps.get(4)).map(|m| m.as_str());
        return Ok(format!(
            "{} {} {}",
            parse_int::<u8>(group(1)),
            group(2),
            value.unwrap_or_default()
        ));
    }

    let parts: Vec<&str> = rdata.split_whitespace().collect();
    let rest = parts.get(2..).map(|p| p.join(" ")).unwrap_or_default();
    Ok(format!(
        "{} {} {}",
        parts.first().map(|p| parse_int::<u8>(p)).unwrap_or_default(),
        field(&parts, 1),
        rest.trim_matches('"')
    ))
}

fn format_tlsa(rdata: &str) -> String {
    let parts: Vec<&str> = rdata.split_whitespace().collect();
    format!(
        "{} {} {} {}",
        number(&parts, 0),
        number(&parts, 1),
        number(&parts, 2),
        parts.get(3..).map(|p| p.concat()).unwrap_or_default()
    )
}

/// `priority target key="value" ...`; a root target shows as `.`.
fn format_svcb(rdata: &str) -> String {
    let parts = split_fields_quoted(rdata);
    let priority: u16 = parts.first().map(|p| parse_int(p)).unwrap_or_default();
    let target = match parts.get(1) {
        Some(&".") => ".".to_string(),
        Some(target) => strip_trailing_dot(target),
        None => return priority.to_string(),
    };

    let mut params = SvcParams::new();
    for param in parts.iter().skip(2) {
        let (key, value) = split_param(param);
        params.insert(key, value);
    }

    let mut out = format!("{} {}", priority, target);
    for (key, value) in params.iter() {
        if value.is_empty() {
            out.push_str(&format!(" {}", key));
        } else {
            out.push_str(&format!(" {}=\"{}\"", key, value));
        }
    }
    out
}
