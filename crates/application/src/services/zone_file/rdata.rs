//! One decoder per record type, RDATA text in, structured fields out.
//!
//! Decoding is best effort: numeric fields that fail to parse become `0`
//! and missing fields become empty strings.

use bindzone_domain::{DomainError, RecordData, SupportedType, SvcParams};
use fancy_regex::Regex;
use std::sync::LazyLock;

use super::text::{
    compiled, ensure_trailing_dot, parse_int, regex_error, split_fields_quoted, split_param,
    strip_trailing_dot, txt_content, Pattern,
};

static CAA_RDATA: Pattern = LazyLock::new(|| {
    Regex::new(r#"^(\d+)\s+(\S+)\s+(?:"([^"]*)"|(\S+))$"#).map_err(|e| e.to_string())
});

/// Decode by type mnemonic. Anything without a dedicated decoder keeps its
/// raw text as `content`.
pub fn decode_rdata(record_type: &str, rdata: &str) -> Result<RecordData, DomainError> {
    let Ok(rtype) = record_type.parse::<SupportedType>() else {
        return Ok(RecordData::content(rdata.trim()));
    };
    match rtype {
        SupportedType::A | SupportedType::AAAA => Ok(decode_address(rdata)),
        SupportedType::CNAME | SupportedType::NS | SupportedType::PTR => Ok(decode_target(rdata)),
        SupportedType::ALIAS => Ok(decode_target(rdata)),
        SupportedType::MX => Ok(decode_mx(rdata)),
        SupportedType::TXT => decode_txt(rdata),
        SupportedType::SOA => Ok(decode_soa(rdata)),
        SupportedType::SRV => Ok(decode_srv(rdata)),
        SupportedType::CAA => decode_caa(rdata),
        SupportedType::TLSA => Ok(decode_tlsa(rdata)),
        SupportedType::HTTPS => Ok(decode_https(rdata)),
        SupportedType::SVCB => Ok(decode_svcb(rdata)),
    }
}

/// A and AAAA. The address is not validated.
pub fn decode_address(rdata: &str) -> RecordData {
    RecordData::content(rdata.trim())
}

/// CNAME, NS, PTR and ALIAS.
pub fn decode_target(rdata: &str) -> RecordData {
    RecordData::content(strip_trailing_dot(rdata))
}

pub fn decode_mx(rdata: &str) -> RecordData {
    let mut parts = rdata.split_whitespace();
    RecordData::Mx {
        preference: parts.next().map(parse_int).unwrap_or_default(),
        exchange: parts.next().map(strip_trailing_dot).unwrap_or_default(),
    }
}

pub fn decode_txt(rdata: &str) -> Result<RecordData, DomainError> {
    Ok(RecordData::content(txt_content(rdata)?))
}

/// Both names keep a trailing dot. The final field is exposed as `ttl`.
pub fn decode_soa(rdata: &str) -> RecordData {
    let parts: Vec<&str> = rdata.split_whitespace().collect();
    let name = |idx: usize| parts.get(idx).map(|p| ensure_trailing_dot(p)).unwrap_or_default();
    let number = |idx: usize| parts.get(idx).map(|p| parse_int(p)).unwrap_or_default();

    RecordData::Soa {
        mname: name(0),
        rname: name(1),
        serial: number(2),
        refresh: number(3),
        retry: number(4),
        expire: number(5),
        ttl: number(6),
    }
}

pub fn decode_srv(rdata: &str) -> RecordData {
    let parts: Vec<&str> = rdata.split_whitespace().collect();
    let number = |idx: usize| parts.get(idx).map(|p| parse_int(p)).unwrap_or_default();

    RecordData::Srv {
        priority: number(0),
        weight: number(1),
        port: number(2),
        target: parts
            .get(3)
            .map(|p| strip_trailing_dot(p))
            .unwrap_or_default(),
    }
}

pub fn decode_caa(rdata: &str) -> Result<RecordData, DomainError> {
    let rdata = rdata.trim();
    if let Some(caps) = compiled(&CAA_RDATA)?
        .captures(rdata)
        .map_err(regex_error)?
    {
        let group = |idx: usize| caps.get(idx).map(|m| m.as_str());
        return Ok(RecordData::Caa {
            flag: group(1).map(parse_int).unwrap_or_default(),
            tag: group(2).unwrap_or_default().to_string(),
            value: group(3).or(group(4)).unwrap_or_default().to_string(),
        });
    }

    let parts: Vec<&str> = rdata.split_whitespace().collect();
    let rest = parts.get(2..).map(|p| p.join(" ")).unwrap_or_default();
    Ok(RecordData::Caa {
        flag: parts.first().map(|p| parse_int(p)).unwrap_or_default(),
        tag: parts.get(1).map(|p| p.to_string()).unwrap_or_default(),
        value: rest.trim_matches('"').to_string(),
    })
}

/// Certificate data may be split across fields; the pieces are joined
/// without a separator.
pub fn decode_tlsa(rdata: &str) -> RecordData {
    let parts: Vec<&str> = rdata.split_whitespace().collect();
    let number = |idx: usize| parts.get(idx).map(|p| parse_int(p)).unwrap_or_default();

    RecordData::Tlsa {
        usage: number(0),
        selector: number(1),
        matching_type: number(2),
        cert_data: parts.get(3..).map(|p| p.concat()).unwrap_or_default(),
    }
}

pub fn decode_https(rdata: &str) -> RecordData {
    let parts = split_fields_quoted(rdata);
    let target = match parts.get(1) {
        Some(&".") | None => String::new(),
        Some(target) => strip_trailing_dot(target),
    };

    let mut params = SvcParams::new();
    for field in parts.iter().skip(2) {
        let (key, value) = split_param(field);
        params.insert(key, value);
    }

    RecordData::Svcb {
        priority: parts.first().map(|p| parse_int(p)).unwrap_or_default(),
        target,
        params,
    }
}

/// SVCB has the same presentation format as HTTPS.
pub fn decode_svcb(rdata: &str) -> RecordData {
    decode_https(rdata)
}
