use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Record types the zone importer turns into records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SupportedType {
    A,
    AAAA,
    ALIAS,
    CNAME,
    MX,
    TXT,
    NS,
    PTR,
    SRV,
    CAA,
    SOA,
    TLSA,
    HTTPS,
    SVCB,
}

impl SupportedType {
    pub const ALL: [SupportedType; 14] = [
        SupportedType::A,
        SupportedType::AAAA,
        SupportedType::ALIAS,
        SupportedType::CNAME,
        SupportedType::MX,
        SupportedType::TXT,
        SupportedType::NS,
        SupportedType::PTR,
        SupportedType::SRV,
        SupportedType::CAA,
        SupportedType::SOA,
        SupportedType::TLSA,
        SupportedType::HTTPS,
        SupportedType::SVCB,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SupportedType::A => "A",
            SupportedType::AAAA => "AAAA",
            SupportedType::ALIAS => "ALIAS",
            SupportedType::CNAME => "CNAME",
            SupportedType::MX => "MX",
            SupportedType::TXT => "TXT",
            SupportedType::NS => "NS",
            SupportedType::PTR => "PTR",
            SupportedType::SRV => "SRV",
            SupportedType::CAA => "CAA",
            SupportedType::SOA => "SOA",
            SupportedType::TLSA => "TLSA",
            SupportedType::HTTPS => "HTTPS",
            SupportedType::SVCB => "SVCB",
        }
    }

    /// Types whose RDATA is a single host name.
    pub fn is_name_target(&self) -> bool {
        matches!(
            self,
            SupportedType::CNAME | SupportedType::NS | SupportedType::PTR | SupportedType::ALIAS
        )
    }
}

impl fmt::Display for SupportedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SupportedType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        SupportedType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == upper)
            .ok_or_else(|| format!("Unsupported record type: {}", s))
    }
}

/// Record types that are recognized in zone files but deliberately not
/// imported. Each distinct one seen yields a single warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarnedType {
    SPF,
    DS,
    DNSKEY,
    RRSIG,
    NSEC,
    NSEC3,
    DNAME,
}

impl WarnedType {
    pub const ALL: [WarnedType; 7] = [
        WarnedType::SPF,
        WarnedType::DS,
        WarnedType::DNSKEY,
        WarnedType::RRSIG,
        WarnedType::NSEC,
        WarnedType::NSEC3,
        WarnedType::DNAME,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WarnedType::SPF => "SPF",
            WarnedType::DS => "DS",
            WarnedType::DNSKEY => "DNSKEY",
            WarnedType::RRSIG => "RRSIG",
            WarnedType::NSEC => "NSEC",
            WarnedType::NSEC3 => "NSEC3",
            WarnedType::DNAME => "DNAME",
        }
    }

    pub fn warning_message(&self) -> String {
        match self {
            WarnedType::SPF => "SPF records should be TXT records".to_string(),
            other => format!("{} records are not supported", other.as_str()),
        }
    }
}

impl fmt::Display for WarnedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WarnedType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        WarnedType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == upper)
            .ok_or_else(|| format!("Not a warned record type: {}", s))
    }
}
