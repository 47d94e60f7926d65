use super::RecordType;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

/// What to do with an A/AAAA value that is not a valid address literal of the
/// right family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidAddressPolicy {
    /// Emit the record with the unspecified address (`0.0.0.0` / `::`).
    #[default]
    Unspecified,
    /// Drop the value.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    TXT(String),
    CNAME(String),
    PTR(String),
    NS(String),
}

impl RecordData {
    /// Builds the payload for one stored string value.
    ///
    /// Names are taken verbatim; no trailing-dot normalization happens here.
    /// Returns `None` only when an invalid address meets `InvalidAddressPolicy::Skip`.
    pub fn from_value(
        record_type: RecordType,
        value: &str,
        policy: InvalidAddressPolicy,
    ) -> Option<Self> {
        match record_type {
            RecordType::A => match value.parse::<IpAddr>() {
                Ok(IpAddr::V4(addr)) => Some(RecordData::A(addr)),
                Ok(IpAddr::V6(addr)) => match addr.to_ipv4_mapped() {
                    Some(v4) => Some(RecordData::A(v4)),
                    None => invalid(policy, RecordData::A(Ipv4Addr::UNSPECIFIED)),
                },
                Err(_) => invalid(policy, RecordData::A(Ipv4Addr::UNSPECIFIED)),
            },
            RecordType::AAAA => match value.parse::<IpAddr>() {
                Ok(IpAddr::V6(addr)) => Some(RecordData::AAAA(addr)),
                Ok(IpAddr::V4(addr)) => Some(RecordData::AAAA(addr.to_ipv6_mapped())),
                Err(_) => invalid(policy, RecordData::AAAA(Ipv6Addr::UNSPECIFIED)),
            },
            RecordType::TXT => Some(RecordData::TXT(value.to_string())),
            RecordType::CNAME => Some(RecordData::CNAME(value.to_string())),
            RecordType::PTR => Some(RecordData::PTR(value.to_string())),
            RecordType::NS => Some(RecordData::NS(value.to_string())),
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::A(_) => RecordType::A,
            RecordData::AAAA(_) => RecordType::AAAA,
            RecordData::TXT(_) => RecordType::TXT,
            RecordData::CNAME(_) => RecordType::CNAME,
            RecordData::PTR(_) => RecordType::PTR,
            RecordData::NS(_) => RecordType::NS,
        }
    }
}

fn invalid(policy: InvalidAddressPolicy, fallback: RecordData) -> Option<RecordData> {
    match policy {
        InvalidAddressPolicy::Unspecified => Some(fallback),
        InvalidAddressPolicy::Skip => None,
    }
}

/// One answer produced by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub owner: Arc<str>,
    pub record_type: RecordType,
    pub class: u16,
    pub ttl: u32,
    pub data: RecordData,
}
