use std::fmt;
use std::str::FromStr;

/// Record types the store backend can answer.
///
/// Every per-type decision (numeric code, store tag, mnemonic) lives in the
/// match tables below, so adding a type means touching exactly this file and
/// the hickory mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    TXT,
    CNAME,
    PTR,
    NS,
}

impl RecordType {
    pub const ALL: [RecordType; 6] = [
        RecordType::A,
        RecordType::AAAA,
        RecordType::TXT,
        RecordType::CNAME,
        RecordType::PTR,
        RecordType::NS,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::TXT => "TXT",
            RecordType::CNAME => "CNAME",
            RecordType::PTR => "PTR",
            RecordType::NS => "NS",
        }
    }

    /// Suffix identifying this type inside the store key space.
    pub fn store_tag(&self) -> &'static str {
        match self {
            RecordType::A => "TYPE_A",
            RecordType::AAAA => "TYPE_AAAA",
            RecordType::TXT => "TYPE_TXT",
            RecordType::CNAME => "TYPE_CNAME",
            RecordType::PTR => "TYPE_PTR",
            RecordType::NS => "TYPE_NS",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::PTR => 12,
            RecordType::TXT => 16,
            RecordType::AAAA => 28,
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            1 => Some(RecordType::A),
            2 => Some(RecordType::NS),
            5 => Some(RecordType::CNAME),
            12 => Some(RecordType::PTR),
            16 => Some(RecordType::TXT),
            28 => Some(RecordType::AAAA),
            _ => None,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "TXT" => Ok(RecordType::TXT),
            "CNAME" => Ok(RecordType::CNAME),
            "PTR" => Ok(RecordType::PTR),
            "NS" => Ok(RecordType::NS),
            _ => Err(format!("Unknown record type: {}", s)),
        }
    }
}

/// Query type as received from the wire.
///
/// MX, SRV, SOA and every other code land in `Unsupported` and are rejected
/// before any key is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryType {
    Supported(RecordType),
    Unsupported(u16),
}

impl QueryType {
    pub fn from_code(code: u16) -> Self {
        match RecordType::from_u16(code) {
            Some(record_type) => QueryType::Supported(record_type),
            None => QueryType::Unsupported(code),
        }
    }

    pub fn code(&self) -> u16 {
        match self {
            QueryType::Supported(record_type) => record_type.to_u16(),
            QueryType::Unsupported(code) => *code,
        }
    }

    pub fn record_type(&self) -> Option<RecordType> {
        match self {
            QueryType::Supported(record_type) => Some(*record_type),
            QueryType::Unsupported(_) => None,
        }
    }
}

impl From<RecordType> for QueryType {
    fn from(record_type: RecordType) -> Self {
        QueryType::Supported(record_type)
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryType::Supported(record_type) => record_type.fmt(f),
            QueryType::Unsupported(code) => write!(f, "TYPE{}", code),
        }
    }
}
