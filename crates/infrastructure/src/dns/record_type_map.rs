//! Mapping between `kvdns_domain` record types and `hickory_proto::rr::RecordType`.
//!
//! Both directions live here so the set of answerable types is defined once.

use hickory_proto::rr::RecordType as HickoryRecordType;
use kvdns_domain::{QueryType, RecordType};

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::PTR => HickoryRecordType::PTR,
            RecordType::NS => HickoryRecordType::NS,
        }
    }

    /// Returns `None` for every type the store cannot answer.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> Option<RecordType> {
        match hickory_type {
            HickoryRecordType::A => Some(RecordType::A),
            HickoryRecordType::AAAA => Some(RecordType::AAAA),
            HickoryRecordType::TXT => Some(RecordType::TXT),
            HickoryRecordType::CNAME => Some(RecordType::CNAME),
            HickoryRecordType::PTR => Some(RecordType::PTR),
            HickoryRecordType::NS => Some(RecordType::NS),
            _ => None,
        }
    }

    pub fn query_type(hickory_type: HickoryRecordType) -> QueryType {
        match Self::from_hickory(hickory_type) {
            Some(record_type) => QueryType::Supported(record_type),
            None => QueryType::Unsupported(u16::from(hickory_type)),
        }
    }
}
