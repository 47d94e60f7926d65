use hickory_proto::rr::rdata::{A, AAAA, CNAME, NS, PTR, TXT};
use hickory_proto::rr::{DNSClass, Name, RData, Record};
use hickory_proto::ProtoError;
use kvdns_domain::{AnswerRecord, RecordData};
use std::str::FromStr;

/// Converts a resolved answer into a hickory resource record.
///
/// Fails only when the owner or a target name is not a valid DNS name.
pub fn build_record(answer: &AnswerRecord) -> Result<Record, ProtoError> {
    let owner = Name::from_str(&answer.owner)?;

    let rdata = match &answer.data {
        RecordData::A(addr) => RData::A(A(*addr)),
        RecordData::AAAA(addr) => RData::AAAA(AAAA(*addr)),
        RecordData::TXT(text) => RData::TXT(TXT::new(vec![text.clone()])),
        RecordData::CNAME(target) => RData::CNAME(CNAME(Name::from_str(target)?)),
        RecordData::PTR(target) => RData::PTR(PTR(Name::from_str(target)?)),
        RecordData::NS(target) => RData::NS(NS(Name::from_str(target)?)),
    };

    let mut record = Record::from_rdata(owner, answer.ttl, rdata);
    record.set_dns_class(DNSClass::from(answer.class));
    Ok(record)
}
