use kvdns_domain::{QueryType, RecordType};
use std::str::FromStr;

#[test]
fn test_numeric_codes_match_protocol() {
    assert_eq!(RecordType::A.to_u16(), 1);
    assert_eq!(RecordType::NS.to_u16(), 2);
    assert_eq!(RecordType::CNAME.to_u16(), 5);
    assert_eq!(RecordType::PTR.to_u16(), 12);
    assert_eq!(RecordType::TXT.to_u16(), 16);
    assert_eq!(RecordType::AAAA.to_u16(), 28);
}

#[test]
fn test_from_u16_inverts_to_u16() {
    for record_type in RecordType::ALL {
        assert_eq!(RecordType::from_u16(record_type.to_u16()), Some(record_type));
    }
}

#[test]
fn test_store_tags_are_distinct() {
    let mut tags: Vec<&str> = RecordType::ALL.iter().map(|t| t.store_tag()).collect();
    tags.sort();
    tags.dedup();
    assert_eq!(tags.len(), RecordType::ALL.len());
    assert!(tags.iter().all(|tag| tag.starts_with("TYPE_")));
}

#[test]
fn test_compound_types_are_unsupported() {
    // SOA, MX, SRV
    for code in [6u16, 15, 33] {
        assert_eq!(QueryType::from_code(code), QueryType::Unsupported(code));
        assert_eq!(QueryType::from_code(code).code(), code);
        assert!(QueryType::from_code(code).record_type().is_none());
    }
}

#[test]
fn test_query_type_from_code_supported() {
    assert_eq!(
        QueryType::from_code(28),
        QueryType::Supported(RecordType::AAAA)
    );
    assert_eq!(QueryType::from(RecordType::TXT).code(), 16);
}

#[test]
fn test_record_type_from_str_is_case_insensitive() {
    assert_eq!(RecordType::from_str("cname"), Ok(RecordType::CNAME));
    assert_eq!(RecordType::from_str("Ns"), Ok(RecordType::NS));
    assert!(RecordType::from_str("MX").is_err());
}

#[test]
fn test_query_type_display() {
    assert_eq!(QueryType::Supported(RecordType::PTR).to_string(), "PTR");
    assert_eq!(QueryType::Unsupported(15).to_string(), "TYPE15");
}
