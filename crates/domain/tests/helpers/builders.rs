#![allow(dead_code)]
use kvdns_domain::{RecordEnvelope, RecordType};

pub struct EnvelopeBuilder {
    record_type: u16,
    records: Vec<String>,
    ttl: u32,
}

impl EnvelopeBuilder {
    pub fn new() -> Self {
        Self {
            record_type: RecordType::A.to_u16(),
            records: Vec::new(),
            ttl: 300,
        }
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type.to_u16();
        self
    }

    pub fn raw_type(mut self, code: u16) -> Self {
        self.record_type = code;
        self
    }

    pub fn record(mut self, value: &str) -> Self {
        self.records.push(value.to_string());
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn build(self) -> RecordEnvelope {
        RecordEnvelope {
            record_type: self.record_type,
            records: self.records,
            ttl: self.ttl,
        }
    }
}

impl Default for EnvelopeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
