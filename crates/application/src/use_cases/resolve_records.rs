use crate::ports::{KvStore, StoreEntry};
use kvdns_domain::{
    AnswerRecord, DnsQuery, DomainError, InvalidAddressPolicy, KeyMapper, RecordData,
    RecordEnvelope, RecordType, StoreError,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(3);

/// Turns a query into answer records read from the key-value store.
///
/// Unsupported types, empty keys and store failures fail the query.
/// Undecodable payloads and envelopes of the wrong type only drop that entry;
/// the query can then succeed with fewer records, or none.
pub struct ResolveRecordsUseCase {
    store: Arc<dyn KvStore>,
    key_mapper: KeyMapper,
    fetch_timeout: Duration,
    address_policy: InvalidAddressPolicy,
}

impl ResolveRecordsUseCase {
    pub fn new(store: Arc<dyn KvStore>, key_mapper: KeyMapper) -> Self {
        Self {
            store,
            key_mapper,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            address_policy: InvalidAddressPolicy::default(),
        }
    }

    pub fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    pub fn with_address_policy(mut self, address_policy: InvalidAddressPolicy) -> Self {
        self.address_policy = address_policy;
        self
    }

    pub fn key_mapper(&self) -> &KeyMapper {
        &self.key_mapper
    }

    pub async fn execute(&self, query: &DnsQuery) -> Result<Vec<AnswerRecord>, DomainError> {
        let (record_type, key) = match (
            query.query_type.record_type(),
            self.key_mapper.build_key(&query.name, query.query_type),
        ) {
            (Some(record_type), Some(key)) => (record_type, key),
            _ => return Err(DomainError::UnsupportedType(query.query_type.code())),
        };

        debug!(key = %key, name = %query.name, record_type = %record_type, "Fetching records");

        let entries = tokio::time::timeout(
            self.fetch_timeout,
            self.store.get(&key, self.fetch_timeout),
        )
        .await
        .map_err(|_| StoreError::Timeout(self.fetch_timeout))??;

        if entries.is_empty() {
            return Err(DomainError::NotFound(key.into_string()));
        }

        let answers: Vec<AnswerRecord> = entries
            .iter()
            .filter_map(decode_entry)
            .filter(|(entry, envelope)| {
                let matches = envelope.matches(record_type);
                if !matches {
                    warn!(
                        key = %entry.key,
                        found = envelope.record_type,
                        expected = record_type.to_u16(),
                        "Record type mismatch, skipping entry"
                    );
                }
                matches
            })
            .flat_map(|(_, envelope)| self.build_answers(query, record_type, envelope))
            .collect();

        debug!(key = %key, entries = entries.len(), answers = answers.len(), "Resolved records");

        Ok(answers)
    }

    fn build_answers(
        &self,
        query: &DnsQuery,
        record_type: RecordType,
        envelope: RecordEnvelope,
    ) -> Vec<AnswerRecord> {
        let ttl = envelope.ttl;
        envelope
            .records
            .iter()
            .filter_map(|value| {
                let data = RecordData::from_value(record_type, value, self.address_policy);
                if data.is_none() {
                    warn!(value = %value, record_type = %record_type, "Invalid address literal, skipping value");
                }
                data
            })
            .map(|data| AnswerRecord {
                owner: Arc::clone(&query.owner),
                record_type,
                class: query.class,
                ttl,
                data,
            })
            .collect()
    }
}

fn decode_entry(entry: &StoreEntry) -> Option<(&StoreEntry, RecordEnvelope)> {
    match RecordEnvelope::decode(&entry.value) {
        Ok(envelope) => Some((entry, envelope)),
        Err(e) => {
            warn!(key = %entry.key, error = %e, "Failed to decode stored record, skipping entry");
            None
        }
    }
}
