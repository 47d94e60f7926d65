use super::{EnvelopeError, RecordType};
use serde::{Deserialize, Serialize};

/// Payload stored under every record key.
///
/// JSON on the wire: `{"type": 1, "records": ["10.0.0.1"], "ttl": 300}`.
/// Absent fields decode to their zero value, so an envelope without `type`
/// decodes fine and is rejected later by the type check.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecordEnvelope {
    #[serde(rename = "type", default)]
    pub record_type: u16,

    #[serde(default)]
    pub records: Vec<String>,

    #[serde(default)]
    pub ttl: u32,
}

impl RecordEnvelope {
    pub fn new(record_type: RecordType, records: Vec<String>, ttl: u32) -> Self {
        Self {
            record_type: record_type.to_u16(),
            records,
            ttl,
        }
    }

    /// Field names match case-insensitively (`"TTL"`, `"Type"`); when two
    /// spellings collide the all-lowercase one wins.
    pub fn decode(bytes: &[u8]) -> Result<Self, EnvelopeError> {
        let value: serde_json::Value =
            serde_json::from_slice(bytes).map_err(|e| EnvelopeError::Decode(e.to_string()))?;

        let value = match value {
            serde_json::Value::Object(fields) => serde_json::Value::Object(
                fields
                    .into_iter()
                    .map(|(name, field)| (name.to_ascii_lowercase(), field))
                    .collect(),
            ),
            other => other,
        };

        serde_json::from_value(value).map_err(|e| EnvelopeError::Decode(e.to_string()))
    }

    pub fn encode(&self) -> Vec<u8> {
        // Plain struct of integers and strings; serialization cannot fail.
        serde_json::to_vec(self).unwrap_or_default()
    }

    pub fn matches(&self, record_type: RecordType) -> bool {
        self.record_type == record_type.to_u16()
    }
}
