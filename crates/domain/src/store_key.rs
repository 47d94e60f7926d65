use super::QueryType;
use std::fmt;

/// A `/`-separated lookup key into the record store:
/// `<prefix>/<label_n>/.../<label_1>/<TYPE_TAG>`.
///
/// The layout is shared with whatever writes the store, so it must stay
/// byte-for-byte stable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoreKey(String);

impl StoreKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StoreKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Maps (domain name, query type) to a store key.
///
/// Labels are stored TLD first so a zone and all of its subdomains share one
/// key prefix, which lets prefix scans on the store group them together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMapper {
    prefix: String,
}

impl KeyMapper {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns `None` for query types outside the supported set; callers must
    /// treat that as an unsupported query and skip the lookup entirely.
    pub fn build_key(&self, name: &str, query_type: QueryType) -> Option<StoreKey> {
        let record_type = query_type.record_type()?;
        let reversed = reversed_labels(name);

        let mut parts: Vec<&str> = Vec::with_capacity(reversed.len() + 2);
        parts.push(&self.prefix);
        parts.extend(reversed);
        parts.push(record_type.store_tag());

        Some(StoreKey(join_clean(&parts)))
    }

    /// Key prefix shared by `name` and every name below it.
    pub fn zone_prefix(&self, name: &str) -> String {
        let mut parts: Vec<&str> = vec![&self.prefix];
        parts.extend(reversed_labels(name));
        join_clean(&parts)
    }
}

fn reversed_labels(name: &str) -> Vec<&str> {
    name.split('.').filter(|label| !label.is_empty()).rev().collect()
}

/// Joins path elements with `/` and cleans the result: repeated separators
/// collapse, `.` segments vanish, `..` removes the previous segment, and a
/// leading `/` survives only when the first non-empty element carries one.
fn join_clean(parts: &[&str]) -> String {
    if parts.iter().all(|part| part.is_empty()) {
        return String::new();
    }

    let rooted = parts
        .iter()
        .find(|part| !part.is_empty())
        .is_some_and(|part| part.starts_with('/'));

    let mut segments: Vec<&str> = Vec::new();
    for segment in parts.iter().flat_map(|part| part.split('/')) {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if !rooted => segments.push(".."),
                _ => {}
            },
            _ => segments.push(segment),
        }
    }

    let joined = segments.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{}", joined),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}
