use super::QueryType;
use std::sync::Arc;

pub const DNS_CLASS_IN: u16 = 1;

/// A single question handed over by the host.
///
/// `name` drives key construction. `owner` and `class` are what the host wants
/// stamped into answer headers; they may differ from the raw name (e.g. the
/// original casing of the question).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub name: Arc<str>,
    pub query_type: QueryType,
    pub owner: Arc<str>,
    pub class: u16,
}

impl DnsQuery {
    pub fn new(name: impl Into<Arc<str>>, query_type: impl Into<QueryType>) -> Self {
        let name = name.into();
        Self {
            owner: Arc::clone(&name),
            name,
            query_type: query_type.into(),
            class: DNS_CLASS_IN,
        }
    }

    pub fn with_owner(mut self, owner: impl Into<Arc<str>>, class: u16) -> Self {
        self.owner = owner.into();
        self.class = class;
        self
    }
}
