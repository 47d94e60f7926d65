/// Zones served by the backend.
///
/// Origins are kept lowercase without the trailing dot; the root zone is the
/// empty string and matches every name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneSet {
    zones: Vec<String>,
}

impl ZoneSet {
    pub fn new<I, S>(zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut zones: Vec<String> = zones.into_iter().map(|z| normalize(z.as_ref())).collect();
        zones.sort();
        zones.dedup();
        Self { zones }
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.zones.iter().map(String::as_str)
    }

    /// Longest zone equal to `name` or an ancestor of it on a label boundary.
    pub fn matches(&self, name: &str) -> Option<&str> {
        let name = normalize(name);
        self.zones
            .iter()
            .filter(|zone| is_subdomain(&name, zone))
            .max_by_key(|zone| zone.len())
            .map(String::as_str)
    }
}

fn normalize(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}

fn is_subdomain(name: &str, zone: &str) -> bool {
    if zone.is_empty() || name == zone {
        return true;
    }
    name.strip_suffix(zone)
        .is_some_and(|head| head.ends_with('.'))
}
