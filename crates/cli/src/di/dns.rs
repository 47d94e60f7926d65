use super::store::build_store;
use kvdns_application::use_cases::ResolveRecordsUseCase;
use kvdns_domain::Config;
use kvdns_infrastructure::dns::KvDnsHandler;
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub handler: KvDnsHandler,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let backend = &config.backend;
        let store = build_store(backend)?;

        let use_case = Arc::new(
            ResolveRecordsUseCase::new(store, backend.key_mapper())
                .with_fetch_timeout(backend.fetch_timeout())
                .with_address_policy(backend.invalid_address),
        );

        let zones = backend.zone_set();
        let fallthrough = backend.fallthrough_set();

        info!(
            prefix = %use_case.key_mapper().prefix(),
            zones = ?zones.iter().collect::<Vec<_>>(),
            fallthrough = ?fallthrough.iter().collect::<Vec<_>>(),
            timeout_ms = backend.fetch_timeout_ms,
            "DNS services initialized"
        );

        let handler = KvDnsHandler::new(use_case, zones).with_fallthrough(fallthrough);

        Ok(Self { handler })
    }
}
