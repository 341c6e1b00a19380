use masq_dns_application::use_cases::DispatchQueryUseCase;
use masq_dns_domain::ProxySettings;
use masq_dns_infrastructure::dns::{DnsForwarder, DnsServerHandler, RandomSelector};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub handler: DnsServerHandler,
}

impl DnsServices {
    pub fn new(settings: Arc<ProxySettings>) -> Self {
        info!(
            special = settings.special.len(),
            normal = settings.normal.len(),
            timeout_ms = settings.exchange_timeout.as_millis() as u64,
            "Initializing DNS services"
        );

        let forwarder = Arc::new(DnsForwarder::new(settings.exchange_timeout));
        let selector = Arc::new(RandomSelector::new());
        let dispatch = Arc::new(DispatchQueryUseCase::new(settings, forwarder, selector));

        Self {
            handler: DnsServerHandler::new(dispatch),
        }
    }
}
