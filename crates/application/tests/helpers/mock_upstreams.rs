#![allow(dead_code)]

use async_trait::async_trait;
use hickory_proto::op::Query;
use hickory_proto::rr::rdata::{A, CNAME};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use masq_dns_application::ports::{UpstreamExchange, UpstreamSelector};
use masq_dns_domain::{DomainError, UpstreamEndpoint};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::Mutex;

/// Upstream stub keyed by endpoint, recording every query it receives.
#[derive(Default)]
pub struct MockUpstreamExchange {
    responses: Mutex<HashMap<String, Result<Vec<Record>, DomainError>>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockUpstreamExchange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_answers(&self, endpoint: &str, answers: Vec<Record>) {
        self.responses
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), Ok(answers));
    }

    pub fn set_error(&self, endpoint: &str, error: DomainError) {
        self.responses
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), Err(error));
    }

    /// `(endpoint, query name)` in call order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamExchange for MockUpstreamExchange {
    async fn exchange(
        &self,
        endpoint: &UpstreamEndpoint,
        query: &Query,
    ) -> Result<Vec<Record>, DomainError> {
        let key = endpoint.to_string();
        self.calls
            .lock()
            .unwrap()
            .push((key.clone(), query.name().to_ascii()));

        self.responses
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Ok(vec![]))
    }
}

/// Always picks the same slot.
pub struct FixedSelector(pub usize);

impl UpstreamSelector for FixedSelector {
    fn pick_index(&self, _len: usize) -> usize {
        self.0
    }
}

pub fn a_record(name: &str, ip: [u8; 4]) -> Record {
    Record::from_rdata(
        Name::from_ascii(name).unwrap(),
        60,
        RData::A(A(Ipv4Addr::from(ip))),
    )
}

pub fn cname_record(name: &str, target: &str) -> Record {
    Record::from_rdata(
        Name::from_ascii(name).unwrap(),
        60,
        RData::CNAME(CNAME(Name::from_ascii(target).unwrap())),
    )
}

pub fn question(name: &str, record_type: RecordType) -> Query {
    Query::query(Name::from_ascii(name).unwrap(), record_type)
}

pub fn transport_timeout(server: &str) -> DomainError {
    DomainError::TransportTimeout {
        server: server.to_string(),
    }
}
