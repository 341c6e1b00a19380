use crate::ports::{UpstreamExchange, UpstreamSelector};
use hickory_proto::op::Query;
use hickory_proto::rr::{Name, Record, RecordType};
use masq_dns_domain::name_rewriter::{to_client, to_upstream};
use masq_dns_domain::{
    classify, DomainError, PoolKind, ProxySettings, QueryClass, UpstreamEndpoint,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct DispatchOutcome {
    /// Answer section for the client, already rewritten when masqueraded.
    pub answers: Vec<Record>,
    pub class: QueryClass,
    /// Endpoint that produced `answers`.
    pub upstream: UpstreamEndpoint,
    pub fell_back: bool,
}

/// Two-tier exchange: special pool first for internal names, then a single
/// retry against the normal pool with the client's original name.
pub struct DispatchQueryUseCase {
    settings: Arc<ProxySettings>,
    exchange: Arc<dyn UpstreamExchange>,
    selector: Arc<dyn UpstreamSelector>,
}

impl DispatchQueryUseCase {
    pub fn new(
        settings: Arc<ProxySettings>,
        exchange: Arc<dyn UpstreamExchange>,
        selector: Arc<dyn UpstreamSelector>,
    ) -> Self {
        Self {
            settings,
            exchange,
            selector,
        }
    }

    pub fn settings(&self) -> &ProxySettings {
        &self.settings
    }

    /// An `Err` means the final attempt failed at transport level and the
    /// request must be dropped without a reply.
    pub async fn execute(&self, question: &Query) -> Result<DispatchOutcome, DomainError> {
        let name = question.name().to_ascii();
        let class = classify(&name, &self.settings.rules);

        let (outgoing, pool) = match class {
            QueryClass::Masqueraded => (self.rewrite_question(question, &name), PoolKind::Special),
            QueryClass::InternalOther => (question.clone(), PoolKind::Special),
            QueryClass::Normal => (question.clone(), PoolKind::Normal),
        };

        let mut upstream = self.selector.pick(self.settings.pool(pool)).clone();
        debug!(
            domain = %name,
            outgoing = %outgoing.name(),
            class = %class,
            pool = %pool,
            upstream = %upstream,
            "Dispatching query"
        );

        let mut result = self.exchange.exchange(&upstream, &outgoing).await;
        let mut fell_back = false;

        if class.is_special() && needs_fallback(&result) {
            if let Err(e) = &result {
                debug!(upstream = %upstream, error = %e, "Special upstream exchange failed");
            }
            info!(
                domain = %name,
                record_type = ?question.query_type(),
                "not found, retrying with normal upstream"
            );

            upstream = self.selector.pick(&self.settings.normal).clone();
            result = self.exchange.exchange(&upstream, question).await;
            fell_back = true;
        }

        let mut answers = result?;
        if class == QueryClass::Masqueraded {
            answers = self.rewrite_answers(answers);
        }

        Ok(DispatchOutcome {
            answers,
            class,
            upstream,
            fell_back,
        })
    }

    fn rewrite_question(&self, question: &Query, name: &str) -> Query {
        let rewritten = to_upstream(name, &self.settings.rules);
        match parse_name(&rewritten) {
            Ok(upstream_name) => {
                let mut query = question.clone();
                query.set_name(upstream_name);
                query
            }
            Err(e) => {
                warn!(domain = %name, rewritten = %rewritten, error = %e, "Rewritten query name is invalid, keeping original");
                question.clone()
            }
        }
    }

    /// Only A records get their owner name mapped back.
    fn rewrite_answers(&self, answers: Vec<Record>) -> Vec<Record> {
        answers
            .into_iter()
            .map(|record| {
                if record.record_type() != RecordType::A {
                    return record;
                }

                let owner = record.name().to_ascii();
                let client_owner = to_client(&owner, &self.settings.rules);
                if client_owner == owner {
                    return record;
                }

                match parse_name(&client_owner) {
                    Ok(name) => Record::from_rdata(name, record.ttl(), record.data().clone()),
                    Err(e) => {
                        warn!(owner = %owner, error = %e, "Rewritten owner name is invalid, keeping original");
                        record
                    }
                }
            })
            .collect()
    }
}

/// Case is kept as written; the rewrite is a literal substitution.
fn parse_name(name: &str) -> Result<Name, DomainError> {
    Name::from_ascii(name).map_err(|e| DomainError::InvalidDomainName(format!("{}: {}", name, e)))
}

fn needs_fallback(result: &Result<Vec<Record>, DomainError>) -> bool {
    match result {
        Ok(answers) => answers.is_empty(),
        Err(_) => true,
    }
}
