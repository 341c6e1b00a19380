use crate::dns::forwarding::{MessageBuilder, ResponseParser};
use crate::dns::response_writer::{ResponseWriter, ScopedResponseWriter};
use masq_dns_application::use_cases::DispatchQueryUseCase;
use std::sync::Arc;
use tracing::{debug, error, warn};

#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<DispatchQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<DispatchQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Answers one inbound datagram through `writer`.
    ///
    /// Malformed requests and upstream failures on the final attempt get no
    /// reply at all. The writer is closed on every path.
    pub async fn handle_request<W: ResponseWriter>(&self, request_bytes: &[u8], writer: W) {
        let mut writer = ScopedResponseWriter::new(writer);
        let client = writer.peer();

        let request = match ResponseParser::parse_request(request_bytes) {
            Ok(request) => request,
            Err(e) => {
                warn!(client = %client, error = %e, "Dropping malformed request");
                return;
            }
        };

        // parse_request guarantees one question
        let question = &request.queries()[0];

        debug!(
            domain = %question.name(),
            record_type = ?question.query_type(),
            client = %client,
            "DNS query received"
        );

        let outcome = match self.use_case.execute(question).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(
                    domain = %question.name(),
                    client = %client,
                    error = %e,
                    "Upstream exchange failed, dropping request"
                );
                return;
            }
        };

        debug!(
            domain = %question.name(),
            class = %outcome.class,
            upstream = %outcome.upstream,
            fell_back = outcome.fell_back,
            answers = outcome.answers.len(),
            "Sending response"
        );

        let reply = MessageBuilder::build_reply(&request, outcome.answers);
        let bytes = match MessageBuilder::serialize_message(&reply) {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(domain = %question.name(), error = %e, "Failed to encode reply");
                return;
            }
        };

        if let Err(e) = writer.write_message(&bytes).await {
            error!(client = %client, error = %e, "Failed to send response");
        }
    }
}
