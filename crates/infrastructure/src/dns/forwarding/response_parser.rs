use hickory_proto::op::{Message, MessageType};
use masq_dns_domain::DomainError;
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    /// Decode an upstream response and check it answers query `expected_id`.
    pub fn parse_response(
        response_bytes: &[u8],
        expected_id: u16,
        server: &str,
    ) -> Result<Message, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        if message.id() != expected_id {
            return Err(DomainError::ResponseIdMismatch {
                server: server.to_string(),
                expected: expected_id,
                actual: message.id(),
            });
        }

        debug!(
            server = %server,
            rcode = ?message.response_code(),
            answers = message.answers().len(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        Ok(message)
    }

    /// Decode an inbound client request. Responses and question-less
    /// messages are rejected.
    pub fn parse_request(request_bytes: &[u8]) -> Result<Message, DomainError> {
        let message = Message::from_vec(request_bytes)
            .map_err(|e| DomainError::MalformedRequest(format!("undecodable message: {}", e)))?;

        if message.message_type() != MessageType::Query {
            return Err(DomainError::MalformedRequest(
                "message is not a query".to_string(),
            ));
        }

        if message.queries().is_empty() {
            return Err(DomainError::MalformedRequest(
                "message has no question".to_string(),
            ));
        }

        Ok(message)
    }
}
