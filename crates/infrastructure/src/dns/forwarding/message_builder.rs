//! DNS Message Builder
//!
//! Constructs the outgoing upstream query and the reply sent back to the
//! client, in wire format, using `hickory-proto`.

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::Record;
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use masq_dns_domain::DomainError;

/// Builds DNS messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build an upstream query for `question` and serialize it
    ///
    /// Creates a standard recursive query with:
    /// - Random ID for request/response matching
    /// - RD (Recursion Desired) flag set
    /// - Single question section, name/type/class copied from `question`
    ///
    /// # Returns
    /// The message ID and the serialized bytes ready to send over UDP
    pub fn build_query(question: &Query) -> Result<(u16, Vec<u8>), DomainError> {
        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(question.clone());

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    /// Build the reply correlated to `request`
    ///
    /// ID and opcode are copied, RD/CD are echoed, RA is always set, the first
    /// question is echoed back and `answers` become the answer section.
    pub fn build_reply(request: &Message, answers: Vec<Record>) -> Message {
        let mut reply = Message::new(request.id(), MessageType::Response, request.op_code());
        reply.set_recursion_desired(request.recursion_desired());
        reply.set_checking_disabled(request.checking_disabled());
        reply.set_recursion_available(true);

        if let Some(question) = request.queries().first() {
            reply.add_query(question.clone());
        }
        reply.add_answers(answers);
        reply
    }

    /// Serialize a Message to wire format bytes
    pub fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
