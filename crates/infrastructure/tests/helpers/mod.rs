mod dns_server_mock;
mod recording_writer;

pub use dns_server_mock::{MockBehavior, MockDnsServer};
pub use recording_writer::{RecordingWriter, WriterLog};
