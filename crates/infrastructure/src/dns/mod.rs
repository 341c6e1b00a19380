pub mod forwarding;
pub mod load_balancer;
pub mod response_writer;
pub mod server;
pub mod transport;

pub use forwarding::{DnsForwarder, MessageBuilder, ResponseParser};
pub use load_balancer::RandomSelector;
pub use response_writer::{ResponseWriter, ScopedResponseWriter, UdpResponseWriter};
pub use server::DnsServerHandler;
pub use transport::UdpTransport;
