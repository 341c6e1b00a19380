//! masq-dns infrastructure: wire codec, UDP transport and the request handler
pub mod dns;
