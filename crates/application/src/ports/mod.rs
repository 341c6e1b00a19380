mod upstream_exchange;
mod upstream_selector;

pub use upstream_exchange::UpstreamExchange;
pub use upstream_selector::UpstreamSelector;
