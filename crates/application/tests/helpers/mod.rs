mod mock_upstreams;

pub use mock_upstreams::*;
