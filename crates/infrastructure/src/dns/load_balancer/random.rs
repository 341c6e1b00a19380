use masq_dns_application::ports::UpstreamSelector;

/// Uniform random pick with no memory between calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSelector;

impl RandomSelector {
    pub fn new() -> Self {
        Self
    }
}

impl UpstreamSelector for RandomSelector {
    fn pick_index(&self, len: usize) -> usize {
        fastrand::usize(..len)
    }
}
