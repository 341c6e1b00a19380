use masq_dns_domain::{UpstreamEndpoint, UpstreamPool};

pub trait UpstreamSelector: Send + Sync {
    /// Index in `0..len`. `len` is never zero.
    fn pick_index(&self, len: usize) -> usize;

    fn pick<'a>(&self, pool: &'a UpstreamPool) -> &'a UpstreamEndpoint {
        pool.get(self.pick_index(pool.len()))
    }
}
