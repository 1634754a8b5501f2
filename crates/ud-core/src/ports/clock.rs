/// Wall clock seam, so capture timestamps stay deterministic in tests.
pub trait ClockPort: Send + Sync {
    fn now_ms(&self) -> i64;
}
