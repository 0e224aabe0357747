use std::time::Instant;

/// A payload paired with the moment it becomes eligible for retrieval.
///
/// The queue never inspects the payload; ordering and readiness are decided
/// solely by `execute_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task<T> {
    pub execute_at: Instant,
    pub payload: T,
}

impl<T> Task<T> {
    pub fn new(payload: T, execute_at: Instant) -> Self {
        Self {
            execute_at,
            payload,
        }
    }

    /// True once the scheduled execution time has arrived.
    pub fn is_due(&self, now: Instant) -> bool {
        self.execute_at <= now
    }
}
