use std::time::Instant;

/// Monotonic milliseconds since app start. The engine never reads time
/// itself; the app samples this and passes readings in.
pub struct Clock {
    origin: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}
