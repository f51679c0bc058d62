use std::thread;
use std::time::Duration;

/// Pause applied after every write. The fixed delay is a crude self-imposed
/// rate limit; the server's own throttling signals are not consulted.
pub trait Pacer {
    fn pause(&self);
}

pub struct FixedDelay(Duration);

impl FixedDelay {
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }
}

impl Pacer for FixedDelay {
    fn pause(&self) {
        thread::sleep(self.0);
    }
}

/// No pause at all, for dry runs and tests.
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&self) {}
}
