use crate::forward::Pause;
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;

/// Sleeps a whole number of seconds drawn uniformly from `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomPause {
    min_secs: u64,
    max_secs: u64,
}

impl RandomPause {
    /// Creates a pause between `min_secs` and `max_secs`, both inclusive
    ///
    /// The bounds are swapped if given in reverse.
    pub fn new(min_secs: u64, max_secs: u64) -> Self {
        Self {
            min_secs: min_secs.min(max_secs),
            max_secs: min_secs.max(max_secs),
        }
    }

    /// Draws the next delay
    pub fn next_delay(&self) -> Duration {
        let secs = rand::thread_rng().gen_range(self.min_secs..=self.max_secs);
        Duration::from_secs(secs)
    }
}

impl Default for RandomPause {
    /// 5 to 20 seconds between forwarding calls
    fn default() -> Self {
        Self::new(5, 20)
    }
}

#[async_trait]
impl Pause for RandomPause {
    async fn pause(&self) {
        let delay = self.next_delay();
        tracing::debug!("Pausing {}s before forwarding", delay.as_secs());
        tokio::time::sleep(delay).await;
    }
}
