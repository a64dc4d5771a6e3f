/// Default interval of the keep-alive repaint when nothing changed.
pub const DEFAULT_KEEPALIVE_MS: u64 = 1000;

#[derive(Debug, Clone)]
pub struct FlushThrottle {
    keepalive_ms: u64,
    last_flush_ms: u64,
    last_generation: u64,
    has_flushed: bool,
}

impl FlushThrottle {
    pub fn new(keepalive_ms: u64) -> Self {
        Self {
            keepalive_ms,
            last_flush_ms: 0,
            last_generation: 0,
            has_flushed: false,
        }
    }

    /// Decide whether a refresh should reach the terminal.
    ///
    /// - The first refresh always flushes.
    /// - A changed `generation` (cells were written) flushes immediately.
    /// - Otherwise flush at most once per `keepalive_ms`.
    pub fn should_flush(&mut self, now_ms: u64, generation: u64) -> bool {
        if !self.has_flushed {
            self.has_flushed = true;
            self.last_flush_ms = now_ms;
            self.last_generation = generation;
            return true;
        }

        if generation != self.last_generation {
            self.last_flush_ms = now_ms;
            self.last_generation = generation;
            return true;
        }

        if now_ms.saturating_sub(self.last_flush_ms) >= self.keepalive_ms {
            self.last_flush_ms = now_ms;
            return true;
        }

        false
    }
}

impl Default for FlushThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_KEEPALIVE_MS)
    }
}
