/// A leading-edge time-window throttle.
///
/// The first [`Self::ready`] call fires immediately; further calls inside the
/// window are swallowed. Time flows in as `now_ms` arguments so hosts keep
/// control of the clock (and tests stay deterministic).
#[derive(Clone, Copy, Debug, Default)]
pub struct Throttle {
    window_ms: u64,
    last_fire_ms: Option<u64>,
}

impl Throttle {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_fire_ms: None,
        }
    }

    /// Returns `true` and arms the window when a fire is due at `now_ms`.
    pub fn ready(&mut self, now_ms: u64) -> bool {
        match self.last_fire_ms {
            Some(last) if now_ms.saturating_sub(last) < self.window_ms => false,
            _ => {
                self.last_fire_ms = Some(now_ms);
                true
            }
        }
    }

    /// Forgets the last fire, so the next [`Self::ready`] call passes.
    pub fn reset(&mut self) {
        self.last_fire_ms = None;
    }

    pub fn set_window_ms(&mut self, window_ms: u64) {
        self.window_ms = window_ms;
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }
}
