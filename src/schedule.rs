//! Cooperative repeating timers.
//!
//! There is no timer thread: the host loop (the GUI frame callback) polls
//! every `Interval` with the total elapsed time, and the interval reports how
//! many periods have gone by since the last poll. A poll that arrives late
//! fires the missed ticks in the same call, so tick counts stay a function of
//! elapsed time rather than of frame cadence.

use std::time::Duration;

/// A repeating timer with a fixed period, polled from the host loop.
///
/// The first tick is due one full period after creation. Intervals are never
/// cancelled; they fire for the lifetime of the page.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    next_due: Duration,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Report how many ticks have become due at `elapsed` (total time since
    /// the interval was created) and advance past them.
    pub fn poll(&mut self, elapsed: Duration) -> u32 {
        let mut fired = 0;
        while elapsed >= self.next_due {
            self.next_due += self.period;
            fired += 1;
        }
        fired
    }
}
