//! Scoped timing around top-level calls.
//!
//! A measurement is a handle owned by the caller: begin it around one scan
//! or compact invocation and report it when the call returns. Nothing here
//! is process-wide state, and the scan/compact contracts do not depend on it.

use std::time::{Duration, Instant};

pub struct TimeScope {
    label: &'static str,
    start: Instant,
}

impl TimeScope {
    /// Starts measuring.
    pub fn begin(label: &'static str) -> Self {
        TimeScope {
            label,
            start: Instant::now(),
        }
    }

    /// Time elapsed since `begin`, without closing the scope.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Closes the scope, printing the elapsed time.
    pub fn report(self) -> Duration {
        let elapsed = self.start.elapsed();
        println!("\t{}:\t{:.2?}", self.label, elapsed);
        elapsed
    }
}
