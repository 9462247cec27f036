// Dredge is an open source secret scanner for web archives.
// Copyright (C) 2024 Dredge ApS
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Back-off schedules for re-trying failed fetches, expressed as plain
//! iterators over delays.

use std::iter;
use std::time::Duration;

use crate::config::RetryStrategy;

/// An endless schedule of geometrically growing delays, optionally clamped
/// to a maximum. The growth factor is decoupled from the initial delay.
#[derive(Debug, Clone)]
pub struct ExponentialBackoff {
    current: u64,
    factor: u64,
    max_delay: Option<Duration>,
}

impl ExponentialBackoff {
    /// A schedule starting at `initial` milliseconds that doubles on every
    /// attempt.
    pub fn from_millis(initial: u64) -> ExponentialBackoff {
        ExponentialBackoff {
            current: initial,
            factor: 2,
            max_delay: None,
        }
    }

    pub fn with_factor(mut self, factor: u64) -> Self {
        self.factor = factor;
        self
    }

    pub fn with_limit(mut self, limit: Duration) -> Self {
        self.max_delay = Some(limit);
        self
    }
}

impl Iterator for ExponentialBackoff {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        let delay = Duration::from_millis(self.current);

        if let Some(limit) = self.max_delay {
            if delay > limit {
                // once past the clamp, every later delay is the clamp itself
                return Some(limit);
            }
        }

        self.current = self.current.saturating_mul(self.factor);

        Some(delay)
    }
}

impl RetryStrategy {
    /// The sequence of delays to wait between fetch attempts. An exhausted
    /// iterator means the fetch is not retried again.
    pub fn delays(&self) -> Box<dyn Iterator<Item = Duration> + Send> {
        match self {
            RetryStrategy::Never => Box::new(iter::empty()),
            RetryStrategy::Constant => Box::new(iter::repeat(Duration::from_secs(5)).take(5)),
            RetryStrategy::Exponential => Box::new(
                ExponentialBackoff::from_millis(1000).with_limit(Duration::from_secs(15 * 60)),
            ),
            RetryStrategy::Always => Box::new(iter::repeat(Duration::ZERO)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubles_from_initial_value() {
        let mut s = ExponentialBackoff::from_millis(10);

        assert_eq!(s.next(), Some(Duration::from_millis(10)));
        assert_eq!(s.next(), Some(Duration::from_millis(20)));
        assert_eq!(s.next(), Some(Duration::from_millis(40)));
    }

    #[test]
    fn respects_factor() {
        let mut s = ExponentialBackoff::from_millis(2).with_factor(10);

        assert_eq!(s.next(), Some(Duration::from_millis(2)));
        assert_eq!(s.next(), Some(Duration::from_millis(20)));
        assert_eq!(s.next(), Some(Duration::from_millis(200)));
    }

    #[test]
    fn saturates_at_maximum_value() {
        let mut s = ExponentialBackoff::from_millis(u64::MAX - 1);

        assert_eq!(s.next(), Some(Duration::from_millis(u64::MAX - 1)));
        assert_eq!(s.next(), Some(Duration::from_millis(u64::MAX)));
        assert_eq!(s.next(), Some(Duration::from_millis(u64::MAX)));
    }

    #[test]
    fn limits_backoff() {
        let mut s = ExponentialBackoff::from_millis(10).with_limit(Duration::from_millis(100));

        assert_eq!(s.next(), Some(Duration::from_millis(10)));
        assert_eq!(s.next(), Some(Duration::from_millis(20)));
        assert_eq!(s.next(), Some(Duration::from_millis(40)));
        assert_eq!(s.next(), Some(Duration::from_millis(80)));
        assert_eq!(s.next(), Some(Duration::from_millis(100)));
        assert_eq!(s.next(), Some(Duration::from_millis(100)));
    }

    #[test]
    fn never_yields_no_delays() {
        assert_eq!(RetryStrategy::Never.delays().count(), 0);
    }

    #[test]
    fn constant_yields_five_times_five_seconds() {
        let delays: Vec<_> = RetryStrategy::Constant.delays().collect();
        assert_eq!(delays, vec![Duration::from_secs(5); 5]);
    }

    #[test]
    fn exponential_grows_and_caps() {
        let delays: Vec<_> = RetryStrategy::Exponential.delays().take(12).collect();

        assert_eq!(delays[0], Duration::from_secs(1));
        assert_eq!(delays[1], Duration::from_secs(2));
        assert!(delays.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(delays[11], Duration::from_secs(15 * 60));
    }

    #[test]
    fn always_yields_zero_delays() {
        let delays: Vec<_> = RetryStrategy::Always.delays().take(3).collect();
        assert_eq!(delays, vec![Duration::ZERO; 3]);
    }
}
