//! Monotonic stopwatch with a bounded log of checkpoints.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const NANOS_PER_SEC: u128 = Duration::from_secs(1).as_nanos();
pub const NANOS_PER_MILLI: u128 = Duration::from_millis(1).as_nanos();
pub const NANOS_PER_MICRO: u128 = Duration::from_micros(1).as_nanos();

pub const DEFAULT_HISTORY_CAPACITY: usize = 100_000;

const FMT_SEP: &str = " - ";

/// FIFO that drops its oldest entry once full.
#[derive(Debug, Clone)]
pub struct BoundedHistory<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedHistory<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            data: VecDeque::new(),
            capacity,
        }
    }

    /// Appends `value`, returning the evicted entry if the history was full.
    pub fn push(&mut self, value: T) -> Option<T> {
        if self.capacity == 0 {
            return Some(value);
        }
        let evicted = if self.data.len() == self.capacity {
            self.data.pop_front()
        } else {
            None
        };
        self.data.push_back(value);
        evicted
    }

    pub fn last(&self) -> Option<&T> {
        self.data.back()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

#[derive(Debug, Clone)]
pub struct Timer {
    timezero: Instant,
    records: BoundedHistory<u128>,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            timezero: Instant::now(),
            records: BoundedHistory::new(capacity),
        }
    }

    /// Recorded checkpoints, oldest first.
    pub fn records(&self) -> &BoundedHistory<u128> {
        &self.records
    }

    /// Nanoseconds since the last reset.
    pub fn check(&mut self, record: bool) -> u128 {
        let elapsed = self.timezero.elapsed().as_nanos();
        if record {
            self.records.push(elapsed);
        }
        elapsed
    }

    /// Nanoseconds since the latest recorded checkpoint, or since the last
    /// reset when nothing has been recorded. The checkpoint this call may
    /// record is not the one it measures against.
    pub fn check_delta(&mut self, record: bool) -> u128 {
        let latest = self.records.last().copied();
        let elapsed = self.check(record);
        elapsed - latest.unwrap_or(0)
    }

    pub fn check_fmt(&mut self, record: bool) -> String {
        fmt_nanos(self.check(record))
    }

    pub fn reset(&mut self) -> &mut Self {
        self.timezero = Instant::now();
        self.records.clear();
        self
    }
}

/// Renders a span as `  s - ms - μs - ns` components.
pub fn fmt_nanos(mut nanos: u128) -> String {
    let secs = nanos / NANOS_PER_SEC;
    nanos %= NANOS_PER_SEC;

    let millis = nanos / NANOS_PER_MILLI;
    nanos %= NANOS_PER_MILLI;

    let micros = nanos / NANOS_PER_MICRO;
    nanos %= NANOS_PER_MICRO;

    [(secs, "s"), (millis, "ms"), (micros, "μs"), (nanos, "ns")]
        .iter()
        .map(|(value, unit)| format!("{value:>3} {unit}"))
        .collect::<Vec<_>>()
        .join(FMT_SEP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_evicts_oldest() {
        let mut history = BoundedHistory::new(3);
        for i in 0..3 {
            assert_eq!(history.push(i), None);
        }
        assert_eq!(history.push(3), Some(0));
        assert_eq!(history.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_zero_capacity_history() {
        let mut history = BoundedHistory::new(0);
        assert_eq!(history.push(1), Some(1));
        assert!(history.is_empty());
    }

    #[test]
    fn test_check_is_monotonic() {
        let mut timer = Timer::new();
        let mut previous = timer.check(false);
        for _ in 0..1000 {
            let now = timer.check(false);
            assert!(now >= previous);
            previous = now;
        }
    }

    #[test]
    fn test_reset_rebases() {
        let mut timer = Timer::new();
        std::thread::sleep(Duration::from_millis(20));
        timer.check(true);
        timer.reset();
        assert!(timer.check(false) < Duration::from_millis(10).as_nanos());
        assert!(timer.records().is_empty());
    }

    #[test]
    fn test_delta_against_previous_record() {
        let mut timer = Timer::new();
        let first = timer.check(true);
        std::thread::sleep(Duration::from_millis(5));
        let delta = timer.check_delta(true);
        assert!(delta >= Duration::from_millis(5).as_nanos());
        assert_eq!(timer.records().len(), 2);
        let second = *timer.records().last().unwrap();
        assert_eq!(second - first, delta);
    }

    #[test]
    fn test_delta_without_records() {
        let mut timer = Timer::new();
        let delta = timer.check_delta(false);
        assert!(delta <= timer.check(false));
    }

    #[test]
    fn test_records_are_bounded() {
        let mut timer = Timer::with_capacity(4);
        for _ in 0..10 {
            timer.check(true);
        }
        assert_eq!(timer.records().len(), 4);
    }

    #[test]
    fn test_fmt_nanos() {
        assert_eq!(
            fmt_nanos(1_002_003_004),
            "  1 s -   2 ms -   3 μs -   4 ns"
        );
        assert_eq!(fmt_nanos(0), "  0 s -   0 ms -   0 μs -   0 ns");
    }
}
