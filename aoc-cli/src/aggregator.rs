//! Result aggregator for ordering parallel solver results
//!
//! Buffers and orders results for streaming output using two min-heaps:
//! - One for expected keys (what we're waiting for)
//! - One for received results (buffered until their turn)

use crate::executor::SolverResult;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Key for ordering results (year, day, part) - ordered ascending
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

/// Received result ordered by its key, smallest first in a max-heap
struct OrderedResult(SolverResult);

impl OrderedResult {
    fn key(&self) -> ResultKey {
        ResultKey::from(&self.0)
    }
}

impl Ord for OrderedResult {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.key().cmp(&self.key())
    }
}

impl PartialOrd for OrderedResult {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for OrderedResult {}

impl PartialEq for OrderedResult {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

/// Aggregator that buffers results and emits them in sorted order
pub struct ResultAggregator {
    /// Min-heap of expected keys (next to output is at top)
    expected: BinaryHeap<Reverse<ResultKey>>,
    /// Min-heap of received results waiting to be output
    pending: BinaryHeap<OrderedResult>,
}

impl ResultAggregator {
    /// Create aggregator from list of expected keys
    pub fn new(expected_keys: impl IntoIterator<Item = ResultKey>) -> Self {
        Self {
            expected: expected_keys.into_iter().map(Reverse).collect(),
            pending: BinaryHeap::new(),
        }
    }

    /// Add a result and return any results ready for output (in order)
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.pending.push(OrderedResult(result));

        let mut ready = Vec::new();
        while let Some(Reverse(next_expected)) = self.expected.peek()
            && self.pending.peek().is_some_and(|top| top.key() == *next_expected)
        {
            self.expected.pop();
            if let Some(OrderedResult(result)) = self.pending.pop() {
                ready.push(result);
            }
        }
        ready
    }

    /// Drain remaining results in order (for final output)
    pub fn drain(&mut self) -> Vec<SolverResult> {
        let mut results: Vec<_> = self.pending.drain().map(|o| o.0).collect();
        results.sort_by_key(|r| ResultKey::from(r));
        results
    }

    /// Check if all expected results have been received
    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use proptest::prelude::*;

    fn make_result(year: u16, day: u8, part: u8) -> SolverResult {
        SolverResult {
            year,
            day,
            part,
            answer: Ok(format!("{}_{}_{}", year, day, part)),
            solve_duration: TimeDelta::milliseconds(10),
            parse_duration: Some(TimeDelta::milliseconds(5)),
        }
    }

    fn key(year: u16, day: u8, part: u8) -> ResultKey {
        ResultKey { year, day, part }
    }

    #[test]
    fn test_in_order_results() {
        let mut agg = ResultAggregator::new([key(2015, 1, 1), key(2015, 1, 2)]);

        let ready = agg.add(make_result(2015, 1, 1));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].part, 1);

        let ready = agg.add(make_result(2015, 1, 2));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].part, 2);

        assert!(agg.is_complete());
    }

    #[test]
    fn test_out_of_order_results() {
        let mut agg = ResultAggregator::new([key(2015, 1, 1), key(2015, 1, 2), key(2015, 2, 1)]);

        // Waiting for 2015/1/1
        assert!(agg.add(make_result(2015, 1, 2)).is_empty());
        assert!(agg.add(make_result(2015, 2, 1)).is_empty());

        let ready = agg.add(make_result(2015, 1, 1));
        let keys: Vec<_> = ready.iter().map(ResultKey::from).collect();
        assert_eq!(keys, vec![key(2015, 1, 1), key(2015, 1, 2), key(2015, 2, 1)]);
        assert!(agg.is_complete());
    }

    #[test]
    fn test_drain_remaining() {
        let mut agg = ResultAggregator::new([key(2015, 1, 1), key(2015, 1, 2)]);

        agg.add(make_result(2015, 1, 2));

        let remaining = agg.drain();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].part, 2);
        assert!(!agg.is_complete());
    }

    proptest! {
        /// Any arrival order yields every result exactly once, sorted
        #[test]
        fn prop_any_arrival_order_is_sorted(order in Just((0..12usize).collect::<Vec<_>>()).prop_shuffle()) {
            let keys: Vec<ResultKey> = (0..12usize)
                .map(|i| key(2015 + (i / 6) as u16, (i % 6 / 2) as u8 + 1, (i % 2) as u8 + 1))
                .collect();
            let mut agg = ResultAggregator::new(keys.clone());

            let mut emitted = Vec::new();
            for i in order {
                let k = keys[i];
                emitted.extend(agg.add(make_result(k.year, k.day, k.part)).iter().map(ResultKey::from));
            }
            prop_assert!(agg.is_complete());
            prop_assert_eq!(emitted, keys);
        }
    }
}
