//! Bounded history of displacement samples for the time-series plot.

use std::collections::VecDeque;

/// How many samples the plot keeps.
pub const HISTORY_CAPACITY: usize = 300;

/// FIFO ring of recent offset samples, oldest first.
///
/// Purely a plotting aid: it is not part of the physical state, and is
/// discarded when a drag begins or the simulation resets.
#[derive(Debug, Clone, Default)]
pub struct DisplacementHistory {
    samples: VecDeque<f64>,
}

impl DisplacementHistory {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Append a sample, evicting the oldest once at capacity.
    pub fn push(&mut self, offset: f64) {
        if self.samples.len() == HISTORY_CAPACITY {
            self.samples.pop_front();
        }
        self.samples.push_back(offset);
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples in insertion order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_order() {
        let mut history = DisplacementHistory::new();
        history.push(1.0);
        history.push(2.0);
        history.push(3.0);

        let samples: Vec<f64> = history.iter().collect();
        assert_eq!(samples, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_capacity_eviction() {
        let mut history = DisplacementHistory::new();
        for i in 0..HISTORY_CAPACITY + 10 {
            history.push(i as f64);
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        // The ten oldest samples were evicted.
        assert_eq!(history.iter().next(), Some(10.0));
    }

    #[test]
    fn test_clear() {
        let mut history = DisplacementHistory::new();
        history.push(1.0);
        history.clear();
        assert!(history.is_empty());
    }
}
