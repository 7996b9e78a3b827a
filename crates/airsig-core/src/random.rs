//! Injectable randomness for the authentication simulator.

use std::fmt::Debug;

#[cfg(any(test, feature = "testing"))]
use std::sync::Mutex;

/// A source of uniformly distributed values in `[0, 1)`.
pub trait RandomSource: Send + Sync + Debug {
    fn uniform(&self) -> f64;
}

/// Thread-local RNG from `rand`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn uniform(&self) -> f64 {
        rand::random::<f64>()
    }
}

/// Replays a fixed sequence of values, cycling when exhausted.
#[cfg(any(test, feature = "testing"))]
#[derive(Debug)]
pub struct SequenceRandom {
    values: Vec<f64>,
    next: Mutex<usize>,
}

#[cfg(any(test, feature = "testing"))]
impl SequenceRandom {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "SequenceRandom needs at least one value");
        Self {
            values,
            next: Mutex::new(0),
        }
    }

    /// Always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

#[cfg(any(test, feature = "testing"))]
impl RandomSource for SequenceRandom {
    fn uniform(&self) -> f64 {
        let mut next = self.next.lock().unwrap();
        let value = self.values[*next % self.values.len()];
        *next += 1;
        value
    }
}
