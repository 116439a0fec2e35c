//! Look-ahead yaw smoothing for relative Bezier paths.
//!
//! The tangent heading of a Bezier path is a one-tic finite difference and
//! jitters where the curve is nearly straight. [`AngleBuffer`] keeps a
//! sliding window of yaw samples centered on the current tic (half of it in
//! the future) and the session replaces the tic's yaw with their mean.

use crate::path;
use crate::profile::CameraProfile;
use crate::session::SessionState;

/// Ring buffer of yaw samples with an incrementally maintained sum.
///
/// `sum` always equals the sum of `values`: it is rebuilt on a refill and
/// otherwise adjusted by exactly the outgoing and incoming sample.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleBuffer {
    values: Vec<f32>,
    /// Next slot to overwrite, which holds the oldest sample.
    index: usize,
    sum: f32,
}

impl AngleBuffer {
    /// Zeroed buffer with `len` slots. `len` must be non-zero.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            values: vec![0.0; len],
            index: 0,
            sum: 0.0,
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the buffer has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Stored samples, in slot order.
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Slot the next [`AngleBuffer::push`] overwrites.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Running sum of all samples.
    #[must_use]
    pub fn sum(&self) -> f32 {
        self.sum
    }

    /// Mean of all samples.
    #[must_use]
    pub fn average(&self) -> f32 {
        self.sum / self.values.len() as f32
    }

    /// How many tics ahead of the current one the newest sample lies.
    #[must_use]
    pub fn lookahead(&self) -> f32 {
        (self.values.len() / 2) as f32
    }

    /// Refill every slot, newest last.
    ///
    /// `sample` is called with `newest, newest - 1, ...` and its results are
    /// stored from the last slot down to the first, so slot 0 ends up with
    /// the oldest sample and is the first to be evicted.
    pub fn refill(&mut self, newest: f32, mut sample: impl FnMut(f32) -> f32) {
        self.sum = 0.0;
        let mut t = newest;
        for slot in self.values.iter_mut().rev() {
            let value = sample(t);
            *slot = value;
            self.sum += value;
            t -= 1.0;
        }
        self.index = 0;
    }

    /// Replace the oldest sample with `value`.
    pub fn push(&mut self, value: f32) {
        if self.values.is_empty() {
            return;
        }
        self.sum -= self.values[self.index];
        self.sum += value;
        self.values[self.index] = value;
        self.index = (self.index + 1) % self.values.len();
    }

    /// Bring the window up to date for tic `t`.
    ///
    /// On the first active tic (`state.was_active` unset) the whole window
    /// is sampled; afterwards only the one new sample at `t + lookahead`.
    /// Samples come from the unbuffered path with overshoot forced on, since
    /// the look-ahead runs past the end of the path.
    pub fn advance(
        &mut self,
        profile: &CameraProfile,
        t: f32,
        state: &mut SessionState,
    ) {
        let newest = t + self.lookahead();
        if state.was_active {
            let value = path::evaluate(profile, newest, true, state).pose.yaw;
            self.push(value);
        } else {
            self.refill(newest, |at| {
                path::evaluate(profile, at, true, state).pose.yaw
            });
        }
    }
}
