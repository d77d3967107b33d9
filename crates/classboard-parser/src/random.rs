//! Randomness used for initial class placement.
//!
//! XMI documents rarely carry usable geometry, so imported classes are
//! scattered over the canvas. The draws go through [`RandomSource`] so that
//! callers and tests can make the layout reproducible.

use rand::{
    Rng, SeedableRng,
    rngs::{StdRng, ThreadRng},
};

use classboard_core::geometry::{Point, Size};

/// A source of uniformly distributed values in `[0, 1)`.
pub trait RandomSource {
    /// Returns the next value in `[0, 1)`.
    fn next_unit(&mut self) -> f32;
}

/// Adapter turning any [`rand::Rng`] into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    /// Non-reproducible source backed by the thread-local generator.
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl RngSource<StdRng> {
    /// Reproducible source: the same seed always yields the same layout.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// An empty list always yields `0.0`.
///
/// # Examples
///
/// ```
/// # use classboard_parser::random::{FixedSequence, RandomSource};
/// let mut source = FixedSequence::new(vec![0.25, 0.5]);
/// assert_eq!(source.next_unit(), 0.25);
/// assert_eq!(source.next_unit(), 0.5);
/// assert_eq!(source.next_unit(), 0.25);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixedSequence {
    values: Vec<f32>,
    next: usize,
}

impl FixedSequence {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values, next: 0 }
    }
}

impl RandomSource for FixedSequence {
    fn next_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

/// Draws a position inside `canvas`: x first, then y, each from its own draw.
pub fn draw_position(source: &mut dyn RandomSource, canvas: Size) -> Point {
    let x = source.next_unit() * canvas.width();
    let y = source.next_unit() * canvas.height();
    Point::new(x, y)
}
