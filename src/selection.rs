use log::debug;

use crate::utilities::float::Float;

///
/// Bounded-candidate median selection.
///
/// For a window of `n` samples only the `n/2 + 1` smallest ones are kept. Once
/// the buffer is full, a sample is admitted only if it is smaller than the
/// largest candidate, which it then replaces. After the last sample the largest
/// candidate is the upper median; for even `n` the two largest candidates are
/// averaged. No sort is performed, which keeps small windows cheap to recompute.
///
#[derive(Clone, Debug)]
pub struct CandidateBuffer<T: Float>
{
    candidates: Vec<T>,
    /// Number of samples in the current window.
    window_len: usize,
    /// Number of candidates kept for the current window.
    keep: usize,
    /// Largest candidate.
    max: T,
}

impl<T: Float> CandidateBuffer<T>
{
    ///
    /// `capacity` should be the largest window that will be presented, so that
    /// `reset` never has to grow the buffer. A capacity that cannot be allocated
    /// is not an error: the buffer then grows to the size of each window instead.
    ///
    pub fn with_capacity(capacity: usize) -> Self
    {
        let mut candidates = Vec::new();
        if candidates.try_reserve_exact(capacity).is_err()
        {
            debug!("candidate buffer of {capacity} samples not preallocated");
        }
        Self { candidates, window_len: 0, keep: 0, max: T::neg_infinity() }
    }

    ///
    /// Starts a new window of `window_len` samples.
    ///
    pub fn reset(&mut self, window_len: usize)
    {
        self.window_len = window_len;
        self.keep = window_len / 2 + 1;
        self.max = T::neg_infinity();
        self.candidates.clear();
        self.candidates.reserve(self.keep);
    }

    ///
    /// Presents the next sample of the window.
    ///
    #[inline]
    pub fn offer(&mut self, value: T)
    {
        if self.candidates.len() < self.keep
        {
            self.candidates.push(value);
            if value > self.max
            {
                self.max = value;
            }
        }
        else if value < self.max
        {
            let max = self.max;
            if let Some(slot) = self.candidates.iter_mut().find(|c| **c == max)
            {
                *slot = value;
            }
            self.max = self.candidates.iter().fold(T::neg_infinity(), |m, &c| if c > m { c } else { m });
        }
    }

    pub fn len(&self) -> usize
    {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.candidates.is_empty()
    }

    ///
    /// Median of the samples offered since the last `reset`.
    ///
    pub fn median(&self) -> T
    {
        debug_assert!(self.window_len > 0, "median of an empty window");
        if self.window_len & 1 == 1
        {
            return self.max;
        }
        let mut largest = T::neg_infinity();
        let mut second = T::neg_infinity();
        for &c in &self.candidates
        {
            if c > largest
            {
                second = largest;
                largest = c;
            }
            else if c > second
            {
                second = c;
            }
        }
        T::midpoint(largest, second)
    }
}
