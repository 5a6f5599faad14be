//! Fixed-capacity ring buffer for delay-line synthesis.
//!
//! All circular index arithmetic lives here. The buffer has a single cursor:
//! [`DelayLine::current`] reads at it, [`DelayLine::next`] reads one slot
//! ahead, and [`DelayLine::write_and_advance`] overwrites the cursor slot and
//! moves on. After `len()` advances the cursor is back where it started, so a
//! value written now is read again exactly one period later.

/// A ring buffer with a read/write cursor.
#[derive(Debug, Clone)]
pub struct DelayLine {
    buffer: Vec<f64>,
    pos: usize,
}

impl DelayLine {
    /// Smallest capacity a delay line may have.
    pub const MIN_LEN: usize = 2;

    /// Creates a silent delay line of `len` samples (at least [`Self::MIN_LEN`]).
    pub fn new(len: usize) -> Self {
        Self {
            buffer: vec![0.0; len.max(Self::MIN_LEN)],
            pos: 0,
        }
    }

    /// Creates a delay line holding `samples`, cursor at the first one.
    ///
    /// Shorter inputs are padded with zeros up to [`Self::MIN_LEN`].
    pub fn from_samples(mut samples: Vec<f64>) -> Self {
        if samples.len() < Self::MIN_LEN {
            samples.resize(Self::MIN_LEN, 0.0);
        }
        Self {
            buffer: samples,
            pos: 0,
        }
    }

    /// Capacity in samples.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Always false; the capacity is at least [`Self::MIN_LEN`].
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Sample at the cursor.
    #[inline]
    pub fn current(&self) -> f64 {
        self.buffer[self.pos]
    }

    /// Sample one slot past the cursor.
    #[inline]
    pub fn next(&self) -> f64 {
        self.buffer[self.wrap(self.pos + 1)]
    }

    /// Overwrites the cursor slot and advances the cursor.
    #[inline]
    pub fn write_and_advance(&mut self, sample: f64) {
        self.buffer[self.pos] = sample;
        self.pos = self.wrap(self.pos + 1);
    }

    #[inline]
    fn wrap(&self, index: usize) -> usize {
        if index >= self.buffer.len() {
            index - self.buffer.len()
        } else {
            index
        }
    }
}
