//! Stack store for the calculator
//!
//! A bounded sequence of complex values, newest on top. Pushing onto a full
//! stack evicts the oldest frame instead of failing, so the store always
//! holds the most recent `capacity` values in insertion order.

use num_complex::Complex64;
use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};
use std::collections::VecDeque;
use std::ops::Deref;

/// Default number of frames a stack can hold
pub const STACK_CAPACITY: usize = 256;

/// Widest argument window an operation may request
pub const MAX_ARGUMENTS: usize = 5;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);

/// Fixed-capacity stack of complex values
#[derive(Debug, Clone, PartialEq)]
pub struct Stack {
    /// Frames, bottom (oldest) at the front
    frames: VecDeque<Complex64>,
    /// Maximum number of live frames
    capacity: usize,
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

impl Stack {
    /// Create an empty stack with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(STACK_CAPACITY)
    }

    /// Create an empty stack holding at most `capacity` frames.
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Stack {
            frames: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of live frames
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.frames.len() >= self.capacity
    }

    /// Push a value, evicting the oldest frames while the stack is full.
    /// Returns the value just pushed.
    pub fn push(&mut self, value: Complex64) -> Complex64 {
        while self.is_full() {
            self.frames.pop_front();
        }
        self.frames.push_back(value);
        value
    }

    /// Copy the top `count` values, oldest of the set first.
    ///
    /// When the stack holds fewer than `count` values, the values it does
    /// hold fill the leading slots and the rest are zero, so `5 -` on a
    /// one-value stack computes `5 - 0`. Nothing is removed from the stack.
    ///
    /// # Panics
    ///
    /// Panics if `count` exceeds [`MAX_ARGUMENTS`].
    pub fn peek_arguments(&self, count: usize) -> Arguments {
        assert!(
            count <= MAX_ARGUMENTS,
            "peek_arguments: {} exceeds the argument window of {}",
            count,
            MAX_ARGUMENTS
        );
        let mut values = [ZERO; MAX_ARGUMENTS];
        let available = count.min(self.frames.len());
        let skip = self.frames.len() - available;
        for (slot, value) in values.iter_mut().zip(self.frames.iter().skip(skip)) {
            *slot = *value;
        }
        Arguments { values, len: count }
    }

    /// Remove up to `count` of the newest frames. Returns how many were removed.
    pub fn pop_frames(&mut self, count: usize) -> usize {
        let removed = count.min(self.frames.len());
        self.frames.truncate(self.frames.len() - removed);
        removed
    }

    /// Most recently pushed value
    pub fn top(&self) -> Option<Complex64> {
        self.frames.back().copied()
    }

    /// Value at `level`, where level 1 is the top of the stack
    pub fn level(&self, level: usize) -> Option<Complex64> {
        if level == 0 || level > self.frames.len() {
            return None;
        }
        self.frames.get(self.frames.len() - level).copied()
    }

    /// Iterate from the bottom (oldest) to the top (newest)
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Complex64> + ExactSizeIterator {
        self.frames.iter()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

/// Frames serialize bottom first as `[re, im]` pairs
impl Serialize for Stack {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.frames.iter().map(|z| Frame(*z)))
    }
}

struct Frame(Complex64);

impl Serialize for Frame {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&Component(self.0.re))?;
        pair.serialize_element(&Component(self.0.im))?;
        pair.end()
    }
}

/// One component. Non-finite values become `"inf"`, `"-inf"` or `"NaN"`
/// since JSON numbers cannot carry them.
struct Component(f64);

impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let x = self.0;
        if x.is_finite() {
            serializer.serialize_f64(x)
        } else if x.is_nan() {
            serializer.serialize_str("NaN")
        } else if x > 0.0 {
            serializer.serialize_str("inf")
        } else {
            serializer.serialize_str("-inf")
        }
    }
}

/// Argument window handed to an operation.
///
/// Slots past `len` are always zero and are not part of the slice view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arguments {
    values: [Complex64; MAX_ARGUMENTS],
    len: usize,
}

impl Arguments {
    /// The full buffer including the zeroed slots past `len`
    pub fn buffer(&self) -> &[Complex64; MAX_ARGUMENTS] {
        &self.values
    }
}

impl Deref for Arguments {
    type Target = [Complex64];

    fn deref(&self) -> &[Complex64] {
        &self.values[..self.len]
    }
}
