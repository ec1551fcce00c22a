use heapless::Vec;

use crate::error::FilterError;

/// Which of the two history buffers holds the current window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    A,
    B,
}

impl Slot {
    const fn other(self) -> Self {
        match self {
            Slot::A => Slot::B,
            Slot::B => Slot::A,
        }
    }
}

/// Double-buffered sample history.
///
/// Both buffers always have the same length. The active one holds the window
/// (newest sample at index 0); the other is scratch space that is fully
/// overwritten by the next [`History::push`] before it becomes active.
/// RAM cost: 2 * N * size_of::<T>() bytes.
#[derive(Debug, Clone)]
pub struct History<T, const N: usize> {
    a: Vec<T, N>,
    b: Vec<T, N>,
    active: Slot,
}

impl<T, const N: usize> History<T, N>
where
    T: Copy,
{
    /// Empty history with no slots
    pub const fn new() -> Self {
        Self {
            a: Vec::new(),
            b: Vec::new(),
            active: Slot::A,
        }
    }

    /// Size both buffers to `len` slots set to `value` and make `A` active.
    ///
    /// On failure both buffers are left empty.
    pub fn allocate(&mut self, len: usize, value: T) -> Result<(), FilterError> {
        self.release();

        if len > N {
            return Err(FilterError::AllocationFailure);
        }

        let sized = self.a.resize(len, value).and_then(|_| self.b.resize(len, value));
        if sized.is_err() {
            self.release();
            return Err(FilterError::AllocationFailure);
        }

        Ok(())
    }

    /// Drop all samples from both buffers
    pub fn release(&mut self) {
        self.a.clear();
        self.b.clear();
        self.active = Slot::A;
    }

    pub fn len(&self) -> usize {
        self.a.len()
    }

    /// Current window, newest sample first
    pub fn active(&self) -> &[T] {
        match self.active {
            Slot::A => &self.a,
            Slot::B => &self.b,
        }
    }

    /// Overwrite every slot of the active buffer
    pub fn fill(&mut self, value: T) {
        let active = match self.active {
            Slot::A => &mut self.a,
            Slot::B => &mut self.b,
        };
        active.fill(value);
    }

    /// Shift the window one position into the scratch buffer, insert `sample`
    /// at index 0 and make the scratch buffer active.
    ///
    /// The oldest sample falls off the end. Returns the new window.
    pub fn push(&mut self, sample: T) -> &[T] {
        let (old, new) = match self.active {
            Slot::A => (&self.a, &mut self.b),
            Slot::B => (&self.b, &mut self.a),
        };

        let len = new.len();
        if len > 0 {
            for i in (1..len).rev() {
                new[i] = old[i - 1];
            }
            new[0] = sample;
        }

        self.active = self.active.other();
        self.active()
    }
}
