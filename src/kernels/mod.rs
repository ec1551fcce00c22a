/// Weighting kernels
///
/// A kernel maps a window position (0 = newest sample) to the weight that
/// sample contributes to the filter output.
mod weighting;

use num_traits::NumCast;
use num_traits::float::FloatCore;

use crate::error::FilterError;

pub use weighting::Weighting;

/// Kernel callback signature for [`Kernel::Custom`]
pub type KernelFn<T> = fn(&KernelView<'_, T>, usize) -> T;

/// Read-only view of the filter state a kernel is allowed to consult
#[derive(Debug, Clone, Copy)]
pub struct KernelView<'a, T> {
    window_length: usize,
    params: &'a [T],
}

impl<'a, T> KernelView<'a, T>
where
    T: Copy,
{
    pub const fn new(window_length: usize, params: &'a [T]) -> Self {
        Self {
            window_length,
            params,
        }
    }

    pub const fn window_length(&self) -> usize {
        self.window_length
    }

    /// Kernel parameters attached to the filter (may be empty)
    pub const fn params(&self) -> &'a [T] {
        self.params
    }

    pub fn param(&self, index: usize) -> Option<T> {
        self.params.get(index).copied()
    }
}

/// Weighting kernel bound to a filter instance
#[derive(Clone, Copy)]
pub enum Kernel<T> {
    /// Unweighted average: every position weighs 1 / window_length
    SimpleAverage,

    /// Per-position weights taken from the parameter vector.
    /// Requires exactly window_length parameters.
    Weighted,

    /// Caller-supplied weighting function. May consult the parameter vector.
    Custom(KernelFn<T>),
}

impl<T> Kernel<T>
where
    T: FloatCore,
{
    /// Weight of window position `index`
    #[inline]
    pub fn weight(&self, view: &KernelView<'_, T>, index: usize) -> T {
        match self {
            Kernel::SimpleAverage => simple_average(view, index),
            Kernel::Weighted => view.param(index).unwrap_or_else(T::zero),
            Kernel::Custom(kernel) => kernel(view, index),
        }
    }

    /// Check that `params_len` parameters suit this kernel over a window of
    /// `window_length` samples.
    pub fn validate(&self, params_len: usize, window_length: usize) -> Result<(), FilterError> {
        match self {
            Kernel::Weighted if params_len != window_length => Err(FilterError::InvalidArgument),
            _ => Ok(()),
        }
    }

    /// Weighted sum of `window` (newest first)
    pub(crate) fn apply(&self, window: &[T], params: &[T]) -> T {
        let view = KernelView::new(window.len(), params);
        let mut sum = T::zero();
        for (i, &sample) in window.iter().enumerate() {
            sum = sum + sample * self.weight(&view, i);
        }
        sum
    }

    /// Sum of all weights over a window of `window_length` samples
    pub fn sum(&self, window_length: usize, params: &[T]) -> T {
        let view = KernelView::new(window_length, params);
        (0..window_length).fold(T::zero(), |acc, i| acc + self.weight(&view, i))
    }
}

impl<T> Default for Kernel<T> {
    fn default() -> Self {
        Kernel::SimpleAverage
    }
}

impl<T> core::fmt::Debug for Kernel<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Kernel::SimpleAverage => f.write_str("SimpleAverage"),
            Kernel::Weighted => f.write_str("Weighted"),
            Kernel::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Simple average kernel: `1 / window_length` for every index.
///
/// Usable directly as a [`KernelFn`].
pub fn simple_average<T>(view: &KernelView<'_, T>, _index: usize) -> T
where
    T: FloatCore,
{
    T::one() / from_count(view.window_length())
}

/// Convert a sample count to the float type.
///
/// Every usize is representable (possibly rounded) in f32/f64.
pub(crate) fn from_count<T>(count: usize) -> T
where
    T: FloatCore,
{
    <T as NumCast>::from(count).unwrap_or_else(T::infinity)
}
