//! Free-function interface.
//!
//! Mirrors the methods on [`MovingAverage`] for hosts that hold filters as
//! optional handles. An absent instance fails with `InvalidArgument`.

use num_traits::float::FloatCore;

use crate::error::FilterError;
use crate::filter::MovingAverage;
use crate::kernels::Kernel;

#[cfg(feature = "alloc")]
use alloc::boxed::Box;

/// Heap-allocate a filter over `window_length` samples
#[cfg(feature = "alloc")]
pub fn create<const N: usize, T>(window_length: usize) -> Result<Box<MovingAverage<N, T>>, FilterError>
where
    T: FloatCore,
{
    MovingAverage::boxed(window_length)
}

/// Initialize caller-provided storage
pub fn initialize<const N: usize, T>(
    storage: Option<&mut MovingAverage<N, T>>,
    window_length: usize,
) -> Result<(), FilterError>
where
    T: FloatCore,
{
    present(storage)?.init(window_length)
}

pub fn destroy<const N: usize, T>(instance: Option<&mut MovingAverage<N, T>>) -> Result<(), FilterError>
where
    T: FloatCore,
{
    present(instance)?.destroy()
}

pub fn fill<const N: usize, T>(instance: Option<&mut MovingAverage<N, T>>, value: T) -> Result<(), FilterError>
where
    T: FloatCore,
{
    present(instance)?.fill(value)
}

pub fn step<const N: usize, T>(instance: Option<&mut MovingAverage<N, T>>, input: T) -> Result<T, FilterError>
where
    T: FloatCore,
{
    present(instance)?.step(input)
}

pub fn set_simple_average_kernel<const N: usize, T>(
    instance: Option<&mut MovingAverage<N, T>>,
) -> Result<(), FilterError>
where
    T: FloatCore,
{
    present(instance)?.set_simple_average()
}

pub fn set_kernel<const N: usize, T>(
    instance: Option<&mut MovingAverage<N, T>>,
    kernel: Kernel<T>,
    params: &[T],
) -> Result<(), FilterError>
where
    T: FloatCore,
{
    present(instance)?.set_kernel(kernel, params)
}

fn present<I>(instance: Option<I>) -> Result<I, FilterError> {
    instance.ok_or(FilterError::InvalidArgument)
}
