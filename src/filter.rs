use heapless::Vec;
use num_traits::float::FloatCore;

use crate::config::Config;
use crate::error::FilterError;
use crate::history::History;
use crate::kernels::{Kernel, Weighting};

#[cfg(feature = "alloc")]
use alloc::boxed::Box;

/// Lifecycle of a filter instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Storage exists but `init` has not succeeded yet
    Uninitialized,
    Ready,
    /// Buffers released; every operation fails until re-initialized
    Destroyed,
}

/// Moving average filter over the last `window_length` samples.
///
/// History is double-buffered: each step copies the window shifted by one
/// position into the idle buffer, writes the new sample at index 0 and makes
/// that buffer active. The output is the kernel-weighted sum of the window.
///
/// `N` is the buffer capacity, the largest window the instance can hold.
/// RAM cost: 3 * N * size_of::<T>() bytes (two history buffers plus kernel
/// parameters).
#[derive(Debug, Clone)]
pub struct MovingAverage<const N: usize, T = f32> {
    history: History<T, N>,
    kernel: Kernel<T>,
    params: Vec<T, N>,
    lifecycle: Lifecycle,
}

impl<const N: usize, T> MovingAverage<N, T>
where
    T: FloatCore,
{
    /// Inert storage for caller-managed placement. Call [`init`](Self::init)
    /// before use; every other operation fails with `InvalidState` until then.
    pub const fn uninit() -> Self {
        Self {
            history: History::new(),
            kernel: Kernel::SimpleAverage,
            params: Vec::new(),
            lifecycle: Lifecycle::Uninitialized,
        }
    }

    /// Create a zero-filled simple-average filter over `window_length` samples
    pub fn new(window_length: usize) -> Result<Self, FilterError> {
        let mut filter = Self::uninit();
        filter.init(window_length)?;
        Ok(filter)
    }

    /// Heap-allocated variant of [`new`](Self::new)
    #[cfg(feature = "alloc")]
    pub fn boxed(window_length: usize) -> Result<Box<Self>, FilterError> {
        let mut filter = Box::new(Self::uninit());
        filter.init(window_length)?;
        Ok(filter)
    }

    /// Build a filter from a validated configuration
    pub fn from_config(config: &Config<T>) -> Result<Self, FilterError> {
        config.validate(N)?;

        let mut filter = Self::new(config.window_length)?;
        filter.set_weighting(config.weighting)?;
        filter.fill(config.initial_value)?;
        Ok(filter)
    }

    /// (Re)initialize this storage: zero-filled buffers of `window_length`
    /// slots, simple-average kernel, no kernel parameters.
    ///
    /// A rejected length leaves the instance unchanged.
    pub fn init(&mut self, window_length: usize) -> Result<(), FilterError> {
        if window_length == 0 {
            return Err(FilterError::InvalidArgument);
        }
        if window_length > N {
            return Err(FilterError::AllocationFailure);
        }

        if let Err(err) = self.history.allocate(window_length, T::zero()) {
            self.teardown(Lifecycle::Uninitialized);
            return Err(err);
        }

        self.kernel = Kernel::SimpleAverage;
        self.params.clear();
        self.lifecycle = Lifecycle::Ready;
        Ok(())
    }

    /// Release both buffers and any kernel parameters.
    ///
    /// Fails with `InvalidState` if the instance is not ready (including a
    /// second destroy), without touching it.
    pub fn destroy(&mut self) -> Result<(), FilterError> {
        self.ensure_ready()?;
        self.teardown(Lifecycle::Destroyed);
        Ok(())
    }

    /// Destroy a heap-allocated filter and free its storage.
    ///
    /// The box is freed even when the instance was already destroyed; the
    /// result reports whether buffers were still held.
    #[cfg(feature = "alloc")]
    pub fn release(mut filter: Box<Self>) -> Result<(), FilterError> {
        let result = filter.destroy();
        drop(filter);
        result
    }

    /// Overwrite the whole window with `value`.
    ///
    /// Use to seed the filter at a known steady state and avoid the startup
    /// ramp from zero.
    pub fn fill(&mut self, value: T) -> Result<(), FilterError> {
        self.ensure_ready()?;
        self.history.fill(value);
        Ok(())
    }

    /// Push `input` into the window and return the weighted sum
    pub fn step(&mut self, input: T) -> Result<T, FilterError> {
        self.ensure_ready()?;

        let window = self.history.push(input);
        Ok(self.kernel.apply(window, &self.params))
    }

    /// Filter a block of samples. `input` and `output` must have equal length.
    pub fn process(&mut self, input: &[T], output: &mut [T]) -> Result<(), FilterError> {
        self.ensure_ready()?;
        if input.len() != output.len() {
            return Err(FilterError::InvalidArgument);
        }

        for (sample, out) in input.iter().zip(output.iter_mut()) {
            *out = self.step(*sample)?;
        }
        Ok(())
    }

    /// Switch back to the unweighted average and drop kernel parameters
    pub fn set_simple_average(&mut self) -> Result<(), FilterError> {
        self.ensure_ready()?;
        self.kernel = Kernel::SimpleAverage;
        self.params.clear();
        Ok(())
    }

    /// Replace kernel and parameters together.
    ///
    /// On error the previous kernel configuration is kept.
    pub fn set_kernel(&mut self, kernel: Kernel<T>, params: &[T]) -> Result<(), FilterError> {
        self.ensure_ready()?;
        if params.len() > N {
            return Err(FilterError::AllocationFailure);
        }
        kernel.validate(params.len(), self.window_length())?;

        self.params.clear();
        self.params
            .extend_from_slice(params)
            .map_err(|_| FilterError::AllocationFailure)?;
        self.kernel = kernel;
        Ok(())
    }

    /// Install one of the built-in weight profiles
    pub fn set_weighting(&mut self, weighting: Weighting<T>) -> Result<(), FilterError> {
        self.ensure_ready()?;

        let mut weights = Vec::new();
        let kernel = weighting.generate(self.window_length(), &mut weights)?;

        self.kernel = kernel;
        self.params = weights;
        Ok(())
    }

    /// Current window, newest sample first
    pub fn window(&self) -> Result<&[T], FilterError> {
        self.ensure_ready()?;
        Ok(self.history.active())
    }

    /// Sum of the kernel weights over the window
    pub fn kernel_sum(&self) -> Result<T, FilterError> {
        self.ensure_ready()?;
        Ok(self.kernel.sum(self.window_length(), &self.params))
    }

    /// Window length, 0 when not ready
    pub fn window_length(&self) -> usize {
        self.history.len()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_ready(&self) -> bool {
        self.lifecycle == Lifecycle::Ready
    }

    pub fn kernel(&self) -> &Kernel<T> {
        &self.kernel
    }

    pub fn kernel_params(&self) -> &[T] {
        &self.params
    }

    fn ensure_ready(&self) -> Result<(), FilterError> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(FilterError::InvalidState)
        }
    }

    fn teardown(&mut self, lifecycle: Lifecycle) {
        self.history.release();
        self.params.clear();
        self.kernel = Kernel::SimpleAverage;
        self.lifecycle = lifecycle;
    }
}

impl<const N: usize, T> Default for MovingAverage<N, T>
where
    T: FloatCore,
{
    fn default() -> Self {
        Self::uninit()
    }
}
