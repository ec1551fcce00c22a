use num_traits::float::FloatCore;

use crate::error::FilterError;
use crate::kernels::Weighting;

/// Filter configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config<T = f32> {
    pub window_length: usize,
    pub weighting: Weighting<T>,
    /// Value the window is seeded with. 0.0 reproduces the startup ramp.
    pub initial_value: T,
}

impl<T> Config<T>
where
    T: FloatCore,
{
    /// Simple average over `window_length` zero-seeded samples
    pub fn new(window_length: usize) -> Self {
        Self {
            window_length,
            weighting: Weighting::simple_average(),
            initial_value: T::zero(),
        }
    }

    /// Check the configuration against a buffer capacity
    pub fn validate(&self, capacity: usize) -> Result<(), FilterError> {
        if self.window_length == 0 {
            return Err(FilterError::InvalidArgument);
        }

        // Window must fit in the history buffers
        if self.window_length > capacity {
            return Err(FilterError::AllocationFailure);
        }

        self.weighting
            .validate()
            .map_err(|_| FilterError::InvalidArgument)?;

        if !self.initial_value.is_finite() {
            return Err(FilterError::InvalidArgument);
        }

        Ok(())
    }
}
