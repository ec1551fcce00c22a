//! Built-in weight profiles.
//!
//! A [`Weighting`] is materialized into a normalized parameter vector and
//! installed as a [`Kernel::Weighted`] kernel.

use core::marker::PhantomData;

use heapless::Vec;
use num_traits::float::FloatCore;

use super::{Kernel, from_count};
use crate::error::FilterError;

/// Weight profile over the window. Position 0 is the newest sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Weighting<T> {
    /// Equal weight 1/N everywhere (installs [`Kernel::SimpleAverage`])
    SimpleAverage(PhantomData<T>),

    /// Triangular weights (N - i), newest heaviest
    Linear,

    /// alpha * (1 - alpha)^i, truncated to the window and renormalized
    /// Higher alpha = more weight on recent samples
    /// Requires: 0.0 < alpha <= 1.0
    #[cfg(feature = "kernel-exponential")]
    Exponential { alpha: T },

    /// exp(-0.5 * (i / sigma)^2), renormalized
    /// Requires: sigma > 0.0 and `kernel-gaussian` feature
    #[cfg(feature = "kernel-gaussian")]
    Gaussian { sigma: T },
}

impl<T> Weighting<T> {
    pub const fn simple_average() -> Self {
        Weighting::SimpleAverage(PhantomData)
    }
}

impl<T> Default for Weighting<T> {
    fn default() -> Self {
        Self::simple_average()
    }
}

impl<T> Weighting<T>
where
    T: FloatCore,
{
    /// Validate weighting parameters
    pub fn validate(&self) -> Result<(), &'static str> {
        match self {
            Weighting::SimpleAverage(_) | Weighting::Linear => Ok(()),

            #[cfg(feature = "kernel-exponential")]
            Weighting::Exponential { alpha } => {
                if !(*alpha > T::zero() && *alpha <= T::one()) {
                    return Err("Exponential alpha must be in range (0.0, 1.0]");
                }
                Ok(())
            }

            #[cfg(feature = "kernel-gaussian")]
            Weighting::Gaussian { sigma } => {
                if !(*sigma > T::zero()) || !sigma.is_finite() {
                    return Err("Gaussian sigma must be finite and > 0.0");
                }
                Ok(())
            }
        }
    }

    /// Write the weights for a window of `window_length` samples into
    /// `weights` and return the kernel that consumes them.
    ///
    /// `weights` is left empty for [`Weighting::SimpleAverage`].
    pub(crate) fn generate<const N: usize>(
        &self,
        window_length: usize,
        weights: &mut Vec<T, N>,
    ) -> Result<Kernel<T>, FilterError> {
        self.validate().map_err(|_| FilterError::InvalidArgument)?;
        if window_length > N {
            return Err(FilterError::AllocationFailure);
        }

        weights.clear();

        match self {
            Weighting::SimpleAverage(_) => return Ok(Kernel::SimpleAverage),

            Weighting::Linear => {
                for i in 0..window_length {
                    push(weights, from_count(window_length - i))?;
                }
            }

            #[cfg(feature = "kernel-exponential")]
            Weighting::Exponential { alpha } => {
                let decay = T::one() - *alpha;
                let mut weight = *alpha;
                for _ in 0..window_length {
                    push(weights, weight)?;
                    weight = weight * decay;
                }
            }

            #[cfg(feature = "kernel-gaussian")]
            Weighting::Gaussian { sigma } => {
                let half = T::one() / from_count(2);
                for i in 0..window_length {
                    let x = from_count::<T>(i) / *sigma;
                    push(weights, gaussian(-(half * x * x))?)?;
                }
            }
        }

        normalize(weights)?;
        Ok(Kernel::Weighted)
    }
}

fn push<T, const N: usize>(weights: &mut Vec<T, N>, weight: T) -> Result<(), FilterError> {
    weights.push(weight).map_err(|_| FilterError::AllocationFailure)
}

/// Scale weights so they sum to 1
fn normalize<T>(weights: &mut [T]) -> Result<(), FilterError>
where
    T: FloatCore,
{
    let total = weights.iter().fold(T::zero(), |acc, &w| acc + w);
    if !(total > T::zero()) || !total.is_finite() {
        return Err(FilterError::InvalidArgument);
    }

    for weight in weights.iter_mut() {
        *weight = *weight / total;
    }
    Ok(())
}

/// e^exponent, evaluated in f64 using libm
#[cfg(feature = "kernel-gaussian")]
fn gaussian<T>(exponent: T) -> Result<T, FilterError>
where
    T: FloatCore,
{
    let exponent = exponent.to_f64().ok_or(FilterError::InvalidArgument)?;
    <T as num_traits::NumCast>::from(libm::exp(exponent)).ok_or(FilterError::InvalidArgument)
}
