#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

mod config;
mod error;
mod filter;
mod history;
pub mod kernels;
pub mod ops;

pub use config::Config;
pub use error::FilterError;
pub use filter::{Lifecycle, MovingAverage};
pub use kernels::{Kernel, KernelFn, KernelView, Weighting};
