//! Finkern common - shared numeric conventions for the calculation kernels
//!
//! Every kernel crate builds on the same pieces:
//! - `KernelError`, the single error taxonomy all operations return
//! - Fixed-point scales and checked mul-div helpers (no floating point)

pub mod error;
pub mod math;
pub mod types;

pub use error::*;
pub use math::*;
pub use types::*;
