//! Digital Signal Processing
//!
//! Pure functions for signal processing. No I/O dependencies.

pub mod fft;
pub mod welch;

// Re-export commonly used items
pub use fft::{FftProcessor, OneSidedSpectrum};
pub use welch::{WelchEstimate, WelchPsd};
