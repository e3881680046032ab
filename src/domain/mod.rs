//! Core domain types
//!
//! Pure types with no I/O dependencies beyond config file loading. These
//! represent bits, signals, spectra and the errors that can occur.

pub mod config;
pub mod error;
pub mod spectrum;
pub mod types;

pub use config::*;
pub use error::*;
pub use spectrum::*;
pub use types::*;
