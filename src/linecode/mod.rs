//! Line coding
//!
//! Bit generation and NRZ-L / RZ / Manchester / AMI waveform encoding

pub mod bits;
pub mod encoder;

pub use bits::{random_bits, random_bits_with};
pub use encoder::{encode, LineEncoder};
