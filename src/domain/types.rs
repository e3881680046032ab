//! Core domain types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{LineCodeError, LineCodeResult};

/// Ordered sequence of binary values, guaranteed non-empty and 0/1 only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct BitSequence(Vec<u8>);

impl BitSequence {
    /// Validate raw bit values
    pub fn new(bits: Vec<u8>) -> LineCodeResult<Self> {
        if bits.is_empty() {
            return Err(LineCodeError::EmptyBits);
        }
        if let Some(index) = bits.iter().position(|&b| b > 1) {
            return Err(LineCodeError::NonBinaryBit {
                index,
                value: bits[index],
            });
        }
        Ok(Self(bits))
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed sequence
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().map(|&b| b == 1)
    }

    /// Repeat each bit `samples_per_bit` times, as reals (the "original" trace)
    pub fn upsample(&self, samples_per_bit: usize) -> Vec<f64> {
        self.0
            .iter()
            .flat_map(|&b| std::iter::repeat(f64::from(b)).take(samples_per_bit))
            .collect()
    }
}

impl TryFrom<Vec<u8>> for BitSequence {
    type Error = LineCodeError;

    fn try_from(bits: Vec<u8>) -> LineCodeResult<Self> {
        Self::new(bits)
    }
}

impl From<BitSequence> for Vec<u8> {
    fn from(bits: BitSequence) -> Self {
        bits.0
    }
}

/// Parses "1011", "1 0 1 1" or "1,0,1,1". Separators are ignored.
impl FromStr for BitSequence {
    type Err = LineCodeError;

    fn from_str(s: &str) -> LineCodeResult<Self> {
        let bits = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',' && *c != '_')
            .map(|c| match c {
                '0' => Ok(0),
                '1' => Ok(1),
                other => Err(LineCodeError::InvalidBitChar(other)),
            })
            .collect::<LineCodeResult<Vec<u8>>>()?;
        Self::new(bits)
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{b}")?;
        }
        Ok(())
    }
}

/// Sample-level resolution and bit rate of an encoding run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EncodingParameters {
    /// Samples used to draw one bit period
    pub samples_per_bit: usize,
    /// Bits per second
    pub data_rate: f64,
}

impl EncodingParameters {
    pub fn new(samples_per_bit: usize, data_rate: f64) -> LineCodeResult<Self> {
        check_samples_per_bit(samples_per_bit)?;
        if !(data_rate.is_finite() && data_rate > 0.0) {
            return Err(LineCodeError::InvalidDataRate(data_rate));
        }
        let params = Self {
            samples_per_bit,
            data_rate,
        };
        // fs = samples_per_bit * data_rate must stay finite for the frequency axes
        if !params.sampling_rate().is_finite() {
            return Err(LineCodeError::InvalidDataRate(data_rate));
        }
        Ok(params)
    }

    /// Simulation sampling rate in Hz
    pub fn sampling_rate(&self) -> f64 {
        self.samples_per_bit as f64 * self.data_rate
    }

    pub fn total_samples(&self, bits: &BitSequence) -> usize {
        bits.len() * self.samples_per_bit
    }
}

pub(crate) fn check_samples_per_bit(samples_per_bit: usize) -> LineCodeResult<()> {
    if samples_per_bit == 0 {
        return Err(LineCodeError::InvalidSamplesPerBit(samples_per_bit));
    }
    Ok(())
}

/// Encoded waveform, one real sample per simulation tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signal(Vec<f64>);

impl Signal {
    pub fn new(samples: Vec<f64>) -> Self {
        Self(samples)
    }

    pub fn samples(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every sample is zero (no spectral energy)
    pub fn is_silent(&self) -> bool {
        self.0.iter().all(|&s| s == 0.0)
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

/// Supported line codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EncodingScheme {
    /// Non-Return-to-Zero-Level
    #[serde(rename = "nrz_l")]
    NrzL,
    /// Polar Return-to-Zero
    #[serde(rename = "rz")]
    Rz,
    #[serde(rename = "manchester")]
    Manchester,
    /// Alternate Mark Inversion
    #[serde(rename = "ami")]
    Ami,
}

impl EncodingScheme {
    /// Every scheme, in display order
    pub const ALL: [EncodingScheme; 4] = [
        EncodingScheme::NrzL,
        EncodingScheme::Rz,
        EncodingScheme::Manchester,
        EncodingScheme::Ami,
    ];

    /// Key used in serialized results
    pub fn name(&self) -> &'static str {
        match self {
            EncodingScheme::NrzL => "nrz_l",
            EncodingScheme::Rz => "rz",
            EncodingScheme::Manchester => "manchester",
            EncodingScheme::Ami => "ami",
        }
    }
}

impl fmt::Display for EncodingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EncodingScheme {
    type Err = LineCodeError;

    fn from_str(s: &str) -> LineCodeResult<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "nrz_l" | "nrzl" | "nrz" => Ok(EncodingScheme::NrzL),
            "rz" => Ok(EncodingScheme::Rz),
            "manchester" => Ok(EncodingScheme::Manchester),
            "ami" => Ok(EncodingScheme::Ami),
            _ => Err(LineCodeError::UnknownScheme(s.to_string())),
        }
    }
}
