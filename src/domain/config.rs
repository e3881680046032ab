//! Analysis configuration
//!
//! Default parameters for encoding and spectral runs. Can be saved to and
//! loaded from a JSON file so a CLI session can reuse the same setup.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{LineCodeError, LineCodeResult};
use super::types::EncodingParameters;

fn default_samples_per_bit() -> usize {
    100
}

fn default_data_rate() -> f64 {
    1.0
}

fn default_num_bits() -> usize {
    10
}

fn default_fft_display_half() -> bool {
    false
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Samples per bit period (plot resolution)
    #[serde(default = "default_samples_per_bit")]
    pub samples_per_bit: usize,
    /// Bits per second
    #[serde(default = "default_data_rate")]
    pub data_rate: f64,
    /// Length of generated random bit sequences
    #[serde(default = "default_num_bits")]
    pub num_bits: usize,
    /// Keep only the lower half of the FFT bins in analysis results
    #[serde(default = "default_fft_display_half")]
    pub fft_display_half: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            samples_per_bit: default_samples_per_bit(),
            data_rate: default_data_rate(),
            num_bits: default_num_bits(),
            fft_display_half: default_fft_display_half(),
        }
    }
}

impl AnalysisConfig {
    /// Check the numeric fields and build the matching encoding parameters
    pub fn validate(&self) -> LineCodeResult<EncodingParameters> {
        if self.num_bits == 0 {
            return Err(LineCodeError::EmptyBits);
        }
        EncodingParameters::new(self.samples_per_bit, self.data_rate)
    }

    pub fn from_json_file(path: &Path) -> LineCodeResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            LineCodeError::Config(format!("Failed to read config '{}': {e}", path.display()))
        })?;
        let config: Self = serde_json::from_str(&json).map_err(|e| {
            LineCodeError::Config(format!("Failed to parse config '{}': {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_file(&self, path: &Path) -> LineCodeResult<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LineCodeError::Config(format!("Serialization error: {e}")))?;
        std::fs::write(path, json).map_err(|e| {
            LineCodeError::Config(format!("Failed to write config '{}': {e}", path.display()))
        })
    }
}
