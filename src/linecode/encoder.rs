//! Line encoder: converts a bit sequence to a sample-level waveform
//!
//! Each bit occupies a block of `samples_per_bit` samples. Every scheme is
//! described by the pair of levels it puts on the two halves of that block:
//!
//! | scheme     | bit 1     | bit 0     |
//! |------------|-----------|-----------|
//! | NRZ-L      | (+1, +1)  | (-1, -1)  |
//! | RZ         | (+1, 0)   | (-1, 0)   |
//! | Manchester | (-1, +1)  | (+1, -1)  |
//! | AMI        | (±1, ±1)  | (0, 0)    |
//!
//! The first half is `samples_per_bit / 2` samples (truncating), so with an
//! odd block the second half is one sample longer.
//!
//! AMI is the only scheme with memory: marks alternate polarity, starting
//! positive. The polarity lives in a `scan` accumulator scoped to one call.

use std::iter;

use crate::domain::types::check_samples_per_bit;
use crate::domain::{BitSequence, EncodingScheme, LineCodeResult, Signal};

/// Encode `bits` with `scheme`, drawing each bit with `samples_per_bit` samples
pub fn encode(
    bits: &BitSequence,
    scheme: EncodingScheme,
    samples_per_bit: usize,
) -> LineCodeResult<Signal> {
    Ok(LineEncoder::new(samples_per_bit)?.encode(bits, scheme))
}

/// Line encoder for a fixed block size
#[derive(Debug, Clone, Copy)]
pub struct LineEncoder {
    samples_per_bit: usize,
}

impl LineEncoder {
    pub fn new(samples_per_bit: usize) -> LineCodeResult<Self> {
        check_samples_per_bit(samples_per_bit)?;
        Ok(Self { samples_per_bit })
    }

    pub fn samples_per_bit(&self) -> usize {
        self.samples_per_bit
    }

    pub fn encode(&self, bits: &BitSequence, scheme: EncodingScheme) -> Signal {
        match scheme {
            EncodingScheme::NrzL => self.render(bits.iter().map(|bit| {
                let level = polar(bit);
                (level, level)
            })),
            EncodingScheme::Rz => self.render(bits.iter().map(|bit| (polar(bit), 0.0))),
            EncodingScheme::Manchester => self.render(bits.iter().map(|bit| {
                if bit {
                    (-1.0, 1.0)
                } else {
                    (1.0, -1.0)
                }
            })),
            EncodingScheme::Ami => self.render(bits.iter().scan(1.0, |polarity, bit| {
                let level = if bit {
                    let mark = *polarity;
                    *polarity = -mark;
                    mark
                } else {
                    0.0
                };
                Some((level, level))
            })),
        }
    }

    /// Expand per-bit (first half, second half) levels into samples
    fn render(&self, levels: impl Iterator<Item = (f64, f64)>) -> Signal {
        let first = self.samples_per_bit / 2;
        let second = self.samples_per_bit - first;

        let samples = levels
            .flat_map(|(a, b)| iter::repeat(a).take(first).chain(iter::repeat(b).take(second)))
            .collect();
        Signal::new(samples)
    }
}

fn polar(bit: bool) -> f64 {
    if bit {
        1.0
    } else {
        -1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LineCodeError;

    fn bits(values: &[u8]) -> BitSequence {
        BitSequence::new(values.to_vec()).unwrap()
    }

    fn encoded(values: &[u8], scheme: EncodingScheme, spb: usize) -> Vec<f64> {
        encode(&bits(values), scheme, spb).unwrap().into_inner()
    }

    #[test]
    fn test_nrz_l_known_sequence() {
        let signal = encoded(&[1, 0, 1, 1], EncodingScheme::NrzL, 4);
        let expected = [
            1.0, 1.0, 1.0, 1.0, -1.0, -1.0, -1.0, -1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
        ];
        assert_eq!(signal, expected);
    }

    #[test]
    fn test_ami_alternates_marks() {
        assert_eq!(encoded(&[1, 1], EncodingScheme::Ami, 2), [1.0, 1.0, -1.0, -1.0]);
    }

    #[test]
    fn test_ami_zeros_do_not_flip_polarity() {
        let signal = encoded(&[0, 1, 0, 0, 1, 1], EncodingScheme::Ami, 1);
        assert_eq!(signal, [0.0, 1.0, 0.0, 0.0, -1.0, 1.0]);
    }

    #[test]
    fn test_ami_all_zeros_is_silent() {
        let signal = encode(&bits(&[0, 0, 0]), EncodingScheme::Ami, 4).unwrap();
        assert_eq!(signal.len(), 12);
        assert!(signal.is_silent());
    }

    #[test]
    fn test_ami_state_does_not_leak_between_calls() {
        let input = bits(&[1, 0, 1]);
        let first = encode(&input, EncodingScheme::Ami, 3).unwrap();
        let second = encode(&input, EncodingScheme::Ami, 3).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.samples()[0], 1.0);
    }

    #[test]
    fn test_rz_returns_to_zero_mid_bit() {
        let signal = encoded(&[1, 0], EncodingScheme::Rz, 4);
        assert_eq!(signal, [1.0, 1.0, 0.0, 0.0, -1.0, -1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_manchester_transitions() {
        let signal = encoded(&[1, 0], EncodingScheme::Manchester, 4);
        assert_eq!(signal, [-1.0, -1.0, 1.0, 1.0, 1.0, 1.0, -1.0, -1.0]);
    }

    #[test]
    fn test_odd_block_gives_longer_second_half() {
        assert_eq!(encoded(&[1], EncodingScheme::Rz, 5), [1.0, 1.0, 0.0, 0.0, 0.0]);
        assert_eq!(
            encoded(&[0], EncodingScheme::Manchester, 5),
            [1.0, 1.0, -1.0, -1.0, -1.0]
        );
    }

    #[test]
    fn test_single_sample_per_bit_has_empty_first_half() {
        assert_eq!(encoded(&[1, 0], EncodingScheme::Rz, 1), [0.0, 0.0]);
        assert_eq!(encoded(&[1, 0], EncodingScheme::Manchester, 1), [1.0, -1.0]);
        assert_eq!(encoded(&[1, 0], EncodingScheme::NrzL, 1), [1.0, -1.0]);
    }

    #[test]
    fn test_every_scheme_has_expected_length_and_levels() {
        let input = bits(&[1, 0, 0, 1, 1, 1, 0, 1, 0, 0, 1]);
        for spb in [1, 2, 3, 7, 10] {
            for scheme in EncodingScheme::ALL {
                let signal = encode(&input, scheme, spb).unwrap();
                assert_eq!(signal.len(), input.len() * spb, "{scheme} at {spb}");
                assert!(
                    signal.samples().iter().all(|&s| s == 0.0 || s == 1.0 || s == -1.0),
                    "{scheme} produced a level outside {{-1, 0, 1}}"
                );
            }
        }
    }

    #[test]
    fn test_manchester_blocks_are_balanced() {
        let input = bits(&[1, 0, 1, 1, 0]);
        let spb = 6;
        let signal = encode(&input, EncodingScheme::Manchester, spb).unwrap();
        for block in signal.samples().chunks(spb) {
            assert_eq!(block.iter().sum::<f64>(), 0.0);
        }
    }

    #[test]
    fn test_zero_samples_per_bit_is_rejected() {
        assert_eq!(
            encode(&bits(&[1]), EncodingScheme::NrzL, 0),
            Err(LineCodeError::InvalidSamplesPerBit(0))
        );
    }
}
