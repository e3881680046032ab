//! Random test-pattern generation

use rand::Rng;

use crate::domain::{BitSequence, LineCodeError, LineCodeResult};

/// `count` independent uniform draws from {0, 1}. Not suitable for cryptography.
pub fn random_bits(count: usize) -> LineCodeResult<BitSequence> {
    random_bits_with(&mut rand::thread_rng(), count)
}

/// Same as [`random_bits`] with a caller-supplied generator
pub fn random_bits_with<R: Rng + ?Sized>(rng: &mut R, count: usize) -> LineCodeResult<BitSequence> {
    if count == 0 {
        return Err(LineCodeError::EmptyBits);
    }
    let bits = (0..count).map(|_| rng.gen_range(0..=1u8)).collect();
    BitSequence::new(bits)
}
