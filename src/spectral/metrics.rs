//! Spectral-efficiency metrics
//!
//! All figures come from one raw power spectrum |X[k]|^2 over the
//! non-negative bins, the same bins `fft_spectrum` reports.

use crate::domain::{EfficiencyMetrics, Signal};
use crate::dsp::OneSidedSpectrum;

/// Fraction of total power that defines the occupied bandwidth
pub const BANDWIDTH_POWER_FRACTION: f64 = 0.9;

/// Compute every efficiency figure for `signal`
pub fn metrics(signal: &Signal, data_rate: f64, sampling_rate: f64) -> EfficiencyMetrics {
    let spectrum = OneSidedSpectrum::compute(signal.samples(), sampling_rate);
    from_power(spectrum.frequencies(), &spectrum.power(), data_rate)
}

fn from_power(frequencies: &[f64], power: &[f64], data_rate: f64) -> EfficiencyMetrics {
    let total_power: f64 = power.iter().sum();
    let dc_power = power.first().copied().unwrap_or(0.0);
    let dc_component = if total_power > 0.0 {
        dc_power / total_power * 100.0
    } else {
        0.0
    };

    let bandwidth_90 = bandwidth_at(frequencies, power, total_power * BANDWIDTH_POWER_FRACTION);

    let spectral_efficiency = if bandwidth_90 > 0.0 {
        data_rate / bandwidth_90
    } else {
        0.0
    };

    let bandwidth_efficiency = if data_rate > 0.0 {
        bandwidth_90 / data_rate
    } else {
        0.0
    };

    EfficiencyMetrics {
        dc_component,
        bandwidth_90,
        spectral_efficiency,
        peak_frequency: peak_frequency(frequencies, power),
        bandwidth_efficiency,
        total_power,
    }
}

/// First frequency where cumulative power reaches `threshold`.
/// Falls back to the highest frequency when no bin gets there.
fn bandwidth_at(frequencies: &[f64], power: &[f64], threshold: f64) -> f64 {
    let mut cumulative = 0.0;
    for (&freq, &p) in frequencies.iter().zip(power) {
        cumulative += p;
        if threshold > 0.0 && cumulative >= threshold {
            return freq;
        }
    }
    frequencies.last().copied().unwrap_or(0.0)
}

/// Frequency of the strongest bin, skipping DC. First maximum wins; 0 if only DC exists.
fn peak_frequency(frequencies: &[f64], power: &[f64]) -> f64 {
    let mut best: Option<(usize, f64)> = None;
    for (k, &p) in power.iter().enumerate().skip(1) {
        if best.map_or(true, |(_, max)| p > max) {
            best = Some((k, p));
        }
    }
    best.map_or(0.0, |(k, _)| frequencies[k])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BitSequence, EncodingScheme};
    use crate::linecode::encode;

    fn signal(values: &[u8], scheme: EncodingScheme, spb: usize) -> Signal {
        encode(&BitSequence::new(values.to_vec()).unwrap(), scheme, spb).unwrap()
    }

    #[test]
    fn constant_nrz_is_all_dc() {
        let sig = signal(&[1, 1, 1, 1], EncodingScheme::NrzL, 4);
        let m = metrics(&sig, 1.0, 4.0);

        assert!((m.dc_component - 100.0).abs() < 1e-9);
        assert_eq!(m.bandwidth_90, 0.0);
        assert_eq!(m.spectral_efficiency, 0.0);
        assert_eq!(m.bandwidth_efficiency, 0.0);
        assert!((m.total_power - 256.0).abs() < 1e-9);
    }

    #[test]
    fn silent_signal_uses_fallbacks() {
        let sig = signal(&[0, 0, 0], EncodingScheme::Ami, 4);
        let m = metrics(&sig, 1.0, 4.0);

        assert_eq!(m.total_power, 0.0);
        assert_eq!(m.dc_component, 0.0);
        // 12 samples at 4 Hz: bins 0..=5, highest is 5 * 4/12
        assert!((m.bandwidth_90 - 5.0 / 3.0).abs() < 1e-12);
        assert!((m.spectral_efficiency - 0.6).abs() < 1e-12);
        assert!((m.bandwidth_efficiency - 5.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn manchester_has_no_dc_and_peaks_at_bit_rate() {
        // A run of ones makes Manchester a square wave at the bit rate
        let sig = signal(&[1, 1, 1, 1, 1, 1, 1, 1], EncodingScheme::Manchester, 8);
        let m = metrics(&sig, 1.0, 8.0);

        assert!(m.dc_component.abs() < 1e-9);
        assert!((m.peak_frequency - 1.0).abs() < 1e-12);
    }

    #[test]
    fn dc_and_non_dc_shares_partition_total_power() {
        let sig = signal(&[1, 0, 1, 1, 0, 1, 1, 1], EncodingScheme::Rz, 10);
        let spectrum = OneSidedSpectrum::compute(sig.samples(), 10.0);
        let power = spectrum.power();
        let m = metrics(&sig, 1.0, 10.0);

        let non_dc: f64 = power[1..].iter().sum::<f64>() / m.total_power * 100.0;
        assert!((m.dc_component + non_dc - 100.0).abs() < 1e-9);
    }

    #[test]
    fn bandwidth_is_first_bin_reaching_ninety_percent() {
        let freqs = [0.0, 1.0, 2.0, 3.0];
        let power = [10.0, 70.0, 15.0, 5.0];
        let m = from_power(&freqs, &power, 4.0);

        assert_eq!(m.bandwidth_90, 2.0);
        assert_eq!(m.spectral_efficiency, 2.0);
        assert_eq!(m.bandwidth_efficiency, 0.5);
        assert_eq!(m.peak_frequency, 1.0);
        assert!((m.dc_component - 10.0).abs() < 1e-9);
        assert_eq!(m.total_power, 100.0);
    }

    #[test]
    fn peak_skips_dc_and_prefers_first_maximum() {
        let freqs = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(peak_frequency(&freqs, &[100.0, 5.0, 7.0, 7.0]), 2.0);
        assert_eq!(peak_frequency(&[0.0], &[3.0]), 0.0);
    }

    #[test]
    fn zero_data_rate_gives_zero_bandwidth_efficiency() {
        let m = from_power(&[0.0, 1.0], &[1.0, 1.0], 0.0);
        assert_eq!(m.bandwidth_efficiency, 0.0);
        assert_eq!(m.spectral_efficiency, 0.0);
    }
}
