//! Orchestration: bits → all four line codes → spectra
//!
//! Entry points take raw bit values the way a caller sends them and validate
//! everything before any encoding starts. Each scheme's analysis only touches
//! its own signal, so the four run on scoped threads.

use std::collections::BTreeMap;
use std::thread;

use crate::domain::types::check_samples_per_bit;
use crate::domain::{
    AnalysisConfig, BitSequence, EncodingParameters, EncodingScheme, LineCodeResult, Signal,
    SpectralSummary, WaveformView,
};
use crate::linecode::LineEncoder;
use crate::spectral::analyze;

/// Post-processing applied to analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalysisOptions {
    /// Keep only the lower half of `frequencies_fft`/`magnitude` (lighter plots)
    pub fft_display_half: bool,
}

impl From<&AnalysisConfig> for AnalysisOptions {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            fft_display_half: config.fft_display_half,
        }
    }
}

/// Encode `bits` with every scheme
pub fn run_encoding_only(
    bits: &[u8],
    samples_per_bit: usize,
) -> LineCodeResult<BTreeMap<EncodingScheme, Signal>> {
    let bits = BitSequence::new(bits.to_vec())?;
    check_samples_per_bit(samples_per_bit)?;
    encode_all(&bits, samples_per_bit)
}

/// Encode `bits` with every scheme and analyze each signal
pub fn run_full_analysis(
    bits: &[u8],
    samples_per_bit: usize,
    data_rate: f64,
) -> LineCodeResult<BTreeMap<EncodingScheme, SpectralSummary>> {
    let bits = BitSequence::new(bits.to_vec())?;
    let params = EncodingParameters::new(samples_per_bit, data_rate)?;
    analyze_all(&bits, &params, &AnalysisOptions::default())
}

/// Time-domain plot data: time axis, upsampled input and all four waveforms
pub fn waveform_view(
    bits: &[u8],
    samples_per_bit: usize,
    data_rate: f64,
) -> LineCodeResult<WaveformView> {
    let bits = BitSequence::new(bits.to_vec())?;
    let params = EncodingParameters::new(samples_per_bit, data_rate)?;
    build_waveform_view(&bits, &params)
}

/// Encode validated bits with every scheme, keyed by scheme
pub fn encode_all(
    bits: &BitSequence,
    samples_per_bit: usize,
) -> LineCodeResult<BTreeMap<EncodingScheme, Signal>> {
    let encoder = LineEncoder::new(samples_per_bit)?;
    Ok(EncodingScheme::ALL
        .iter()
        .map(|&scheme| (scheme, encoder.encode(bits, scheme)))
        .collect())
}

/// Encode and analyze every scheme, then apply `options` to each summary
pub fn analyze_all(
    bits: &BitSequence,
    params: &EncodingParameters,
    options: &AnalysisOptions,
) -> LineCodeResult<BTreeMap<EncodingScheme, SpectralSummary>> {
    let signals = encode_all(bits, params.samples_per_bit)?;
    log::debug!(
        "analyzing {} bits at {} samples/bit, fs = {} Hz",
        bits.len(),
        params.samples_per_bit,
        params.sampling_rate()
    );

    let params = *params;
    let summaries = thread::scope(|scope| {
        let handles: Vec<_> = signals
            .iter()
            .map(|(&scheme, signal)| {
                if signal.is_silent() {
                    log::warn!("{scheme} signal is silent; spectra stay at zero");
                }
                (scheme, scope.spawn(move || analyze(signal, &params)))
            })
            .collect();

        handles
            .into_iter()
            .map(|(scheme, handle)| {
                let summary = handle
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
                log::debug!(
                    "{scheme}: bw90 = {:.3} Hz, dc = {:.2}%",
                    summary.metrics.bandwidth_90,
                    summary.metrics.dc_component
                );
                (scheme, summary)
            })
            .collect::<BTreeMap<_, _>>()
    });

    Ok(summaries
        .into_iter()
        .map(|(scheme, summary)| (scheme, apply_options(summary, options)))
        .collect())
}

/// Waveform plot data for already validated bits and parameters
pub fn build_waveform_view(
    bits: &BitSequence,
    params: &EncodingParameters,
) -> LineCodeResult<WaveformView> {
    let encoder = LineEncoder::new(params.samples_per_bit)?;

    let total = params.total_samples(bits);
    let step = 1.0 / params.sampling_rate();
    let time = (0..total).map(|i| i as f64 * step).collect();

    Ok(WaveformView {
        time,
        original: bits.upsample(params.samples_per_bit),
        nrz_l: encoder.encode(bits, EncodingScheme::NrzL),
        rz: encoder.encode(bits, EncodingScheme::Rz),
        manchester: encoder.encode(bits, EncodingScheme::Manchester),
        ami: encoder.encode(bits, EncodingScheme::Ami),
    })
}

fn apply_options(mut summary: SpectralSummary, options: &AnalysisOptions) -> SpectralSummary {
    if options.fft_display_half {
        let keep = summary.frequencies_fft.len() / 2;
        summary.frequencies_fft.truncate(keep);
        summary.magnitude.truncate(keep);
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LineCodeError;

    #[test]
    fn empty_bits_are_rejected_by_both_entry_points() {
        assert_eq!(run_encoding_only(&[], 4), Err(LineCodeError::EmptyBits));
        assert_eq!(run_full_analysis(&[], 4, 1.0), Err(LineCodeError::EmptyBits));
        assert_eq!(waveform_view(&[], 4, 1.0), Err(LineCodeError::EmptyBits));
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        assert_eq!(
            run_encoding_only(&[1, 0], 0),
            Err(LineCodeError::InvalidSamplesPerBit(0))
        );
        assert!(matches!(
            run_full_analysis(&[1, 0], 4, -1.0),
            Err(LineCodeError::InvalidDataRate(_))
        ));
        assert_eq!(
            run_full_analysis(&[1, 7], 4, 1.0),
            Err(LineCodeError::NonBinaryBit { index: 1, value: 7 })
        );
    }

    #[test]
    fn encoding_only_covers_every_scheme() {
        let signals = run_encoding_only(&[1, 0, 1, 1], 4).unwrap();
        assert_eq!(signals.keys().copied().collect::<Vec<_>>(), EncodingScheme::ALL);
        assert!(signals.values().all(|s| s.len() == 16));
    }

    #[test]
    fn display_half_truncates_fft_arrays_together() {
        let bits = BitSequence::new(vec![1, 0, 0, 1, 0, 1]).unwrap();
        let params = EncodingParameters::new(10, 1.0).unwrap();

        let full = analyze_all(&bits, &params, &AnalysisOptions::default()).unwrap();
        let half = analyze_all(
            &bits,
            &params,
            &AnalysisOptions {
                fft_display_half: true,
            },
        )
        .unwrap();

        for scheme in EncodingScheme::ALL {
            let (f, h) = (&full[&scheme], &half[&scheme]);
            assert_eq!(f.frequencies_fft.len(), 30);
            assert_eq!(h.frequencies_fft.len(), 15);
            assert_eq!(h.magnitude.len(), 15);
            assert_eq!(h.magnitude[..], f.magnitude[..15]);
            assert_eq!(h.psd, f.psd);
            assert_eq!(h.metrics, f.metrics);
        }
    }

    #[test]
    fn waveform_view_builds_time_axis() {
        let view = waveform_view(&[1, 0], 4, 2.0).unwrap();
        assert_eq!(view.time, vec![0.0, 0.125, 0.25, 0.375, 0.5, 0.625, 0.75, 0.875]);
        assert_eq!(view.original, vec![1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(view.nrz_l.samples(), &[1.0, 1.0, 1.0, 1.0, -1.0, -1.0, -1.0, -1.0]);
        assert_eq!(view.ami.samples(), &[1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn options_follow_config() {
        let config = AnalysisConfig {
            fft_display_half: true,
            ..AnalysisConfig::default()
        };
        assert!(AnalysisOptions::from(&config).fft_display_half);
    }
}
