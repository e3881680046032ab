//! Line-coding explorer command-line interface
//!
//! Generates bit patterns, encodes them with NRZ-L / RZ / Manchester / AMI
//! and prints waveforms or spectral summaries as JSON on stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;

use linecode_lib::domain::{
    AnalysisConfig, BitSequence, EncodingParameters, EncodingScheme, LineCodeError,
};
use linecode_lib::linecode::{encode, random_bits};
use linecode_lib::pipeline::{analyze_all, build_waveform_view, AnalysisOptions};

#[derive(Parser)]
#[command(name = "linecode")]
#[command(author, version, about = "Line-coding waveform and spectrum explorer", long_about = None)]
struct Cli {
    /// JSON configuration file (defaults apply to missing fields)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random bit sequence
    Generate {
        /// Number of bits (overrides the configuration)
        #[arg(short, long)]
        num_bits: Option<usize>,
    },

    /// Encode bits and print time-domain waveforms
    Encode {
        #[command(flatten)]
        input: InputArgs,

        /// Print only this scheme's samples (nrz_l, rz, manchester, ami)
        #[arg(long)]
        scheme: Option<EncodingScheme>,
    },

    /// Encode bits and print spectra and efficiency metrics per scheme
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        /// Keep only the lower half of the FFT bins
        #[arg(long)]
        half: bool,
    },
}

#[derive(clap::Args)]
struct InputArgs {
    /// Bits such as "1011" or "1,0,1,1"; random bits are used when omitted
    #[arg(short, long)]
    bits: Option<BitSequence>,

    /// Samples per bit (overrides the configuration)
    #[arg(short, long)]
    samples_per_bit: Option<usize>,

    /// Data rate in bits/second (overrides the configuration)
    #[arg(short, long)]
    data_rate: Option<f64>,
}

#[derive(Serialize)]
struct GeneratedBits {
    bits: BitSequence,
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::from(exit_status(e.as_ref()))
        }
    }
}

/// 2 for rejected input (same as clap's usage errors), 1 for everything else
fn exit_status(err: &(dyn std::error::Error + 'static)) -> u8 {
    match err.downcast_ref::<LineCodeError>() {
        Some(e) if e.is_invalid_input() => 2,
        _ => 1,
    }
}

fn run(cli: &Cli) -> CliResult<String> {
    let config = match &cli.config {
        Some(path) => AnalysisConfig::from_json_file(path)?,
        None => AnalysisConfig::default(),
    };

    match &cli.command {
        Commands::Generate { num_bits } => {
            let bits = random_bits(num_bits.unwrap_or(config.num_bits))?;
            log::info!("generated {} bits", bits.len());
            to_json(&GeneratedBits { bits }, cli.pretty)
        }
        Commands::Encode { input, scheme } => {
            let (bits, params) = resolve_input(input, &config)?;
            match scheme {
                Some(scheme) => {
                    let signal = encode(&bits, *scheme, params.samples_per_bit)?;
                    to_json(&signal, cli.pretty)
                }
                None => to_json(&build_waveform_view(&bits, &params)?, cli.pretty),
            }
        }
        Commands::Analyze { input, half } => {
            let (bits, params) = resolve_input(input, &config)?;
            let mut options = AnalysisOptions::from(&config);
            options.fft_display_half |= *half;
            let results = analyze_all(&bits, &params, &options)?;
            for (scheme, summary) in &results {
                log::info!(
                    "{scheme}: bw90 {:.3} Hz, {:.3} bits/Hz, peak {:.3} Hz, DC {:.2}%",
                    summary.metrics.bandwidth_90,
                    summary.metrics.spectral_efficiency,
                    summary.metrics.peak_frequency,
                    summary.metrics.dc_component
                );
            }
            to_json(&results, cli.pretty)
        }
    }
}

fn resolve_input(
    input: &InputArgs,
    config: &AnalysisConfig,
) -> CliResult<(BitSequence, EncodingParameters)> {
    let params = EncodingParameters::new(
        input.samples_per_bit.unwrap_or(config.samples_per_bit),
        input.data_rate.unwrap_or(config.data_rate),
    )?;
    let bits = match &input.bits {
        Some(bits) => bits.clone(),
        None => {
            let bits = random_bits(config.num_bits)?;
            log::info!("no bits given, using random pattern {bits}");
            bits
        }
    };
    Ok((bits, params))
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> CliResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
