//! Command-line surface of `ppm-effects`.

use std::path::PathBuf;

use clap::Parser;
use crate::image_pipeline::{
    AsciiLayout, Backend, Effect, EffectKind, FilterConfig, PpmEncoding, Result,
};

/// Apply an effect to a PPM (P3/P6) image
#[derive(Parser, Debug)]
#[command(version, long_about = None)]
pub struct Cli {
    /// PPM file to read
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// PPM file to write
    #[arg(short, long, value_name = "FILE", default_value = "output.ppm")]
    pub output: PathBuf,

    /// Effect to apply: grayscale, blur, inversion or sepia (any case)
    #[arg(short, long, value_name = "NAME")]
    pub effect: EffectKind,

    /// Blur radius in pixels, required for `blur`
    #[arg(short = 'v', long = "value", value_name = "RADIUS")]
    pub value: Option<u32>,

    /// Write ASCII (P3) instead of binary (P6)
    #[arg(long)]
    pub ascii: bool,

    /// Where to run the blur kernel: cpu or cuda
    #[arg(long, value_name = "BACKEND", default_value = "cpu")]
    pub backend: Backend,

    /// Print a per-step timing summary
    #[arg(long)]
    pub timings: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Builds the pipeline configuration, rejecting a blur without radius.
    pub fn to_config(&self) -> Result<FilterConfig> {
        let effect = Effect::from_kind(self.effect, self.value)?;
        let encoding = if self.ascii { PpmEncoding::Ascii } else { PpmEncoding::Binary };

        Ok(FilterConfig {
            encoding,
            ascii_layout: AsciiLayout::Legacy,
            backend: self.backend,
            ..FilterConfig::new(effect)
        })
    }
}

/// Collapses a clap error into one line for the `[Error]` output.
///
/// Usage and help hints are dropped. Every other line is kept, so a
/// missing-argument error still names the arguments.
pub fn diagnostic(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let message = rendered
        .lines()
        .map(str::trim)
        .filter(|line| {
            !line.is_empty()
                && !line.starts_with("Usage:")
                && !line.starts_with("For more information")
                && !line.starts_with("tip:")
        })
        .collect::<Vec<_>>()
        .join(" ");
    message.trim_start_matches("error: ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::{ErrorCategory, FilterError};

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("ppm-effects").chain(args.iter().copied()))
    }

    #[test]
    fn test_short_flags_and_default_output() {
        let cli = parse(&["-i", "in.ppm", "-e", "Inversion"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("in.ppm"));
        assert_eq!(cli.output, PathBuf::from("output.ppm"));
        assert_eq!(cli.effect, EffectKind::Inversion);
        assert_eq!(cli.backend, Backend::Cpu);

        let config = cli.to_config().unwrap();
        assert_eq!(config.effect, Effect::Inversion);
        assert_eq!(config.encoding, PpmEncoding::Binary);
    }

    #[test]
    fn test_long_flags() {
        let cli = parse(&[
            "--input", "a.ppm", "--output", "b.ppm", "--effect", "BLUR", "--value", "4",
            "--ascii", "--backend", "CUDA",
        ])
        .unwrap();
        let config = cli.to_config().unwrap();
        assert_eq!(config.effect, Effect::Blur { radius: 4 });
        assert_eq!(config.encoding, PpmEncoding::Ascii);
        assert_eq!(config.backend, Backend::Cuda);
        assert_eq!(cli.output, PathBuf::from("b.ppm"));
    }

    #[test]
    fn test_blur_without_value_is_config_error() {
        let cli = parse(&["-i", "in.ppm", "-e", "blur"]).unwrap();
        let err = cli.to_config().unwrap_err();
        assert!(matches!(err, FilterError::ConfigError(_)));
        assert_eq!(err.category(), ErrorCategory::Config);
    }

    #[test]
    fn test_rejected_arguments() {
        assert!(parse(&["-e", "grayscale"]).is_err());
        assert!(parse(&["-i", "in.ppm"]).is_err());
        assert!(parse(&["-i", "in.ppm", "-e", "emboss"]).is_err());
        assert!(parse(&["-i", "in.ppm", "-e", "blur", "-v", "three"]).is_err());
        assert!(parse(&["-i", "in.ppm", "-e", "blur", "-v"]).is_err());
        assert!(parse(&["-i", "in.ppm", "-e", "sepia", "--frobnicate"]).is_err());
    }

    #[test]
    fn test_diagnostic_names_missing_arguments() {
        let message = diagnostic(&parse(&["-e", "grayscale"]).unwrap_err());
        assert!(message.contains("--input"), "{}", message);
        assert!(!message.contains('\n'));
        assert!(!message.starts_with("error:"));

        let message = diagnostic(&parse(&["-i", "in.ppm"]).unwrap_err());
        assert!(message.contains("--effect"), "{}", message);

        let message = diagnostic(&parse(&[]).unwrap_err());
        assert!(message.contains("--input") && message.contains("--effect"), "{}", message);
    }

    #[test]
    fn test_diagnostic_keeps_value_errors() {
        let message = diagnostic(&parse(&["-i", "in.ppm", "-e", "emboss"]).unwrap_err());
        assert!(message.contains("emboss"), "{}", message);
        assert!(message.contains("not found"), "{}", message);

        let message = diagnostic(&parse(&["-i", "in.ppm", "-e", "blur", "-v", "three"]).unwrap_err());
        assert!(message.contains("three"), "{}", message);
        assert!(!message.contains("Usage:"));
    }
}
