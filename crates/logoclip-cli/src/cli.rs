use std::path::PathBuf;

use clap::Parser;
use logoclip_core::{default_output_path, EmptyPolicy, ExtractOptions, Threshold};

/// Input used when no path is given.
pub const DEFAULT_INPUT: &str = "public/rebellion-luxury-logo.png";

#[derive(Parser, Debug)]
#[command(name = "logoclip", version)]
#[command(about = "Makes a logo's near-black background transparent and crops it tight", long_about = None)]
pub struct Args {
    /// Source image (PNG or JPEG)
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Destination PNG [default: <input stem>-transparent.png next to the input]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Pixels with R, G and B all at or below this value become transparent
    #[arg(short, long, value_name = "0-255", default_value_t = Threshold::DEFAULT.value())]
    pub threshold: u8,

    /// Keep the whole canvas instead of failing when nothing survives the threshold
    #[arg(long)]
    pub fallback_full_canvas: bool,

    /// Log each processing step
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input))
    }

    pub fn options(&self) -> ExtractOptions {
        let policy = if self.fallback_full_canvas {
            EmptyPolicy::FullCanvas
        } else {
            EmptyPolicy::Fail
        };
        ExtractOptions::new(self.threshold).with_empty_policy(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    const PROGRAM_NAME_ARGUMENT: &str = "logoclip";

    #[test]
    fn parse_no_arguments_uses_fixed_paths() {
        let args = Args::try_parse_from([PROGRAM_NAME_ARGUMENT]).unwrap();

        assert_eq!(args.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(
            args.output_path(),
            PathBuf::from("public/rebellion-luxury-logo-transparent.png")
        );
        assert_eq!(args.options(), ExtractOptions::default());
        assert!(!args.verbose);
    }

    #[test]
    fn parse_all_arguments() {
        let args = Args::try_parse_from([
            PROGRAM_NAME_ARGUMENT,
            "-i",
            "in.jpg",
            "--output",
            "out.png",
            "-t",
            "0",
            "--fallback-full-canvas",
            "-v",
        ])
        .unwrap();

        assert_eq!(args.input, PathBuf::from("in.jpg"));
        assert_eq!(args.output_path(), PathBuf::from("out.png"));
        assert_eq!(args.options().threshold, Threshold(0));
        assert_eq!(args.options().on_empty, EmptyPolicy::FullCanvas);
        assert!(args.verbose);
    }

    #[test]
    fn parse_threshold_out_of_range() {
        let err = Args::try_parse_from([PROGRAM_NAME_ARGUMENT, "--threshold", "256"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn parse_threshold_not_a_number() {
        let err = Args::try_parse_from([PROGRAM_NAME_ARGUMENT, "-t", "dark"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn verify_command() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
