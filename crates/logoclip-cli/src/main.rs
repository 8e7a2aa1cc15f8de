mod cli;

use std::process::ExitCode;

use clap::Parser;
use cli::Args;
use logoclip_core::transform;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let output = args.output_path();
    let options = args.options();

    match transform(&args.input, &output, &options) {
        Ok(extraction) => {
            println!(
                "Extracted logo with transparent background: {}",
                output.display()
            );
            println!(
                "Cropped {}x{} -> {}x{}",
                extraction.source_width,
                extraction.source_height,
                extraction.image.width,
                extraction.image.height
            );
            if extraction.fell_back {
                println!(
                    "Warning: nothing survived threshold {}, kept the full canvas",
                    options.threshold.value()
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr. `RUST_LOG` wins over the `--verbose` default.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
