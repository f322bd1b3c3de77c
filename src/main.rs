use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use ppm_effects_rs::cli::{self, Cli};
use ppm_effects_rs::image_pipeline::FilterPipeline;
use ppm_effects_rs::logger;

use tracing::{error, info};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            println!("[Error] {}", cli::diagnostic(&e));
            return ExitCode::FAILURE;
        }
    };

    logger::init(cli.verbose);

    match run(&cli) {
        Ok(message) => {
            println!("[Info] {}", message);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Filter failed: {:#}", e);
            println!("[Error] {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let config = cli.to_config()?;
    let pipeline = FilterPipeline::new(config);

    info!("PPM filter pipeline initialized");
    info!("Effect: {:?}", pipeline.config().effect);
    info!("Backend: {}", pipeline.config().backend);

    let (message, timings) = pipeline
        .process_file(&cli.input, &cli.output)
        .with_context(|| format!("failed to process {}", cli.input.display()))?;

    if cli.timings {
        timings.print_summary();
    }

    Ok(message)
}
