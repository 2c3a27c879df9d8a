use catalog_filler::cli::Cli;
use catalog_filler::config::load_or_default;
use catalog_filler::mapper::CatalogMapper;
use catalog_filler::pipeline::{self, PipelineError, RunSummary};
use catalog_filler::source::{FileSource, source_for};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    match execute(&cli).await {
        Ok(summary) => {
            info!("Finished: {} rows x {} columns", summary.rows, summary.columns);
            println!(
                "Done: {} rows written to {}",
                summary.rows,
                summary.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Batch failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: &Cli) -> Result<RunSummary, PipelineError> {
    // Load configuration from file
    let config = load_or_default(cli.config.as_deref())?;
    let pools = config.load_pools()?;

    let template_location = cli.template.as_deref().unwrap_or(&config.template);
    let template_source = source_for(template_location)
        .map_err(|e| PipelineError::Template(format!("{} ({})", e, template_location)))?;
    let input_source = FileSource::new(&cli.input);

    let format = cli.format.unwrap_or(config.format);
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(config.output_file_name(format)));
    let mapper = CatalogMapper::new(pools, config.image_src.clone());

    info!(
        "Converting {} using template {}",
        cli.input.display(),
        template_location
    );
    pipeline::run(
        template_source.as_ref(),
        &input_source,
        &mapper,
        format,
        &output,
    )
    .await
}
