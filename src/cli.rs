use crate::parser::TableFormat;
use clap::Parser;
use std::path::PathBuf;

/// Fill a catalog import template from a vendor product spreadsheet
#[derive(Debug, Parser)]
#[command(name = "catalog-filler", version, about)]
pub struct Cli {
    /// Vendor spreadsheet to convert (.xlsx/.xls/.ods or .csv)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Header template, file path or http(s) URL (overrides config)
    #[arg(short, long)]
    pub template: Option<String>,

    /// Output file (default: <output_stem>.<format> in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    pub format: Option<TableFormat>,

    /// Path to config file (default: ./config.json when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
