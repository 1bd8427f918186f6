use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for dutyreport
#[derive(Parser)]
#[command(
    name = "dutyreport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Duty reports from vehicle schedules: start/end times, first/last stops and breaks",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of ~/.dutyreport/dutyreport.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the source data file (JSON with duties, vehicles and stops)
    #[arg(global = true, long = "data", value_name = "FILE")]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init,

    /// Show the configuration in use
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },

    /// Generate the three report steps and export each of them
    Run {
        #[arg(long, value_enum, help = "Output format (default from config)")]
        format: Option<ExportFormat>,

        #[arg(long = "out-dir", value_name = "DIR", help = "Output directory")]
        out_dir: Option<PathBuf>,

        #[arg(long, short = 'f', help = "Overwrite existing files without asking")]
        force: bool,
    },

    /// Export a single report step
    Export {
        /// Report step: 1 = times, 2 = times + stops, 3 = full report with breaks
        #[arg(long)]
        step: u8,

        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output file (default: <output_dir>/step<N>.<format>)"
        )]
        file: Option<PathBuf>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print a report step as a table
    Show {
        #[arg(long)]
        step: u8,
    },
}
