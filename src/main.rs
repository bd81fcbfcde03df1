use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod ccpl;
mod diagnostics;
mod error;
mod extract;
mod input;
mod mode;
mod model;
mod stats;

use input::RunDir;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "ccpl-timings")]
#[command(about = "Average timings from coupled DA demo run logs", long_about = None)]
struct Cli {
    /// Root of the results tree.
    #[arg(long, global = true, default_value = input::DEFAULT_RESULTS_DIR)]
    results_dir: PathBuf,

    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Average coupler cost per run mode (ccpl_output_time.out).
    Ccpl { grid_info: String, proc: String },

    /// Corrected model totals per run mode (model_output_time.out).
    Model {
        grid_info: String,
        proc: String,

        /// Also print per-mode marker averages.
        #[arg(long)]
        breakdown: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    diagnostics::init(cli.verbose);

    match cli.cmd {
        Commands::Ccpl { grid_info, proc } => {
            let path = RunDir::new(&cli.results_dir, &grid_info, &proc).log_path(ccpl::FILE_NAME);
            let text = input::read_log(&path)?;
            let tally = ccpl::scan(&text).with_context(|| format!("scan {}", path.display()))?;
            let report = ccpl::CcplReport::from_tally(&tally)
                .with_context(|| format!("summarize {}", path.display()))?;

            match cli.format {
                Format::Text => println!("{}", report.row()),
                Format::Json => println!("{}", serde_json::to_string(&report)?),
            }
        }
        Commands::Model {
            grid_info,
            proc,
            breakdown,
        } => {
            let path = RunDir::new(&cli.results_dir, &grid_info, &proc).log_path(model::FILE_NAME);
            let text = input::read_log(&path)?;
            let tally = model::scan(&text).with_context(|| format!("scan {}", path.display()))?;
            let report = model::ModelReport::from_tally(tally)
                .with_context(|| format!("summarize {}", path.display()))?;

            match cli.format {
                Format::Text => {
                    if breakdown {
                        for row in report.breakdown()? {
                            println!("{}", row);
                        }
                    }
                    println!("{}", report.row());
                }
                Format::Json => println!("{}", serde_json::to_string(&report)?),
            }
        }
    }

    Ok(())
}
