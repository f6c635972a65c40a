//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::text_report_adapter::TextReportAdapter;
use crate::domain::dashboard::{account_names, Dashboard};
use crate::domain::error::PortfelError;
use crate::domain::operation::Operation;
use crate::domain::position::Position;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "portfel", about = "Brokerage account analytics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the dashboard report from the two export tables
    Analyze {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        operations: Option<PathBuf>,
        #[arg(long)]
        portfolio: Option<PathBuf>,
        /// Restrict to the named account(s); repeatable
        #[arg(short, long)]
        account: Vec<String>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List account names present in the export tables
    Accounts {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        operations: Option<PathBuf>,
        #[arg(long)]
        portfolio: Option<PathBuf>,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Analyze {
            config,
            operations,
            portfolio,
            account,
            output,
        } => run_analyze(
            config.as_ref(),
            operations,
            portfolio,
            &account,
            output.as_ref(),
        ),
        Command::Accounts {
            config,
            operations,
            portfolio,
        } => run_accounts(config.as_ref(), operations, portfolio),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, PortfelError> {
    FileConfigAdapter::from_file(path).map_err(|e| PortfelError::ConfigParse {
        file: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Resolve a data path: CLI flag wins, then the config key, else an error.
pub fn resolve_path(
    flag: Option<PathBuf>,
    config: Option<&FileConfigAdapter>,
    section: &str,
    key: &str,
) -> Result<PathBuf, PortfelError> {
    if let Some(path) = flag {
        return Ok(path);
    }
    config
        .and_then(|c| c.get_string(section, key))
        .map(PathBuf::from)
        .ok_or_else(|| PortfelError::ConfigMissing {
            section: section.to_string(),
            key: key.to_string(),
        })
}

fn load_tables(
    config_path: Option<&PathBuf>,
    operations_flag: Option<PathBuf>,
    portfolio_flag: Option<PathBuf>,
) -> Result<(Vec<Operation>, Vec<Position>, Option<FileConfigAdapter>), PortfelError> {
    let config = match config_path {
        Some(path) => {
            eprintln!("Loading config from {}", path.display());
            Some(load_config(path)?)
        }
        None => None,
    };

    let operations_path = resolve_path(operations_flag, config.as_ref(), "data", "operations")?;
    let portfolio_path = resolve_path(portfolio_flag, config.as_ref(), "data", "portfolio")?;

    let adapter = CsvAdapter::new();
    eprintln!("Loading operations from {}", operations_path.display());
    let operations = adapter.load_operations(&operations_path)?;
    eprintln!("Loading portfolio from {}", portfolio_path.display());
    let positions = adapter.load_positions(&portfolio_path)?;
    eprintln!(
        "Loaded {} operations, {} positions",
        operations.len(),
        positions.len()
    );

    Ok((operations, positions, config))
}

fn run_analyze(
    config_path: Option<&PathBuf>,
    operations_flag: Option<PathBuf>,
    portfolio_flag: Option<PathBuf>,
    account_filter: &[String],
    output_flag: Option<&PathBuf>,
) -> ExitCode {
    let (operations, positions, config) =
        match load_tables(config_path, operations_flag, portfolio_flag) {
            Ok(loaded) => loaded,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        };

    let dashboard = Dashboard::build(&operations, &positions, account_filter);

    let output = match output_flag {
        Some(path) => path.display().to_string(),
        None => config
            .as_ref()
            .and_then(|c| c.get_string("report", "output"))
            .unwrap_or_else(|| "-".to_string()),
    };

    let report = TextReportAdapter::new();
    if let Err(e) = report.write(&dashboard, &output) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    if output != "-" {
        eprintln!("Report written to {output}");
    }
    ExitCode::SUCCESS
}

fn run_accounts(
    config_path: Option<&PathBuf>,
    operations_flag: Option<PathBuf>,
    portfolio_flag: Option<PathBuf>,
) -> ExitCode {
    let (operations, positions, _) =
        match load_tables(config_path, operations_flag, portfolio_flag) {
            Ok(loaded) => loaded,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        };

    for name in account_names(&operations, &positions) {
        println!("{name}");
    }
    ExitCode::SUCCESS
}
