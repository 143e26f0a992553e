//! Parses the command line arguments and runs the requested command.
//!
//! Basic usage, printing on the default example network with logging on:
//!
//! ```cargo run -- --log print --from Filip --to Andy "Hello World"```
//!
//! Use `--ring <FILE>` to run on a network described in RDL instead.

use crate::{
    rdl::{load_network, RdlError},
    simulations::{default_example, reference_scenario},
};
use clap::{Parser, Subcommand, ValueEnum};
use lansim_core::{render, IoReport, Network, NetworkError, NodeId, Report};
use std::{
    fs::{create_dir_all, OpenOptions},
    io,
    path::PathBuf,
    sync::Arc,
};
use thiserror::Error as ThisError;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::FmtSubscriber;

/// Directory the `--log` flag writes to.
const LOG_DIR: &str = "./logs";

/// Stores the different command line arguments.
#[derive(Parser, Debug)]
#[command(version, about = "Simulates a token ring Local Area Network")]
pub struct Args {
    ///Logging flag. Used to turn logging on or off.
    #[arg(short, long)]
    pub log: bool,
    ///File path to the RDL file describing the ring. Defaults to the example network.
    #[arg(short, long)]
    pub ring: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the ring
    Show {
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Send a broadcast packet around the ring
    Broadcast,
    /// Ask a workstation to print a document
    Print {
        /// The requesting workstation
        #[arg(long)]
        from: String,
        /// The destination printer
        #[arg(long)]
        to: String,
        document: String,
    },
    /// Run the reference scenario
    Scenario,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Html,
    Xml,
}

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("Unable to set up logging: {0}")]
    Io(#[from] io::Error),
    #[error("Unable to install the log subscriber: {0}")]
    Subscriber(#[from] SetGlobalDefaultError),
    #[error("{0}")]
    Rdl(#[from] RdlError),
    #[error("{0}")]
    Network(#[from] NetworkError),
}

/// Parses command line arguments and runs the command on stdout.
/// Returns whether the command succeeded.
pub fn initialize_from_arguments() -> Result<bool, CliError> {
    let args = Args::parse();
    // Capture log flag for turning logging on or off
    if args.log {
        initialize_logging()?;
    }
    let mut report = IoReport::new(io::stdout().lock());
    execute(&args, &mut report)
}

/// Runs the command in `args`, writing its output to `report`.
///
/// A print request that does not reach a printer is not an error, but makes
/// the command unsuccessful.
pub fn execute(args: &Args, report: &mut dyn Report) -> Result<bool, CliError> {
    let network = load(args)?;
    match &args.command {
        Command::Show { format } => {
            let printer: fn(&Network, NodeId, &mut String) = match format {
                Format::Text => render::print_on,
                Format::Html => render::print_html_on,
                Format::Xml => render::print_xml_on,
            };
            let mut rendering = render::render_from_entry(&network, printer);
            rendering.push('\n');
            if let Err(e) = report.append(&rendering) {
                tracing::warn!("Failed to write rendering: {}", e);
            }
            Ok(true)
        }
        Command::Broadcast => {
            network.request_broadcast(report)?;
            Ok(true)
        }
        Command::Print { from, to, document } => Ok(network
            .request_workstation_prints_document(from, document, to, report)?
            .is_delivered()),
        Command::Scenario => {
            let output = reference_scenario(&network)?;
            if let Err(e) = report.append(&output) {
                tracing::warn!("Failed to write scenario: {}", e);
            }
            Ok(true)
        }
    }
}

fn load(args: &Args) -> Result<Network, CliError> {
    let network = match &args.ring {
        Some(path) => load_network(path)?,
        None => default_example()?,
    };
    tracing::info!(nodes = network.len(), "network loaded");
    Ok(network)
}

/// Initializes the event protocol. Only should be called once when the sim starts.
/// Writes JSON events to a log file in ./logs.
/// During Tests -- cargo test -- logs will not be generated for the time being
fn initialize_logging() -> Result<(), CliError> {
    create_dir_all(LOG_DIR)?;
    let file_path = format!(
        "{}/debug-{}.log",
        LOG_DIR,
        chrono::offset::Local::now().format("%y-%m-%d_%H-%M-%S")
    );
    let file = OpenOptions::new()
        .write(true)
        .append(true)
        .create(true)
        .open(file_path)?;
    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(Arc::new(file))
        .json()
        .finish();
    // set the global default so all events/logs go to the same subscriber and
    // subsequently the same file
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
