//! Command line front end: reads a JSON request from a file, prints the JSON result on stdout
//! and appends a diagnostic log to a file.
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use maze_pathfinding::{GridError, Request};
use serde_json::json;
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(name = "pathfinder", version)]
#[command(about = "Finds the shortest path through a grid maze with BFS or Dijkstra")]
struct Cli {
    /// JSON request with `grid`, `start`, `end` and `algorithm`
    input: PathBuf,

    /// File the diagnostic log is appended to (filter with RUST_LOG)
    #[arg(long, default_value = "pathfinder_log.txt")]
    log_file: PathBuf,

    /// Indent the JSON written to stdout
    #[arg(long)]
    pretty: bool,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("Unable to open input file: {path}")]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid input JSON")]
    Json(#[source] serde_json::Error),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("Unable to serialize result")]
    Output(#[source] serde_json::Error),
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(cli: &Cli) -> Result<String, CliError> {
    info!("Reading input from file: {}", cli.input.display());
    let input = fs::read_to_string(&cli.input).map_err(|source| CliError::Input {
        path: cli.input.clone(),
        source,
    })?;
    info!("Received input: {input}");

    let request = Request::from_json(&input).map_err(|e| {
        error!("JSON parse error: {e}");
        CliError::Json(e)
    })?;
    info!(
        "Start: {:?}, end: {:?}, algorithm: {}",
        request.start, request.end, request.algorithm
    );

    let response = request.handle()?;
    let output = if cli.pretty {
        serde_json::to_string_pretty(&response)
    } else {
        serde_json::to_string(&response)
    }
    .map_err(CliError::Output)?;
    info!("Final result: {output}");
    Ok(output)
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    if let Err(e) = init_logging(&cli.log_file) {
        eprintln!(
            "Warning: cannot open log file {}: {e}",
            cli.log_file.display()
        );
    }
    info!("Pathfinder started");

    let code = match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e @ CliError::Input { .. }) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{e}");
            eprintln!("{}", json!({ "error": e.to_string() }));
            ExitCode::FAILURE
        }
    };
    info!("Pathfinder finished");
    code
}
