//! Five-stage pipeline simulator CLI.
//!
//! This binary loads a machine-code image and runs it to HALT. It performs:
//! 1. **Run:** Simulate a program, optionally dumping the full state before every cycle.
//! 2. **Disassemble:** List the instruction store of an image without simulating it.
//!
//! Reports go to stdout; diagnostics go to stderr through `tracing`.

mod report;

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pipesim_core::common::{ConfigError, LoadError, SimError};
use pipesim_core::sim::loader;
use pipesim_core::{Config, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "pipesim",
    author,
    version,
    about = "Cycle-accurate five-stage pipeline simulator",
    args_conflicts_with_subcommands = true,
    long_about = "Run a machine-code image (one decimal word per line) through the five-stage pipeline.\n\nExamples:\n  pipesim prog.mc\n  pipesim run prog.mc\n  pipesim run prog.mc --trace > prog.out\n  pipesim run prog.mc --stats --config run.json\n  pipesim disasm prog.mc"
)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). Overrides RUST_LOG.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Machine-code file to run with default settings (same as `run FILE`).
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate a program until it halts.
    Run {
        /// Machine-code file.
        file: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the machine state before every cycle.
        #[arg(short, long)]
        trace: bool,

        /// Print the statistics block after the run.
        #[arg(short, long)]
        stats: bool,

        /// Print the final machine state as JSON.
        #[arg(long)]
        json: bool,

        /// Stop with an error after this many cycles without HALT.
        #[arg(long)]
        max_cycles: Option<u64>,
    },

    /// Disassemble the instruction store of an image.
    Disasm {
        /// Machine-code file.
        file: PathBuf,
    },
}

/// Everything that can end a CLI invocation early.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Sim(#[from] SimError),
    #[error("can't write output: {0}")]
    Io(#[from] io::Error),
    #[error("can't encode state: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no program image given (usage: pipesim <FILE>, or see --help)")]
    MissingImage,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match dispatch(cli.command, cli.file) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Routes a parsed command line to its handler.
///
/// A bare image path behaves like `run` with every flag left at its default.
fn dispatch(command: Option<Commands>, file: Option<PathBuf>) -> Result<(), CliError> {
    match (command, file) {
        (
            Some(Commands::Run {
                file,
                config,
                trace,
                stats,
                json,
                max_cycles,
            }),
            _,
        ) => cmd_run(&file, config.as_deref(), trace, stats, json, max_cycles),
        (Some(Commands::Disasm { file }), _) => cmd_disasm(&file),
        (None, Some(file)) => cmd_run(&file, None, false, false, false, None),
        (None, None) => Err(CliError::MissingImage),
    }
}

/// Installs the stderr subscriber.
///
/// `-v`/`-vv` select debug/trace; otherwise `RUST_LOG` applies, defaulting to `warn`.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Runs a program to HALT, printing reports as requested.
///
/// Command-line flags are merged over the configuration file: a flag can switch
/// tracing or stats on but never off.
fn cmd_run(
    file: &Path,
    config_path: Option<&Path>,
    trace: bool,
    stats: bool,
    json: bool,
    max_cycles: Option<u64>,
) -> Result<(), CliError> {
    let mut config = config_path.map_or_else(|| Ok(Config::default()), Config::from_json_file)?;
    config.general.trace_state |= trace;
    config.stats.enabled |= stats;
    if max_cycles.is_some() {
        config.general.max_cycles = max_cycles;
    }
    debug!(?config, "configuration resolved");

    let image = loader::load_image(file)?;
    let mut out = BufWriter::new(io::stdout().lock());
    let trace_state = config.general.trace_state;
    let limit = config.general.max_cycles;

    if trace_state {
        report::write_load_listing(&mut out, &image)?;
        report::write_instruction_memory(&mut out, &image)?;
    }

    let mut sim = Simulator::load(&image, config)?;

    let cycles = if trace_state {
        loop {
            report::write_state(&mut out, sim.state())?;
            let step = sim.step()?;
            if step.halted {
                break step.cycles;
            }
            if let Some(limit) = limit.filter(|&l| step.cycles >= l) {
                out.flush()?;
                return Err(SimError::CycleLimit(limit).into());
            }
        }
    } else {
        sim.run()?
    };

    report::write_halted(&mut out, cycles)?;

    if sim.config().stats.enabled {
        sim.stats().write_sections(&mut out, &sim.config().stats.sections)?;
    }
    if json {
        serde_json::to_writer_pretty(&mut out, sim.state())?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

/// Prints the disassembled instruction store of an image.
fn cmd_disasm(file: &Path) -> Result<(), CliError> {
    let image = loader::load_image(file)?;
    let mut out = BufWriter::new(io::stdout().lock());
    report::write_instruction_memory(&mut out, &image)?;
    out.flush()?;
    Ok(())
}
