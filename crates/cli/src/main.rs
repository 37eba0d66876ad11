//! LC-3 simulator CLI.
//!
//! This binary loads one or more program images and drives the simulator. It performs:
//! 1. **Setup:** Parses arguments, reads an optional JSON configuration, and installs logging.
//! 2. **Loading:** Places every image in command-line order; PC starts at the first image's base.
//! 3. **Interaction:** Runs the `LC-3-SIM>` command shell, or with `--go` runs to halt and exits.

mod shell;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use lc3sim_core::sim::{ProgramImage, SessionLog, Simulator};
use lc3sim_core::soc::TerminalConsole;
use lc3sim_core::{Config, SimError};

use crate::shell::{Command, Shell};

#[derive(Parser, Debug)]
#[command(
    name = "lc3sim",
    author,
    version,
    about = "LC-3 instruction-set simulator",
    long_about = "Load LC-3 object images (hex text, first word = load address) and run them from an interactive shell.\n\nExamples:\n  lc3sim os.hex prog.hex\n  lc3sim --go prog.hex\n  lc3sim --config sim.json --trace prog.hex"
)]
struct Cli {
    /// Program images to load, in order.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Session log that mirrors every dump (overrides the configuration).
    #[arg(long)]
    dump_file: Option<PathBuf>,

    /// Log every executed instruction to stderr.
    #[arg(long)]
    trace: bool,

    /// Run to halt without starting the shell, then exit.
    #[arg(long)]
    go: bool,

    /// Print execution statistics after `--go`.
    #[arg(long, requires = "go")]
    stats: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = i32::from(e.use_stderr());
            let _ = e.print();
            process::exit(code);
        }
    };

    let result = resolve_config(&cli).and_then(|config| {
        init_tracing(&config);
        run(&cli, &config)
    });
    if let Err(e) = result {
        let _ = io::stdout().flush();
        eprintln!("\nError: {e}");
        process::exit(1);
    }
}

/// Filter used when `RUST_LOG` is unset.
const fn default_filter(config: &Config) -> &'static str {
    if config.general.trace_instructions {
        "warn,lc3sim_core=trace"
    } else {
        "warn"
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over the configuration.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(config)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Reads the configuration file, or returns the defaults.
fn load_config(path: Option<&Path>) -> Result<Config, SimError> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Config::from_json(&text)
}

/// Loads the configuration file and applies the command-line overrides.
fn resolve_config(cli: &Cli) -> Result<Config, SimError> {
    let mut config = load_config(cli.config.as_deref())?;
    if cli.trace {
        config.general.trace_instructions = true;
    }
    if let Some(path) = &cli.dump_file {
        config.session.dump_file = path.to_string_lossy().into_owned();
    }
    Ok(config)
}

fn run(cli: &Cli, config: &Config) -> Result<(), SimError> {
    println!("LC-3 Simulator\n");

    let images = cli
        .files
        .iter()
        .map(ProgramImage::from_file)
        .collect::<Result<Vec<_>, _>>()?;

    let mut sim = Simulator::new(config, Box::new(TerminalConsole::new()));
    for count in sim.load(&images)? {
        println!("Read {count} words from program into memory.\n");
    }

    let log = SessionLog::create(&config.session.dump_file)?;
    debug!(dump_file = %log.path().display(), "session log opened");
    let mut shell = Shell::new(sim, log, io::stdout());

    if cli.go {
        let _ = shell.execute(Command::Go)?;
        if cli.stats {
            shell.simulator().cpu.stats.print();
        }
        return Ok(());
    }

    shell.run(io::stdin().lock())
}
