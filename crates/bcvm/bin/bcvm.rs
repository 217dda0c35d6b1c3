//! bcvm command-line interface.
//!
//! Usage:
//!   bcvm run <FILE>...        Run programs in one shared VM
//!   bcvm asm <INPUT> [-o OUT] Normalise and validate a program
//!   bcvm disasm <INPUT>       Print an indexed listing
//!   bcvm opcodes              List the instruction set

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use bcvm::tools::{assemble, assemble_file, disassemble_file};
use bcvm::{ConfigError, Value, VirtualMachine, VmConfig, apply_run_flags, load_config};
use bcvm_core::{CATALOG, StackEffect};
use clap::{Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "bcvm", version)]
#[command(about = "Run and inspect bcvm bytecode programs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run programs in order, sharing globals between them
    Run {
        /// Program files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Log every executed instruction
        #[arg(long)]
        trace: bool,

        /// Continue with the next file after a failure
        #[arg(long)]
        keep_going: bool,

        /// Print global variables after the last run
        #[arg(long)]
        globals: bool,
    },

    /// Validate a program and write it in canonical form
    Asm {
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print an indexed instruction listing
    Disasm { input: PathBuf },

    /// List every opcode with its operand count and stack effect
    Opcodes,
}

fn init_logging(trace: bool) {
    let default = if trace {
        "warn,bcvm=trace,bcvm_vm=trace"
    } else {
        "warn,bcvm=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(files: &[PathBuf], config: VmConfig, globals: bool) -> ExitCode {
    let mut vm = VirtualMachine::with_stdlib(config);
    let mut failed = false;

    for file in files {
        info!("running {}", file.display());
        match vm.run_file(file) {
            Ok(Some(value)) => println!("{value}"),
            Ok(None) => {}
            Err(e) => {
                failed = true;
                if config.halt_on_error {
                    error!("{}: {e}", file.display());
                    break;
                }
                warn!("{}: {e}", file.display());
            }
        }
    }

    if globals {
        for (name, value) in vm.globals().iter() {
            if !matches!(value, Value::Native(_)) {
                println!("{name} = {value}");
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn asm(input: &Path, output: Option<&Path>) -> ExitCode {
    let result = match output {
        Some(output) => assemble_file(input, output).map(|count| {
            info!("wrote {count} instructions to {}", output.display());
        }),
        None => std::fs::read_to_string(input)
            .map_err(|e| bcvm::tools::AssembleError::Read {
                path: input.to_owned(),
                source: e,
            })
            .and_then(|source| assemble(&source))
            .map(|lines| {
                for line in lines {
                    println!("{line}");
                }
            }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn disasm(input: &Path) -> ExitCode {
    match disassemble_file(input) {
        Ok(listing) => {
            if !listing.is_empty() {
                println!("{listing}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn opcodes() -> ExitCode {
    for info in &CATALOG {
        let effect = match info.effect {
            StackEffect::Fixed { consumes, produces } => format!("{consumes} -> {produces}"),
            StackEffect::Dynamic => "dynamic".to_string(),
        };
        println!(
            "{:<14} {:>1}  {:<8}  {}",
            info.name, info.operand_count, effect, info.description
        );
    }
    ExitCode::SUCCESS
}

/// Resolve the `run` configuration before logging starts, so a file's
/// `trace = true` reaches the log filter.
fn run_config(
    path: Option<&Path>,
    trace: bool,
    keep_going: bool,
) -> Result<VmConfig, ConfigError> {
    let config = match path {
        Some(path) => load_config(path)?,
        None => VmConfig::default(),
    };
    Ok(apply_run_flags(config, trace, keep_going))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            files,
            config,
            trace,
            keep_going,
            globals,
        } => match run_config(config.as_deref(), trace, keep_going) {
            Ok(config) => {
                init_logging(config.trace);
                run(&files, config, globals)
            }
            Err(e) => {
                init_logging(trace);
                error!("{e}");
                ExitCode::FAILURE
            }
        },
        Command::Asm { input, output } => {
            init_logging(false);
            asm(&input, output.as_deref())
        }
        Command::Disasm { input } => {
            init_logging(false);
            disasm(&input)
        }
        Command::Opcodes => {
            init_logging(false);
            opcodes()
        }
    }
}
