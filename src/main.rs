//! The Jack-to-VM compiler CLI.
//!
//! `jackc build <path>` compiles a single `.jack` file or every
//! `.jack` file in a directory to sibling `.vm` files. `jackc parse
//! <path>` prints the parse tree's debug XML instead. `build` is the
//! default mode when no subcommand is given.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod diagnostics;
mod driver;

/// Command-line interface for the Jack-to-VM compiler.
#[derive(Parser)]
#[command(name = "jackc")]
#[command(about = "A whole-program compiler for the Jack language", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// A `.jack` file or a directory of `.jack` files. Only used when
    /// no subcommand is given (shorthand for `jackc build <path>`).
    path: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Compile a file or directory to VM text.
    Build {
        /// A `.jack` file or a directory of `.jack` files.
        path: PathBuf,
    },
    /// Print the parse tree's debug XML instead of compiling.
    Parse {
        /// A `.jack` file or a directory of `.jack` files.
        path: PathBuf,
    },
}

fn main() {
    init_logging();

    let cli = Cli::parse();

    let ok = match cli.command {
        Some(Commands::Build { path }) => driver::build(&path),
        Some(Commands::Parse { path }) => driver::parse_dump(&path),
        None => match cli.path {
            Some(path) => driver::build(&path),
            None => {
                eprintln!("usage: jackc [build|parse] <path>");
                false
            }
        },
    };

    if !ok {
        std::process::exit(1);
    }
}

/// Initializes `tracing`'s env-filtered subscriber, driven by
/// `JACKC_LOG` (defaulting to `info`). Grounded on the `faxt` example's
/// CLI logging setup; independent of the non-goal on span-tracked
/// diagnostics, which concerns compile-error messages, not log output.
fn init_logging() {
    let filter = EnvFilter::try_from_env("JACKC_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_thread_ids(false))
        .try_init()
        .ok();
}
