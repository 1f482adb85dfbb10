//! see-classgen CLI — boilerplate generator for see-object classes.
//!
//! `new` writes `<Class>.h` and `<Class>.c` for a class derived from a parent class;
//! `names` prints the identifiers derived for a class name.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "see-classgen",
    about = "Create boilerplate header and source files for see-object classes",
    after_help = "Enjoy creating See Objects",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a JSON config file (default: ./see-classgen.json when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the header and implementation file of a new class
    New {
        /// The class name without extension or namespace, in CamelCase
        classname: String,

        /// The name of the parent class
        #[arg(short, long)]
        parent: Option<String>,

        /// Directory to place the new file(s) in
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Project name used in the license block
        #[arg(long, env = "SEE_CLASSGEN_PROJECT")]
        project: Option<String>,

        /// Namespace prepended to type and function names
        #[arg(long, env = "SEE_CLASSGEN_NAMESPACE")]
        namespace: Option<String>,

        /// Write the header file only (wins over --object)
        #[arg(short = 'H', long)]
        header: bool,

        /// Write the object/c file only
        #[arg(short = 'c', long)]
        object: bool,

        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,

        /// Only write the license block, no class boilerplate
        #[arg(long)]
        license_only: bool,

        /// Print the generated files to stdout instead of writing them
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the C identifiers derived from a class name
    Names {
        /// The class name without namespace, in CamelCase
        classname: String,

        /// Namespace prepended to type and function names
        #[arg(long, env = "SEE_CLASSGEN_NAMESPACE")]
        namespace: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::New {
            classname,
            parent,
            source,
            project,
            namespace,
            header,
            object,
            force,
            license_only,
            dry_run,
        } => {
            let args = commands::new::NewArgs {
                classname,
                parent,
                source,
                project,
                namespace,
                header,
                object,
                force,
                license_only,
                dry_run,
            };
            commands::new::run(cli.config.as_deref(), args)?;
        }
        Commands::Names {
            classname,
            namespace,
        } => {
            commands::names::run(cli.config.as_deref(), &classname, namespace)?;
        }
    }

    Ok(())
}
