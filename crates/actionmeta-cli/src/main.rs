mod cmd;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "actionmeta",
    about = "Inspect app-action metadata and resolve display resources",
    version,
    propagate_version = true
)]
struct Cli {
    /// Resource manifest path
    #[arg(
        long,
        global = true,
        env = "ACTIONMETA_MANIFEST",
        default_value = "resources.yaml"
    )]
    manifest: PathBuf,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter resource manifest
    Init {
        /// Namespace to register resources under
        #[arg(long, default_value = "com.example.app")]
        namespace: String,
    },

    /// Resolve the display resource for an action type
    Resolve {
        /// Action type label (case-insensitive, e.g. "Call")
        action_type: String,

        /// Resource category to query
        #[arg(long, default_value = "drawable")]
        category: String,
    },

    /// Show an action record file with its resolved thumbnail
    Show {
        /// Path to a YAML action record
        file: PathBuf,
    },

    /// Validate the resource manifest for common mistakes
    Validate,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Init { namespace } => cmd::init::run(&cli.manifest, &namespace),
        Commands::Resolve {
            action_type,
            category,
        } => cmd::resolve::run(&cli.manifest, &action_type, &category, cli.json),
        Commands::Show { file } => cmd::show::run(&cli.manifest, &file, cli.json),
        Commands::Validate => cmd::validate::run(&cli.manifest, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
