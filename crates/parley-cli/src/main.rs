//! CLI frontend for the parley dialogue interpreter.

mod commands;
mod terminal;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use parley_dialogue::NodeScope;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "parley",
    about = "parley: play and check branching dialogue content",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a dialogue tree in the terminal
    Play {
        /// Id of the tree to start
        tree: String,

        /// Directory containing .json content files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Player profile to play as (JSON)
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Write the resulting profile here afterwards
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Print everything at once instead of pacing the text
        #[arg(long)]
        no_pacing: bool,

        /// Where successor node ids are looked up
        #[arg(long, value_enum, default_value_t = Scope::Global)]
        scope: Scope,
    },

    /// List the dialogue trees found in a directory
    List {
        /// Directory containing .json content files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Report broken links and node id collisions
    Check {
        /// Directory containing .json content files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Where successor node ids are looked up
        #[arg(long, value_enum, default_value_t = Scope::Global)]
        scope: Scope,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Scope {
    /// Search every loaded tree
    Global,
    /// Search only the current tree
    Tree,
}

impl From<Scope> for NodeScope {
    fn from(scope: Scope) -> Self {
        match scope {
            Scope::Global => NodeScope::Global,
            Scope::Tree => NodeScope::Tree,
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "parley=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            tree,
            dir,
            profile,
            save,
            no_pacing,
            scope,
        } => commands::play::run(&commands::play::PlayArgs {
            dir: &dir,
            tree: &tree,
            profile: profile.as_deref(),
            save: save.as_deref(),
            pacing: !no_pacing,
            scope: scope.into(),
        }),
        Commands::List { dir } => commands::list::run(&dir),
        Commands::Check { dir, scope } => commands::check::run(&dir, scope.into()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
