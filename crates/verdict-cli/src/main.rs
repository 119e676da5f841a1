//! CLI frontend for Verdict, a decision-aid engine.

mod commands;
mod store;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "verdict",
    about = "Verdict — a decision aid: yes/no oracle, coin flip, wheel pick",
    version,
    propagate_version = true
)]
struct Cli {
    /// File the decision history is persisted to
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        default_value = "verdict_history.json"
    )]
    data_file: PathBuf,

    /// RNG seed for reproducible picks
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the yes/no oracle a question
    Ask {
        /// The question (free text; may be omitted)
        question: Vec<String>,
    },

    /// Flip a coin
    Flip,

    /// Pick one of the given options at random
    Pick {
        /// Candidate options (2 to 10)
        options: Vec<String>,
    },

    /// Show the decision history
    History {
        /// Clear the history instead of showing it
        #[arg(long)]
        clear: bool,
    },

    /// Interactive decision session
    Play,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Ask { question } => {
            commands::ask::run(&cli.data_file, cli.seed, &question.join(" "))
        }
        Commands::Flip => commands::flip::run(&cli.data_file, cli.seed),
        Commands::Pick { options } => commands::pick::run(&cli.data_file, cli.seed, &options),
        Commands::History { clear } => commands::history::run(&cli.data_file, clear),
        Commands::Play => commands::play::run(&cli.data_file, cli.seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
