//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// Heads-up showdown poker against the house dealer.
#[derive(Debug, Parser)]
#[command(name = "showdown", version, about = "Dealer-vs-player showdown poker")]
pub struct ShowdownCli {
    /// Emit debug-level engine logs on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play interactive rounds against the dealer
    Play {
        /// Number of rounds to play
        #[arg(long)]
        rounds: Option<u32>,
        /// Seed for a reproducible shuffle sequence
        #[arg(long)]
        seed: Option<u64>,
        /// Starting money for the session
        #[arg(long)]
        money: Option<i64>,
    },
    /// Deal one round and print every card face up
    Deal {
        /// Seed for the shuffle (default: configured seed, else random)
        #[arg(long)]
        seed: Option<u64>,
        /// Print the dealt cards as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate the best five-card hand among 5 to 7 cards
    Eval {
        /// Card codes such as AS 10H 7d
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Display the resolved configuration and where each value came from
    Cfg,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Play { .. } => "play",
            Commands::Deal { .. } => "deal",
            Commands::Eval { .. } => "eval",
            Commands::Cfg => "cfg",
        }
    }
}
