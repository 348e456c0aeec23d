//! Renta - vehicle rental desk
//!
//! A console demo for renting out a small fleet: accounts, rentals,
//! loan balances, and a JSON snapshot between runs.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
