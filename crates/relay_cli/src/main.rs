//! Relay CLI — drive the gate-level logic simulator from the command line.
//!
//! Provides `relay mul` for running the 8-bit array multiplier and
//! `relay adder` for exhaustively checking a ripple-carry adder row.

#![warn(missing_docs)]

mod adder;
mod mul;

use std::process;

use clap::{Parser, Subcommand};

/// Relay — a discrete-event simulator for combinational digital logic.
#[derive(Parser, Debug)]
#[command(name = "relay", version, about = "Relay logic simulator")]
pub struct Cli {
    /// Suppress all output except results and errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a `relay.toml` settings file (default: ./relay.toml).
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Multiply two 8-bit values through the array multiplier.
    Mul(MulArgs),
    /// Exhaustively check an N-bit ripple-carry adder row.
    Adder(AdderArgs),
}

/// Arguments for the `relay mul` subcommand.
#[derive(Parser, Debug)]
pub struct MulArgs {
    /// First operand (0-255).
    pub a: u64,

    /// Second operand (0-255).
    pub b: u64,

    /// Dump every probed wire change to stderr.
    #[arg(long)]
    pub trace: bool,
}

/// Arguments for the `relay adder` subcommand.
#[derive(Parser, Debug)]
pub struct AdderArgs {
    /// Adder width in bits (1-8).
    #[arg(long, default_value_t = 4)]
    pub bits: usize,
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Command::Mul(args) => mul::run(args, &cli),
        Command::Adder(args) => adder::run(args, &cli),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(2);
        }
    }
}
