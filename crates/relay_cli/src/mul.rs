//! `relay mul` — run the 8-bit array multiplier.

use std::io;
use std::path::Path;

use relay_circuits::{multiplier, Bus};
use relay_config::SimSettings;
use relay_sim::{Circuit, WriterRecorder};

use crate::{Cli, MulArgs};

const OPERAND_BITS: usize = 8;

/// Runs the `relay mul` command.
///
/// Builds the multiplier, settles it, drives the operands, propagates to
/// quiescence, and prints the product. Returns exit code 0 on success and
/// 1 for out-of-range operands.
pub fn run(args: &MulArgs, cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    if !operand_fits(args.a) || !operand_fits(args.b) {
        eprintln!("error: operands must fit in {OPERAND_BITS} bits (0-255)");
        return Ok(1);
    }

    let settings = load_settings(cli)?;
    let mut circuit = Circuit::new(settings.gate_delays()?);
    circuit.set_max_actions(settings.limits.max_actions);

    let a = Bus::new(&mut circuit, OPERAND_BITS);
    let b = Bus::new(&mut circuit, OPERAND_BITS);
    let product = multiplier(&mut circuit, &a, &b)?;

    if args.trace {
        a.probe(&mut circuit, "a");
        b.probe(&mut circuit, "b");
        product.probe(&mut circuit, "p");
        circuit.set_recorder(Box::new(WriterRecorder::new(io::stderr())));
    }

    circuit.propagate()?;
    a.set_u64(&mut circuit, args.a)?;
    b.set_u64(&mut circuit, args.b)?;
    let summary = circuit.propagate()?;
    circuit.take_recorder()?;

    println!("{} x {} = {}", args.a, args.b, product.read_u64(&circuit));
    if !cli.quiet {
        eprintln!(
            "   quiescent at {} after {} actions",
            summary.final_time, summary.actions_executed
        );
    }
    Ok(0)
}

/// Loads settings from `--config`, or from `./relay.toml` if present.
pub fn load_settings(cli: &Cli) -> Result<SimSettings, relay_config::ConfigError> {
    match &cli.config {
        Some(path) => relay_config::load_settings_file(Path::new(path)),
        None => relay_config::load_settings(Path::new(".")),
    }
}

fn operand_fits(value: u64) -> bool {
    value >> OPERAND_BITS == 0
}
