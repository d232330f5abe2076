//! `relay adder` — exhaustively check a ripple-carry adder row.

use relay_circuits::{ripple_carry_row, Bus};
use relay_common::Bit;
use relay_sim::Circuit;

use crate::{AdderArgs, Cli};

/// Runs the `relay adder` command.
///
/// Builds one N-bit ripple-carry row and checks every combination of
/// operands and carry-in against integer addition, reusing the same
/// circuit across cases (each case only re-drives changed input bits).
pub fn run(args: &AdderArgs, cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    if args.bits == 0 || args.bits > 8 {
        eprintln!("error: --bits must be between 1 and 8");
        return Ok(1);
    }
    let bits = args.bits;

    let settings = crate::mul::load_settings(cli)?;
    let mut circuit = Circuit::new(settings.gate_delays()?);
    circuit.set_max_actions(settings.limits.max_actions);

    let a = Bus::new(&mut circuit, bits);
    let b = Bus::new(&mut circuit, bits);
    let sum = Bus::new(&mut circuit, bits);
    let c_in = circuit.make_wire();
    let c_out = circuit.make_wire();
    ripple_carry_row(&mut circuit, a.wires(), b.wires(), c_in, sum.wires(), c_out)?;
    circuit.propagate()?;

    let limit = 1u64 << bits;
    let mut cases = 0u64;
    let mut failures = 0u64;
    for a_val in 0..limit {
        for b_val in 0..limit {
            for carry in 0..2u64 {
                a.set_u64(&mut circuit, a_val)?;
                b.set_u64(&mut circuit, b_val)?;
                circuit.set_signal(c_in, Bit::from_bool(carry == 1))?;
                circuit.propagate()?;

                let got =
                    sum.read_u64(&circuit) + (circuit.get_signal(c_out).as_u64() << bits);
                let expected = a_val + b_val + carry;
                cases += 1;
                if got != expected {
                    failures += 1;
                    eprintln!("FAIL: {a_val} + {b_val} + {carry} = {got}, expected {expected}");
                }
            }
        }
    }

    if failures == 0 {
        println!("{bits}-bit ripple-carry adder: {cases}/{cases} cases pass");
        if !cli.quiet {
            eprintln!("   {} actions executed", circuit.actions_executed());
        }
        Ok(0)
    } else {
        println!("{bits}-bit ripple-carry adder: {failures}/{cases} cases FAILED");
        Ok(1)
    }
}
