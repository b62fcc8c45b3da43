use anyhow::Result;
use clap::Parser;

use satcheck::{check, Verdict};

#[derive(Debug, Parser)]
#[command(name = "satcheck")]
#[command(about = "Check the sanity of SAT solver moves against a DIMACS formula using log files")]
struct Cli {
    /// CNF formula in DIMACS format
    #[arg(long)]
    cnf: String,
    /// Solver log with assign/decide/unassign/conflict lines
    #[arg(long)]
    log: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match check(&cli.cnf, &cli.log)? {
        Verdict::Pass => println!("no faults found"),
        Verdict::Fault(fault) => {
            println!("FAULT: {fault}");
            std::process::exit(1);
        }
    }
    Ok(())
}
