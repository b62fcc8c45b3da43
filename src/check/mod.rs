pub mod legality;
pub mod log;
pub mod replay;
pub mod trail;

use std::fmt;
use std::io::BufReader;
use std::path::Path;

use crate::cnf::cnf::Lit;
use crate::cnf::dimacs::load_cnf;
use crate::error::CheckError;

/// An illegal solver move. Faults are the check's expected outcome for a
/// buggy solver, not errors: they are reported as a [`Verdict`], never
/// propagated as `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    /// A branching decision taken while forced propagations were available.
    UnjustifiedDecision { decision: Lit, forced: Vec<Lit> },
    /// An assignment claimed as a propagation but not implied by any clause.
    UnjustifiedPropagation(Lit),
    /// A declared conflict with no falsified, fully-assigned clause.
    SpuriousConflict,
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::UnjustifiedDecision { decision, forced } => write!(
                f,
                "decision made on {}, but propagations {:?} were possible",
                decision, forced
            ),
            Fault::UnjustifiedPropagation(lit) => {
                write!(f, "propagation {} not implied by the formula", lit)
            }
            Fault::SpuriousConflict => {
                write!(f, "conflict declared, although there is none")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fault(Fault),
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

/// Check a solver log against a CNF file: the whole tool behind one call.
pub fn check(cnf_path: impl AsRef<Path>, log_path: impl AsRef<Path>) -> Result<Verdict, CheckError> {
    let cnf = load_cnf(cnf_path)?;
    let file = std::fs::File::open(log_path)?;
    replay::check_log_reader(&cnf, BufReader::new(file))
}
