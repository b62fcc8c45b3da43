use std::io::BufRead;

use crate::check::legality::{check_conflict, is_implied, possible_propagations};
use crate::check::log::{parse_event, Event};
use crate::check::trail::Trail;
use crate::check::{Fault, Verdict};
use crate::cnf::cnf::Cnf;
use crate::error::CheckError;

/// Replays a solver log against a formula, one event at a time. State is the
/// trail plus a flag marking that the last event was a decision, whose
/// redundant `assign` restatement is still expected.
#[derive(Debug)]
pub struct Replay<'a> {
    cnf: &'a Cnf,
    trail: Trail,
    pending_decision: bool,
}

impl<'a> Replay<'a> {
    pub fn new(cnf: &'a Cnf) -> Self {
        Self {
            cnf,
            trail: Trail::new(),
            pending_decision: false,
        }
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Apply one event. `Some(fault)` is the check's verdict for an illegal
    /// solver move; `Err` is a malformed or inconsistent log.
    pub fn apply(&mut self, event: Event) -> Result<Option<Fault>, CheckError> {
        match event {
            Event::Decide(lit) => {
                // A decision is only legal at a propagation fixpoint.
                let forced = possible_propagations(self.cnf, &self.trail);
                if !forced.is_empty() {
                    return Ok(Some(Fault::UnjustifiedDecision {
                        decision: lit,
                        forced,
                    }));
                }
                self.trail.assign(lit)?;
                self.pending_decision = true;
            }
            Event::Assign(_) if self.pending_decision => {
                // The log restates each decision as an assign; the literal is
                // already on the trail and needs no justification.
                self.pending_decision = false;
            }
            Event::Assign(lit) => {
                if !is_implied(lit, self.cnf, &self.trail) {
                    return Ok(Some(Fault::UnjustifiedPropagation(lit)));
                }
                self.trail.assign(lit)?;
            }
            Event::Unassign(lit) => {
                self.trail.unassign(lit)?;
            }
            Event::Conflict => {
                if !check_conflict(self.cnf, &self.trail) {
                    return Ok(Some(Fault::SpuriousConflict));
                }
            }
        }
        Ok(None)
    }
}

pub fn check_log_str(cnf: &Cnf, log: &str) -> Result<Verdict, CheckError> {
    check_log_reader(cnf, std::io::Cursor::new(log.as_bytes()))
}

/// Replay a whole log, halting at the first fault.
pub fn check_log_reader<R: BufRead>(cnf: &Cnf, r: R) -> Result<Verdict, CheckError> {
    let mut replay = Replay::new(cnf);
    for line in r.lines() {
        let line = line?;
        let Some(event) = parse_event(&line)? else {
            continue;
        };
        if let Some(fault) = replay.apply(event)? {
            return Ok(Verdict::Fault(fault));
        }
    }
    Ok(Verdict::Pass)
}
