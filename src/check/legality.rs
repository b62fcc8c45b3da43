use crate::check::trail::Trail;
use crate::cnf::cnf::{Cnf, Lit};

/// Is assigning `lit` justified as a unit propagation? True iff some clause
/// contains `lit` and every other literal of that clause is falsified by the
/// trail. A unit clause `[lit]` qualifies unconditionally.
pub fn is_implied(lit: Lit, cnf: &Cnf, trail: &Trail) -> bool {
    cnf.clauses.iter().any(|clause| {
        clause.contains(&lit)
            && clause
                .iter()
                .filter(|&&other| other != lit)
                .all(|&other| trail.falsifies(other))
    })
}

/// Every literal the formula currently forces that is not yet assigned: the
/// literal of any open single-literal clause, plus the sole unassigned
/// literal of any clause whose other literals are all falsified. Duplicates
/// across clauses may appear; callers only test non-emptiness.
pub fn possible_propagations(cnf: &Cnf, trail: &Trail) -> Vec<Lit> {
    let mut propagations = Vec::new();
    for clause in &cnf.clauses {
        if let [unit] = clause.as_slice() {
            if !trail.contains(*unit) {
                propagations.push(*unit);
            }
            continue;
        }
        let falsified = clause.iter().filter(|&&l| trail.falsifies(l)).count();
        let mut unassigned = clause.iter().filter(|&&l| !trail.var_assigned(l));
        if falsified + 1 == clause.len() {
            if let (Some(&lit), None) = (unassigned.next(), unassigned.next()) {
                propagations.push(lit);
            }
        }
    }
    propagations
}

/// Does the trail actually falsify some clause? True iff every literal of
/// some clause has its negation on the trail (which also means the clause is
/// fully assigned).
pub fn check_conflict(cnf: &Cnf, trail: &Trail) -> bool {
    cnf.clauses
        .iter()
        .any(|clause| clause.iter().all(|&l| trail.falsifies(l)))
}
