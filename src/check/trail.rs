use indexmap::IndexSet;

use crate::cnf::cnf::Lit;
use crate::error::CheckError;

/// The ordered set of literals currently assigned true. At most one of `l`
/// and `-l` may be live at a time; a variable must be unassigned before it
/// can be assigned again.
#[derive(Debug, Clone, Default)]
pub struct Trail {
    lits: IndexSet<Lit>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lits<I: IntoIterator<Item = Lit>>(lits: I) -> Result<Self, CheckError> {
        let mut trail = Self::new();
        for lit in lits {
            trail.assign(lit)?;
        }
        Ok(trail)
    }

    pub fn len(&self) -> usize {
        self.lits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lits.is_empty()
    }

    /// Is `lit` currently assigned true?
    pub fn contains(&self, lit: Lit) -> bool {
        self.lits.contains(&lit)
    }

    /// Is `lit` currently assigned false, i.e. is its negation on the trail?
    pub fn falsifies(&self, lit: Lit) -> bool {
        self.lits.contains(&-lit)
    }

    /// Is the variable `|lit|` assigned at all, with either polarity?
    pub fn var_assigned(&self, lit: Lit) -> bool {
        self.contains(lit) || self.falsifies(lit)
    }

    pub fn assign(&mut self, lit: Lit) -> Result<(), CheckError> {
        if self.var_assigned(lit) {
            return Err(CheckError::LogConsistency(format!(
                "variable {} assigned twice (literal {})",
                lit.unsigned_abs(),
                lit
            )));
        }
        self.lits.insert(lit);
        Ok(())
    }

    pub fn unassign(&mut self, lit: Lit) -> Result<(), CheckError> {
        if !self.lits.shift_remove(&lit) {
            return Err(CheckError::LogConsistency(format!(
                "unassign of {} which is not on the trail",
                lit
            )));
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = Lit> + '_ {
        self.lits.iter().copied()
    }
}
