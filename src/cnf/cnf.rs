/// A literal in DIMACS convention: non-zero, `|lit|` is the variable id,
/// the sign is the asserted polarity.
pub type Lit = i32;

pub type Clause = Vec<Lit>;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cnf {
    pub clauses: Vec<Clause>,
}

impl Cnf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_clauses(clauses: Vec<Clause>) -> Self {
        Self { clauses }
    }

    pub fn add_clause(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    pub fn max_var(&self) -> u32 {
        self.clauses
            .iter()
            .flatten()
            .map(|&l| l.unsigned_abs())
            .max()
            .unwrap_or(0)
    }
}
