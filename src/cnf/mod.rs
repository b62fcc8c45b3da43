pub mod cnf;
pub mod dimacs;
