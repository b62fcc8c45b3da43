pub mod check;
pub mod cnf;
pub mod error;

pub use check::{check, Fault, Verdict};
pub use error::CheckError;
