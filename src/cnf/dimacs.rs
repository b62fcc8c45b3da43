use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::cnf::cnf::{Clause, Cnf, Lit};
use crate::error::CheckError;

pub fn parse_dimacs_str(s: &str) -> Result<Cnf, CheckError> {
    parse_dimacs_reader(std::io::Cursor::new(s.as_bytes()))
}

/// Parse a DIMACS-style CNF: a header line (contents ignored), then one
/// clause per line as whitespace-separated literals closed by a `0` token.
/// Blank lines are skipped.
pub fn parse_dimacs_reader<R: BufRead>(r: R) -> Result<Cnf, CheckError> {
    let mut cnf = Cnf::new();
    let mut seen_header = false;

    for (idx, line) in r.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        if !seen_header {
            // Header counts are advisory only; we never cross-check them.
            seen_header = true;
            continue;
        }
        cnf.add_clause(parse_clause_line(&line, line_no)?);
    }

    if !seen_header {
        return Err(CheckError::Format("empty cnf input".to_string()));
    }
    Ok(cnf)
}

pub fn load_cnf<P: AsRef<Path>>(path: P) -> Result<Cnf, CheckError> {
    let file = File::open(path)?;
    parse_dimacs_reader(BufReader::new(file))
}

fn parse_clause_line(line: &str, line_no: usize) -> Result<Clause, CheckError> {
    let tokens = line.split_whitespace().collect::<Vec<_>>();
    match tokens.split_last() {
        Some((&"0", lits)) => lits
            .iter()
            .map(|&tok| parse_lit_token(tok, line_no))
            .collect(),
        _ => Err(CheckError::Format(format!(
            "clause on line {} does not end with the 0 terminator",
            line_no
        ))),
    }
}

fn parse_lit_token(token: &str, line_no: usize) -> Result<Lit, CheckError> {
    let lit = token.parse::<Lit>().map_err(|_| {
        CheckError::Format(format!("invalid literal '{}' on line {}", token, line_no))
    })?;
    if lit == 0 {
        return Err(CheckError::Format(format!(
            "literal on line {} must be non-zero",
            line_no
        )));
    }
    Ok(lit)
}
