use satcheck::cnf::dimacs::parse_dimacs_str;
use satcheck::CheckError;

#[test]
fn parse_and_shape_sanity() {
    let src = "\
p cnf 3 3
1 -3 0
2 3 -1 0
-2 0

";
    let cnf = parse_dimacs_str(src).expect("parse");
    assert_eq!(
        cnf.clauses,
        vec![vec![1, -3], vec![2, 3, -1], vec![-2]]
    );
    assert_eq!(cnf.num_clauses(), 3);
    assert_eq!(cnf.max_var(), 3);
}

#[test]
fn header_contents_are_not_validated() {
    // Counts that disagree with the body, or no real header at all.
    let cnf = parse_dimacs_str("p cnf 999 0\n1 2 0\n").expect("parse");
    assert_eq!(cnf.clauses, vec![vec![1, 2]]);

    let cnf = parse_dimacs_str("solver scratch header\n-4 0\n").expect("parse");
    assert_eq!(cnf.clauses, vec![vec![-4]]);
}

#[test]
fn irregular_whitespace_is_accepted() {
    let cnf = parse_dimacs_str("p cnf 2 1\n  1 \t 2   0\n").expect("parse");
    assert_eq!(cnf.clauses, vec![vec![1, 2]]);
}

#[test]
fn reject_unparseable_literal() {
    let err = match parse_dimacs_str("p cnf 2 1\n1 x 0\n") {
        Ok(_) => panic!("expected parser error"),
        Err(e) => e,
    };
    assert!(matches!(&err, CheckError::Format(_)));
    assert!(err.to_string().contains("invalid literal 'x' on line 2"));
}

#[test]
fn reject_zero_literal_inside_clause() {
    let err = match parse_dimacs_str("p cnf 2 1\n1 0 2 0\n") {
        Ok(_) => panic!("expected parser error"),
        Err(e) => e.to_string(),
    };
    assert!(err.contains("non-zero"));
}

#[test]
fn reject_clause_without_terminator() {
    let err = match parse_dimacs_str("p cnf 2 2\n1 2 0\n-1 -2\n") {
        Ok(_) => panic!("expected parser error"),
        Err(e) => e.to_string(),
    };
    assert!(err.contains("line 3"));
    assert!(err.contains("0 terminator"));
}

#[test]
fn reject_empty_input() {
    let err = match parse_dimacs_str("") {
        Ok(_) => panic!("expected parser error"),
        Err(e) => e.to_string(),
    };
    assert!(err.contains("empty cnf input"));
}
