use crate::cnf::cnf::Lit;
use crate::error::CheckError;

/// One solver action recovered from a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Assign(Lit),
    Decide(Lit),
    Unassign(Lit),
    Conflict,
}

/// Scan a log line for an event. Lines carrying none of the recognized
/// keywords yield `None` and are skipped by the caller; the log may hold
/// arbitrary other annotations.
pub fn parse_event(line: &str) -> Result<Option<Event>, CheckError> {
    let mut tokens = line.split_whitespace();
    let mut prev: Option<&str> = None;
    while let Some(token) = tokens.next() {
        match token {
            "assign" => {
                return keyword_lit(tokens.next(), token, line)
                    .map(Event::Assign)
                    .map(Some)
            }
            "decide" => {
                return keyword_lit(tokens.next(), token, line)
                    .map(Event::Decide)
                    .map(Some)
            }
            "unassign" => {
                return keyword_lit(tokens.next(), token, line)
                    .map(Event::Unassign)
                    .map(Some)
            }
            // The conflict marker carries a numeric level prefix,
            // e.g. "c DEBUG 2 conflict".
            "conflict" if prev.is_some_and(is_numeric) => return Ok(Some(Event::Conflict)),
            _ => {}
        }
        prev = Some(token);
    }
    Ok(None)
}

fn keyword_lit(token: Option<&str>, keyword: &str, line: &str) -> Result<Lit, CheckError> {
    token
        .and_then(parse_lit_prefix)
        .ok_or_else(|| {
            CheckError::Format(format!("no literal after '{}' in log line: {}", keyword, line))
        })
}

/// Parse the leading `-?digits` prefix of a token, ignoring trailing
/// decorations such as the `@2=2` in `unassign -306@2=2`.
fn parse_lit_prefix(token: &str) -> Option<Lit> {
    let digits_from = usize::from(token.starts_with('-'));
    let digits = token[digits_from..]
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    token[..digits_from + digits].parse::<Lit>().ok().filter(|&l| l != 0)
}

fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::{parse_event, Event};

    #[test]
    fn recognizes_the_four_events() {
        assert_eq!(
            parse_event("c DEBUG 0 assign 65").expect("parse"),
            Some(Event::Assign(65))
        );
        assert_eq!(
            parse_event("c DEBUG 0 decide -2").expect("parse"),
            Some(Event::Decide(-2))
        );
        assert_eq!(
            parse_event("c DEBUG 2 unassign -306@2=2").expect("parse"),
            Some(Event::Unassign(-306))
        );
        assert_eq!(
            parse_event("c DEBUG 2 conflict").expect("parse"),
            Some(Event::Conflict)
        );
    }

    #[test]
    fn conflict_requires_a_level_prefix() {
        assert_eq!(parse_event("c restarting after conflict").expect("parse"), None);
        assert_eq!(parse_event("c DEBUG 13 conflict analysis").expect("parse"), Some(Event::Conflict));
    }

    #[test]
    fn unrelated_lines_are_ignored() {
        assert_eq!(parse_event("").expect("parse"), None);
        assert_eq!(parse_event("c DEBUG 1 restart").expect("parse"), None);
        assert_eq!(parse_event("c reassigning watches").expect("parse"), None);
    }

    #[test]
    fn missing_literal_is_a_format_error() {
        let err = match parse_event("c DEBUG 0 assign x7") {
            Ok(v) => panic!("expected format error, got {v:?}"),
            Err(e) => e.to_string(),
        };
        assert!(err.contains("no literal after 'assign'"));
    }
}
