/*!
Tools for building clauses and instructions from text.

# Format

- A literal is an atom, optionally prefixed with `~` for negation: `rain`, `~rain`.
- A clause is a line of literals separated by `v`: `~rain v wet`.
- Input is case-insensitive, and atoms are normalised to lowercase.
- Lines beginning with `#` are comments, and blank lines are skipped.

```rust
# use refute::builder::{parse_clause, parse_literal};
let clause = parse_clause("Wet v ~RAIN v wet").unwrap();
assert_eq!(clause.to_string(), "~rain v wet");

let literal = parse_literal("~rain").unwrap();
assert!(!literal.polarity());

assert!(parse_clause("").is_err());
assert!(parse_clause("a b").is_err());
assert!(parse_literal("~").is_err());
```

For reading whole inputs, see [read_resolution], [read_clauses], and [read_instructions].
*/

mod text;
pub use text::{read_clauses, read_instructions, read_resolution};

use crate::{
    structures::{atom::is_atom, clause::Clause, literal::Literal},
    types::err::{self},
};

/// The character used to negate an atom.
pub const NEGATION: char = '~';

/// The token used between literals of a clause.
pub const DISJUNCTION: &str = "v";

/// Parses a single literal.
pub fn parse_literal(text: &str) -> Result<Literal, err::ParseError> {
    literal_on_line(text.trim(), 1)
}

/// Parses a single clause.
pub fn parse_clause(text: &str) -> Result<Clause, err::ParseError> {
    clause_on_line(text, 1)
}

pub(crate) fn literal_on_line(token: &str, line: usize) -> Result<Literal, err::ParseError> {
    let (polarity, name) = match token.strip_prefix(NEGATION) {
        Some(rest) => {
            if rest.is_empty() {
                return Err(err::ParseError::Negation(line));
            }
            (false, rest)
        }
        None => (true, token),
    };

    let atom = name.to_lowercase();
    match is_atom(&atom) {
        true => Ok(Literal::new(atom, polarity)),
        false => Err(err::ParseError::Atom(line)),
    }
}

pub(crate) fn clause_on_line(text: &str, line: usize) -> Result<Clause, err::ParseError> {
    let mut literals = Vec::default();
    let mut expect_literal = true;

    for token in text.split_whitespace() {
        match expect_literal {
            true => literals.push(literal_on_line(token, line)?),
            false if token.eq_ignore_ascii_case(DISJUNCTION) => {}
            false => return Err(err::ParseError::Atom(line)),
        }
        expect_literal = !expect_literal;
    }

    if literals.is_empty() {
        return Err(err::ParseError::Empty);
    }
    // A trailing disjunction.
    if expect_literal {
        return Err(err::ParseError::Atom(line));
    }

    Ok(Clause::from_iter(literals))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals() {
        assert_eq!(parse_literal("a"), Ok(Literal::new("a", true)));
        assert_eq!(parse_literal(" ~B_1 "), Ok(Literal::new("b_1", false)));
        assert_eq!(parse_literal("~"), Err(err::ParseError::Negation(1)));
        assert_eq!(parse_literal("~~a"), Err(err::ParseError::Atom(1)));
        assert_eq!(parse_literal("a-b"), Err(err::ParseError::Atom(1)));
    }

    #[test]
    fn clauses() {
        let clause = parse_clause("c v ~a V b").unwrap();
        assert_eq!(clause.to_string(), "~a v b v c");
        assert_eq!(clause.size(), 3);

        assert_eq!(parse_clause("a v a").unwrap().size(), 1);
        assert_eq!(parse_clause("a  v   ~a").unwrap().size(), 2);
    }

    #[test]
    fn malformed_clauses() {
        assert_eq!(parse_clause("   "), Err(err::ParseError::Empty));
        assert_eq!(parse_clause("a v"), Err(err::ParseError::Atom(1)));
        assert_eq!(parse_clause("a b"), Err(err::ParseError::Atom(1)));
        assert_eq!(parse_clause("v"), Ok(Clause::unit(Literal::new("v", true))));
    }
}
