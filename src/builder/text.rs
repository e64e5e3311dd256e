use std::io::BufRead;

use crate::{
    builder::clause_on_line,
    misc::log::targets,
    session::{Instruction, Operation},
    structures::clause::Clause,
    types::err::{self, ErrorKind},
};

/// Reads each line of `reader` which is neither blank nor a comment, together with its (1-based) line number.
fn content_lines(mut reader: impl BufRead) -> Result<Vec<(usize, String)>, ErrorKind> {
    let mut buffer = String::with_capacity(256);
    let mut line_counter = 0;
    let mut lines = Vec::default();

    loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => line_counter += 1,
            Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter + 1))),
        }

        let line = buffer.trim();
        match line.chars().next() {
            None | Some('#') => {}
            Some(_) => lines.push((line_counter, line.to_owned())),
        }
    }

    Ok(lines)
}

/// Reads clauses, one to each line.
///
/// ```rust
/// # use refute::builder::read_clauses;
/// let text = "# breakfast\na v b\n\n~a v c\n";
/// let clauses = read_clauses(text.as_bytes()).unwrap();
/// assert_eq!(clauses.len(), 2);
/// ```
pub fn read_clauses(reader: impl BufRead) -> Result<Vec<Clause>, ErrorKind> {
    let mut clauses = Vec::default();
    for (line, text) in content_lines(reader)? {
        clauses.push(clause_on_line(&text, line)?);
    }
    log::debug!(target: targets::PARSE, "Read {} clauses", clauses.len());
    Ok(clauses)
}

/// Reads a background of clauses and a goal, where the goal is the last clause read.
///
/// ```rust
/// # use refute::builder::read_resolution;
/// let text = "a\n~a v b\nb\n";
/// let (background, goal) = read_resolution(text.as_bytes()).unwrap();
/// assert_eq!(background.len(), 2);
/// assert_eq!(goal.to_string(), "b");
/// ```
pub fn read_resolution(reader: impl BufRead) -> Result<(Vec<Clause>, Clause), ErrorKind> {
    let mut background = read_clauses(reader)?;
    match background.pop() {
        Some(goal) => {
            log::debug!(target: targets::PARSE, "Goal: {goal}");
            Ok((background, goal))
        }
        None => Err(err::ParseError::NoGoal.into()),
    }
}

/// Reads instructions, one to each line.
///
/// Each instruction is a clause followed by an operation symbol, e.g. `~rain v wet ?`.
pub fn read_instructions(reader: impl BufRead) -> Result<Vec<Instruction>, ErrorKind> {
    let mut instructions = Vec::default();

    for (line, text) in content_lines(reader)? {
        let Some((clause_text, symbol)) = text.rsplit_once(char::is_whitespace) else {
            return Err(err::ParseError::Operation(line).into());
        };

        let Some(operation) = Operation::from_symbol(symbol) else {
            return Err(err::ParseError::Operation(line).into());
        };

        let clause = clause_on_line(clause_text, line)?;
        instructions.push(Instruction { clause, operation });
    }

    log::debug!(target: targets::PARSE, "Read {} instructions", instructions.len());
    Ok(instructions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_blanks() {
        let text = "# a comment\n\n  \na v B\n#~a\nc\n";
        let clauses = read_clauses(text.as_bytes()).unwrap();
        let texts = clauses.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        assert_eq!(texts, vec!["a v b", "c"]);
    }

    #[test]
    fn error_lines() {
        let text = "# comment\na v b\n~\n";
        assert_eq!(
            read_clauses(text.as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::Negation(3)))
        );
    }

    #[test]
    fn resolution_goal() {
        let (background, goal) = read_resolution("a v b\n".as_bytes()).unwrap();
        assert!(background.is_empty());
        assert_eq!(goal.to_string(), "a v b");

        assert_eq!(
            read_resolution("# nothing\n".as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::NoGoal))
        );
    }

    #[test]
    fn instructions() {
        let text = "c +\n~a v b ?\nc -\n";
        let instructions = read_instructions(text.as_bytes()).unwrap();
        let operations = instructions
            .iter()
            .map(|instruction| instruction.operation)
            .collect::<Vec<_>>();
        assert_eq!(
            operations,
            vec![Operation::Assert, Operation::Query, Operation::Retract]
        );
        assert_eq!(instructions[1].clause.to_string(), "~a v b");
    }

    #[test]
    fn malformed_instructions() {
        assert_eq!(
            read_instructions("c !\n".as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::Operation(1)))
        );
        assert_eq!(
            read_instructions("a\nc ?\n".as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::Operation(1)))
        );
        assert_eq!(
            read_instructions("c ?\n ?\n".as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::Operation(2)))
        );
    }
}
