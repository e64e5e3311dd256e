/*!
A session of instructions against a knowledge base.

A [Session] holds a [KnowledgeBase] and a [Context], and executes [Instruction]s strictly in the order given:
- [Query](Operation::Query) refutes the clause of the instruction from every clause of the knowledge base.
- [Assert](Operation::Assert) adds the clause to the knowledge base, without any resolution.
- [Retract](Operation::Retract) removes the clause from the knowledge base, if present.

As instructions are executed in order, each query sees every change made by the instructions before it.

A retraction of a clause not in the knowledge base is not an error, and is [reported](SessionReport::RetractMissing) as such.

Sessions do not touch files. The knowledge base of a session may be [persisted](KnowledgeBase::persist) after the session ends.

```rust
# use refute::builder::read_instructions;
# use refute::context::Context;
# use refute::session::{KnowledgeBase, Session, SessionReport};
let kb = KnowledgeBase::default();
let mut session = Session::new(Context::default(), kb);

let instructions = read_instructions("c +\nc ?\nc -\nc ?\n".as_bytes()).unwrap();
let reports = session.run(&instructions).unwrap();

assert!(matches!(&reports[1], SessionReport::Query(report) if report.is_refuted()));
assert!(matches!(&reports[3], SessionReport::Query(report) if !report.is_refuted()));
assert!(session.knowledge_base().is_empty());
```
*/

mod instruction;
mod knowledge_base;

pub use instruction::{Instruction, Operation};
pub use knowledge_base::KnowledgeBase;

use crate::{
    context::Context, misc::log::targets, reports::Report, structures::clause::Clause,
    types::err::ErrorKind,
};

/// The result of an instruction.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "operation", content = "result", rename_all = "snake_case")]
pub enum SessionReport {
    /// The report on a query.
    Query(Report),

    /// The clause asserted, whether or not it was already present.
    Asserted(Clause),

    /// The clause retracted.
    Retracted(Clause),

    /// The clause to retract, which was not present.
    RetractMissing(Clause),
}

/// A knowledge base, and a context for queries against the knowledge base.
pub struct Session {
    context: Context,
    knowledge_base: KnowledgeBase,
}

impl Session {
    pub fn new(context: Context, knowledge_base: KnowledgeBase) -> Self {
        Session {
            context,
            knowledge_base,
        }
    }

    /// Executes a single instruction.
    pub fn execute(&mut self, instruction: &Instruction) -> Result<SessionReport, ErrorKind> {
        log::info!(target: targets::SESSION, "Instruction: {instruction}");

        match instruction.operation {
            Operation::Query => {
                let report = self
                    .context
                    .refute(self.knowledge_base.clauses(), &instruction.clause)?;
                Ok(SessionReport::Query(report))
            }

            Operation::Assert => {
                if !self.knowledge_base.assert(instruction.clause.clone())? {
                    log::debug!(target: targets::SESSION, "{} already present", instruction.clause);
                }
                Ok(SessionReport::Asserted(instruction.clause.clone()))
            }

            Operation::Retract => match self.knowledge_base.retract(&instruction.clause) {
                true => Ok(SessionReport::Retracted(instruction.clause.clone())),
                false => {
                    log::warn!(target: targets::SESSION, "{} not present for retraction", instruction.clause);
                    Ok(SessionReport::RetractMissing(instruction.clause.clone()))
                }
            },
        }
    }

    /// Executes each instruction in order, stopping at the first error.
    pub fn run(&mut self, instructions: &[Instruction]) -> Result<Vec<SessionReport>, ErrorKind> {
        instructions
            .iter()
            .map(|instruction| self.execute(instruction))
            .collect()
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    pub fn into_knowledge_base(self) -> KnowledgeBase {
        self.knowledge_base
    }

    /// The context of the session, with counters from the most recent query.
    pub fn context(&self) -> &Context {
        &self.context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::parse_clause;

    fn instruction(text: &str, operation: Operation) -> Instruction {
        Instruction {
            clause: parse_clause(text).expect("valid clause"),
            operation,
        }
    }

    #[test]
    fn retract_by_value() {
        let kb = KnowledgeBase::from_clauses(vec![parse_clause("a v b").unwrap()]).unwrap();
        let mut session = Session::new(Context::default(), kb);

        let report = session
            .execute(&instruction("b v a", Operation::Retract))
            .unwrap();
        assert_eq!(report, SessionReport::Retracted(parse_clause("a v b").unwrap()));

        let report = session
            .execute(&instruction("a v b", Operation::Retract))
            .unwrap();
        assert!(matches!(report, SessionReport::RetractMissing(_)));
    }

    #[test]
    fn queries_leave_knowledge_base() {
        let kb = KnowledgeBase::from_clauses(vec![
            parse_clause("a").unwrap(),
            parse_clause("~a v b").unwrap(),
        ])
        .unwrap();
        let mut session = Session::new(Context::default(), kb);

        let report = session.execute(&instruction("b", Operation::Query)).unwrap();
        assert!(matches!(report, SessionReport::Query(ref r) if r.is_refuted()));
        assert_eq!(session.knowledge_base().len(), 2);
        assert_eq!(session.knowledge_base().version(), 0);
        assert!(session.context().counters.iterations > 0);
    }

    #[test]
    fn errors_stop_the_run() {
        let mut session = Session::new(Context::default(), KnowledgeBase::default());
        let instructions = vec![
            Instruction {
                clause: Clause::empty(),
                operation: Operation::Assert,
            },
            instruction("c", Operation::Assert),
        ];
        assert!(session.run(&instructions).is_err());
        assert!(session.knowledge_base().is_empty());
    }
}
