use crate::structures::clause::Clause;

/// The operation of an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// `?`, whether the clause follows from the knowledge base.
    Query,

    /// `+`, add the clause to the knowledge base.
    Assert,

    /// `-`, remove the clause from the knowledge base.
    Retract,
}

impl Operation {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "?" => Some(Self::Query),
            "+" => Some(Self::Assert),
            "-" => Some(Self::Retract),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Query => "?",
            Self::Assert => "+",
            Self::Retract => "-",
        }
    }
}

/// A clause, and what to do with it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Instruction {
    pub clause: Clause,
    pub operation: Operation,
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.clause, self.operation.symbol())
    }
}
