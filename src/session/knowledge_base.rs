use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use crate::{
    builder::read_clauses,
    db::clause_set::ClauseSet,
    misc::log::targets,
    structures::clause::Clause,
    types::err::{self, ErrorKind},
};

/// An ordered, duplicate-free collection of clauses, which may be read from and written to a file.
#[derive(Clone, Debug, Default)]
pub struct KnowledgeBase {
    clauses: ClauseSet,

    /// Bumped on each assertion or retraction which changes the clauses.
    version: usize,
}

impl KnowledgeBase {
    /// A knowledge base of the given clauses, in order, with duplicates dropped.
    ///
    /// Errors if some clause is empty.
    pub fn from_clauses(clauses: impl IntoIterator<Item = Clause>) -> Result<Self, ErrorKind> {
        let mut set = ClauseSet::new();
        for clause in clauses {
            if clause.is_empty() {
                return Err(err::InputError::EmptyClause.into());
            }
            set.insert(clause);
        }
        Ok(KnowledgeBase {
            clauses: set,
            version: 0,
        })
    }

    /// Reads a knowledge base from the file at `path`, one clause to each line.
    pub fn load(path: &Path) -> Result<Self, ErrorKind> {
        let file = File::open(path).map_err(|e| err::StorageError::Read(e.kind()))?;
        let clauses = read_clauses(BufReader::new(file))?;
        log::info!(target: targets::SESSION, "Loaded {} clauses from {}", clauses.len(), path.display());
        KnowledgeBase::from_clauses(clauses)
    }

    /// Writes the knowledge base to the file at `path`.
    ///
    /// The clauses are first written to a sibling file, which then replaces the file at `path`.
    /// So, the file at `path` is either as it was or holds every clause.
    pub fn persist(&self, path: &Path) -> Result<(), ErrorKind> {
        let mut temporary = path.as_os_str().to_owned();
        temporary.push(".tmp");
        let temporary = PathBuf::from(temporary);

        std::fs::write(&temporary, self.to_string())
            .map_err(|e| err::StorageError::Write(e.kind()))?;
        std::fs::rename(&temporary, path).map_err(|e| err::StorageError::Write(e.kind()))?;

        log::info!(target: targets::SESSION, "Persisted {} clauses (version {}) to {}", self.clauses.len(), self.version, path.display());
        Ok(())
    }

    /// Adds `clause` to the end of the knowledge base, returning false if the clause was already present.
    pub fn assert(&mut self, clause: Clause) -> Result<bool, ErrorKind> {
        if clause.is_empty() {
            return Err(err::InputError::EmptyClause.into());
        }
        let fresh = self.clauses.insert(clause);
        if fresh {
            self.version += 1;
        }
        Ok(fresh)
    }

    /// Removes `clause` from the knowledge base, returning false if the clause was not present.
    pub fn retract(&mut self, clause: &Clause) -> bool {
        let removed = self.clauses.remove(clause);
        if removed {
            self.version += 1;
        }
        removed
    }

    pub fn contains(&self, clause: &Clause) -> bool {
        self.clauses.contains(clause)
    }

    pub fn clauses(&self) -> &[Clause] {
        self.clauses.as_slice()
    }

    pub fn version(&self) -> usize {
        self.version
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

impl std::fmt::Display for KnowledgeBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for clause in &self.clauses {
            writeln!(f, "{clause}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::parse_clause;

    fn clause(text: &str) -> Clause {
        parse_clause(text).expect("valid clause")
    }

    #[test]
    fn duplicates_dropped() {
        let kb = KnowledgeBase::from_clauses(vec![clause("a v b"), clause("c"), clause("b v a")])
            .unwrap();
        assert_eq!(kb.len(), 2);
        assert_eq!(kb.to_string(), "a v b\nc\n");
    }

    #[test]
    fn versions() {
        let mut kb = KnowledgeBase::default();
        assert_eq!(kb.assert(clause("c")), Ok(true));
        assert_eq!(kb.assert(clause("c")), Ok(false));
        assert_eq!(kb.version(), 1);

        assert!(!kb.retract(&clause("d")));
        assert_eq!(kb.version(), 1);
        assert!(kb.retract(&clause("c")));
        assert_eq!(kb.version(), 2);
        assert!(kb.is_empty());
    }

    #[test]
    fn empty_clauses_rejected() {
        let mut kb = KnowledgeBase::default();
        assert_eq!(
            kb.assert(Clause::empty()),
            Err(ErrorKind::Input(err::InputError::EmptyClause))
        );
        assert!(KnowledgeBase::from_clauses(vec![Clause::empty()]).is_err());
    }

    #[test]
    fn missing_file() {
        let path = std::env::temp_dir().join("refute_knowledge_base_which_does_not_exist");
        assert_eq!(
            KnowledgeBase::load(&path).map(|kb| kb.len()),
            Err(ErrorKind::Storage(err::StorageError::Read(
                std::io::ErrorKind::NotFound
            )))
        );
    }
}
