/// Counts for various things which count, roughly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct Counters {
    /// The number of iterations of the set-of-support loop.
    pub iterations: usize,

    /// A count of every pair of clauses resolution was attempted on.
    pub resolutions: usize,

    /// A count of clauses given a (fresh) derivation.
    pub derivations: usize,

    /// A count of clauses removed as tautological.
    pub tautologies: usize,

    /// A count of clauses removed as subsumed.
    pub subsumed: usize,
}

impl std::fmt::Display for Counters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "iterations: {}, resolutions: {}, derivations: {}, tautologies removed: {}, subsumed removed: {}",
            self.iterations, self.resolutions, self.derivations, self.tautologies, self.subsumed
        )
    }
}
