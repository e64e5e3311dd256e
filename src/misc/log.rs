/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, with the level of a call roughly tracking how often it fires during a refutation.
Iteration summaries are logged at `info`, individual deletions and derivations at `trace`.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [simplification](crate::procedures::simplify)
    pub const SIMPLIFICATION: &str = "simplification";

    /// Logs related to the [refutation loop](crate::procedures::refute)
    pub const SEARCH: &str = "search";

    /// Logs related to the [derivation graph](crate::db::derivation)
    pub const DERIVATION: &str = "derivation";

    /// Logs related to [proof reconstruction](crate::procedures::reconstruct)
    pub const RECONSTRUCTION: &str = "reconstruction";

    /// Logs related to a [knowledge base session](crate::session)
    pub const SESSION: &str = "session";

    /// Logs related to [parsing](crate::builder)
    pub const PARSE: &str = "parse";
}
