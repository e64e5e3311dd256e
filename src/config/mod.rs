/*!
Configuration of a context.

All configuration for a refutation is contained within a [Config], owned by a [Context](crate::context::Context).
The default configuration is the one described in the library documentation: simplification by both tautology elimination and subsumption, with the most recent derivation of a clause recorded.
*/

mod config_option;
pub use config_option::ConfigOption;

/// Which derivation of a clause to keep, when a clause is derived more than once.
///
/// Either choice is sound, the choice only changes which proof is reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DerivationPolicy {
    /// A later derivation overwrites an earlier derivation.
    #[default]
    LastWrite,

    /// The first derivation of a clause is kept.
    FirstWrite,
}

impl std::fmt::Display for DerivationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LastWrite => write!(f, "last-write"),
            Self::FirstWrite => write!(f, "first-write"),
        }
    }
}

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Remove clauses subsumed by some other clause before each round of resolution.
    pub subsumption: ConfigOption<bool>,

    /// Remove tautological clauses before each round of resolution, and ignore tautological resolvents.
    pub tautology_elimination: ConfigOption<bool>,

    /// Which derivation of a clause to keep.
    pub derivation_policy: ConfigOption<DerivationPolicy>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            subsumption: ConfigOption {
                name: "subsumption",
                value: true,
            },

            tautology_elimination: ConfigOption {
                name: "tautology_elimination",
                value: true,
            },

            derivation_policy: ConfigOption {
                name: "derivation_policy",
                value: DerivationPolicy::default(),
            },
        }
    }
}
