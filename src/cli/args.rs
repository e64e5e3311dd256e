use std::path::PathBuf;

use clap::{Parser, Subcommand};
use refute::config::{Config, DerivationPolicy};

/// Determines whether a goal follows from a background of clauses, by resolution refutation
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub mode: Mode,

    /// Keep clauses subsumed by some other clause
    #[arg(long = "no-subsumption", default_value_t = false, global = true)]
    pub no_subsumption: bool,

    /// Keep tautological clauses and resolvents
    #[arg(long = "no-tautology-elimination", default_value_t = false, global = true)]
    pub no_tautology_elimination: bool,

    /// Which derivation of a clause derived more than once to use in proofs
    #[arg(long, default_value_t, value_enum, global = true)]
    pub derivation: DerivationPolicy,

    /// Display stats after each refutation
    #[arg(short, long, default_value_t = false, global = true)]
    pub stats: bool,

    /// Write reports as JSON
    #[arg(long, default_value_t = false, global = true)]
    pub json: bool,

    /// The level of logs written to stderr
    #[cfg(feature = "log")]
    #[arg(long, default_value_t = log::LevelFilter::Warn, global = true)]
    pub log_level: log::LevelFilter,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Refute the last clause of a file from the clauses before it
    Resolution {
        /// The file of clauses, one to each line
        clauses: PathBuf,
    },

    /// Run instructions against a knowledge base of clauses
    Cooking {
        /// The file of clauses for the knowledge base, one to each line
        clauses: PathBuf,

        /// The file of instructions, each a clause followed by one of '?', '+', or '-'
        instructions: PathBuf,

        /// Write the knowledge base back to the file of clauses after the instructions
        #[arg(short, long, default_value_t = false)]
        persist: bool,
    },
}

impl Args {
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.subsumption.value = !self.no_subsumption;
        config.tautology_elimination.value = !self.no_tautology_elimination;
        config.derivation_policy.value = self.derivation;
        config
    }
}
