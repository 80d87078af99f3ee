use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use merkle_diff::MismatchSearch;

/// Digest used for every node of both trees.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HasherChoice {
    Sha256,
    Blake3,
}

/// How the two trees are walked.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchChoice {
    /// Compare every leaf pair
    Full,
    /// Skip subtrees whose hashes already match
    Pruned,
}

impl From<SearchChoice> for MismatchSearch {
    fn from(choice: SearchChoice) -> Self {
        match choice {
            SearchChoice::Full => MismatchSearch::Full,
            SearchChoice::Pruned => MismatchSearch::Pruned,
        }
    }
}

/// Build a Merkle tree over the lines of two inputs and report the lines
/// that differ.
///
/// Without `--left`/`--right` a built-in sample pair is compared.
#[derive(Parser, Debug, Clone)]
#[command(name = "merkle-diff-demo", version)]
pub struct DemoCli {
    /// Text file whose lines are the left-hand blocks
    #[arg(long, requires = "right")]
    pub left: Option<PathBuf>,

    /// Text file whose lines are the right-hand blocks
    #[arg(long, requires = "left")]
    pub right: Option<PathBuf>,

    /// Digest used to build both trees
    #[arg(long, value_enum, default_value_t = HasherChoice::Sha256)]
    pub hasher: HasherChoice,

    /// Walk used to collect the mismatching lines
    #[arg(long, value_enum, default_value_t = SearchChoice::Full)]
    pub search: SearchChoice,

    /// Print both trees before the mismatch report
    #[arg(long)]
    pub show_trees: bool,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
