use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Merkle(#[from] merkle_diff::Error),
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}
