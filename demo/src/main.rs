//! Demo front end: builds a Merkle tree over the lines of two inputs and
//! prints the pairs of lines whose hashes differ.

mod cli;
mod error;

use std::{
    fs,
    io::{self, Write},
    path::Path,
    process::ExitCode,
};

use clap::Parser;
use log::{error, info};
use merkle_diff::{diff, Blake3Hasher, LeafMismatch, MerkleTree};
use merkle_diff_visualize::{Drawer, Visualize};

use crate::{
    cli::{DemoCli, HasherChoice},
    error::DemoError,
};

const SAMPLE_LEFT: [&str; 4] = [
    "This sentence is equal",
    "This sentence is ok but on byte is different --> 1",
    "Again this is correct",
    "Different sentence",
];

const SAMPLE_RIGHT: [&str; 4] = [
    "This sentence is equal",
    "This sentence is ok but on byte is different --> 2",
    "Again this is correct",
    "A completely different sentence",
];

fn init_logging(max_level: &str) {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or(max_level));
}

fn read_lines(path: &Path) -> Result<Vec<String>, DemoError> {
    let text = fs::read_to_string(path).map_err(|source| DemoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text.lines().map(str::to_owned).collect())
}

/// Left and right blocks: the two files when given, the sample pair
/// otherwise.
fn load_inputs(args: &DemoCli) -> Result<(Vec<String>, Vec<String>), DemoError> {
    match (&args.left, &args.right) {
        (Some(left), Some(right)) => Ok((read_lines(left)?, read_lines(right)?)),
        _ => {
            info!("no input files given, comparing the built-in sample");
            Ok((
                SAMPLE_LEFT.iter().map(|s| s.to_string()).collect(),
                SAMPLE_RIGHT.iter().map(|s| s.to_string()).collect(),
            ))
        }
    }
}

fn build_trees(
    hasher: HasherChoice,
    left: &[String],
    right: &[String],
) -> Result<(MerkleTree, MerkleTree), DemoError> {
    let trees = match hasher {
        HasherChoice::Sha256 => (MerkleTree::build(left)?, MerkleTree::build(right)?),
        HasherChoice::Blake3 => (
            MerkleTree::build_with::<Blake3Hasher, _>(left)?,
            MerkleTree::build_with::<Blake3Hasher, _>(right)?,
        ),
    };
    Ok(trees)
}

fn show_tree<W: Write>(out: &mut W, label: &str, tree: &MerkleTree) -> Result<(), DemoError> {
    writeln!(out, "{label}:")?;
    let mut drawer = tree.visualize(Drawer::new(&mut *out))?;
    drawer.flush()?;
    writeln!(out)?;
    Ok(())
}

fn write_mismatch<W: Write>(
    out: &mut W,
    mismatch: &LeafMismatch<'_>,
    left: &MerkleTree,
    right: &MerkleTree,
) -> Result<(), DemoError> {
    let padding = mismatch.index >= left.block_count() || mismatch.index >= right.block_count();
    writeln!(
        out,
        "line {}{}:",
        mismatch.index + 1,
        if padding { " (padding)" } else { "" }
    )?;
    writeln!(out, "  < {}", String::from_utf8_lossy(mismatch.left))?;
    writeln!(out, "  > {}", String::from_utf8_lossy(mismatch.right))?;
    Ok(())
}

fn run<W: Write>(args: &DemoCli, out: &mut W) -> Result<(), DemoError> {
    let (left, right) = load_inputs(args)?;
    info!(
        "building trees over {} and {} lines with {:?}",
        left.len(),
        right.len(),
        args.hasher
    );
    let (a, b) = build_trees(args.hasher, &left, &right)?;

    if args.show_trees {
        show_tree(out, "left", &a)?;
        show_tree(out, "right", &b)?;
    }

    let result = diff(&a, &b, args.search.into())?;
    for mismatch in &result.mismatches {
        write_mismatch(out, mismatch, &a, &b)?;
    }
    writeln!(out, "{} mismatching block(s)", result.len())?;
    Ok(())
}

fn main() -> ExitCode {
    let args = DemoCli::parse();
    init_logging(&args.log_level);

    let stdout = io::stdout();
    match run(&args, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
