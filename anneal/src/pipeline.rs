use std::io::{stdout, Write};

use anyhow::Result;

use libanneal::align::{score_all_pairs, ScoringParams, SmithWaterman};
use libanneal::output::PairWriter;
use libanneal::structs::AlignmentSpec;

use crate::args::Cli;

pub fn run(args: Cli) -> Result<()> {
    let mut output = PairWriter::new(stdout().lock());
    run_with_output(args, &mut output)
}

/// Validates the arguments, builds the engine, and streams every pair
/// score. Validation failures surface before the engine is built, and
/// the engine is built before any output is written.
fn run_with_output<W: Write>(args: Cli, output: &mut PairWriter<W>) -> Result<()> {
    let spec = AlignmentSpec::new(
        args.match_score,
        args.mismatch_score,
        args.gap_open,
        args.gap_extend,
        args.num,
        args.length,
        args.sequence.into_bytes(),
    )?;

    let mut engine = SmithWaterman::new(ScoringParams::from(&spec), spec.length, spec.length)?;

    score_all_pairs(&spec, &mut engine, output)
}
