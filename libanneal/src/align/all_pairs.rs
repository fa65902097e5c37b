use std::io::Write;

use anyhow::Result;

use crate::align::{reverse_complement_into, Scorer};
use crate::output::PairWriter;
use crate::structs::AlignmentSpec;

/// Scores the reverse complement of every sequence in the batch
/// against every later-indexed sequence, streaming one line per pair.
///
/// For N sequences this emits exactly N(N-1)/2 lines in a fixed order:
/// outer index ascending, inner index ascending within each outer. The
/// reverse complement of the outer sequence is computed once per outer
/// index and reused for all of its partners.
///
/// The comparison is deliberately one-directional: the outer sequence
/// is reverse-complemented, the inner sequence is aligned as-is. Only
/// the i < j direction is scored.
pub fn score_all_pairs<W: Write>(
    spec: &AlignmentSpec,
    engine: &mut impl Scorer,
    output: &mut PairWriter<W>,
) -> Result<()> {
    let mut revcomp = vec![0u8; spec.length];

    for i in 0..spec.num - 1 {
        reverse_complement_into(spec.sequence(i), &mut revcomp);

        for j in (i + 1)..spec.num {
            let score = engine.score(&revcomp, spec.sequence(j));
            output.write_pair(i, j, score)?;
        }
    }

    Ok(())
}
