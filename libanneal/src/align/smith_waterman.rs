use std::collections::TryReserveError;

use anyhow::{Context, Result};
use thiserror::Error;

use crate::alphabet::{DEGENERATE_NUCLEOTIDE, UTF8_TO_DIGITAL_NUCLEOTIDE};
use crate::structs::AlignmentSpec;

#[derive(Error, Debug)]
#[error("alignment engine requires non-zero maximum sequence lengths")]
pub struct ZeroCapacityError;

#[derive(Error, Debug)]
#[error("invalid scoring parameters: {params:?}")]
pub struct ScoringParamsSignError {
    params: ScoringParams,
}

/// The scores an alignment engine adds up while it aligns.
///
/// The match score is a reward and must be non-negative; the other
/// three are penalties and must be non-positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringParams {
    /// Added when two bases match
    pub match_score: i32,
    /// Added when two bases differ
    pub mismatch_score: i32,
    /// Added once when a gap is opened
    pub gap_open: i32,
    /// Added for every position a gap spans, including the first
    pub gap_extend: i32,
}

impl From<&AlignmentSpec> for ScoringParams {
    fn from(spec: &AlignmentSpec) -> Self {
        // an AlignmentSpec carries the mismatch penalty as a magnitude
        Self {
            match_score: spec.match_score,
            mismatch_score: -spec.mismatch_score,
            gap_open: spec.gap_open,
            gap_extend: spec.gap_extend,
        }
    }
}

/// The scoring interface between pair enumeration and an alignment engine.
pub trait Scorer {
    /// The optimal local alignment score between `query` and `target`
    /// under the engine's configured scores.
    fn score(&mut self, query: &[u8], target: &[u8]) -> i32;
}

/// A sentinel for gap states that no alignment has reached yet; low
/// enough to lose every max, high enough to survive further penalties
const MIN_SCORE: i32 = i32::MIN / 2;

/// A Smith-Waterman scorer with affine gap penalties.
///
/// All working storage is allocated up front, sized to the maximum
/// sequence lengths given at construction, and reused across every
/// call to [`Scorer::score`]. Scoring a sequence longer than the
/// configured maximum panics.
///
/// The scorer rolls two rows over the alignment matrix rather than
/// materializing it: one row of best-alignment-ending-here scores and
/// one row of gap-in-target scores, with the gap-in-query score carried
/// as a scalar along each row. A gap of length k costs
/// gap_open + k * gap_extend. Bases are compared case-insensitively
/// through their digital codes, and a degenerate base never matches
/// anything, itself included.
pub struct SmithWaterman {
    params: ScoringParams,
    max_query_len: usize,
    max_target_len: usize,
    /// best local score ending at each column of the row above
    score_row: Vec<i32>,
    /// best score ending in a target-side gap, per column
    target_gap_row: Vec<i32>,
    query_codes: Vec<u8>,
    target_codes: Vec<u8>,
}

impl SmithWaterman {
    pub fn new(
        params: ScoringParams,
        max_query_len: usize,
        max_target_len: usize,
    ) -> Result<Self> {
        if max_query_len == 0 || max_target_len == 0 {
            return Err(ZeroCapacityError.into());
        }

        if params.match_score < 0
            || params.mismatch_score > 0
            || params.gap_open > 0
            || params.gap_extend > 0
        {
            return Err(ScoringParamsSignError { params }.into());
        }

        let context = "failed to allocate alignment engine working storage";

        Ok(Self {
            params,
            max_query_len,
            max_target_len,
            score_row: scratch_vec(max_target_len + 1).context(context)?,
            target_gap_row: scratch_vec(max_target_len + 1).context(context)?,
            query_codes: scratch_vec(max_query_len).context(context)?,
            target_codes: scratch_vec(max_target_len).context(context)?,
        })
    }
}

fn scratch_vec<T: Clone + Default>(len: usize) -> Result<Vec<T>, TryReserveError> {
    let mut vec = Vec::new();
    vec.try_reserve_exact(len)?;
    vec.resize(len, T::default());
    Ok(vec)
}

fn digitize(utf8_bytes: &[u8], codes: &mut [u8]) {
    utf8_bytes
        .iter()
        .zip(codes.iter_mut())
        .for_each(|(byte, code)| {
            *code = UTF8_TO_DIGITAL_NUCLEOTIDE
                .get(byte)
                .copied()
                .unwrap_or(DEGENERATE_NUCLEOTIDE)
        });
}

impl Scorer for SmithWaterman {
    fn score(&mut self, query: &[u8], target: &[u8]) -> i32 {
        if query.len() > self.max_query_len || target.len() > self.max_target_len {
            panic!("tried to score sequences longer than the engine was built for");
        }

        let ScoringParams {
            match_score,
            mismatch_score,
            gap_open,
            gap_extend,
        } = self.params;
        let gap_open_extend = gap_open.saturating_add(gap_extend);

        digitize(query, &mut self.query_codes[..query.len()]);
        digitize(target, &mut self.target_codes[..target.len()]);

        self.score_row[..=target.len()].fill(0);
        self.target_gap_row[..=target.len()].fill(MIN_SCORE);

        let mut best_score = 0;

        for query_code in self.query_codes[..query.len()].iter().copied() {
            // gap-in-query score, carried along the row
            let mut query_gap = MIN_SCORE;
            // current row score at the previous column
            let mut previous_score: i32 = 0;
            // row-above score at the previous column
            let mut diagonal_score: i32 = 0;

            for (col, target_code) in self.target_codes[..target.len()].iter().enumerate() {
                let up_score = self.score_row[col + 1];

                self.target_gap_row[col + 1] = i32::max(
                    up_score.saturating_add(gap_open_extend),
                    self.target_gap_row[col + 1].saturating_add(gap_extend),
                );

                query_gap = i32::max(
                    previous_score.saturating_add(gap_open_extend),
                    query_gap.saturating_add(gap_extend),
                );

                let substitution =
                    if query_code != DEGENERATE_NUCLEOTIDE && query_code == *target_code {
                        match_score
                    } else {
                        mismatch_score
                    };

                let cell_score = i32::max(
                    0,
                    i32::max(
                        diagonal_score.saturating_add(substitution),
                        i32::max(self.target_gap_row[col + 1], query_gap),
                    ),
                );

                diagonal_score = up_score;
                self.score_row[col + 1] = cell_score;
                previous_score = cell_score;
                best_score = i32::max(best_score, cell_score);
            }
        }

        best_score
    }
}
