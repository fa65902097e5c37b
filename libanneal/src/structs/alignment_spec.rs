use anyhow::Result;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("match score must be non-negative: {score}")]
pub struct NegativeMatchScoreError {
    score: i32,
}

#[derive(Error, Debug)]
#[error("mismatch score must be at least the match score: {mismatch} < {score}")]
pub struct MismatchBelowMatchError {
    score: i32,
    mismatch: i32,
}

#[derive(Error, Debug)]
#[error("gap open score must be negative: {score}")]
pub struct GapOpenSignError {
    score: i32,
}

#[derive(Error, Debug)]
#[error("gap extend score must be negative: {score}")]
pub struct GapExtendSignError {
    score: i32,
}

#[derive(Error, Debug)]
#[error("sequence length must be at least 1")]
pub struct SequenceLengthError;

#[derive(Error, Debug)]
#[error("sequence count must be at least 2: {count}")]
pub struct SequenceCountError {
    count: usize,
}

#[derive(Error, Debug)]
#[error("expected {num} sequences of length {length}, but the sequence buffer holds {actual} bytes")]
pub struct SequenceBufferSizeError {
    num: usize,
    length: usize,
    actual: usize,
}

/// A validated description of one scoring run: the penalties used to
/// score binding between two sequences, and a batch of equal-length
/// nucleotide sequences packed into a single buffer.
pub struct AlignmentSpec {
    /// The score awarded when two bases match
    pub match_score: i32,
    /// The penalty applied when two bases differ, given as a
    /// magnitude no smaller than the match score
    pub mismatch_score: i32,
    /// The score for opening a gap; always negative
    pub gap_open: i32,
    /// The score for extending a gap by one position; always negative
    pub gap_extend: i32,
    /// The number of sequences in the batch
    pub num: usize,
    /// The length of every sequence in the batch
    pub length: usize,
    /// The UTF8 bytes of all sequences, concatenated in index order
    pub utf8_bytes: Vec<u8>,
}

impl AlignmentSpec {
    pub fn new(
        match_score: i32,
        mismatch_score: i32,
        gap_open: i32,
        gap_extend: i32,
        num: usize,
        length: usize,
        utf8_bytes: Vec<u8>,
    ) -> Result<Self> {
        if match_score < 0 {
            return Err(NegativeMatchScoreError { score: match_score }.into());
        }

        if mismatch_score < match_score {
            return Err(MismatchBelowMatchError {
                score: match_score,
                mismatch: mismatch_score,
            }
            .into());
        }

        if gap_open >= 0 {
            return Err(GapOpenSignError { score: gap_open }.into());
        }

        if gap_extend >= 0 {
            return Err(GapExtendSignError { score: gap_extend }.into());
        }

        if length < 1 {
            return Err(SequenceLengthError.into());
        }

        if num < 2 {
            return Err(SequenceCountError { count: num }.into());
        }

        let expected = num.checked_mul(length);
        if expected != Some(utf8_bytes.len()) {
            return Err(SequenceBufferSizeError {
                num,
                length,
                actual: utf8_bytes.len(),
            }
            .into());
        }

        Ok(Self {
            match_score,
            mismatch_score,
            gap_open,
            gap_extend,
            num,
            length,
            utf8_bytes,
        })
    }

    /// The bytes of the sequence at `idx`, a view into the packed buffer.
    pub fn sequence(&self, idx: usize) -> &[u8] {
        debug_assert!(idx < self.num);
        let start = idx * self.length;
        &self.utf8_bytes[start..start + self.length]
    }

    /// The number of unordered sequence pairs in the batch.
    pub fn pair_count(&self) -> usize {
        self.num * (self.num - 1) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec_with_scores(
        match_score: i32,
        mismatch_score: i32,
        gap_open: i32,
        gap_extend: i32,
    ) -> Result<AlignmentSpec> {
        AlignmentSpec::new(
            match_score,
            mismatch_score,
            gap_open,
            gap_extend,
            2,
            4,
            b"ACGTACGT".to_vec(),
        )
    }

    #[test]
    fn test_spec_accepts_valid_arguments() -> Result<()> {
        let spec = AlignmentSpec::new(2, 2, -2, -1, 3, 4, b"ACGTACGTACGT".to_vec())?;

        assert_eq!(spec.match_score, 2);
        assert_eq!(spec.mismatch_score, 2);
        assert_eq!(spec.gap_open, -2);
        assert_eq!(spec.gap_extend, -1);
        assert_eq!(spec.num, 3);
        assert_eq!(spec.length, 4);

        Ok(())
    }

    #[test]
    fn test_spec_rejects_score_violations() {
        // negative match
        assert!(spec_with_scores(-1, 2, -2, -1).is_err());
        // mismatch below match
        assert!(spec_with_scores(3, 2, -2, -1).is_err());
        // gap open must be negative
        assert!(spec_with_scores(2, 2, 0, -1).is_err());
        assert!(spec_with_scores(2, 2, 2, -1).is_err());
        // gap extend must be negative
        assert!(spec_with_scores(2, 2, -2, 0).is_err());
        assert!(spec_with_scores(2, 2, -2, 1).is_err());
    }

    #[test]
    fn test_spec_rejects_batch_violations() {
        // zero length
        assert!(AlignmentSpec::new(2, 2, -2, -1, 2, 0, vec![]).is_err());
        // fewer than two sequences
        assert!(AlignmentSpec::new(2, 2, -2, -1, 1, 4, b"ACGT".to_vec()).is_err());
        assert!(AlignmentSpec::new(2, 2, -2, -1, 0, 4, vec![]).is_err());
        // buffer too short
        assert!(AlignmentSpec::new(2, 2, -2, -1, 3, 4, b"ACGTACGT".to_vec()).is_err());
        // buffer too long
        assert!(AlignmentSpec::new(2, 2, -2, -1, 2, 4, b"ACGTACGTA".to_vec()).is_err());
        // num * length overflows
        assert!(AlignmentSpec::new(2, 2, -2, -1, usize::MAX, 2, b"ACGT".to_vec()).is_err());
    }

    #[test]
    fn test_spec_sequence_views() -> Result<()> {
        let spec = AlignmentSpec::new(0, 0, -1, -1, 3, 2, b"ACGTAC".to_vec())?;

        assert_eq!(spec.sequence(0), b"AC");
        assert_eq!(spec.sequence(1), b"GT");
        assert_eq!(spec.sequence(2), b"AC");

        Ok(())
    }

    #[test]
    fn test_spec_pair_count() -> Result<()> {
        let spec = AlignmentSpec::new(1, 1, -1, -1, 5, 1, b"ACGTA".to_vec())?;
        assert_eq!(spec.pair_count(), 10);

        let spec = AlignmentSpec::new(1, 1, -1, -1, 2, 1, b"AC".to_vec())?;
        assert_eq!(spec.pair_count(), 1);

        Ok(())
    }
}
