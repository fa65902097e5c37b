use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "anneal")]
#[command(
    about = "Score complementary binding between every pair of a batch of equal-length nucleotide sequences"
)]
pub struct Cli {
    /// Score awarded when two bases match; must be non-negative
    #[arg(value_name = "match", allow_negative_numbers = true)]
    pub match_score: i32,

    /// Penalty for mismatching bases, given as a magnitude no smaller
    /// than the match score
    #[arg(value_name = "mismatch", allow_negative_numbers = true)]
    pub mismatch_score: i32,

    /// Score for opening a gap; must be negative
    #[arg(value_name = "gap_open", allow_negative_numbers = true)]
    pub gap_open: i32,

    /// Score for extending a gap by one position; must be negative
    #[arg(value_name = "gap_extend", allow_negative_numbers = true)]
    pub gap_extend: i32,

    /// The number of sequences in the batch
    #[arg(value_name = "num")]
    pub num: usize,

    /// The length of every sequence in the batch
    #[arg(value_name = "length")]
    pub length: usize,

    /// Every sequence in the batch, concatenated in index order into
    /// one string of exactly <num> * <length> characters
    #[arg(value_name = "sequence", allow_hyphen_values = true)]
    pub sequence: String,
}
