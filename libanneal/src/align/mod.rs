mod reverse_complement;
pub use reverse_complement::{reverse_complement, reverse_complement_into};

mod smith_waterman;
pub use smith_waterman::{Scorer, ScoringParams, SmithWaterman};

mod all_pairs;
pub use all_pairs::score_all_pairs;
