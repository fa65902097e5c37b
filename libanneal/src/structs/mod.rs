pub mod alignment_spec;
pub use alignment_spec::AlignmentSpec;
