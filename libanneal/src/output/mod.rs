mod pair_writer;
pub use pair_writer::PairWriter;
