use crate::alphabet::{COMPLEMENT_FALLBACK, NUCLEOTIDE_COMPLEMENT};

/// Writes the reverse complement of `source` into `dest`, overwriting
/// every byte of `dest`.
///
/// This is a total function over the byte domain: bytes outside the
/// canonical nucleotide alphabet complement to [`COMPLEMENT_FALLBACK`]
/// instead of failing. Complements are always emitted lower case.
pub fn reverse_complement_into(source: &[u8], dest: &mut [u8]) {
    if source.len() != dest.len() {
        panic!("tried to reverse complement into a buffer of a different length");
    }

    for (idx, byte) in source.iter().enumerate() {
        dest[source.len() - 1 - idx] = NUCLEOTIDE_COMPLEMENT
            .get(byte)
            .copied()
            .unwrap_or(COMPLEMENT_FALLBACK);
    }
}

/// Allocates and returns the reverse complement of `source`.
pub fn reverse_complement(source: &[u8]) -> Vec<u8> {
    let mut dest = vec![0u8; source.len()];
    reverse_complement_into(source, &mut dest);
    dest
}
