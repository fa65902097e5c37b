#[cfg(test)]
#[ctor::ctor]
fn init_backtrace() {
    color_backtrace::install();
}

#[cfg(test)]
pub(crate) fn random_nucleotides(rng: &mut impl rand::Rng, length: usize) -> Vec<u8> {
    use crate::alphabet::NUCLEOTIDE_ALPHABET;

    (0..length)
        .map(|_| NUCLEOTIDE_ALPHABET[rng.gen_range(0..NUCLEOTIDE_ALPHABET.len())])
        .collect()
}
