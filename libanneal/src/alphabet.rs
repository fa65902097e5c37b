use phf::phf_map;

/// the canonical nucleotide alphabet, as UTF8 bytes
pub const NUCLEOTIDE_ALPHABET: [u8; 4] = [65, 67, 71, 84];

/// the digital code assigned to every byte outside the canonical alphabet
pub const DEGENERATE_NUCLEOTIDE: u8 = 4;

/// the complement emitted for every byte outside the canonical alphabet
pub const COMPLEMENT_FALLBACK: u8 = 97;

pub const UTF8_TO_DIGITAL_NUCLEOTIDE: phf::Map<u8, u8> = phf_map! {
    // upper case
    65u8 => 0,    // A
    67u8 => 1,    // C
    71u8 => 2,    // G
    84u8 => 3,    // T
    // lower case
    97u8 => 0,    // a
    99u8 => 1,    // c
    103u8 => 2,   // g
    116u8 => 3,   // t
};

/// maps a nucleotide to its base-pairing partner; partners are
/// always emitted lower case
pub const NUCLEOTIDE_COMPLEMENT: phf::Map<u8, u8> = phf_map! {
    // upper case
    65u8 => 116,  // A -> t
    67u8 => 103,  // C -> g
    71u8 => 99,   // G -> c
    84u8 => 97,   // T -> a
    // lower case
    97u8 => 116,  // a -> t
    99u8 => 103,  // c -> g
    103u8 => 99,  // g -> c
    116u8 => 97,  // t -> a
};
