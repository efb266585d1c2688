/// Placeholder for a base with no partner in the table.
pub const UNPAIRED: char = '?';

static DNA_TO_RNA: [u8; 256] = {
    let mut table = [0u8; 256];
    table[b'A' as usize] = b'U';
    table[b'T' as usize] = b'A';
    table[b'G' as usize] = b'C';
    table[b'C' as usize] = b'G';
    table
};

static RNA_TO_DNA: [u8; 256] = {
    let mut table = [0u8; 256];
    table[b'U' as usize] = b'A';
    table[b'A' as usize] = b'T';
    table[b'C' as usize] = b'G';
    table[b'G' as usize] = b'C';
    table
};

fn lookup(table: &[u8; 256], base: char) -> Option<char> {
    if !base.is_ascii() {
        return None;
    }

    match table[base as usize] {
        0 => None,
        paired => Some(paired as char),
    }
}

/// RNA base pairing with a DNA base. Uppercase only.
pub fn dna_to_rna(base: char) -> Option<char> {
    lookup(&DNA_TO_RNA, base)
}

/// DNA base pairing with an RNA base. Uppercase only.
pub fn rna_to_dna(base: char) -> Option<char> {
    lookup(&RNA_TO_DNA, base)
}
