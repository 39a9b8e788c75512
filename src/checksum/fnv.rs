use crate::checksum::Digest;

/// Initial accumulator value (the FNV-1a 32-bit offset basis).
pub const OFFSET_BASIS: u32 = 0x811c_9dc5;
/// 32-bit FNV prime, 16777619.
pub const PRIME: u32 = 0x0100_0193;
/// Read size used when streaming file content through the hasher.
pub const CHUNK_SIZE: usize = 1 << 13;

/// Streaming 32-bit FNV hasher.
///
/// Each byte multiplies the accumulator by [`PRIME`] first and XORs the byte
/// in afterwards, starting from [`OFFSET_BASIS`]. Reports produced by earlier
/// tools depend on this exact order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fnv32 {
    state: u32,
}

impl Fnv32 {
    pub const fn new() -> Self {
        Self {
            state: OFFSET_BASIS,
        }
    }

    pub fn update(&mut self, bytes: &[u8]) {
        self.state = bytes.iter().fold(self.state, |acc, &byte| {
            acc.wrapping_mul(PRIME) ^ u32::from(byte)
        });
    }

    pub fn digest(&self) -> Digest {
        Digest::new(self.state)
    }
}

impl Default for Fnv32 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn empty_input_yields_offset_basis() {
        assert_eq!(Digest::of(b"").to_string(), "811c9dc5");
        assert_eq!(u32::from(Fnv32::new().digest()), OFFSET_BASIS);
    }

    #[rstest]
    #[case(b"a".as_slice(), "050c5d7e")]
    #[case(b"hi".as_slice(), "6977223c")]
    #[case(b"hello\n".as_slice(), "7340852f")]
    #[case(b"hello world".as_slice(), "548da96f")]
    fn known_digests(#[case] content: &[u8], #[case] expected: &str) {
        assert_eq!(Digest::of(content).to_string(), expected);
    }

    #[test]
    fn multiplies_before_xor() {
        let byte = 0x41u8;
        let expected = OFFSET_BASIS.wrapping_mul(PRIME) ^ u32::from(byte);
        let xor_first = (OFFSET_BASIS ^ u32::from(byte)).wrapping_mul(PRIME);
        assert_eq!(u32::from(Digest::of(&[byte])), expected);
        assert_ne!(u32::from(Digest::of(&[byte])), xor_first);
    }

    #[test]
    fn hashing_is_deterministic() {
        let content: Vec<u8> = (0..10_000u32).map(|i| (i * 31 % 251) as u8).collect();
        assert_eq!(Digest::of(&content), Digest::of(&content));
    }

    #[rstest]
    #[case(1)]
    #[case(7)]
    #[case(4096)]
    #[case(CHUNK_SIZE)]
    #[case(100_000)]
    fn digest_does_not_depend_on_chunk_size(#[case] chunk_size: usize) {
        let content: Vec<u8> = (0..=255u8).cycle().take(40 * 256).collect();
        let mut hasher = Fnv32::new();
        for chunk in content.chunks(chunk_size) {
            hasher.update(chunk);
        }
        assert_eq!(hasher.digest(), Digest::of(&content));
        assert_eq!(hasher.digest().to_string(), "02b83dc5");
    }

    #[test]
    fn split_updates_match_single_update() {
        let mut split = Fnv32::new();
        split.update(b"hel");
        split.update(b"");
        split.update(b"lo world");
        assert_eq!(split.digest(), Digest::of(b"hello world"));
    }

    #[test]
    fn default_starts_from_offset_basis() {
        assert_eq!(Fnv32::default(), Fnv32::new());
    }
}
