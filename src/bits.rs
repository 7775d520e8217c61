//! Conversions between bytes, text and the bit vectors the codecs work on.
//!
//! Bytes and symbols are unpacked least significant bit first, which is also the
//! order Reed-Solomon packs bits into symbols.

use bitvec::prelude::*;

/// Unpack bytes into bits, LSB first within each byte
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<bool> {
    bytes.view_bits::<Lsb0>().iter().by_vals().collect()
}

/// Pack bits into bytes, LSB first; a short final byte is zero-filled
pub fn bits_to_bytes(bits: &[bool]) -> Vec<u8> {
    pack_symbols(bits, 8)
}

/// UTF-8 bytes of `text` as bits
pub fn string_to_bits(text: &str) -> Vec<bool> {
    bytes_to_bits(text.as_bytes())
}

/// Reassemble text from bits.
///
/// Returns `None` unless the bit count is a whole number of bytes and the bytes
/// are valid UTF-8.
pub fn bits_to_string(bits: &[bool]) -> Option<String> {
    if bits.len() % 8 != 0 {
        return None;
    }
    String::from_utf8(bits_to_bytes(bits)).ok()
}

/// Pack bits into `width`-bit symbols, LSB first. A short final symbol is
/// zero-filled.
pub fn pack_symbols(bits: &[bool], width: usize) -> Vec<u8> {
    debug_assert!((1..=8).contains(&width));
    let packed: BitVec<u8, Lsb0> = bits.iter().copied().collect();
    packed.chunks(width).map(|chunk| chunk.load_le::<u8>()).collect()
}

/// Unpack `width`-bit symbols into bits, LSB first
pub fn unpack_symbols(symbols: &[u8], width: usize) -> Vec<bool> {
    symbols
        .iter()
        .flat_map(|symbol| symbol.view_bits::<Lsb0>()[..width].iter().by_vals())
        .collect()
}

/// Number of positions where `a` and `b` differ, `None` if the lengths differ
pub fn count_differences(a: &[bool], b: &[bool]) -> Option<usize> {
    if a.len() != b.len() {
        return None;
    }
    Some(a.iter().zip(b).filter(|(x, y)| x != y).count())
}

/// Render bits as `0`/`1`, with a space after every `group` bits (0 for no grouping)
pub fn format_bits(bits: &[bool], group: usize) -> String {
    let mut out = String::with_capacity(bits.len() + bits.len() / group.max(1));
    for (i, &bit) in bits.iter().enumerate() {
        if group > 0 && i > 0 && i % group == 0 {
            out.push(' ');
        }
        out.push(if bit { '1' } else { '0' });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_round_trip() {
        let bytes = [0x01, 0x80, 0xA5];
        let bits = bytes_to_bits(&bytes);
        assert_eq!(bits.len(), 24);
        assert!(bits[0]);
        assert!(!bits[1]);
        assert!(bits[15]);
        assert_eq!(bits_to_bytes(&bits), bytes);
    }

    #[test]
    fn test_partial_byte_is_zero_filled() {
        assert_eq!(bits_to_bytes(&[true, true, false, true]), vec![0x0B]);
        assert!(bits_to_bytes(&[]).is_empty());
    }

    #[test]
    fn test_string_round_trip() {
        let bits = string_to_bits("Hi!");
        assert_eq!(bits.len(), 24);
        assert_eq!(bits_to_string(&bits).as_deref(), Some("Hi!"));
        assert_eq!(bits_to_string(&bits[..20]), None);

        // 0xFF is never valid UTF-8
        assert_eq!(bits_to_string(&[true; 8]), None);
    }

    #[test]
    fn test_symbol_packing() {
        let bits = [true, false, true, true, false, true];
        assert_eq!(pack_symbols(&bits, 3), vec![0b101, 0b101]);
        assert_eq!(pack_symbols(&bits, 4), vec![0b1101, 0b10]);
        assert_eq!(unpack_symbols(&[0b101, 0b101], 3), bits.to_vec());

        // First bit of each group is the least significant
        let bits = [false, true, true, true, false, false];
        assert_eq!(pack_symbols(&bits, 3), vec![0b110, 0b001]);
        assert_eq!(unpack_symbols(&[0b110, 0b001], 3), bits.to_vec());
        assert_eq!(unpack_symbols(&[0xFF], 5), vec![true; 5]);
    }

    #[test]
    fn test_count_differences() {
        assert_eq!(count_differences(&[true, false, true], &[true, true, false]), Some(2));
        assert_eq!(count_differences(&[], &[]), Some(0));
        assert_eq!(count_differences(&[true], &[true, false]), None);
    }

    #[test]
    fn test_format_bits() {
        let bits = [false, true, true, false, false, true, true];
        assert_eq!(format_bits(&bits, 0), "0110011");
        assert_eq!(format_bits(&bits, 4), "0110 011");
        assert_eq!(format_bits(&bits, 7), "0110011");
        assert_eq!(format_bits(&[], 3), "");
    }
}
