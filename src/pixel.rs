//! Packed 12-bit pixel words: `RRRRGGGGBBBB`.

/// A pixel packed into the low 12 bits.
pub type Word = u16;

pub const WORD_MASK: Word = 0xfff;

/// Hex digits per mem file line.
pub const HEX_DIGITS: usize = 3;

/// Drops the low nibble of an 8-bit channel.
pub fn quantize(c: u8) -> u8 {
  c >> 4
}

/// Bit replication, so `0xf` maps to `0xff` and not `0xf0`.
pub fn expand(n: u8) -> u8 {
  let n = n & 0xf;
  (n << 4) | n
}

pub fn pack(rgb: [u8; 3]) -> Word {
  let [r, g, b] = rgb.map(|c| Word::from(quantize(c)));
  (r << 8) | (g << 4) | b
}

pub fn unpack(word: Word) -> [u8; 3] {
  let nibble = |shift: u16| expand(((word >> shift) & 0xf) as u8);
  [nibble(8), nibble(4), nibble(0)]
}

pub fn word_to_hex(word: Word) -> String {
  format!("{:03x}", word & WORD_MASK)
}

/// Parses a single mem file token. Exactly three hex digits are accepted,
/// in either case, with surrounding whitespace ignored.
pub fn hex_to_word(hex: &str) -> Option<Word> {
  let hex = hex.trim();

  if hex.len() != HEX_DIGITS || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
    return None;
  }

  Word::from_str_radix(hex, 16).ok()
}
