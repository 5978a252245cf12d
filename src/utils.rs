use crate::constants::ALPHABET_LEN;

/// Reduces any shift to `0..26`, negative values included.
pub fn normalize_shift(shift: i64) -> u8 {
    shift.rem_euclid(ALPHABET_LEN as i64) as u8
}

/// Rotates an ASCII letter by an already normalized shift, keeping its case.
/// Anything else comes back untouched.
pub fn rotate_letter(c: char, shift: u8) -> char {
    if !c.is_ascii_alphabetic() {
        return c;
    }

    let base = if c.is_ascii_lowercase() { b'a' } else { b'A' };
    let offset = (c as u8 - base + shift) % ALPHABET_LEN as u8;
    (base + offset) as char
}

/// Single-character uppercase form, if the character has one.
pub fn single_uppercase(c: char) -> Option<char> {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => Some(u),
        _ => None,
    }
}
