use log::trace;

use crate::constants::ALPHABET_LEN;
use crate::structs::{CaesarCipher, Decoded};
use crate::traits::{Decryptor, Encryptor};
use crate::utils::{normalize_shift, rotate_letter};

/// Rotates every ASCII letter by `shift` positions, keeping its case.
/// Any integer works: the shift is taken modulo 26.
pub fn caesar_shift(text: &str, shift: i64) -> String {
    let shift = normalize_shift(shift);
    trace!("Caesar shift by {} over {} bytes", shift, text.len());

    text.chars().map(|c| rotate_letter(c, shift)).collect()
}

pub fn unshift(text: &str, shift: i64) -> String {
    caesar_shift(text, -i64::from(normalize_shift(shift)))
}

/// Every candidate shift of `text`, from 0 to 25.
pub fn brute_force(text: &str) -> impl Iterator<Item = (u8, String)> + '_ {
    (0..ALPHABET_LEN as u8).map(move |shift| (shift, caesar_shift(text, shift as i64)))
}

impl CaesarCipher {
    pub fn new(shift: i64) -> Self {
        CaesarCipher { shift }
    }
}

impl Encryptor for CaesarCipher {
    fn encrypt(&self, message: &str) -> String {
        caesar_shift(message, self.shift)
    }
}

impl Decryptor for CaesarCipher {
    fn decrypt(&self, message: &str) -> Decoded {
        Decoded {
            text: unshift(message, self.shift),
            warnings: Vec::new(),
        }
    }
}
