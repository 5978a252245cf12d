use std::collections::hash_map::Entry;

use log::{debug, trace};

use crate::constants::{ALPHABET, ALPHABET_LEN, SYMBOLS, TOKEN_DELIMITER};
use crate::error::MappingError;
use crate::structs::{Decoded, ForwardMap, Mappings, PigpenCipher, ReverseMap, UnrecognizedSymbol};
use crate::traits::{Decryptor, Encryptor};
use crate::utils::single_uppercase;

lazy_static! {
    /// The standard table, built on first use and never modified.
    pub static ref STANDARD_MAPPINGS: Mappings = Mappings::standard();
}

/// Builds the standard letter -> symbol table and its inverse.
pub fn build_mappings() -> (ForwardMap, ReverseMap) {
    Mappings::standard().into_parts()
}

impl Mappings {
    pub fn standard() -> Self {
        let forward: ForwardMap = ALPHABET
            .iter()
            .zip(SYMBOLS.iter())
            .map(|(&letter, &symbol)| (letter, symbol.to_string()))
            .collect();
        let reverse = invert(&forward);

        Mappings { forward, reverse }
    }

    /// Builds a table from 26 symbols given in alphabet order.
    pub fn from_symbols<S: AsRef<str>>(symbols: &[S]) -> Result<Self, MappingError> {
        if symbols.len() != ALPHABET_LEN {
            return Err(MappingError::WrongLength {
                expected: ALPHABET_LEN,
                found: symbols.len(),
            });
        }

        let mut forward = ForwardMap::new();
        let mut reverse = ReverseMap::new();

        for (&letter, symbol) in ALPHABET.iter().zip(symbols) {
            let symbol = symbol.as_ref();
            if symbol.is_empty() {
                return Err(MappingError::EmptySymbol { letter });
            }
            if symbol.contains(TOKEN_DELIMITER) {
                return Err(MappingError::ContainsDelimiter {
                    letter,
                    symbol: symbol.to_string(),
                });
            }

            match reverse.entry(symbol.to_string()) {
                Entry::Occupied(existing) => {
                    return Err(MappingError::DuplicateSymbol {
                        symbol: symbol.to_string(),
                        first: *existing.get(),
                        second: letter,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(letter);
                }
            }
            forward.insert(letter, symbol.to_string());
        }

        Ok(Mappings { forward, reverse })
    }

    pub fn forward(&self) -> &ForwardMap {
        &self.forward
    }

    pub fn reverse(&self) -> &ReverseMap {
        &self.reverse
    }

    pub fn symbol_for(&self, letter: char) -> Option<&str> {
        self.forward.get(&letter).map(String::as_str)
    }

    pub fn letter_for(&self, symbol: &str) -> Option<char> {
        self.reverse.get(symbol).copied()
    }

    pub fn into_parts(self) -> (ForwardMap, ReverseMap) {
        (self.forward, self.reverse)
    }
}

fn invert(forward: &ForwardMap) -> ReverseMap {
    forward
        .iter()
        .map(|(&letter, symbol)| (symbol.clone(), letter))
        .collect()
}

/// Encodes plaintext into space separated symbols.
///
/// Letters (any case) become their symbol and a literal space becomes an empty
/// token, which shows up as a doubled delimiter. Everything else is dropped.
pub fn encode(text: &str, forward: &ForwardMap) -> String {
    let tokens: Vec<&str> = text
        .chars()
        .filter_map(|c| {
            match single_uppercase(c).and_then(|upper| forward.get(&upper)) {
                Some(symbol) => Some(symbol.as_str()),
                None if c == TOKEN_DELIMITER => Some(""),
                None => None,
            }
        })
        .collect();

    trace!("Encoded {} chars into {} tokens", text.chars().count(), tokens.len());

    tokens.join(" ")
}

/// Decodes a space separated symbol sequence.
///
/// Empty tokens decode to a space. Unknown tokens are copied through verbatim
/// and reported in [`Decoded::warnings`], so one bad symbol never aborts the rest.
pub fn decode(symbols: &str, reverse: &ReverseMap) -> Decoded {
    let mut decoded = Decoded::default();

    for (position, token) in symbols.split(TOKEN_DELIMITER).enumerate() {
        if token.is_empty() {
            decoded.text.push(' ');
        } else if let Some(&letter) = reverse.get(token) {
            decoded.text.push(letter);
        } else {
            debug!("Symbol '{}' at token {} not recognized", token, position);
            decoded.text.push_str(token);
            decoded.warnings.push(UnrecognizedSymbol {
                token: token.to_string(),
                position,
            });
        }
    }

    decoded
}

impl<'a> PigpenCipher<'a> {
    pub fn new(mappings: &'a Mappings) -> Self {
        PigpenCipher { mappings }
    }
}

impl Default for PigpenCipher<'static> {
    fn default() -> Self {
        PigpenCipher::new(&STANDARD_MAPPINGS)
    }
}

impl Encryptor for PigpenCipher<'_> {
    fn encrypt(&self, message: &str) -> String {
        encode(message, &self.mappings.forward)
    }
}

impl Decryptor for PigpenCipher<'_> {
    fn decrypt(&self, message: &str) -> Decoded {
        decode(message, &self.mappings.reverse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_table_is_a_bijection() {
        let (forward, reverse) = build_mappings();

        assert_eq!(forward.len(), 26);
        assert_eq!(reverse.len(), 26);

        let distinct: HashSet<&String> = forward.values().collect();
        assert_eq!(distinct.len(), 26);

        for letter in 'A'..='Z' {
            let symbol = &forward[&letter];
            assert!(!symbol.is_empty());
            assert_eq!(reverse[symbol], letter);
        }
    }

    #[test]
    fn standard_table_follows_symbol_families() {
        let mappings = Mappings::standard();

        assert_eq!(mappings.symbol_for('A'), Some("┌"));
        assert_eq!(mappings.symbol_for('I'), Some("┘"));
        assert_eq!(mappings.symbol_for('J'), Some("┌·"));
        assert_eq!(mappings.symbol_for('R'), Some("┘·"));
        assert_eq!(mappings.symbol_for('S'), Some("^"));
        assert_eq!(mappings.symbol_for('Z'), Some("<·"));
        assert_eq!(mappings.letter_for("v"), Some('U'));
        assert_eq!(mappings.symbol_for('a'), None);
    }

    #[test]
    fn lazy_table_matches_fresh_build() {
        assert_eq!(*STANDARD_MAPPINGS, Mappings::standard());
    }

    #[test]
    fn encode_joins_tokens_with_single_spaces() {
        let (forward, _) = build_mappings();

        assert_eq!(encode("AB", &forward), format!("{} {}", forward[&'A'], forward[&'B']));
        assert_eq!(encode("ab", &forward), encode("AB", &forward));
        assert_eq!(encode("", &forward), "");
    }

    #[test]
    fn encode_marks_spaces_with_empty_tokens() {
        let (forward, _) = build_mappings();

        assert_eq!(encode("A B", &forward), "┌  ┬");
        assert_eq!(encode(" A", &forward), " ┌");
        assert_eq!(encode(" ", &forward), "");
        assert_eq!(encode("  ", &forward), " ");
    }

    #[test]
    fn encode_drops_everything_else() {
        let (forward, _) = build_mappings();

        assert_eq!(encode("Hi, Bob!", &forward), encode("Hi Bob", &forward));
        assert_eq!(encode("A1\tB", &forward), encode("AB", &forward));
        assert_eq!(encode("ß", &forward), "");
    }

    #[test]
    fn decode_maps_symbols_and_empty_tokens() {
        let (_, reverse) = build_mappings();

        let decoded = decode("┌  ┬", &reverse);
        assert_eq!(decoded.text, "A B");
        assert!(decoded.is_clean());

        assert_eq!(decode(" ┌ ", &reverse).text, " A ");
        assert_eq!(decode("", &reverse).text, " ");
    }

    #[test]
    fn decode_passes_unknown_tokens_through() {
        let (forward, reverse) = build_mappings();

        let decoded = decode(&format!("??? {}", forward[&'A']), &reverse);
        assert_eq!(decoded.text, "???A");
        assert!(decoded.text.ends_with('A'));
        assert_eq!(
            decoded.warnings,
            vec![UnrecognizedSymbol {
                token: "???".to_string(),
                position: 0,
            }]
        );
    }

    #[test]
    fn decode_reports_every_bad_token() {
        let (_, reverse) = build_mappings();

        let decoded = decode("x ┌ y y", &reverse);
        assert_eq!(decoded.text, "xAyy");
        assert_eq!(decoded.unrecognized_tokens().collect::<Vec<_>>(), vec!["x", "y", "y"]);
        assert_eq!(decoded.warnings[2].position, 3);
        assert_eq!(decoded.warnings[0].to_string(), "symbol 'x' not recognized");
    }

    #[test]
    fn round_trip_over_letters_and_spaces() {
        let (forward, reverse) = build_mappings();

        for text in ["HELLO WORLD", "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG", "A", "AB  C"] {
            let decoded = decode(&encode(text, &forward), &reverse);
            assert_eq!(decoded.text, text);
            assert!(decoded.is_clean());
        }

        let decoded = decode(&encode("Mixed Case", &forward), &reverse);
        assert_eq!(decoded.text, "MIXED CASE");
    }

    #[test]
    fn custom_table_is_validated() {
        let letters: Vec<String> = ('a'..='z').map(|c| c.to_string()).collect();
        let mappings = Mappings::from_symbols(&letters).unwrap();
        assert_eq!(encode("Hi", mappings.forward()), "h i");
        assert_eq!(decode("h i", mappings.reverse()).text, "HI");

        assert_eq!(
            Mappings::from_symbols(&["x"; 3]),
            Err(MappingError::WrongLength {
                expected: 26,
                found: 3,
            })
        );

        let mut bad = letters.clone();
        bad[1] = String::new();
        assert_eq!(Mappings::from_symbols(&bad), Err(MappingError::EmptySymbol { letter: 'B' }));

        let mut bad = letters.clone();
        bad[2] = "c c".to_string();
        assert!(matches!(
            Mappings::from_symbols(&bad),
            Err(MappingError::ContainsDelimiter { letter: 'C', .. })
        ));

        let mut bad = letters;
        bad[25] = "a".to_string();
        assert_eq!(
            Mappings::from_symbols(&bad),
            Err(MappingError::DuplicateSymbol {
                symbol: "a".to_string(),
                first: 'A',
                second: 'Z',
            })
        );
    }

    #[test]
    fn cipher_traits_delegate_to_table() {
        let cipher = PigpenCipher::default();

        let encrypted = cipher.encrypt("Pig pen");
        assert_eq!(encrypted, encode("PIG PEN", STANDARD_MAPPINGS.forward()));
        assert_eq!(cipher.decrypt(&encrypted).text, "PIG PEN");
    }
}
