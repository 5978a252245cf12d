use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Letter to symbol, iterated in alphabet order.
pub type ForwardMap = BTreeMap<char, String>;

/// Symbol to letter.
pub type ReverseMap = HashMap<String, char>;

/// A letter/symbol bijection and its inverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mappings {
    pub(crate) forward: ForwardMap,
    pub(crate) reverse: ReverseMap,
}

/// A decode token that has no letter in the reverse table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedSymbol {
    pub token: String,
    /// Zero-based index of the token in the split input.
    pub position: usize,
}

impl fmt::Display for UnrecognizedSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "symbol '{}' not recognized", self.token)
    }
}

/// Output of a decode: the text plus one warning per unrecognized token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    pub warnings: Vec<UnrecognizedSymbol>,
}

impl Decoded {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn unrecognized_tokens(&self) -> impl Iterator<Item = &str> {
        self.warnings.iter().map(|w| w.token.as_str())
    }
}

pub struct PigpenCipher<'a> {
    pub(crate) mappings: &'a Mappings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaesarCipher {
    pub shift: i64,
}
