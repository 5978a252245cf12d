//! Pigpen and Caesar helpers: letter/symbol tables, encode/decode,
//! Caesar rotation with brute force, and letter frequency counts.

#[macro_use]
extern crate lazy_static;

pub mod algos;
pub mod constants;
pub mod error;
pub mod palette;
pub mod shell;
pub mod structs;
pub mod traits;
pub mod utils;

pub use algos::caesar::{brute_force, caesar_shift, unshift};
pub use algos::frequency::{frequency_analysis, ranked};
pub use algos::pigpen::{build_mappings, decode, encode, STANDARD_MAPPINGS};
pub use error::{HelperError, MappingError, Result};
pub use structs::{
    CaesarCipher, Decoded, ForwardMap, Mappings, PigpenCipher, ReverseMap, UnrecognizedSymbol,
};
pub use traits::{Decryptor, Encryptor};
