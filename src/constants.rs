pub const ALPHABET_LEN: usize = 26;

pub const ALPHABET: [char; ALPHABET_LEN] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Pigpen glyphs for A..Z, in alphabet order.
pub const SYMBOLS: [&str; ALPHABET_LEN] = [
    // grid (A-I)
    "┌", "┬", "┐",
    "├", "┼", "┤",
    "└", "┴", "┘",
    // grid with dot (J-R)
    "┌·", "┬·", "┐·",
    "├·", "┼·", "┤·",
    "└·", "┴·", "┘·",
    // angles (S-V)
    "^", ">", "v", "<",
    // angles with dot (W-Z)
    "^·", ">·", "v·", "<·",
];

pub const TOKEN_DELIMITER: char = ' ';
