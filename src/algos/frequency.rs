use std::collections::HashMap;

/// Case-insensitive letter tally. Only letters that occur get a key.
pub fn frequency_analysis(text: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();

    for c in text.chars().flat_map(char::to_uppercase) {
        if c.is_alphabetic() {
            *counts.entry(c).or_insert(0) += 1;
        }
    }

    counts
}

/// Most frequent first; ties broken alphabetically.
pub fn ranked(counts: &HashMap<char, usize>) -> Vec<(char, usize)> {
    let mut entries: Vec<(char, usize)> = counts.iter().map(|(&c, &n)| (c, n)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_letters_case_insensitively() {
        let counts = frequency_analysis("AaBb!");

        assert_eq!(counts, HashMap::from([('A', 2), ('B', 2)]));
    }

    #[test]
    fn ignores_non_letters() {
        assert!(frequency_analysis("123 !?\t").is_empty());
        assert!(frequency_analysis("").is_empty());
    }

    #[test]
    fn uses_full_uppercase_form() {
        let counts = frequency_analysis("ßé");

        assert_eq!(counts.get(&'S'), Some(&2));
        assert_eq!(counts.get(&'É'), Some(&1));
    }

    #[test]
    fn ranked_orders_by_count_then_letter() {
        let counts = frequency_analysis("banana bread");

        assert_eq!(
            ranked(&counts),
            vec![('A', 4), ('B', 2), ('N', 2), ('D', 1), ('E', 1), ('R', 1)]
        );
    }
}
