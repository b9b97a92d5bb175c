//! Accepted word alphabet: ASCII letters plus a fixed set of accented Latin letters.

/// True if `c` may appear in a word.
///
/// Covers A-Z, a-z and the Latin-1 letters
/// ÀÁÂÃÄÅ àáâãäå ÒÓÔÕÖØ òóôõöø ÈÉÊË èéêë Çç ÌÍÎÏ ìíîï ÙÚÛÜ ùúûü ÿ Ññ.
/// Æ, Ð, Ý, Þ, ß and their lowercase forms are not accepted, nor are × and ÷.
pub fn is_word_char(c: char) -> bool {
    matches!(
        c,
        'A'..='Z'
            | 'a'..='z'
            | 'À'..='Å'
            | 'à'..='å'
            | 'Ò'..='Ö'
            | 'Ø'
            | 'ò'..='ö'
            | 'ø'
            | 'È'..='Ë'
            | 'è'..='ë'
            | 'Ç'
            | 'ç'
            | 'Ì'..='Ï'
            | 'ì'..='ï'
            | 'Ù'..='Ü'
            | 'ù'..='ü'
            | 'ÿ'
            | 'Ñ'
            | 'ñ'
    )
}

/// A line is a word iff it is non-empty and made only of accepted characters.
pub fn is_valid_word(line: &str) -> bool {
    !line.is_empty() && line.chars().all(is_word_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_words() {
        assert!(is_valid_word("cat"));
        assert!(is_valid_word("Zebra"));
        assert!(is_valid_word("a"));
    }

    #[test]
    fn accented_words() {
        assert!(is_valid_word("café"));
        assert!(is_valid_word("NOËL"));
        assert!(is_valid_word("señor"));
        assert!(is_valid_word("garçon"));
        assert!(is_valid_word("ÀÁÂÃÄÅàáâãäåÒÓÔÕÖØòóôõöøÈÉÊËèéêëÇçÌÍÎÏìíîïÙÚÛÜùúûüÿÑñ"));
    }

    #[test]
    fn rejects_empty_and_foreign_chars() {
        assert!(!is_valid_word(""));
        assert!(!is_valid_word("cat3"));
        assert!(!is_valid_word("two words"));
        assert!(!is_valid_word("tab\t"));
        assert!(!is_valid_word("cat\r"));
        assert!(!is_valid_word("l'été"));
        assert!(!is_valid_word("straße"));
        assert!(!is_valid_word("Æther"));
        assert!(!is_valid_word("×"));
        assert!(!is_valid_word("÷"));
        assert!(!is_valid_word("Ýes"));
        assert!(!is_valid_word("\u{fffd}"));
    }

    #[test]
    fn latin1_block_boundaries() {
        // Every code point in U+00C0..=U+00FF, checked against the explicit list.
        let accepted = "ÀÁÂÃÄÅàáâãäåÒÓÔÕÖØòóôõöøÈÉÊËèéêëÇçÌÍÎÏìíîïÙÚÛÜùúûüÿÑñ";
        for cp in 0xC0u32..=0xFF {
            let c = char::from_u32(cp).unwrap();
            assert_eq!(is_word_char(c), accepted.contains(c), "U+{:04X}", cp);
        }
    }
}
