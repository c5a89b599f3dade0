//! Byte classification and case folding shared by the dictionary loader and
//! the scanner. Both sides must go through [`normalize`] or lookups stop
//! meaning anything.

/// Fold ASCII letters to lowercase. Every other byte passes through.
pub fn normalize(word: &[u8]) -> Vec<u8> {
    word.to_ascii_lowercase()
}

/// In-place variant of [`normalize`] for buffers the caller already owns.
pub fn normalize_in_place(word: &mut [u8]) {
    word.make_ascii_lowercase();
}

/// ASCII letters and the hyphen make up words; everything else separates them.
#[inline]
pub fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'-'
}

/// True when the token has no letter in it at all, e.g. `---`.
pub fn is_symbols_only(word: &[u8]) -> bool {
    !word.iter().any(u8::is_ascii_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folds_ascii_only() {
        assert_eq!(normalize(b"HeLLo"), b"hello");
        assert_eq!(normalize(b"Well-Known"), b"well-known");
        // multi-byte sequences are left alone
        assert_eq!(normalize("ÜNÏ".as_bytes()), "ÜnÏ".as_bytes());
    }

    #[test]
    fn test_in_place_matches_copy() {
        let mut word = b"MiXeD-Case".to_vec();
        normalize_in_place(&mut word);
        assert_eq!(word, normalize(b"MiXeD-Case"));
    }

    #[test]
    fn test_word_bytes() {
        assert!(is_word_byte(b'a'));
        assert!(is_word_byte(b'Z'));
        assert!(is_word_byte(b'-'));
        assert!(!is_word_byte(b'\''));
        assert!(!is_word_byte(b'7'));
        assert!(!is_word_byte(b'\r'));
        assert!(!is_word_byte(0xC3));
    }

    #[test]
    fn test_symbols_only() {
        assert!(is_symbols_only(b"---"));
        assert!(is_symbols_only(b"-"));
        assert!(!is_symbols_only(b"-a-"));
        assert!(!is_symbols_only(b"word"));
    }
}
