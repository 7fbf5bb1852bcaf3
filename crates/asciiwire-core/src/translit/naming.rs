// crates/asciiwire-core/src/translit/naming.rs

use crate::alphabet::{AsciiTable, OutputUnit};

/// Ordered substring rules over canonical Unicode character names.
///
/// First match wins. REVERSE SOLIDUS must stay ahead of SOLIDUS because
/// one name contains the other.
pub(crate) const NAME_RULES: &[(&str, u8)] = &[
    ("EXCLAMATION MARK", b'!'),
    ("QUESTION MARK", b'?'),
    ("SEMICOLON", b';'),
    ("COMMA", b','),
    ("COLON", b':'),
    ("TILDE", b'~'),
    ("PLUS SIGN", b'+'),
    ("EQUALS SIGN", b'='),
    ("REVERSE SOLIDUS", b'\\'),
    ("SOLIDUS", b'/'),
    ("ASTERISK", b'*'),
    ("PERCENT SIGN", b'%'),
    ("AMPERSAND", b'&'),
    ("FULL STOP", b'.'),
    ("APOSTROPHE", b'\''),
];

pub(crate) fn char_name(c: char) -> Option<String> {
    unicode_names2::name(c).map(|n| n.to_string())
}

/// Resolve a scalar value by scanning its canonical name for a known
/// punctuation substring.
pub(crate) fn by_name(c: char, table: &AsciiTable) -> OutputUnit {
    let name = match char_name(c) {
        Some(n) => n,
        None => return OutputUnit::empty(),
    };
    for &(needle, out) in NAME_RULES {
        if name.contains(needle) {
            return OutputUnit::from_bytes(table.ascii(out).to_vec());
        }
    }
    OutputUnit::empty()
}

/// Extract the one-or-two-letter core of a Latin letter name.
///
/// Handles names of the form `LATIN (SMALL|CAPITAL) LETTER <WORD>... <XX>`
/// where `<XX>` is the last all-uppercase token of one or two letters,
/// e.g. `LATIN CAPITAL LETTER A WITH GRAVE` -> `A`,
/// `LATIN SMALL LETTER AE` -> `AE`, `LATIN CAPITAL LETTER ENG` -> none.
pub(crate) fn latin_core(name: &str) -> Option<&str> {
    let rest = name.strip_prefix("LATIN ")?;
    let rest = rest
        .strip_prefix("SMALL ")
        .or_else(|| rest.strip_prefix("CAPITAL "))
        .unwrap_or(rest);
    let rest = rest.strip_prefix("LETTER ")?;

    let mut core = None;
    for token in rest.split(' ') {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_uppercase()) {
            break;
        }
        if token.len() <= 2 {
            core = Some(token);
        }
    }
    core
}

/// Letter fallback for Lu/Ll scalar values: emit the extracted core,
/// lower-cased when the source is a small letter variant.
pub(crate) fn latin_letter(c: char, lowercase: bool, table: &AsciiTable) -> OutputUnit {
    let name = match char_name(c) {
        Some(n) => n,
        None => return OutputUnit::empty(),
    };
    let core = match latin_core(&name) {
        Some(core) => core,
        None => return OutputUnit::empty(),
    };

    if core.len() == 1 {
        let b = core.as_bytes()[0];
        let b = if lowercase { b.to_ascii_lowercase() } else { b };
        return OutputUnit::from_bytes(table.ascii(b).to_vec());
    }

    let bytes = core
        .bytes()
        .map(|b| if lowercase { b.to_ascii_lowercase() } else { b })
        .collect();
    OutputUnit::from_bytes(bytes)
}

/// Recover the 0..=9 value of a decimal-digit scalar from the trailing
/// `DIGIT <word>` of its canonical name.
pub(crate) fn digit_value(c: char) -> Option<u8> {
    const WORDS: [&str; 10] = [
        "ZERO", "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE",
    ];

    let name = char_name(c)?;
    let at = name.rfind("DIGIT ")?;
    let word = name[at + "DIGIT ".len()..]
        .split(' ')
        .next()
        .unwrap_or_default();
    WORDS.iter().position(|&w| w == word).map(|v| v as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{AsciiTable, ControlPolicy};

    #[test]
    fn latin_core_extraction() {
        assert_eq!(latin_core("LATIN CAPITAL LETTER A WITH GRAVE"), Some("A"));
        assert_eq!(latin_core("LATIN SMALL LETTER AE"), Some("AE"));
        assert_eq!(latin_core("LATIN SMALL LETTER B WITH STROKE"), Some("B"));
        assert_eq!(latin_core("LATIN CAPITAL LETTER ENG"), None);
        assert_eq!(latin_core("LATIN SMALL LIGATURE FI"), None);
        assert_eq!(latin_core("GREEK SMALL LETTER MU"), None);
    }

    #[test]
    fn digit_values_from_names() {
        assert_eq!(digit_value('\u{0660}'), Some(0)); // Arabic-Indic zero
        assert_eq!(digit_value('\u{06F5}'), Some(5)); // extended Arabic-Indic five
        assert_eq!(digit_value('\u{0E59}'), Some(9)); // Thai nine
        assert_eq!(digit_value('A'), None);
    }

    #[test]
    fn name_rules_first_match_wins() {
        let t = AsciiTable::new(&ControlPolicy::AllowAll);
        assert_eq!(by_name('\u{FF01}', &t).bytes(), b"!"); // fullwidth exclamation mark
        assert_eq!(by_name('\u{29F9}', &t).bytes(), b"\\"); // big reverse solidus
        assert_eq!(by_name('\u{29F8}', &t).bytes(), b"/"); // big solidus
    }
}
