// crates/asciiwire-core/src/translit/category.rs

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::alphabet::{AsciiTable, OutputUnit};
use crate::translit::naming;

/// Injectable pre-rule consulted before the built-in category defaults.
/// Returning `None` falls through to the standard dispatch.
pub type PreRule = fn(char, GeneralCategory) -> Option<OutputUnit>;

const NEXT_LINE: char = '\u{0085}';
const UNICODE_REPLACEMENT: char = '\u{FFFD}';

/// Category-driven default for a scalar value at or above 0x80 with no
/// explicit override. Returns the empty unit when no structural rule
/// applies; the caller then falls back to compatibility decomposition.
pub(crate) fn dispatch(c: char, table: &AsciiTable, pre: Option<PreRule>) -> OutputUnit {
    // The replacement character maps to '?' ahead of every other rule.
    if c == UNICODE_REPLACEMENT {
        return from_table(table, b'?');
    }

    let category = c.general_category();
    if let Some(pre) = pre {
        if let Some(unit) = pre(c, category) {
            return unit;
        }
    }

    match category {
        GeneralCategory::UppercaseLetter => naming::latin_letter(c, false, table),
        GeneralCategory::LowercaseLetter => naming::latin_letter(c, true, table),

        GeneralCategory::DecimalNumber => match naming::digit_value(c) {
            Some(v) => from_table(table, b'0' + v),
            None => OutputUnit::empty(),
        },

        GeneralCategory::SpaceSeparator => from_table(table, b' '),
        GeneralCategory::LineSeparator | GeneralCategory::ParagraphSeparator => {
            OutputUnit::from_bytes(table.newline().to_vec())
        }

        // NEL is the only control above 0x7F with line semantics.
        GeneralCategory::Control if c == NEXT_LINE => {
            OutputUnit::from_bytes(table.newline().to_vec())
        }
        GeneralCategory::Control => naming::by_name(c, table),

        GeneralCategory::DashPunctuation => from_table(table, b'-'),
        GeneralCategory::OpenPunctuation => bracket(c, table, b'(', b'[', b'{'),
        GeneralCategory::ClosePunctuation => bracket(c, table, b')', b']', b'}'),
        GeneralCategory::ConnectorPunctuation => from_table(table, b'_'),

        GeneralCategory::InitialPunctuation | GeneralCategory::FinalPunctuation => {
            quote(c, table)
        }

        GeneralCategory::ModifierLetter
        | GeneralCategory::MathSymbol
        | GeneralCategory::ModifierSymbol
        | GeneralCategory::OtherSymbol
        | GeneralCategory::OtherPunctuation => naming::by_name(c, table),

        _ => OutputUnit::empty(),
    }
}

#[inline]
fn from_table(table: &AsciiTable, b: u8) -> OutputUnit {
    OutputUnit::from_bytes(table.ascii(b).to_vec())
}

/// Open/close punctuation defaults to parentheses, refined by name for
/// square and curly bracket families.
fn bracket(c: char, table: &AsciiTable, paren: u8, square: u8, curly: u8) -> OutputUnit {
    if let Some(name) = naming::char_name(c) {
        if name.contains("SQUARE BRACKET") {
            return from_table(table, square);
        }
        if name.contains("CURLY BRACKET") {
            return from_table(table, curly);
        }
    }
    from_table(table, paren)
}

/// Initial/final quote punctuation defaults to a double quote; names
/// containing SINGLE refine to an apostrophe.
fn quote(c: char, table: &AsciiTable) -> OutputUnit {
    match naming::char_name(c) {
        Some(name) if name.contains("SINGLE") => from_table(table, b'\''),
        _ => from_table(table, b'"'),
    }
}
