// crates/asciiwire-core/src/translit/tables.rs
//
// Curated override data for the aggressive profiles. Pure data: each
// entry maps a scalar value to its ASCII substitution, evaluated ahead
// of the category and name rules. An empty string drops the scalar.

pub(crate) const SEED_OVERRIDES: &[(u32, &str)] = &[
    (0x00B4, ""),      // acute accent
    (0x00B7, "."),     // middle dot
    (0x00BC, "1/4"),   // vulgar fraction one quarter
    (0x00BD, "1/2"),   // vulgar fraction one half
    (0x00BE, "3/4"),   // vulgar fraction three quarters
    (0x00D7, "*"),     // multiplication sign
    (0x00F7, "/"),     // division sign
    (0x0138, "q"),     // small letter kra
    (0x014A, "NG"),    // capital letter eng
    (0x014B, "ng"),    // small letter eng
    (0x0152, "OE"),    // capital ligature oe
    (0x0153, "oe"),    // small ligature oe
    (0x01A6, "z"),     // letter yr
    (0x0259, "e"),     // small letter schwa
    (0x025A, "e"),     // small letter schwa with hook
    (0x02B9, "'"),     // modifier letter prime
    (0x02BA, "\""),    // modifier letter double prime
    (0x02EE, "\""),    // modifier letter double apostrophe
    (0x066B, ","),     // arabic decimal separator
    (0x066D, "*"),     // arabic five pointed star
    (0x01C3, "!"),     // latin letter retroflex click
    (0x1D01, "AE"),    // small capital ae
    (0x1D15, "OU"),    // small capital ou
    (0x1D2F, "B"),     // modifier capital barred b
    (0x1D3B, "N"),     // modifier capital reversed n
    (0x1D4A, "e"),     // modifier small schwa
    (0x1D4E, "i"),     // modifier small turned i
    (0x1D7E, "u"),     // small capital u with stroke
    (0x1D95, "e"),     // small schwa with retroflex hook
    (0x1DA7, "i"),     // modifier small capital i with stroke
    (0x1EFA, "LL"),    // capital middle-welsh ll
    (0x1EFB, "ll"),    // small middle-welsh ll
    (0x1EFC, "V"),     // capital middle-welsh v
    (0x1EFD, "v"),     // small middle-welsh v
    (0x2032, "'"),     // prime
    (0x2033, "\""),    // double prime
    (0x2035, "`"),     // reversed prime
    (0x2036, "\""),    // reversed double prime
    (0x2038, "^"),     // caret
    (0x203B, "*"),     // reference mark
    (0x203D, "!?"),    // interrobang
    (0x2042, "*"),     // asterism
    (0x204A, "&"),     // tironian sign et
    (0x2053, "~"),     // swung dash
    (0x205A, ":"),     // two dot punctuation
    (0x207B, "-"),     // superscript minus
    (0x208B, "-"),     // subscript minus
    (0x2044, "/"),     // fraction slash
    (0x2114, "#"),     // l b bar symbol
    (0x2215, "/"),     // division slash
    (0x2236, ":"),     // ratio
    (0x2317, "#"),     // viewdata square
    (0x266D, "b"),     // music flat sign
    (0x266F, "#"),     // music sharp sign
    (0x26A0, "!"),     // warning sign
    (0x26B9, "*"),     // sextile
    (0x27CB, "/"),     // mathematical rising diagonal
    (0x27CD, "\\"),    // mathematical falling diagonal
    (0x2C7B, "E"),     // small turned e
    (0x3003, "\""),    // ditto mark
    (0xA730, "F"),     // small capital f
    (0xA731, "S"),     // small capital s
    (0xA7AF, "Q"),     // small capital q
    (0xAB37, "l"),     // small l with inverted lazy s
    (0xAB46, "R"),     // small capital r with right hook
    (0xAB5D, "l"),     // modifier small l with inverted lazy s
    (0xAB67, "tx"),    // small letter tx digraph
    (0x1801, "..."),   // mongolian ellipsis
    (0x10191, "-"),    // roman uncia sign
    (0x1F4B2, "$"),    // heavy dollar sign
    (0x1F674, "&"),    // heavy ampersand ornament
    (0x1F7A2, "+"),    // light greek cross
    (0x1F7B6, "*"),    // medium six spoked asterisk
    (0x1F7F0, "="),    // heavy equals sign
];
