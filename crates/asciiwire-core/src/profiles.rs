// crates/asciiwire-core/src/profiles.rs
//
// Preconfigured engines for the interchange formats this crate was
// built around. Each profile is one configuration of the same engine;
// there are no per-profile code paths.

use crate::alphabet::{AsciiTable, ControlPolicy, OutputUnit};
use crate::engine::Engine;
use crate::translit::Transliterator;

const LINE_FEED: u8 = 0x0A;
const CARRIAGE_RETURN: u8 = 0x0D;

fn assemble(policy: ControlPolicy, aggressive: bool) -> Engine {
    Engine {
        table: AsciiTable::new(&policy),
        translit: aggressive.then(Transliterator::seeded),
        replacement: OutputUnit::byte(b'?'),
    }
}

/// Strict ACH filter: printable 0x20..=0x7E only. Control bytes,
/// including newlines, are unmappable; so is every scalar >= 0x80.
pub fn ach_strict() -> Engine {
    assemble(ControlPolicy::AllowNone, false)
}

/// The strict filter plus linefeed and carriage return, passed through
/// literally in both directions.
pub fn ach_newlines() -> Engine {
    assemble(
        ControlPolicy::AllowExactly(vec![LINE_FEED, CARRIAGE_RETURN]),
        false,
    )
}

/// The newline-tolerant alphabet with the full transliteration cascade
/// for scalar values >= 0x80.
pub fn ach_aggressive() -> Engine {
    assemble(
        ControlPolicy::AllowExactly(vec![LINE_FEED, CARRIAGE_RETURN]),
        true,
    )
}

/// Plain US-ASCII alphabet (all 128 values admitted) with aggressive
/// transliteration above it.
pub fn ascii_aggressive() -> Engine {
    assemble(ControlPolicy::AllowAll, true)
}
