// crates/asciiwire-core/tests/memo_cache.rs

use asciiwire_core::profiles::{ach_aggressive, ach_strict};
use asciiwire_core::Mapped;

fn mapped_bytes(m: Mapped<'_>) -> Option<Vec<u8>> {
    match m {
        Mapped::Bytes(b) => Some(b.to_vec()),
        Mapped::Dropped | Mapped::Unmapped => None,
    }
}

#[test]
fn repeated_lookups_memoize_without_changing_the_result() {
    let mut engine = ach_aggressive();
    assert_eq!(engine.cache_len(), 0);

    let first = mapped_bytes(engine.map('\u{2026}')).expect("mapped");
    assert_eq!(first, b"...");
    assert_eq!(engine.cache_len(), 1);

    let second = mapped_bytes(engine.map('\u{2026}')).expect("mapped");
    assert_eq!(second, first);
    assert_eq!(engine.cache_len(), 1);
}

#[test]
fn each_distinct_scalar_is_cached_once() {
    let mut engine = ach_aggressive();
    for _ in 0..3 {
        for c in ['\u{00E9}', '\u{2014}', '\u{FB01}'] {
            engine.map(c);
        }
    }
    assert_eq!(engine.cache_len(), 3);
}

#[test]
fn override_hits_bypass_the_cache() {
    let mut engine = ach_aggressive();
    assert_eq!(mapped_bytes(engine.map('\u{00BD}')).expect("mapped"), b"1/2");
    assert_eq!(engine.cache_len(), 0);
}

#[test]
fn unmappable_results_are_cached_too() {
    let mut engine = ach_aggressive();
    assert_eq!(mapped_bytes(engine.map('\u{E000}')), None);
    assert_eq!(engine.cache_len(), 1);
    assert_eq!(mapped_bytes(engine.map('\u{E000}')), None);
    assert_eq!(engine.cache_len(), 1);
}

#[test]
fn strict_engines_never_cache() {
    let mut engine = ach_strict();
    engine.map('A');
    engine.map('\u{2026}');
    assert_eq!(engine.cache_len(), 0);
}
