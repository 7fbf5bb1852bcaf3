// crates/asciiwire-core/tests/builder_config.rs

use asciiwire_core::error::WireError;
use asciiwire_core::{ControlPolicy, Engine, ErrorPolicy};

#[test]
fn ascii_overrides_rewrite_table_slots() {
    let mut engine = Engine::builder(ControlPolicy::AllowNone)
        .encode(u32::from(b'*'), "x")
        .build()
        .expect("build");
    assert_eq!(engine.encode("a*b", ErrorPolicy::Report).unwrap(), b"axb");
}

#[test]
fn high_overrides_require_an_aggressive_engine() {
    let err = Engine::builder(ControlPolicy::AllowNone)
        .encode(0x2019, "'")
        .build()
        .unwrap_err();
    assert!(matches!(err, WireError::Config(_)));

    let mut engine = Engine::builder(ControlPolicy::AllowNone)
        .aggressive()
        .encode(0x2019, "'")
        .build()
        .expect("build");
    assert_eq!(engine.encode("\u{2019}", ErrorPolicy::Report).unwrap(), b"'");
}

#[test]
fn custom_overrides_beat_the_seed_table() {
    let mut engine = Engine::builder(ControlPolicy::AllowNone)
        .aggressive()
        .encode(0x00BD, "half")
        .build()
        .expect("build");
    assert_eq!(
        engine.encode("\u{00BD}", ErrorPolicy::Report).unwrap(),
        b"half"
    );
}

#[test]
fn blocked_high_scalars_are_consumed_silently() {
    let mut engine = Engine::builder(ControlPolicy::AllowNone)
        .aggressive()
        .block(0x2026)
        .build()
        .expect("build");
    assert_eq!(
        engine.encode("A\u{2026}B", ErrorPolicy::Report).unwrap(),
        b"AB"
    );
}

#[test]
fn configure_collects_override_pairs() {
    let mut engine = Engine::configure(
        ControlPolicy::AllowNone,
        &[(u32::from(b'|'), "/"), (u32::from(b'^'), "")],
    )
    .expect("configure");
    assert_eq!(engine.encode("a|b^c", ErrorPolicy::Report).unwrap(), b"a/bc");
}

#[test]
fn replacement_must_be_nonempty_ascii() {
    assert!(Engine::builder(ControlPolicy::AllowNone)
        .replacement("")
        .build()
        .is_err());
    assert!(Engine::builder(ControlPolicy::AllowNone)
        .replacement("\u{00BF}")
        .build()
        .is_err());

    let mut engine = Engine::builder(ControlPolicy::AllowNone)
        .replacement("<?>")
        .build()
        .expect("build");
    assert_eq!(
        engine.encode("A\u{2603}B", ErrorPolicy::Replace).unwrap(),
        b"A<?>B"
    );
}

#[test]
fn non_scalar_code_points_are_rejected() {
    let err = Engine::builder(ControlPolicy::AllowNone)
        .aggressive()
        .encode(0xD800, "x")
        .build()
        .unwrap_err();
    assert!(matches!(err, WireError::Config(_)));
}

#[test]
fn override_strings_must_be_ascii() {
    let err = Engine::builder(ControlPolicy::AllowNone)
        .aggressive()
        .encode(0x2026, "\u{2026}")
        .build()
        .unwrap_err();
    assert!(matches!(err, WireError::Config(_)));
}
