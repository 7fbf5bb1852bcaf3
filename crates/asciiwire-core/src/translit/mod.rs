// crates/asciiwire-core/src/translit/mod.rs

pub mod category;
pub mod naming;
mod tables;

use std::collections::HashMap;

use unicode_normalization::UnicodeNormalization;

use crate::alphabet::{AsciiTable, OutputUnit};
pub use crate::translit::category::PreRule;

/// One mapping decision for a scalar value.
#[derive(Debug, PartialEq, Eq)]
pub enum Mapped<'a> {
    /// Emit these bytes for the consumed scalar value.
    Bytes(&'a [u8]),
    /// Consume the scalar value silently (explicitly blocked).
    Dropped,
    /// No permitted output; the caller reports Unmappable.
    Unmapped,
}

/// Aggressive transliteration for scalar values at or above 0x80.
///
/// Resolution cascades through the explicit override map, the category
/// dispatcher (with its name heuristics), and finally one NFKD pass with
/// each decomposed scalar re-run through the first two stages. Computed
/// results are memoized per engine instance, so repeated occurrences of
/// a scalar are a single map lookup.
#[derive(Clone, Debug)]
pub struct Transliterator {
    /// Configured overrides for scalar values >= 0x80. An empty unit
    /// here means "drop silently", unlike an empty computed result.
    overrides: HashMap<char, OutputUnit>,
    /// Memoized cascade results. Grows monotonically; never evicted.
    cache: HashMap<char, OutputUnit>,
    pre_rule: Option<PreRule>,
}

impl Transliterator {
    /// A transliterator carrying the curated override table.
    pub fn seeded() -> Self {
        let mut overrides = HashMap::with_capacity(tables::SEED_OVERRIDES.len());
        for &(cp, out) in tables::SEED_OVERRIDES {
            if let Some(c) = char::from_u32(cp) {
                overrides.insert(c, OutputUnit::from_bytes(out.as_bytes().to_vec()));
            }
        }
        Transliterator {
            overrides,
            cache: HashMap::new(),
            pre_rule: None,
        }
    }

    pub fn with_pre_rule(mut self, pre_rule: PreRule) -> Self {
        self.pre_rule = Some(pre_rule);
        self
    }

    /// Configuration-time override; invalidates any memoized result.
    pub(crate) fn set_override(&mut self, c: char, unit: OutputUnit) {
        self.cache.remove(&c);
        self.overrides.insert(c, unit);
    }

    pub(crate) fn block(&mut self, c: char) {
        self.set_override(c, OutputUnit::empty());
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Resolve one scalar value >= 0x80 against the full cascade.
    pub fn lookup(&mut self, c: char, table: &AsciiTable) -> Mapped<'_> {
        if self.overrides.contains_key(&c) {
            let unit = &self.overrides[&c];
            return if unit.is_empty() {
                Mapped::Dropped
            } else {
                Mapped::Bytes(unit.bytes())
            };
        }

        if !self.cache.contains_key(&c) {
            let computed = self.compute(c, table);
            self.cache.insert(c, computed);
        }

        let unit = &self.cache[&c];
        if unit.is_empty() {
            Mapped::Unmapped
        } else {
            Mapped::Bytes(unit.bytes())
        }
    }

    /// The cascade body: category dispatch, then one decomposition pass.
    fn compute(&self, c: char, table: &AsciiTable) -> OutputUnit {
        let direct = category::dispatch(c, table, self.pre_rule);
        if !direct.is_empty() {
            return direct;
        }

        // One NFKD pass. Each decomposed scalar is re-dispatched through
        // the table, the override map, and the category rules, but never
        // decomposed again, so the recursion bottoms out here.
        let pieces: Vec<char> = std::iter::once(c).nfkd().collect();
        if pieces.len() == 1 && pieces[0] == c {
            // No decomposition; the direct dispatch above already failed.
            return OutputUnit::empty();
        }

        let mut out: Vec<u8> = Vec::new();
        for piece in pieces {
            out.extend_from_slice(self.element(piece, table).bytes());
        }
        OutputUnit::from_bytes(out)
    }

    /// Post-decomposition dispatch for a single scalar: table entry for
    /// ASCII, otherwise override map, otherwise category defaults.
    fn element(&self, piece: char, table: &AsciiTable) -> OutputUnit {
        if (piece as u32) < 0x80 {
            return OutputUnit::from_bytes(table.ascii(piece as u32 as u8).to_vec());
        }
        if let Some(unit) = self.overrides.get(&piece) {
            return unit.clone();
        }
        category::dispatch(piece, table, self.pre_rule)
    }
}
