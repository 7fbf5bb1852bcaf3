// crates/asciiwire-core/src/engine.rs

use crate::alphabet::{AsciiTable, ControlPolicy, OutputUnit};
use crate::error::{Result, WireError};
use crate::translit::{Mapped, PreRule, Transliterator};

/// A frozen coding configuration: the allowed-alphabet table, optional
/// aggressive transliteration for scalar values >= 0x80, and the
/// replacement bytes used by the Replace error policy.
///
/// The table and rule data never change after `EngineBuilder::build`;
/// only the transliterator's memo cache mutates, and it is exclusively
/// owned by this instance, so independent engines can run on separate
/// threads without coordination.
#[derive(Clone, Debug)]
pub struct Engine {
    pub(crate) table: AsciiTable,
    pub(crate) translit: Option<Transliterator>,
    pub(crate) replacement: OutputUnit,
}

impl Engine {
    pub fn builder(policy: ControlPolicy) -> EngineBuilder {
        EngineBuilder::new(policy)
    }

    /// Build a strict-filter engine from a control policy and a set of
    /// `(scalar, output)` overrides. An empty output string blocks the
    /// scalar (consume silently).
    pub fn configure(policy: ControlPolicy, overrides: &[(u32, &str)]) -> Result<Engine> {
        let mut builder = EngineBuilder::new(policy);
        for &(scalar, out) in overrides {
            builder = builder.encode(scalar, out);
        }
        builder.build()
    }

    /// Map one scalar value to its output decision.
    ///
    /// Takes `&mut self` because a cascade miss memoizes its result;
    /// the decision itself is deterministic and repeatable.
    pub fn map(&mut self, c: char) -> Mapped<'_> {
        let cp = c as u32;
        if cp < 0x80 {
            return match self.table.lookup(cp as u8) {
                None => Mapped::Unmapped,
                Some(unit) if unit.is_empty() => Mapped::Dropped,
                Some(unit) => Mapped::Bytes(unit.bytes()),
            };
        }
        match &mut self.translit {
            Some(translit) => translit.lookup(c, &self.table),
            None => Mapped::Unmapped,
        }
    }

    pub fn table(&self) -> &AsciiTable {
        &self.table
    }

    /// Number of memoized cascade results (0 for strict engines).
    pub fn cache_len(&self) -> usize {
        self.translit.as_ref().map_or(0, Transliterator::cache_len)
    }

    pub fn replacement(&self) -> &[u8] {
        self.replacement.bytes()
    }
}

enum Op {
    Encode(u32, String),
    Block(u32),
}

/// Builder for [`Engine`]. Configuration calls chain; validation happens
/// in `build`, and the resulting engine is immutable apart from its memo
/// cache.
pub struct EngineBuilder {
    policy: ControlPolicy,
    aggressive: bool,
    pre_rule: Option<PreRule>,
    replacement: String,
    ops: Vec<Op>,
}

impl EngineBuilder {
    pub fn new(policy: ControlPolicy) -> Self {
        EngineBuilder {
            policy,
            aggressive: false,
            pre_rule: None,
            replacement: "?".to_string(),
            ops: Vec::new(),
        }
    }

    /// Enable the full transliteration cascade for scalars >= 0x80.
    pub fn aggressive(mut self) -> Self {
        self.aggressive = true;
        self
    }

    /// Install a category pre-rule consulted ahead of the built-in
    /// defaults (implies `aggressive`).
    pub fn pre_rule(mut self, rule: PreRule) -> Self {
        self.aggressive = true;
        self.pre_rule = Some(rule);
        self
    }

    /// Override the output for one scalar value.
    pub fn encode(mut self, scalar: u32, out: &str) -> Self {
        self.ops.push(Op::Encode(scalar, out.to_string()));
        self
    }

    /// Consume the scalar silently wherever it appears.
    pub fn block(mut self, scalar: u32) -> Self {
        self.ops.push(Op::Block(scalar));
        self
    }

    /// Replacement bytes for the Replace error policy (default `?`).
    pub fn replacement(mut self, out: &str) -> Self {
        self.replacement = out.to_string();
        self
    }

    pub fn build(self) -> Result<Engine> {
        let mut table = AsciiTable::new(&self.policy);
        let mut translit = if self.aggressive {
            let t = Transliterator::seeded();
            Some(match self.pre_rule {
                Some(rule) => t.with_pre_rule(rule),
                None => t,
            })
        } else {
            None
        };

        for op in self.ops {
            match op {
                Op::Encode(scalar, out) => {
                    let unit = OutputUnit::from_ascii(&out)?;
                    if scalar < 0x80 {
                        table.encode(scalar, unit)?;
                    } else {
                        let c = scalar_value(scalar)?;
                        match &mut translit {
                            Some(t) => t.set_override(c, unit),
                            None => {
                                return Err(WireError::Config(format!(
                                    "override for U+{scalar:04X} requires an aggressive engine"
                                )))
                            }
                        }
                    }
                }
                Op::Block(scalar) => {
                    if scalar < 0x80 {
                        table.block(scalar)?;
                    } else {
                        let c = scalar_value(scalar)?;
                        match &mut translit {
                            Some(t) => t.block(c),
                            None => {
                                return Err(WireError::Config(format!(
                                    "block for U+{scalar:04X} requires an aggressive engine"
                                )))
                            }
                        }
                    }
                }
            }
        }

        let replacement = OutputUnit::from_ascii(&self.replacement)?;
        if replacement.is_empty() {
            return Err(WireError::Config("replacement must not be empty".into()));
        }

        Ok(Engine {
            table,
            translit,
            replacement,
        })
    }
}

fn scalar_value(scalar: u32) -> Result<char> {
    char::from_u32(scalar).ok_or_else(|| {
        WireError::Config(format!("U+{scalar:04X} is not a Unicode scalar value"))
    })
}
