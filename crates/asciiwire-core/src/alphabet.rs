// crates/asciiwire-core/src/alphabet.rs

use crate::error::{Result, WireError};

/// Zero or more 7-bit bytes produced for one scalar value.
///
/// An empty unit means "consume silently"; it is distinct from a removed
/// table entry, which signals unmappable input to the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutputUnit(Vec<u8>);

impl OutputUnit {
    pub const fn empty() -> Self {
        OutputUnit(Vec::new())
    }

    pub fn byte(b: u8) -> Self {
        OutputUnit(vec![b])
    }

    /// Build a unit from a replacement string; every byte must be 7-bit.
    pub fn from_ascii(s: &str) -> Result<Self> {
        if !s.is_ascii() {
            return Err(WireError::Config(format!(
                "output unit {s:?} contains non-ASCII characters"
            )));
        }
        Ok(OutputUnit(s.as_bytes().to_vec()))
    }

    pub(crate) fn from_bytes(bytes: Vec<u8>) -> Self {
        OutputUnit(bytes)
    }

    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Which control-range bytes (0x00..=0x1F, 0x7F) the alphabet admits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlPolicy {
    /// Every value 0x00..=0x7F passes through unchanged.
    AllowAll,
    /// Only printable 0x20..=0x7E; all controls and DEL are removed.
    AllowNone,
    /// Printable 0x20..=0x7E plus exactly the listed control bytes.
    AllowExactly(Vec<u8>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Entry {
    /// Excluded by the admission policy; coding reports Unmappable.
    Removed,
    Out(OutputUnit),
}

/// Fixed table over scalar values 0x00..=0x7F.
///
/// Every slot is either the identity unit, an explicit override, or the
/// removed marker. Mutation happens only through the builder-style
/// `encode`/`block` calls before coding starts; afterwards the table is
/// read-only and safe to share across concurrent codec instances.
#[derive(Clone, Debug)]
pub struct AsciiTable {
    entries: [Entry; 0x80],
}

impl AsciiTable {
    pub fn new(policy: &ControlPolicy) -> Self {
        let mut entries: [Entry; 0x80] =
            std::array::from_fn(|i| Entry::Out(OutputUnit::byte(i as u8)));

        match policy {
            ControlPolicy::AllowAll => {}
            ControlPolicy::AllowNone => {
                for e in entries.iter_mut().take(0x20) {
                    *e = Entry::Removed;
                }
                entries[0x7F] = Entry::Removed;
            }
            ControlPolicy::AllowExactly(allowed) => {
                for e in entries.iter_mut().take(0x20) {
                    *e = Entry::Removed;
                }
                entries[0x7F] = Entry::Removed;
                for &b in allowed {
                    if b < 0x80 {
                        entries[b as usize] = Entry::Out(OutputUnit::byte(b));
                    }
                }
            }
        }

        AsciiTable { entries }
    }

    /// Override the output for one scalar value below 0x80.
    pub fn encode(&mut self, scalar: u32, unit: OutputUnit) -> Result<&mut Self> {
        let slot = self.slot(scalar)?;
        *slot = Entry::Out(unit);
        Ok(self)
    }

    /// Set the output for `scalar` to the empty unit (consume silently).
    pub fn block(&mut self, scalar: u32) -> Result<&mut Self> {
        self.encode(scalar, OutputUnit::empty())
    }

    /// Shorthand: block 0x00..=0x1F and 0x7F.
    pub fn block_controls(&mut self) -> &mut Self {
        for i in 0x00..0x20 {
            self.entries[i] = Entry::Out(OutputUnit::empty());
        }
        self.entries[0x7F] = Entry::Out(OutputUnit::empty());
        self
    }

    fn slot(&mut self, scalar: u32) -> Result<&mut Entry> {
        if scalar >= 0x80 {
            return Err(WireError::Config(format!(
                "scalar U+{scalar:04X} exceeds the 0x00..=0x7F table range"
            )));
        }
        Ok(&mut self.entries[scalar as usize])
    }

    /// `None` means the admission policy removed this byte.
    #[inline]
    pub fn lookup(&self, b: u8) -> Option<&OutputUnit> {
        match &self.entries[(b & 0x7F) as usize] {
            Entry::Removed => None,
            Entry::Out(unit) => Some(unit),
        }
    }

    /// Output bytes for an admitted ASCII value, or empty when the value
    /// is removed or blocked. This is what the category rules use when
    /// they substitute a printable default.
    #[inline]
    pub(crate) fn ascii(&self, b: u8) -> &[u8] {
        match self.lookup(b) {
            Some(unit) => unit.bytes(),
            None => &[],
        }
    }

    /// The configured newline output (the table's `\n` slot).
    #[inline]
    pub(crate) fn newline(&self) -> &[u8] {
        self.ascii(b'\n')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_allow_none_removes_controls_and_del() {
        let t = AsciiTable::new(&ControlPolicy::AllowNone);
        assert!(t.lookup(0x00).is_none());
        assert!(t.lookup(0x1F).is_none());
        assert!(t.lookup(0x7F).is_none());
        assert_eq!(t.lookup(b' ').unwrap().bytes(), b" ");
        assert_eq!(t.lookup(b'~').unwrap().bytes(), b"~");
    }

    #[test]
    fn policy_allow_exactly_admits_listed_bytes_only() {
        let t = AsciiTable::new(&ControlPolicy::AllowExactly(vec![0x0A]));
        assert_eq!(t.lookup(0x0A).unwrap().bytes(), b"\n");
        assert!(t.lookup(0x0D).is_none());
        assert!(t.lookup(0x7F).is_none());
    }

    #[test]
    fn encode_rejects_out_of_range_scalar() {
        let mut t = AsciiTable::new(&ControlPolicy::AllowAll);
        assert!(t.encode(0x80, OutputUnit::byte(b'x')).is_err());
        assert!(t.block(0x100).is_err());
    }

    #[test]
    fn block_yields_empty_not_removed() {
        let mut t = AsciiTable::new(&ControlPolicy::AllowAll);
        t.block(0x0D).unwrap();
        assert!(t.lookup(0x0D).unwrap().is_empty());
    }

    #[test]
    fn block_controls_drops_silently_instead_of_removing() {
        let mut t = AsciiTable::new(&ControlPolicy::AllowAll);
        t.block_controls();
        assert!(t.lookup(0x00).unwrap().is_empty());
        assert!(t.lookup(0x1F).unwrap().is_empty());
        assert!(t.lookup(0x7F).unwrap().is_empty());
        assert_eq!(t.lookup(b'A').unwrap().bytes(), b"A");
    }
}
