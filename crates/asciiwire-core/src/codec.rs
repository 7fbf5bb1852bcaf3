// crates/asciiwire-core/src/codec.rs
//
// Streaming codec over caller-supplied bounded buffers. One call runs
// until input is exhausted, the output buffer fills, or an input unit
// fails. Positions are caller-owned, so every outcome is resumable:
// skip the reported unit count and call again, or drain the output
// buffer and call again, and the concatenated results are byte-for-byte
// identical to a single large-buffer pass.

use crate::engine::Engine;
use crate::error::{Result, WireError};
use crate::translit::Mapped;

/// Terminal signal of one buffer-bounded coding call.
///
/// Error variants carry the exact count of input units responsible, and
/// the input position is left at the start of the offending unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodingOutcome {
    /// All available input consumed; more may follow.
    Underflow,
    /// Output buffer exhausted before a whole unit could be written.
    /// Nothing partial was written; positions are unchanged for the
    /// failed unit.
    Overflow,
    /// The next `n` input units do not form a decodable unit at all.
    Malformed(usize),
    /// The next `n` input units decode cleanly but have no permitted
    /// output under the active configuration.
    Unmappable(usize),
}

/// What the slice-level operations do on Malformed/Unmappable input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Return the first error immediately.
    Report,
    /// Skip the offending units and continue.
    Ignore,
    /// Substitute the configured replacement and continue.
    Replace,
}

impl Engine {
    /// Encode scalar values into 7-bit bytes across bounded buffers.
    ///
    /// Each consumed scalar either writes its whole output unit or, on
    /// insufficient room, returns Overflow without consuming it. Blocked
    /// scalars are consumed without output.
    pub fn encode_loop(
        &mut self,
        src: &[char],
        src_pos: &mut usize,
        dst: &mut [u8],
        dst_pos: &mut usize,
    ) -> CodingOutcome {
        while *src_pos < src.len() {
            let c = src[*src_pos];
            match self.map(c) {
                Mapped::Unmapped => return CodingOutcome::Unmappable(1),
                Mapped::Dropped => *src_pos += 1,
                Mapped::Bytes(bytes) => {
                    if bytes.len() > dst.len() - *dst_pos {
                        return CodingOutcome::Overflow;
                    }
                    dst[*dst_pos..*dst_pos + bytes.len()].copy_from_slice(bytes);
                    *dst_pos += bytes.len();
                    *src_pos += 1;
                }
            }
        }
        CodingOutcome::Underflow
    }

    /// Decode 7-bit bytes into scalar values across bounded buffers.
    ///
    /// Top-bit-set bytes are malformed. Removed bytes are unmappable;
    /// blocked bytes are consumed without advancing the output.
    pub fn decode_loop(
        &self,
        src: &[u8],
        src_pos: &mut usize,
        dst: &mut [char],
        dst_pos: &mut usize,
    ) -> CodingOutcome {
        while *src_pos < src.len() {
            let b = src[*src_pos];
            if b >= 0x80 {
                return CodingOutcome::Malformed(1);
            }
            match self.table.lookup(b) {
                None => return CodingOutcome::Unmappable(1),
                Some(unit) if unit.is_empty() => *src_pos += 1,
                Some(unit) => {
                    let bytes = unit.bytes();
                    if bytes.len() > dst.len() - *dst_pos {
                        return CodingOutcome::Overflow;
                    }
                    for &out in bytes {
                        dst[*dst_pos] = out as char;
                        *dst_pos += 1;
                    }
                    *src_pos += 1;
                }
            }
        }
        CodingOutcome::Underflow
    }

    /// Encode a whole string under an error policy.
    ///
    /// Error positions are scalar-value indices into `text`.
    pub fn encode(&mut self, text: &str, policy: ErrorPolicy) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(text.len());
        for (at, c) in text.chars().enumerate() {
            let unmapped = match self.map(c) {
                Mapped::Bytes(bytes) => {
                    out.extend_from_slice(bytes);
                    false
                }
                Mapped::Dropped => false,
                Mapped::Unmapped => true,
            };
            if unmapped {
                match policy {
                    ErrorPolicy::Report => return Err(WireError::Unmappable { at, len: 1 }),
                    ErrorPolicy::Ignore => {}
                    ErrorPolicy::Replace => out.extend_from_slice(self.replacement.bytes()),
                }
            }
        }
        Ok(out)
    }

    /// Decode a whole byte slice under an error policy.
    ///
    /// The Replace policy substitutes U+FFFD, matching the convention
    /// for decoders rather than the engine's encode replacement.
    pub fn decode(&self, bytes: &[u8], policy: ErrorPolicy) -> Result<String> {
        let mut out = String::with_capacity(bytes.len());
        for (at, &b) in bytes.iter().enumerate() {
            let failed = if b >= 0x80 {
                Some(WireError::Malformed { at, len: 1 })
            } else {
                match self.table.lookup(b) {
                    None => Some(WireError::Unmappable { at, len: 1 }),
                    Some(unit) => {
                        for &x in unit.bytes() {
                            out.push(x as char);
                        }
                        None
                    }
                }
            };
            if let Some(err) = failed {
                match policy {
                    ErrorPolicy::Report => return Err(err),
                    ErrorPolicy::Ignore => {}
                    ErrorPolicy::Replace => out.push('\u{FFFD}'),
                }
            }
        }
        Ok(out)
    }
}
