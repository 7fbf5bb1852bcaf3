pub mod error;

pub mod alphabet;
pub mod codec;
pub mod engine;
pub mod profiles;
pub mod translit;

pub use crate::alphabet::{AsciiTable, ControlPolicy, OutputUnit};
pub use crate::codec::{CodingOutcome, ErrorPolicy};
pub use crate::engine::{Engine, EngineBuilder};
pub use crate::translit::{Mapped, PreRule, Transliterator};
