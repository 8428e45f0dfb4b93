//! Error surface for the execution core.
//!
//! Most guest behavior that the ARM manual treats as an "exception" (SWI,
//! undefined instruction) is handled internally by taking the corresponding
//! vector rather than propagating an error — see `Cpu::step`. `CoreError` is
//! reserved for the cases spec.md §7 calls a bug: something a decoder should
//! never be able to produce from arbitrary guest code.

use thiserror::Error;

/// Errors that can surface from a single `Cpu::step`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The decoder produced no match for an opcode it claims to handle.
    ///
    /// This is distinct from the ARMv4T "Undefined instruction" exception,
    /// which is guest-reachable and handled by jumping to the undefined
    /// vector; this variant means the decoder itself has a gap.
    #[error("decoder invariant violation at pc={pc:#010x}: {detail}")]
    DecoderInvariantViolation { pc: u32, detail: &'static str },
}
