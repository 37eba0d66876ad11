//! Architectural state latches.
//!
//! A cycle never mutates the committed state in place: the CPU copies the
//! current latches into a scratch value, lets the instruction handler work on
//! that copy, and assigns it back once the handler finishes. Inspection
//! commands therefore only ever observe whole-instruction state.

use super::cc::ConditionCode;
use crate::common::RegisterFile;

/// Processor state committed at every cycle boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Latches {
    /// Program counter.
    pub pc: u16,
    /// Condition codes.
    pub cc: ConditionCode,
    /// Instruction register: the word fetched by the latest cycle.
    pub ir: u16,
    /// General-purpose registers R0-R7.
    pub regs: RegisterFile,
}

impl Latches {
    /// Writes `val` to register `dr` and updates the condition codes from it.
    #[inline]
    pub fn write_cc(&mut self, dr: usize, val: u16) {
        self.regs.write(dr, val);
        self.cc = ConditionCode::from_result(val);
    }
}
